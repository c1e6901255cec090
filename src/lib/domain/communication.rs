//! Outbound communication primitives

pub mod email_addresses;
pub mod mailer;
