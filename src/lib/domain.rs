//! Domain layer: messages, configuration and notification workflows

pub mod communication;
pub mod configuration;
pub mod notifications;
