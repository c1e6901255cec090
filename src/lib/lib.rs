#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Transactional notification emails for Documize: invitations, password
//! resets and folder-sharing notices rendered from HTML templates and relayed
//! over SMTP.

pub mod domain;
pub mod infrastructure;
