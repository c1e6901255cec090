//! Email message

use crate::domain::communication::email_addresses::EmailAddress;

/// A composed HTML email, ready for a [`super::Mailer`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailMessage {
    /// The sender, as configured (e.g. `Documize <hello@documize.com>`)
    pub from: String,

    /// The recipients of the email
    pub to: Vec<EmailAddress>,

    /// The subject of the email
    pub subject: String,

    /// The HTML body of the email
    pub html: String,
}

impl EmailMessage {
    /// Creates a message addressed to a single recipient
    pub fn new(from: String, to: EmailAddress, subject: String, html: String) -> Self {
        Self {
            from,
            to: vec![to],
            subject,
            html,
        }
    }
}
