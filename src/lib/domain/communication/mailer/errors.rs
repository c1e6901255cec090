//! Mailer errors

use lettre::{address::AddressError, error::Error};
use thiserror::Error;
use tracing::debug;

/// Mailer errors
#[derive(Debug, Error)]
pub enum MailerError {
    /// An error occurred while sending the email
    #[error("an error occurred while sending the email: {0}")]
    SendError(String),

    /// Sender or recipient could not be parsed as a mailbox
    #[error("invalid email address")]
    InvalidAddress,

    /// The SMTP settings are incomplete or malformed
    #[error("invalid SMTP configuration: {0}")]
    Configuration(String),

    /// The message could not be built
    #[error(transparent)]
    MessageBuild(anyhow::Error),
}

impl From<AddressError> for MailerError {
    fn from(err: AddressError) -> Self {
        debug!("AddressError -> MailerError: {err}");

        MailerError::InvalidAddress
    }
}

impl From<Error> for MailerError {
    fn from(err: Error) -> Self {
        MailerError::MessageBuild(err.into())
    }
}
