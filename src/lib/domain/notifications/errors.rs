//! Notification errors

use css_inline::InlineError;
use minijinja::ErrorKind;
use thiserror::Error;
use tracing::debug;

use crate::domain::communication::{email_addresses::EmailAddressError, mailer::MailerError};

use super::templates::TemplateSourceError;

/// Errors that can occur while sending a notification
#[derive(Debug, Error)]
pub enum NotificationError {
    /// The recipient is not a usable email address
    #[error("invalid recipient: {0}")]
    InvalidRecipient(#[from] EmailAddressError),

    /// The email template could not be loaded
    #[error("unable to load email template: {0}")]
    TemplateLoad(#[from] TemplateSourceError),

    /// The email template could not be parsed
    #[error("email template is malformed: {0}")]
    TemplateSyntax(#[source] minijinja::Error),

    /// The email template could not be rendered with the given parameters
    #[error("unable to render email template: {0}")]
    TemplateRender(#[source] anyhow::Error),

    /// The rendered email could not be delivered
    #[error("unable to send email: {0}")]
    Send(#[from] MailerError),
}

impl From<minijinja::Error> for NotificationError {
    fn from(err: minijinja::Error) -> Self {
        debug!("minijinja::Error -> NotificationError");

        match err.kind() {
            ErrorKind::SyntaxError => NotificationError::TemplateSyntax(err),
            _ => NotificationError::TemplateRender(err.into()),
        }
    }
}

impl From<InlineError> for NotificationError {
    fn from(err: InlineError) -> Self {
        debug!("InlineError -> NotificationError");

        NotificationError::TemplateRender(err.into())
    }
}
