//! Mailer module

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

mod errors;
mod message;

pub use errors::MailerError;
pub use message::EmailMessage;

/// Delivers a composed [`EmailMessage`]
#[async_trait]
pub trait Mailer: Clone + Send + Sync + 'static {
    /// Send an email
    ///
    /// # Arguments
    /// * `message` - The composed [`EmailMessage`], including sender and recipients.
    ///
    /// # Returns
    /// A [`Result`] which is [`Ok`] once the server has accepted the message,
    /// or an [`Err`] containing a [`MailerError`] if it could not be delivered.
    async fn send_email(&self, message: &EmailMessage) -> Result<(), MailerError>;
}

#[cfg(test)]
mock! {
    pub Mailer {}

    impl Clone for Mailer {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl Mailer for Mailer {
        async fn send_email(&self, message: &EmailMessage) -> Result<(), MailerError>;
    }
}
