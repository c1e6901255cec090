//! Notification emails
//!
//! Every notification runs the same pipeline: load its template, bind its
//! parameters, compose a single-recipient [`EmailMessage`] and hand it to a
//! [`Mailer`].
//!
//! [`EmailMessage`]: crate::domain::communication::mailer::EmailMessage
//! [`Mailer`]: crate::domain::communication::mailer::Mailer

mod kinds;
mod service;

pub mod errors;
pub mod templates;

pub use errors::NotificationError;
pub use kinds::{
    normalize_inviter, InviteExistingUser, InviteNewUser, Notification, PasswordReset,
    ShareFolderExistingUser, ShareFolderNewUser, ANONYMOUS_INVITER, PLACEHOLDER_INVITER,
};
pub use service::{NotificationService, NotificationServiceImpl};

#[cfg(test)]
pub mod tests {
    pub use super::service::MockNotificationService;
}
