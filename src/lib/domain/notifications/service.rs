//! Notification service module

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info};

#[cfg(test)]
use mockall::mock;

use crate::domain::{
    communication::{
        email_addresses::EmailAddress,
        mailer::{EmailMessage, Mailer},
    },
    configuration::{ConfigProvider, SmtpSettings},
};

use super::{
    templates::{self, TemplateSource},
    InviteExistingUser, InviteNewUser, Notification, NotificationError, PasswordReset,
    ShareFolderExistingUser, ShareFolderNewUser,
};

/// Notification service
///
/// Each operation sends exactly one email to one recipient. Failures are
/// logged where they happen and returned, so callers that ignore the result
/// still leave a trace.
#[async_trait]
pub trait NotificationService: Clone + Send + Sync + 'static {
    /// Invites someone new, providing their credentials and stating who is inviting them.
    ///
    /// # Arguments
    /// * `recipient` - The address of the invitee.
    /// * `inviter` - The display name of the inviting user.
    /// * `url` - The link the invitee follows to sign in.
    /// * `username` - The invitee's username; the recipient address when empty.
    /// * `password` - The invitee's initial password.
    async fn invite_new_user(
        &self,
        recipient: &str,
        inviter: &str,
        url: &str,
        username: &str,
        password: &str,
    ) -> Result<(), NotificationError>;

    /// Invites a known user to an organization.
    async fn invite_existing_user(
        &self,
        recipient: &str,
        inviter: &str,
        url: &str,
    ) -> Result<(), NotificationError>;

    /// Sends a password reset link.
    ///
    /// # Arguments
    /// * `recipient` - The address of the account owner.
    /// * `url` - The reset link, token included.
    async fn password_reset(&self, recipient: &str, url: &str) -> Result<(), NotificationError>;

    /// Gives an existing user a link to a newly shared folder.
    async fn share_folder_existing_user(
        &self,
        recipient: &str,
        inviter: &str,
        url: &str,
        folder: &str,
        intro: &str,
    ) -> Result<(), NotificationError>;

    /// Invites a new user to a shared folder.
    async fn share_folder_new_user(
        &self,
        recipient: &str,
        inviter: &str,
        url: &str,
        folder: &str,
        invitation_message: &str,
    ) -> Result<(), NotificationError>;
}

#[cfg(test)]
mock! {
    pub NotificationService {}

    impl Clone for NotificationService {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl NotificationService for NotificationService {
        async fn invite_new_user(
            &self,
            recipient: &str,
            inviter: &str,
            url: &str,
            username: &str,
            password: &str,
        ) -> Result<(), NotificationError>;
        async fn invite_existing_user(
            &self,
            recipient: &str,
            inviter: &str,
            url: &str,
        ) -> Result<(), NotificationError>;
        async fn password_reset(&self, recipient: &str, url: &str) -> Result<(), NotificationError>;
        async fn share_folder_existing_user(
            &self,
            recipient: &str,
            inviter: &str,
            url: &str,
            folder: &str,
            intro: &str,
        ) -> Result<(), NotificationError>;
        async fn share_folder_new_user(
            &self,
            recipient: &str,
            inviter: &str,
            url: &str,
            folder: &str,
            invitation_message: &str,
        ) -> Result<(), NotificationError>;
    }
}

/// Notification service implementation
#[derive(Debug, Clone)]
pub struct NotificationServiceImpl<T, C, M>
where
    T: TemplateSource,
    C: ConfigProvider,
    M: Mailer,
{
    templates: Arc<T>,
    config: Arc<C>,
    mailer: Arc<M>,
}

impl<T, C, M> NotificationServiceImpl<T, C, M>
where
    T: TemplateSource,
    C: ConfigProvider,
    M: Mailer,
{
    /// Creates a new notification service.
    pub fn new(templates: Arc<T>, config: Arc<C>, mailer: Arc<M>) -> Self {
        Self {
            templates,
            config,
            mailer,
        }
    }

    /// Builds the message for a notification without sending it.
    pub fn compose<N: Notification>(&self, notification: &N) -> Result<EmailMessage, NotificationError> {
        let recipient = EmailAddress::new(notification.recipient())?;
        let source = self.templates.read_to_string(N::TEMPLATE)?;
        let html = templates::render(N::TEMPLATE, &source, notification.context())?;
        let sender = SmtpSettings::new(self.config.as_ref()).sender();

        Ok(EmailMessage::new(sender, recipient, notification.subject(), html))
    }

    async fn deliver<N: Notification>(&self, notification: N) -> Result<(), NotificationError> {
        let method = N::METHOD;

        debug!(method, template = N::TEMPLATE, "composing email");

        let message = self.compose(&notification).inspect_err(|err| match err {
            NotificationError::TemplateLoad(_) => {
                error!(method, error = %err, "unable to load email template")
            }
            _ => error!(method, error = %err, "unable to compose email"),
        })?;

        self.mailer
            .send_email(&message)
            .await
            .inspect_err(|err| error!(method, error = %err, "unable to send email"))?;

        info!(method, subject = %message.subject, "email sent");

        Ok(())
    }
}

#[async_trait]
impl<T, C, M> NotificationService for NotificationServiceImpl<T, C, M>
where
    T: TemplateSource,
    C: ConfigProvider,
    M: Mailer,
{
    async fn invite_new_user(
        &self,
        recipient: &str,
        inviter: &str,
        url: &str,
        username: &str,
        password: &str,
    ) -> Result<(), NotificationError> {
        self.deliver(InviteNewUser::new(recipient, inviter, url, username, password))
            .await
    }

    async fn invite_existing_user(
        &self,
        recipient: &str,
        inviter: &str,
        url: &str,
    ) -> Result<(), NotificationError> {
        self.deliver(InviteExistingUser::new(recipient, inviter, url))
            .await
    }

    async fn password_reset(&self, recipient: &str, url: &str) -> Result<(), NotificationError> {
        self.deliver(PasswordReset::new(recipient, url)).await
    }

    async fn share_folder_existing_user(
        &self,
        recipient: &str,
        inviter: &str,
        url: &str,
        folder: &str,
        intro: &str,
    ) -> Result<(), NotificationError> {
        self.deliver(ShareFolderExistingUser::new(recipient, inviter, url, folder, intro))
            .await
    }

    async fn share_folder_new_user(
        &self,
        recipient: &str,
        inviter: &str,
        url: &str,
        folder: &str,
        invitation_message: &str,
    ) -> Result<(), NotificationError> {
        self.deliver(ShareFolderNewUser::new(
            recipient,
            inviter,
            url,
            folder,
            invitation_message,
        ))
        .await
    }
}
