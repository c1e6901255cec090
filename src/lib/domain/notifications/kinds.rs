//! Notification kinds and their template parameters

use std::fmt;

use minijinja::{context, Value};

use super::templates;

/// Inviter name the web client sends when the user never filled in a name
pub const PLACEHOLDER_INVITER: &str = "Hello You";

/// Inviter shown when the real one is unknown
pub const ANONYMOUS_INVITER: &str = "Your colleague";

/// Replaces a missing or placeholder inviter with [`ANONYMOUS_INVITER`]
pub fn normalize_inviter(inviter: &str) -> String {
    if inviter.is_empty() || inviter == PLACEHOLDER_INVITER {
        return ANONYMOUS_INVITER.to_string();
    }

    inviter.to_string()
}

/// Escapes a link for HTML text and quoted attributes.
///
/// `/` stays literal so the recipient sees the link as sent.
fn link(url: &str) -> Value {
    let mut escaped = String::with_capacity(url.len());

    for c in url.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }

    Value::from_safe_string(escaped)
}

/// A single kind of notification email
pub trait Notification: fmt::Debug + Send + Sync {
    /// Operation name used in log records
    const METHOD: &'static str;

    /// Logical path of the template
    const TEMPLATE: &'static str;

    /// The address the email goes to
    fn recipient(&self) -> &str;

    /// The subject line
    fn subject(&self) -> String;

    /// The template parameters, `Subject` included
    fn context(&self) -> Value;
}

/// Invites someone new, giving them credentials and naming who invited them
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InviteNewUser {
    recipient: String,
    inviter: String,
    url: String,
    username: String,
    password: String,
}

impl InviteNewUser {
    /// Creates the notification. An empty `username` falls back to the recipient.
    pub fn new(recipient: &str, inviter: &str, url: &str, username: &str, password: &str) -> Self {
        let username = if username.is_empty() { recipient } else { username };

        Self {
            recipient: recipient.to_string(),
            inviter: normalize_inviter(inviter),
            url: url.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

impl Notification for InviteNewUser {
    const METHOD: &'static str = "InviteNewUser";
    const TEMPLATE: &'static str = templates::INVITE_NEW_USER;

    fn recipient(&self) -> &str {
        &self.recipient
    }

    fn subject(&self) -> String {
        format!("{} has invited you to Documize", self.inviter)
    }

    fn context(&self) -> Value {
        context! {
            Subject => self.subject(),
            Inviter => &self.inviter,
            Url => link(&self.url),
            Username => &self.username,
            Password => &self.password,
        }
    }
}

/// Invites a known user to an organization
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InviteExistingUser {
    recipient: String,
    inviter: String,
    url: String,
}

impl InviteExistingUser {
    /// Creates the notification
    pub fn new(recipient: &str, inviter: &str, url: &str) -> Self {
        Self {
            recipient: recipient.to_string(),
            inviter: normalize_inviter(inviter),
            url: url.to_string(),
        }
    }
}

impl Notification for InviteExistingUser {
    const METHOD: &'static str = "InviteExistingUser";
    const TEMPLATE: &'static str = templates::INVITE_EXISTING_USER;

    fn recipient(&self) -> &str {
        &self.recipient
    }

    fn subject(&self) -> String {
        format!("{} has invited you to their Documize account", self.inviter)
    }

    fn context(&self) -> Value {
        context! {
            Subject => self.subject(),
            Inviter => &self.inviter,
            Url => link(&self.url),
        }
    }
}

/// Sends a password reset link with an embedded token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasswordReset {
    recipient: String,
    url: String,
}

impl PasswordReset {
    /// Creates the notification
    pub fn new(recipient: &str, url: &str) -> Self {
        Self {
            recipient: recipient.to_string(),
            url: url.to_string(),
        }
    }
}

impl Notification for PasswordReset {
    const METHOD: &'static str = "PasswordReset";
    const TEMPLATE: &'static str = templates::PASSWORD_RESET;

    fn recipient(&self) -> &str {
        &self.recipient
    }

    fn subject(&self) -> String {
        "Documize password reset request".to_string()
    }

    fn context(&self) -> Value {
        context! {
            Subject => self.subject(),
            Url => link(&self.url),
        }
    }
}

/// Gives an existing user a link to a newly shared folder
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareFolderExistingUser {
    recipient: String,
    inviter: String,
    url: String,
    folder: String,
    intro: String,
}

impl ShareFolderExistingUser {
    /// Creates the notification
    pub fn new(recipient: &str, inviter: &str, url: &str, folder: &str, intro: &str) -> Self {
        Self {
            recipient: recipient.to_string(),
            inviter: normalize_inviter(inviter),
            url: url.to_string(),
            folder: folder.to_string(),
            intro: intro.to_string(),
        }
    }
}

impl Notification for ShareFolderExistingUser {
    const METHOD: &'static str = "ShareFolderExistingUser";
    const TEMPLATE: &'static str = templates::SHARE_FOLDER_EXISTING_USER;

    fn recipient(&self) -> &str {
        &self.recipient
    }

    fn subject(&self) -> String {
        format!("{} has shared {} with you", self.inviter, self.folder)
    }

    fn context(&self) -> Value {
        context! {
            Subject => self.subject(),
            Inviter => &self.inviter,
            Url => link(&self.url),
            Folder => &self.folder,
            Intro => &self.intro,
        }
    }
}

/// Invites a new user to a shared folder
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareFolderNewUser {
    recipient: String,
    inviter: String,
    url: String,
    folder: String,
    invitation: String,
}

impl ShareFolderNewUser {
    /// Creates the notification
    pub fn new(recipient: &str, inviter: &str, url: &str, folder: &str, invitation: &str) -> Self {
        Self {
            recipient: recipient.to_string(),
            inviter: normalize_inviter(inviter),
            url: url.to_string(),
            folder: folder.to_string(),
            invitation: invitation.to_string(),
        }
    }
}

impl Notification for ShareFolderNewUser {
    const METHOD: &'static str = "ShareFolderNewUser";
    const TEMPLATE: &'static str = templates::SHARE_FOLDER_NEW_USER;

    fn recipient(&self) -> &str {
        &self.recipient
    }

    fn subject(&self) -> String {
        format!("{} has shared {} with you on Documize", self.inviter, self.folder)
    }

    fn context(&self) -> Value {
        context! {
            Subject => self.subject(),
            Inviter => &self.inviter,
            Url => link(&self.url),
            Invitation => &self.invitation,
            Folder => &self.folder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_inviter() {
        assert_eq!(normalize_inviter(""), "Your colleague");
        assert_eq!(normalize_inviter("Hello You"), "Your colleague");
        assert_eq!(normalize_inviter("Dana"), "Dana");
        assert_eq!(normalize_inviter("hello you"), "hello you");
    }

    #[test]
    fn test_invite_new_user_subject_uses_normalized_inviter() {
        let invite = InviteNewUser::new("bob@x.com", "", "https://x/join", "bob@x.com", "temp-pw");

        assert_eq!(invite.subject(), "Your colleague has invited you to Documize");
    }

    #[test]
    fn test_invite_new_user_username_falls_back_to_recipient() {
        let invite = InviteNewUser::new("bob@x.com", "Dana", "https://x/join", "", "temp-pw");

        assert_eq!(invite.username, "bob@x.com");
    }

    #[test]
    fn test_invite_existing_user_subject() {
        let invite = InviteExistingUser::new("c@x.com", "Hello You", "https://x/");

        assert_eq!(
            invite.subject(),
            "Your colleague has invited you to their Documize account"
        );
    }

    #[test]
    fn test_password_reset_subject() {
        let reset = PasswordReset::new("alice@example.com", "https://x/reset/abc123");

        assert_eq!(reset.subject(), "Documize password reset request");
    }

    #[test]
    fn test_share_folder_existing_user_subject() {
        let share =
            ShareFolderExistingUser::new("c@x.com", "Dana", "https://x/f/9", "Q3 Plans", "see attached");

        assert_eq!(share.subject(), "Dana has shared Q3 Plans with you");
    }

    #[test]
    fn test_share_folder_new_user_subject() {
        let share = ShareFolderNewUser::new("c@x.com", "", "https://x/f/9", "Q3 Plans", "welcome");

        assert_eq!(share.subject(), "Your colleague has shared Q3 Plans with you on Documize");
    }

    #[test]
    fn test_link_escapes_markup() {
        let url = link("https://x/r?a=1&b=\"><img src=x onerror='alert(1)'>");

        assert_eq!(
            url.to_string(),
            "https://x/r?a=1&amp;b=&quot;&gt;&lt;img src=x onerror=&#x27;alert(1)&#x27;&gt;"
        );
    }

    #[test]
    fn test_link_keeps_slashes() {
        assert_eq!(link("https://x/reset/abc123").to_string(), "https://x/reset/abc123");
    }

    #[test]
    fn test_context_carries_subject_and_parameters() {
        let share =
            ShareFolderNewUser::new("c@x.com", "Dana", "https://x/f/9", "Q3 Plans", "welcome aboard");

        let ctx = share.context();

        assert_eq!(
            ctx.get_attr("Subject").ok().map(|v| v.to_string()),
            Some("Dana has shared Q3 Plans with you on Documize".to_string())
        );
        assert_eq!(
            ctx.get_attr("Invitation").ok().map(|v| v.to_string()),
            Some("welcome aboard".to_string())
        );
        assert!(ctx.get_attr("Url").map(|v| v.is_safe()).unwrap_or(false));
    }
}
