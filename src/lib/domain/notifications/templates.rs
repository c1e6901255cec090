//! Email templates: where they come from and how they are rendered

mod renderer;
mod source;

pub use renderer::render;
pub use source::{TemplateSource, TemplateSourceError};

/// Logical path of the template for invitations of new users
pub const INVITE_NEW_USER: &str = "mail/invite-new-user.html";

/// Logical path of the template for invitations of existing users
pub const INVITE_EXISTING_USER: &str = "mail/invite-existing-user.html";

/// Logical path of the template for password reset requests
pub const PASSWORD_RESET: &str = "mail/password-reset.html";

/// Logical path of the template for folders shared with existing users
pub const SHARE_FOLDER_EXISTING_USER: &str = "mail/share-folder-existing-user.html";

/// Logical path of the template for folders shared with new users
pub const SHARE_FOLDER_NEW_USER: &str = "mail/share-folder-new-user.html";

/// Every template a notification may ask for
pub const ALL: [&str; 5] = [
    INVITE_NEW_USER,
    INVITE_EXISTING_USER,
    PASSWORD_RESET,
    SHARE_FOLDER_EXISTING_USER,
    SHARE_FOLDER_NEW_USER,
];
