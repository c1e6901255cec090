//! Configuration access
//!
//! Settings are read through a [`ConfigProvider`] on every use rather than
//! being captured at startup, so a changed value applies to the next email.

mod provider;
mod smtp;

pub use provider::ConfigProvider;
pub use smtp::{SmtpSettings, DEFAULT_SMTP_PORT, SMTP_SECTION};

#[cfg(test)]
pub mod tests {
    pub use super::provider::MockConfigProvider;
}
