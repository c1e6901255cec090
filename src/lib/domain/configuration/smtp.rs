//! SMTP settings

use super::ConfigProvider;

/// Configuration section holding the SMTP settings
pub const SMTP_SECTION: &str = "SMTP";

/// Submission port used when none is configured
pub const DEFAULT_SMTP_PORT: &str = "587";

/// Lazily resolved SMTP settings.
///
/// Nothing is cached: each accessor reads the underlying provider again.
#[derive(Debug, Clone, Copy)]
pub struct SmtpSettings<'a, C> {
    config: &'a C,
}

impl<'a, C> SmtpSettings<'a, C>
where
    C: ConfigProvider,
{
    /// Creates settings backed by `config`
    pub fn new(config: &'a C) -> Self {
        Self { config }
    }

    fn get(&self, key: &str) -> String {
        self.config.config_string(SMTP_SECTION, key)
    }

    /// The user to authenticate as
    pub fn userid(&self) -> String {
        self.get("userid")
    }

    /// The password to authenticate with
    pub fn password(&self) -> String {
        self.get("password")
    }

    /// The SMTP server host name
    pub fn host(&self) -> String {
        self.get("host")
    }

    /// The SMTP server port, [`DEFAULT_SMTP_PORT`] when unset
    pub fn port(&self) -> String {
        let port = self.get("port");

        if port.is_empty() {
            return DEFAULT_SMTP_PORT.to_string();
        }

        port
    }

    /// The `From` address of outgoing mail
    pub fn sender(&self) -> String {
        self.get("sender")
    }

    /// The server address as `host:port`
    pub fn address(&self) -> String {
        format!("{}:{}", self.host(), self.port())
    }
}
