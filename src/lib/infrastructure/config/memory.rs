//! In-memory configuration

use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

use crate::{
    domain::configuration::{ConfigProvider, SMTP_SECTION},
    infrastructure::email::smtp::SmtpOptions,
};

type Values = HashMap<(String, String), String>;

/// Settings held in memory.
///
/// Clones share the same values, so a [`MemoryConfig::set`] on one is seen
/// by every holder.
#[derive(Debug, Default, Clone)]
pub struct MemoryConfig {
    values: Arc<RwLock<Values>>,
}

impl MemoryConfig {
    /// Returns the config with `section`/`key` set to `value`
    pub fn with(self, section: &str, key: &str, value: &str) -> Self {
        self.set(section, key, value);
        self
    }

    /// Sets `section`/`key` to `value`
    pub fn set(&self, section: &str, key: &str, value: &str) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((section.to_string(), key.to_string()), value.to_string());
    }
}

impl ConfigProvider for MemoryConfig {
    fn config_string(&self, section: &str, key: &str) -> String {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(section.to_string(), key.to_string()))
            .cloned()
            .unwrap_or_default()
    }
}

impl From<SmtpOptions> for MemoryConfig {
    fn from(options: SmtpOptions) -> Self {
        let config = MemoryConfig::default()
            .with(SMTP_SECTION, "host", &options.host)
            .with(SMTP_SECTION, "userid", &options.userid)
            .with(SMTP_SECTION, "password", &options.password)
            .with(SMTP_SECTION, "sender", &options.sender);

        if let Some(port) = options.port {
            config.set(SMTP_SECTION, "port", &port.to_string());
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::configuration::SmtpSettings;

    use super::*;

    #[test]
    fn test_unset_value_is_empty() {
        assert_eq!(MemoryConfig::default().config_string("SMTP", "host"), "");
    }

    #[test]
    fn test_set_is_visible_to_clones() {
        let config = MemoryConfig::default().with("SMTP", "host", "smtp.example.com");
        let shared = config.clone();

        config.set("SMTP", "host", "mail.example.com");

        assert_eq!(shared.config_string("SMTP", "host"), "mail.example.com");
    }

    #[test]
    fn test_from_smtp_options() {
        let config = MemoryConfig::from(SmtpOptions {
            host: "smtp.example.com".to_string(),
            port: None,
            userid: "documize".to_string(),
            password: "secret".to_string(),
            sender: "hello@documize.com".to_string(),
        });

        let settings = SmtpSettings::new(&config);

        assert_eq!(settings.address(), "smtp.example.com:587");
        assert_eq!(settings.userid(), "documize");
        assert_eq!(settings.password(), "secret");
        assert_eq!(settings.sender(), "hello@documize.com");
    }

    #[test]
    fn test_from_smtp_options_with_port() {
        let config = MemoryConfig::from(SmtpOptions {
            host: "smtp.example.com".to_string(),
            port: Some(2525),
            ..Default::default()
        });

        assert_eq!(SmtpSettings::new(&config).port(), "2525");
    }
}
