//! Environment variable configuration

use std::env;

use crate::domain::configuration::ConfigProvider;

/// Reads `section`/`key` from the `SECTION_KEY` environment variable.
///
/// Variables are looked up on every call, so `SMTP_HOST` and friends may
/// change while the process runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvConfig;

impl EnvConfig {
    fn variable(section: &str, key: &str) -> String {
        format!("{section}_{key}").to_uppercase()
    }
}

impl ConfigProvider for EnvConfig {
    fn config_string(&self, section: &str, key: &str) -> String {
        env::var(Self::variable(section, key)).unwrap_or_default()
    }
}
