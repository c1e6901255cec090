//! Configuration provider

#[cfg(test)]
use mockall::mock;

/// Read-only access to sectioned string settings
pub trait ConfigProvider: Clone + Send + Sync + 'static {
    /// Returns the value stored under `section`/`key`.
    ///
    /// # Arguments
    /// * `section` - The settings section, e.g. `SMTP`.
    /// * `key` - The key within the section, e.g. `host`.
    ///
    /// # Returns
    /// The configured value, or an empty string when it is unset.
    fn config_string(&self, section: &str, key: &str) -> String;
}

#[cfg(test)]
mock! {
    pub ConfigProvider {}

    impl Clone for ConfigProvider {
        fn clone(&self) -> Self;
    }

    impl ConfigProvider for ConfigProvider {
        fn config_string(&self, section: &str, key: &str) -> String;
    }
}
