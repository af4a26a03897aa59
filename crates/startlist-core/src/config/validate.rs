//! Configuration validation

use super::error::ConfigError;
use super::types::StartlistConfig;

impl StartlistConfig {
    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if `logging.filter` is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.filter cannot be empty - remove it to use the default".to_string(),
            ));
        }
        Ok(())
    }
}
