//! Configuration loading from files and environment
//!
//! Layers, later overriding earlier:
//! 1. Built-in defaults
//! 2. Global config: `<config dir>/startlist/config.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `STARTLIST_*`

use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::ConfigError;
use super::types::{PartialStartlistConfig, StartlistConfig};
use crate::infrastructure::event_bus::SubscriberFailurePolicy;

pub const ENV_LOG_FILTER: &str = "STARTLIST_LOG_FILTER";
pub const ENV_SUBSCRIBER_FAILURE: &str = "STARTLIST_SUBSCRIBER_FAILURE";

// ═══════════════════════════════════════════════════════════════════════════
// PUBLIC API
// ═══════════════════════════════════════════════════════════════════════════

/// Load configuration from all sources.
///
/// # Errors
///
/// Returns error if:
/// - A config file cannot be read or is malformed TOML
/// - An environment override holds an invalid value
/// - The merged config fails validation
pub fn load_config(explicit: Option<&Path>) -> Result<StartlistConfig, ConfigError> {
    load_config_from(global_config_path().as_deref(), explicit)
}

/// Same as [`load_config`] with the global config location supplied.
///
/// A missing global file is skipped; a missing explicit file is an error.
///
/// # Errors
///
/// See [`load_config`].
pub fn load_config_from(
    global: Option<&Path>,
    explicit: Option<&Path>,
) -> Result<StartlistConfig, ConfigError> {
    let config = StartlistConfig::default();

    let config = match global.filter(|path| path.exists()) {
        Some(path) => config.merge(load_toml_file(path)?),
        None => config,
    };

    let config = match explicit {
        Some(path) => config.merge(load_toml_file(path)?),
        None => config,
    };

    let config = config.apply_env_vars()?;
    config.validate()?;
    debug!(?config, "Loaded configuration");
    Ok(config)
}

// ═══════════════════════════════════════════════════════════════════════════
// PATH HELPERS
// ═══════════════════════════════════════════════════════════════════════════

/// Get path to global config file
#[must_use]
pub fn global_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "startlist")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load a TOML file as a config layer
///
/// # Errors
///
/// Returns `Io` if the file cannot be read, `Parse` if the TOML is malformed.
pub fn load_toml_file(path: &Path) -> Result<PartialStartlistConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// ENVIRONMENT VARIABLE OVERRIDES
// ═══════════════════════════════════════════════════════════════════════════

impl StartlistConfig {
    /// Apply environment variable overrides
    ///
    /// # Errors
    ///
    /// Returns `InvalidEnv` if `STARTLIST_SUBSCRIBER_FAILURE` is not a known policy.
    pub fn apply_env_vars(mut self) -> Result<Self, ConfigError> {
        if let Ok(value) = std::env::var(ENV_LOG_FILTER) {
            self.logging.filter = value;
        }

        if let Ok(value) = std::env::var(ENV_SUBSCRIBER_FAILURE) {
            self.event_bus.subscriber_failure =
                value
                    .parse::<SubscriberFailurePolicy>()
                    .map_err(|_| ConfigError::InvalidEnv {
                        variable: ENV_SUBSCRIBER_FAILURE,
                        value,
                        expected: "propagate, isolate",
                    })?;
        }

        Ok(self)
    }
}
