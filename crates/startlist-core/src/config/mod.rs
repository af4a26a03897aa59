//! Configuration loading and management
//!
//! # Hierarchy
//!
//! Configuration is loaded in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Global config: `<config dir>/startlist/config.toml`
//! 3. Explicit config file
//! 4. Environment variables: `STARTLIST_LOG_FILTER`, `STARTLIST_SUBSCRIBER_FAILURE`
//!
//! # Example Config
//!
//! ```toml
//! [logging]
//! filter = "startlist_core=debug,info"
//!
//! [event_bus]
//! subscriber_failure = "isolate"
//! ```

mod defaults;
mod error;
mod load;
mod merge;
mod types;
mod validate;

#[cfg(test)]
mod tests_loading;

pub use defaults::DEFAULT_LOG_FILTER;
pub use error::ConfigError;
pub use load::{
    global_config_path, load_config, load_config_from, load_toml_file, ENV_LOG_FILTER,
    ENV_SUBSCRIBER_FAILURE,
};
pub use types::{
    EventBusConfig, LoggingConfig, PartialEventBusConfig, PartialLoggingConfig,
    PartialStartlistConfig, StartlistConfig,
};
