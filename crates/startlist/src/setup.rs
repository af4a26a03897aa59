//! Process-level setup

use anyhow::Result;
use startlist_core::StartlistConfig;
use tracing_subscriber::EnvFilter;

/// Initialize tracing to stderr.
///
/// `RUST_LOG` wins when set; otherwise the configured filter applies.
///
/// # Errors
/// Returns an error if the filter is invalid or a subscriber is already set.
pub fn init_tracing(config: &StartlistConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.logging.filter).map_err(|e| {
            anyhow::anyhow!("Invalid logging.filter '{}': {e}", config.logging.filter)
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {e}"))
}
