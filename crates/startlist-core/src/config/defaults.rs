//! Built-in configuration defaults

use super::types::{EventBusConfig, LoggingConfig, StartlistConfig};
use crate::infrastructure::event_bus::SubscriberFailurePolicy;

pub const DEFAULT_LOG_FILTER: &str = "info";

impl Default for StartlistConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            event_bus: EventBusConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            subscriber_failure: SubscriberFailurePolicy::Propagate,
        }
    }
}
