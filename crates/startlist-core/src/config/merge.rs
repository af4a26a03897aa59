//! Configuration merging logic
//!
//! A file layer overrides exactly the keys it sets, including keys set to
//! their default value.

use super::types::{
    EventBusConfig, LoggingConfig, PartialEventBusConfig, PartialLoggingConfig,
    PartialStartlistConfig, StartlistConfig,
};

impl StartlistConfig {
    /// Merge a file layer into this config (the layer takes precedence)
    #[must_use]
    pub fn merge(self, layer: PartialStartlistConfig) -> Self {
        Self {
            logging: self.logging.merge(layer.logging),
            event_bus: self.event_bus.merge(layer.event_bus),
        }
    }
}

impl LoggingConfig {
    fn merge(self, layer: PartialLoggingConfig) -> Self {
        Self {
            filter: layer.filter.unwrap_or(self.filter),
        }
    }
}

impl EventBusConfig {
    fn merge(self, layer: PartialEventBusConfig) -> Self {
        Self {
            subscriber_failure: layer.subscriber_failure.unwrap_or(self.subscriber_failure),
        }
    }
}
