//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::infrastructure::event_bus::SubscriberFailurePolicy;

// ═══════════════════════════════════════════════════════════════════════════
// MAIN CONFIGURATION
// ═══════════════════════════════════════════════════════════════════════════

/// Root configuration structure
///
/// Loaded from defaults → global file → explicit file → env vars
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StartlistConfig {
    pub logging: LoggingConfig,
    pub event_bus: EventBusConfig,
}

// ═══════════════════════════════════════════════════════════════════════════
// NESTED CONFIGURATION STRUCTURES
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub filter: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EventBusConfig {
    pub subscriber_failure: SubscriberFailurePolicy,
}

// ═══════════════════════════════════════════════════════════════════════════
// FILE LAYERS
// ═══════════════════════════════════════════════════════════════════════════

/// One config file as written: absent keys stay `None` and leave earlier
/// layers untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PartialStartlistConfig {
    pub logging: PartialLoggingConfig,
    pub event_bus: PartialEventBusConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PartialLoggingConfig {
    pub filter: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PartialEventBusConfig {
    pub subscriber_failure: Option<SubscriberFailurePolicy>,
}
