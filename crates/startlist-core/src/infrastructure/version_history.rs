//! Numbered, immutable versions of finalized startlists.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::application::ports::EventSubscriber;
use crate::domain::events::StartlistEvent;
use crate::domain::identifiers::StartlistId;
use crate::domain::snapshot::StartlistSnapshot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartlistVersion {
    /// 1-based, increasing per startlist.
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub snapshot: StartlistSnapshot,
}

/// Subscriber recording every `StartlistVersionGenerated` event.
#[derive(Debug, Default)]
pub struct StartlistVersionHistory {
    versions: Mutex<HashMap<StartlistId, Vec<StartlistVersion>>>,
}

impl StartlistVersionHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All versions of a startlist, oldest first.
    ///
    /// # Errors
    ///
    /// Fails if the history lock is poisoned.
    pub fn versions(&self, startlist_id: &StartlistId) -> anyhow::Result<Vec<StartlistVersion>> {
        Ok(self
            .versions
            .lock()
            .map_err(|e| anyhow!("Version history lock poisoned: {e}"))?
            .get(startlist_id)
            .cloned()
            .unwrap_or_default())
    }

    /// # Errors
    ///
    /// Fails if the history lock is poisoned.
    pub fn latest(&self, startlist_id: &StartlistId) -> anyhow::Result<Option<StartlistVersion>> {
        self.versions(startlist_id)
            .map(|mut versions| versions.pop())
    }
}

#[async_trait::async_trait]
impl EventSubscriber for StartlistVersionHistory {
    fn name(&self) -> &str {
        "startlist_version_history"
    }

    async fn handle(&self, event: &StartlistEvent) -> anyhow::Result<()> {
        let StartlistEvent::StartlistVersionGenerated(payload) = event else {
            return Ok(());
        };

        let mut versions = self
            .versions
            .lock()
            .map_err(|e| anyhow!("Version history lock poisoned: {e}"))?;
        let history = versions.entry(payload.startlist_id.clone()).or_default();
        let version = u32::try_from(history.len())
            .ok()
            .and_then(|count| count.checked_add(1))
            .ok_or_else(|| anyhow!("Version counter overflow for {}", payload.startlist_id))?;
        history.push(StartlistVersion {
            version,
            generated_at: payload.occurred_at,
            snapshot: payload.snapshot.clone(),
        });
        info!(startlist_id = %payload.startlist_id, version, "Recorded startlist version");
        Ok(())
    }
}
