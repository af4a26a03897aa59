//! Scheduling settings for a startlist.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Duration;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::identifiers::EventId;

/// Immutable scheduling settings.
///
/// # Invariants
///
/// 1. `lane_count >= 1`
/// 2. Both intervals are non-negative (enforced by [`Duration`])
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SettingsRecord")]
pub struct StartlistSettings {
    event_id: EventId,
    start_time: DateTime<Utc>,
    lane_class_interval: Duration,
    class_player_interval: Duration,
    lane_count: u32,
}

impl StartlistSettings {
    /// Create validated settings.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Invariant` if `lane_count` is zero.
    pub fn new(
        event_id: EventId,
        start_time: DateTime<Utc>,
        lane_class_interval: Duration,
        class_player_interval: Duration,
        lane_count: u32,
    ) -> DomainResult<Self> {
        crate::invariant!(
            lane_count >= 1,
            DomainError::invariant("Lane count must be at least 1.")
        );

        Ok(Self {
            event_id,
            start_time,
            lane_class_interval,
            class_player_interval,
            lane_count,
        })
    }

    /// Legacy construction path applying one interval to both lane and class
    /// spacing.
    ///
    /// # Errors
    ///
    /// Same as [`StartlistSettings::new`].
    #[deprecated(note = "use `StartlistSettings::new` with separate lane and player intervals")]
    pub fn with_single_interval(
        event_id: EventId,
        start_time: DateTime<Utc>,
        interval: Duration,
        lane_count: u32,
    ) -> DomainResult<Self> {
        Self::new(event_id, start_time, interval, interval, lane_count)
    }

    #[must_use]
    pub const fn event_id(&self) -> &EventId {
        &self.event_id
    }

    #[must_use]
    pub const fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    /// Interval between successive classes on the same lane.
    #[must_use]
    pub const fn lane_class_interval(&self) -> Duration {
        self.lane_class_interval
    }

    /// Interval between successive players within a class.
    #[must_use]
    pub const fn class_player_interval(&self) -> Duration {
        self.class_player_interval
    }

    #[must_use]
    pub const fn lane_count(&self) -> u32 {
        self.lane_count
    }
}

#[derive(Deserialize)]
struct SettingsRecord {
    event_id: EventId,
    start_time: DateTime<Utc>,
    lane_class_interval: Duration,
    class_player_interval: Duration,
    lane_count: u32,
}

impl TryFrom<SettingsRecord> for StartlistSettings {
    type Error = DomainError;

    fn try_from(record: SettingsRecord) -> Result<Self, Self::Error> {
        Self::new(
            record.event_id,
            record.start_time,
            record.lane_class_interval,
            record.class_player_interval,
            record.lane_count,
        )
    }
}
