//! Scheduled start of one player.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::identifiers::PlayerId;

/// Final per-player start instant and lane.
///
/// The upper lane bound depends on the settings in force and is checked by
/// [`StartTimeAssignmentPolicy`](crate::domain::policy::StartTimeAssignmentPolicy).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StartTimeRecord")]
pub struct StartTime {
    player_id: PlayerId,
    start_time: DateTime<Utc>,
    lane_number: u32,
}

impl StartTime {
    /// Create a start time entry.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Invariant` if `lane_number` is zero.
    pub fn new(
        player_id: PlayerId,
        start_time: DateTime<Utc>,
        lane_number: u32,
    ) -> DomainResult<Self> {
        crate::invariant!(
            lane_number >= 1,
            DomainError::invariant(format!("Lane number must be at least 1 (got {lane_number})."))
        );

        Ok(Self {
            player_id,
            start_time,
            lane_number,
        })
    }

    #[must_use]
    pub const fn player_id(&self) -> &PlayerId {
        &self.player_id
    }

    #[must_use]
    pub const fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    #[must_use]
    pub const fn lane_number(&self) -> u32 {
        self.lane_number
    }
}

#[derive(Deserialize)]
struct StartTimeRecord {
    player_id: PlayerId,
    start_time: DateTime<Utc>,
    lane_number: u32,
}

impl TryFrom<StartTimeRecord> for StartTime {
    type Error = DomainError;

    fn try_from(record: StartTimeRecord) -> Result<Self, Self::Error> {
        Self::new(record.player_id, record.start_time, record.lane_number)
    }
}
