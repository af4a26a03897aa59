//! Serializable state of a startlist aggregate.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::domain::identifiers::StartlistId;
use crate::domain::status::StartlistStatus;
use crate::domain::value_objects::{ClassAssignment, LaneAssignment, StartTime, StartlistSettings};

/// Complete state of a startlist at a point in time.
///
/// `Startlist::reconstitute(snapshot).to_snapshot() == snapshot` for every
/// snapshot produced by an aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartlistSnapshot {
    pub id: StartlistId,
    pub status: StartlistStatus,
    #[serde(default)]
    pub settings: Option<StartlistSettings>,
    #[serde(default)]
    pub lane_assignments: Vec<LaneAssignment>,
    #[serde(default)]
    pub class_assignments: Vec<ClassAssignment>,
    #[serde(default)]
    pub start_times: Vec<StartTime>,
}

impl StartlistSnapshot {
    /// Empty draft snapshot.
    #[must_use]
    pub const fn empty(id: StartlistId) -> Self {
        Self {
            id,
            status: StartlistStatus::Draft,
            settings: None,
            lane_assignments: Vec::new(),
            class_assignments: Vec::new(),
            start_times: Vec::new(),
        }
    }
}
