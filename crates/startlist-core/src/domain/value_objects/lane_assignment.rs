//! Class running order on a single lane.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::Duration;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::identifiers::ClassId;

/// Ordered classes on one lane, with the interval between classes.
///
/// # Invariants
///
/// 1. `1 <= lane_number <= lane_count` (lane count supplied by the caller)
/// 2. `class_order` is non-empty and repeats no class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LaneAssignmentRecord")]
pub struct LaneAssignment {
    lane_number: u32,
    class_order: Vec<ClassId>,
    interval: Duration,
}

impl LaneAssignment {
    /// Create a lane assignment validated against the configured lane count.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Invariant` if the lane number is out of range or
    /// the class order is empty or repeats a class.
    pub fn new(
        lane_number: u32,
        class_order: Vec<ClassId>,
        interval: Duration,
        lane_count: u32,
    ) -> DomainResult<Self> {
        crate::invariant!(
            lane_number <= lane_count,
            DomainError::invariant(format!(
                "Lane number must be between 1 and {lane_count} (got {lane_number})."
            ))
        );
        Self::restore(lane_number, class_order, interval)
    }

    /// Validation that holds without lane-count context (used on rehydration).
    fn restore(
        lane_number: u32,
        class_order: Vec<ClassId>,
        interval: Duration,
    ) -> DomainResult<Self> {
        crate::invariant!(
            lane_number >= 1,
            DomainError::invariant(format!("Lane number must be at least 1 (got {lane_number})."))
        );
        crate::invariant!(
            !class_order.is_empty(),
            DomainError::invariant("Lane class order must contain at least one class.")
        );
        if let Some(duplicate) = class_order.iter().duplicates().next() {
            return Err(DomainError::invariant(format!(
                "Class {duplicate} appears more than once on lane {lane_number}."
            )));
        }

        Ok(Self {
            lane_number,
            class_order,
            interval,
        })
    }

    #[must_use]
    pub const fn lane_number(&self) -> u32 {
        self.lane_number
    }

    #[must_use]
    pub fn class_order(&self) -> &[ClassId] {
        &self.class_order
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }
}

#[derive(Deserialize)]
struct LaneAssignmentRecord {
    lane_number: u32,
    class_order: Vec<ClassId>,
    interval: Duration,
}

impl TryFrom<LaneAssignmentRecord> for LaneAssignment {
    type Error = DomainError;

    fn try_from(record: LaneAssignmentRecord) -> Result<Self, Self::Error> {
        Self::restore(record.lane_number, record.class_order, record.interval)
    }
}
