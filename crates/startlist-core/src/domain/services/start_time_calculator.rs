//! Derives start times from settings, lane order and class order.
//!
//! Each lane runs its own clock starting at `settings.start_time`. Players of
//! a class start `class.interval` apart; the first player of the next class on
//! the lane starts `lane.interval` after the previous class's last start.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::identifiers::ClassId;
use crate::domain::value_objects::{
    ClassAssignment, Duration, LaneAssignment, StartTime, StartlistSettings,
};

pub const LANE_ASSIGNMENTS_REQUIRED: &str =
    "Lane assignments must be completed before scheduling start times.";

/// Pure scheduling rule; holds no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct StartTimeCalculator;

impl StartTimeCalculator {
    /// Compute one start time per player placed on a lane.
    ///
    /// # Errors
    ///
    /// - `SettingsNotEntered` without settings
    /// - `ClassAssignmentsNotCompleted` without class assignments
    /// - `Invariant` if lanes are missing, a lane names a class with no
    ///   player order, a class is on no lane, or a time overflows
    pub fn calculate(
        settings: Option<&StartlistSettings>,
        lane_assignments: &[LaneAssignment],
        class_assignments: &[ClassAssignment],
    ) -> DomainResult<Vec<StartTime>> {
        let settings = settings.ok_or(DomainError::SettingsNotEntered)?;
        crate::invariant!(
            !class_assignments.is_empty(),
            DomainError::ClassAssignmentsNotCompleted
        );
        crate::invariant!(
            !lane_assignments.is_empty(),
            DomainError::invariant(LANE_ASSIGNMENTS_REQUIRED)
        );

        let classes: HashMap<&ClassId, &ClassAssignment> = class_assignments
            .iter()
            .map(|class| (class.class_id(), class))
            .collect();

        let placed: HashSet<&ClassId> = lane_assignments
            .iter()
            .flat_map(LaneAssignment::class_order)
            .collect();
        if let Some(unplaced) = class_assignments
            .iter()
            .map(ClassAssignment::class_id)
            .find(|class_id| !placed.contains(class_id))
        {
            return Err(DomainError::invariant(format!(
                "Class {unplaced} is not placed on any lane."
            )));
        }

        let mut lanes: Vec<&LaneAssignment> = lane_assignments.iter().collect();
        lanes.sort_by_key(|lane| lane.lane_number());

        let mut start_times = Vec::new();
        for lane in lanes {
            let mut cursor = settings.start_time();
            for (position, class_id) in lane.class_order().iter().enumerate() {
                let class = classes.get(class_id).ok_or_else(|| {
                    DomainError::invariant(format!(
                        "Class {class_id} on lane {} has no player order.",
                        lane.lane_number()
                    ))
                })?;
                if position > 0 {
                    cursor = offset(cursor, lane.interval())?;
                }
                for (index, player_id) in class.player_order().iter().enumerate() {
                    let at = offset(cursor, class.interval().times(index))?;
                    start_times.push(StartTime::new(player_id.clone(), at, lane.lane_number())?);
                }
                let last = class.player_order().len().saturating_sub(1);
                cursor = offset(cursor, class.interval().times(last))?;
            }
        }
        Ok(start_times)
    }
}

fn offset(from: DateTime<Utc>, by: Duration) -> DomainResult<DateTime<Utc>> {
    from.checked_add_signed(by.to_time_delta()?)
        .ok_or_else(|| DomainError::invariant(format!("Start time overflows when adding {by}.")))
}
