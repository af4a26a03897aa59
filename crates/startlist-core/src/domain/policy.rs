//! Cross-cutting checks that gate start-time assignment.
//!
//! Checks run in a fixed order so the reported error is deterministic:
//!
//! 1. Settings present, else [`DomainError::SettingsNotEntered`]
//! 2. Class assignments present, else [`DomainError::ClassAssignmentsNotCompleted`]
//! 3. At least one start time supplied
//! 4. Per entry, in input order: duplicate player, unknown player, lane overflow
//!
//! The first violation found is reported.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use std::collections::HashSet;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::identifiers::PlayerId;
use crate::domain::value_objects::{ClassAssignment, StartTime, StartlistSettings};

pub const AT_LEAST_ONE_START_TIME: &str = "At least one start time must be provided.";
pub const START_TIMES_UNIQUE_PER_PLAYER: &str = "Start times must be unique per player.";

/// Stateless validator for start-time assignment.
#[derive(Debug, Clone, Copy, Default)]
pub struct StartTimeAssignmentPolicy;

impl StartTimeAssignmentPolicy {
    /// Verify that `start_times` may be assigned under the given state.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule as a `DomainError`.
    pub fn ensure_can_assign(
        start_times: &[StartTime],
        settings: Option<&StartlistSettings>,
        class_assignments: &[ClassAssignment],
    ) -> DomainResult<()> {
        let settings = settings.ok_or(DomainError::SettingsNotEntered)?;
        crate::invariant!(
            !class_assignments.is_empty(),
            DomainError::ClassAssignmentsNotCompleted
        );
        crate::invariant!(
            !start_times.is_empty(),
            DomainError::invariant(AT_LEAST_ONE_START_TIME)
        );

        let allowed: HashSet<&PlayerId> = class_assignments
            .iter()
            .flat_map(|assignment| assignment.player_order())
            .collect();
        let lane_count = settings.lane_count();
        let mut seen: HashSet<&PlayerId> = HashSet::with_capacity(start_times.len());

        for start in start_times {
            let player = start.player_id();
            crate::invariant!(
                seen.insert(player),
                DomainError::invariant(START_TIMES_UNIQUE_PER_PLAYER)
            );
            crate::invariant!(
                allowed.contains(player),
                DomainError::invariant(format!(
                    "Player {player} is not assigned to any class."
                ))
            );
            crate::invariant!(
                start.lane_number() <= lane_count,
                DomainError::invariant(format!(
                    "Lane number {} exceeds the configured lane count of {lane_count}.",
                    start.lane_number()
                ))
            );
        }

        Ok(())
    }
}
