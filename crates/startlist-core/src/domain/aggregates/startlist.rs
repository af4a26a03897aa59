//! Startlist aggregate root with business rules and invariants.
//!
//! The Startlist aggregate owns:
//! - Unique identity (`StartlistId`)
//! - Optional scheduling settings
//! - Lane assignments (class order per lane)
//! - Class assignments (player order per class)
//! - Start times (one per scheduled player)
//! - Lifecycle status
//! - A buffer of pending domain events, drained by [`Startlist::pull_domain_events`]
//!
//! # Invariants
//!
//! 1. Settings must exist before lane assignments or start times
//! 2. Class assignments must exist before start times
//! 3. Every start time references a player from the class assignments
//! 4. No two start times share a player
//! 5. No start time or lane assignment exceeds `settings.lane_count`
//! 6. A finalized startlist rejects every mutation

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use std::collections::HashSet;
use std::sync::Arc;

use itertools::Itertools;

use crate::domain::clock::DomainClock;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::events::StartlistEvent;
use crate::domain::identifiers::{ClassId, PlayerId, StartlistId};
use crate::domain::policy::StartTimeAssignmentPolicy;
use crate::domain::snapshot::StartlistSnapshot;
use crate::domain::status::StartlistStatus;
use crate::domain::value_objects::{ClassAssignment, LaneAssignment, StartTime, StartlistSettings};

pub const FINALIZE_REQUIRES_START_TIMES: &str =
    "Startlist can only be finalized after assigning start times.";
pub const AT_LEAST_ONE_LANE_ASSIGNMENT: &str = "At least one lane assignment must be provided.";

// ============================================================================
// STARTLIST AGGREGATE ROOT
// ============================================================================

/// Startlist aggregate root.
///
/// Exclusively owned and mutated in place; every successful mutation appends
/// to the pending event buffer. A failed mutation leaves state and buffer
/// untouched.
#[derive(Debug, Clone)]
pub struct Startlist {
    id: StartlistId,
    status: StartlistStatus,
    settings: Option<StartlistSettings>,
    lane_assignments: Vec<LaneAssignment>,
    class_assignments: Vec<ClassAssignment>,
    start_times: Vec<StartTime>,
    pending_events: Vec<StartlistEvent>,
    clock: Arc<dyn DomainClock>,
}

impl Startlist {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Create a new, empty draft startlist. No events are emitted.
    #[must_use]
    pub fn create_new(id: StartlistId, clock: Arc<dyn DomainClock>) -> Self {
        Self::reconstitute(StartlistSnapshot::empty(id), clock)
    }

    /// Rehydrate a startlist from a snapshot. No events are emitted.
    #[must_use]
    pub fn reconstitute(snapshot: StartlistSnapshot, clock: Arc<dyn DomainClock>) -> Self {
        Self {
            id: snapshot.id,
            status: snapshot.status,
            settings: snapshot.settings,
            lane_assignments: snapshot.lane_assignments,
            class_assignments: snapshot.class_assignments,
            start_times: snapshot.start_times,
            pending_events: Vec::new(),
            clock,
        }
    }

    // ========================================================================
    // QUERY METHODS
    // ========================================================================

    #[must_use]
    pub const fn id(&self) -> &StartlistId {
        &self.id
    }

    #[must_use]
    pub const fn status(&self) -> StartlistStatus {
        self.status
    }

    #[must_use]
    pub const fn settings(&self) -> Option<&StartlistSettings> {
        self.settings.as_ref()
    }

    #[must_use]
    pub fn lane_assignments(&self) -> &[LaneAssignment] {
        &self.lane_assignments
    }

    #[must_use]
    pub fn class_assignments(&self) -> &[ClassAssignment] {
        &self.class_assignments
    }

    #[must_use]
    pub fn start_times(&self) -> &[StartTime] {
        &self.start_times
    }

    /// Events emitted since the last pull.
    #[must_use]
    pub fn pending_events(&self) -> &[StartlistEvent] {
        &self.pending_events
    }

    /// Complete, independent copy of the aggregate state.
    #[must_use]
    pub fn to_snapshot(&self) -> StartlistSnapshot {
        StartlistSnapshot {
            id: self.id.clone(),
            status: self.status,
            settings: self.settings.clone(),
            lane_assignments: self.lane_assignments.clone(),
            class_assignments: self.class_assignments.clone(),
            start_times: self.start_times.clone(),
        }
    }

    // ========================================================================
    // STATE TRANSITION METHODS
    // ========================================================================

    /// Set or replace the scheduling settings.
    ///
    /// Existing assignments are retained, so they must fit the new lane count.
    ///
    /// # Errors
    ///
    /// `Invariant` if a stored lane assignment or start time uses a lane above
    /// the new `lane_count`.
    pub fn enter_settings(&mut self, settings: StartlistSettings) -> DomainResult<()> {
        self.ensure_not_finalized()?;
        self.ensure_lanes_fit(settings.lane_count())?;

        self.settings = Some(settings.clone());
        self.status = self.progress_status();
        let event = StartlistEvent::settings_entered(self.id.clone(), settings, self.clock.now());
        self.record(event);
        Ok(())
    }

    /// Replace the lane assignments.
    ///
    /// # Errors
    ///
    /// - `SettingsNotEntered` if no settings exist
    /// - `Invariant` for an empty list, a lane above `lane_count`, a repeated
    ///   lane or a class placed on more than one lane
    pub fn assign_lane_order_and_intervals(
        &mut self,
        assignments: Vec<LaneAssignment>,
    ) -> DomainResult<()> {
        self.ensure_not_finalized()?;
        self.validate_lane_assignments(&assignments)?;

        self.lane_assignments = assignments.clone();
        self.status = self.progress_status();
        let event =
            StartlistEvent::lane_order_assigned(self.id.clone(), assignments, self.clock.now());
        self.record(event);
        Ok(())
    }

    /// Replace the class assignments.
    ///
    /// # Errors
    ///
    /// `Invariant` if a class appears more than once, or if a stored start time
    /// belongs to a player missing from the new assignments.
    pub fn assign_player_order_and_intervals(
        &mut self,
        assignments: Vec<ClassAssignment>,
    ) -> DomainResult<()> {
        self.ensure_not_finalized()?;
        self.validate_class_assignments(&assignments)?;

        self.class_assignments = assignments.clone();
        self.status = self.progress_status();
        let event =
            StartlistEvent::player_order_assigned(self.id.clone(), assignments, self.clock.now());
        self.record(event);
        Ok(())
    }

    /// Replace the start times after [`StartTimeAssignmentPolicy`] approves them.
    ///
    /// Rejection is atomic: nothing is applied when any entry is invalid.
    pub fn assign_start_times(&mut self, start_times: Vec<StartTime>) -> DomainResult<()> {
        self.ensure_not_finalized()?;
        StartTimeAssignmentPolicy::ensure_can_assign(
            &start_times,
            self.settings.as_ref(),
            &self.class_assignments,
        )?;

        self.start_times = start_times.clone();
        self.status = self.progress_status();
        let event =
            StartlistEvent::start_times_assigned(self.id.clone(), start_times, self.clock.now());
        self.record(event);
        Ok(())
    }

    /// Freeze the startlist.
    ///
    /// Emits `StartlistFinalized` followed by `StartlistVersionGenerated`,
    /// both carrying an independent snapshot. The stored start times must
    /// still pass [`StartTimeAssignmentPolicy`].
    pub fn finalize_startlist(&mut self) -> DomainResult<()> {
        self.ensure_not_finalized()?;
        crate::invariant!(
            !self.start_times.is_empty(),
            DomainError::invariant(FINALIZE_REQUIRES_START_TIMES)
        );
        StartTimeAssignmentPolicy::ensure_can_assign(
            &self.start_times,
            self.settings.as_ref(),
            &self.class_assignments,
        )?;

        self.status = StartlistStatus::Finalized;
        let snapshot = self.to_snapshot();
        let now = self.clock.now();
        self.record(StartlistEvent::finalized(snapshot.clone(), now));
        self.record(StartlistEvent::version_generated(snapshot, now));
        Ok(())
    }

    /// Clear all start times, recording `reason` for audit.
    ///
    /// # Errors
    ///
    /// `NoStartTimesAssigned` if there is nothing to clear.
    pub fn invalidate_start_times(&mut self, reason: impl Into<String>) -> DomainResult<()> {
        self.ensure_not_finalized()?;
        crate::invariant!(
            !self.start_times.is_empty(),
            DomainError::NoStartTimesAssigned
        );

        self.start_times.clear();
        self.status = self.progress_status();
        let event = StartlistEvent::start_times_invalidated(
            self.id.clone(),
            reason.into(),
            self.clock.now(),
        );
        self.record(event);
        Ok(())
    }

    /// Operator override of the lane order. Same validation as
    /// [`Startlist::assign_lane_order_and_intervals`].
    pub fn manually_reassign_lane_order(
        &mut self,
        assignments: Vec<LaneAssignment>,
        reason: Option<String>,
    ) -> DomainResult<()> {
        self.ensure_not_finalized()?;
        self.validate_lane_assignments(&assignments)?;

        self.lane_assignments = assignments.clone();
        self.status = self.progress_status();
        let event = StartlistEvent::lane_order_manually_reassigned(
            self.id.clone(),
            assignments,
            reason,
            self.clock.now(),
        );
        self.record(event);
        Ok(())
    }

    /// Operator override of the class start order.
    pub fn manually_finalize_class_start_order(
        &mut self,
        assignments: Vec<ClassAssignment>,
        reason: Option<String>,
    ) -> DomainResult<()> {
        self.ensure_not_finalized()?;
        self.validate_class_assignments(&assignments)?;

        self.class_assignments = assignments.clone();
        self.status = self.progress_status();
        let event = StartlistEvent::class_start_order_manually_finalized(
            self.id.clone(),
            assignments,
            reason,
            self.clock.now(),
        );
        self.record(event);
        Ok(())
    }

    /// Return and clear the pending events.
    pub fn pull_domain_events(&mut self) -> Vec<StartlistEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // ========================================================================
    // VALIDATION METHODS
    // ========================================================================

    fn ensure_not_finalized(&self) -> DomainResult<()> {
        crate::invariant!(!self.status.is_finalized(), DomainError::AlreadyFinalized);
        Ok(())
    }

    fn ensure_lanes_fit(&self, lane_count: u32) -> DomainResult<()> {
        let used = self
            .lane_assignments
            .iter()
            .map(LaneAssignment::lane_number)
            .chain(self.start_times.iter().map(StartTime::lane_number));
        ensure_lane_numbers_within(used, lane_count)
    }

    fn validate_lane_assignments(&self, assignments: &[LaneAssignment]) -> DomainResult<()> {
        let settings = self.settings.as_ref().ok_or(DomainError::SettingsNotEntered)?;
        crate::invariant!(
            !assignments.is_empty(),
            DomainError::invariant(AT_LEAST_ONE_LANE_ASSIGNMENT)
        );

        ensure_lane_numbers_within(
            assignments.iter().map(LaneAssignment::lane_number),
            settings.lane_count(),
        )?;
        if let Some(lane) = assignments
            .iter()
            .map(LaneAssignment::lane_number)
            .duplicates()
            .next()
        {
            return Err(DomainError::invariant(format!(
                "Lane {lane} is assigned more than once."
            )));
        }

        let mut placed: HashSet<&ClassId> = HashSet::new();
        for class_id in assignments.iter().flat_map(LaneAssignment::class_order) {
            crate::invariant!(
                placed.insert(class_id),
                DomainError::invariant(format!(
                    "Class {class_id} is assigned to more than one lane."
                ))
            );
        }
        Ok(())
    }

    fn validate_class_assignments(&self, assignments: &[ClassAssignment]) -> DomainResult<()> {
        if let Some(class_id) = assignments
            .iter()
            .map(ClassAssignment::class_id)
            .duplicates()
            .next()
        {
            return Err(DomainError::invariant(format!(
                "Class {class_id} has more than one player order."
            )));
        }

        let players: HashSet<&PlayerId> = assignments
            .iter()
            .flat_map(ClassAssignment::player_order)
            .collect();
        if let Some(orphan) = self
            .start_times
            .iter()
            .map(StartTime::player_id)
            .find(|player| !players.contains(player))
        {
            return Err(DomainError::invariant(format!(
                "Player {orphan} has a start time but is missing from the class assignments."
            )));
        }
        Ok(())
    }

    // ========================================================================
    // INTERNALS
    // ========================================================================

    /// Furthest status the current state supports, short of finalization.
    fn progress_status(&self) -> StartlistStatus {
        if !self.start_times.is_empty() {
            StartlistStatus::StartTimesAssigned
        } else if !self.class_assignments.is_empty() {
            StartlistStatus::ClassOrderAssigned
        } else if !self.lane_assignments.is_empty() {
            StartlistStatus::LaneOrderAssigned
        } else if self.settings.is_some() {
            StartlistStatus::SettingsEntered
        } else {
            StartlistStatus::Draft
        }
    }

    fn record(&mut self, event: StartlistEvent) {
        self.pending_events.push(event);
    }
}

fn ensure_lane_numbers_within(
    lane_numbers: impl IntoIterator<Item = u32>,
    lane_count: u32,
) -> DomainResult<()> {
    match lane_numbers.into_iter().find(|&lane| lane > lane_count) {
        Some(lane) => Err(DomainError::invariant(format!(
            "Lane number {lane} exceeds the configured lane count of {lane_count}."
        ))),
        None => Ok(()),
    }
}
