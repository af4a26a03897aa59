//! Startlist domain events
//!
//! Events record what happened to a startlist aggregate. They are emitted by
//! aggregate operations, buffered on the aggregate, pulled by the command
//! service after persistence and handed to the event publisher.
//!
//! # Design Principles
//!
//! - **Tagged**: one enum, discriminated by `kind`; consumers `match`
//! - **Serializable**: JSON as `{"kind": "...", "data": {...}}`
//! - **Timestamped**: every payload carries `occurred_at` from the domain clock
//!
//! # Usage
//!
//! ```rust,ignore
//! match &event {
//!     StartlistEvent::LaneOrderManuallyReassigned(e) => invalidate(&e.startlist_id),
//!     StartlistEvent::ClassStartOrderManuallyFinalized(e) => invalidate(&e.startlist_id),
//!     _ => {}
//! }
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use crate::domain::identifiers::StartlistId;
use crate::domain::snapshot::StartlistSnapshot;
use crate::domain::value_objects::{ClassAssignment, LaneAssignment, StartTime, StartlistSettings};

// ============================================================================
// EVENT KIND
// ============================================================================

/// Discriminator for [`StartlistEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum StartlistEventKind {
    SettingsEntered,
    LaneOrderAndIntervalsAssigned,
    PlayerOrderAndIntervalsAssigned,
    StartTimesAssigned,
    StartTimesInvalidated,
    StartlistFinalized,
    StartlistVersionGenerated,
    LaneOrderManuallyReassigned,
    ClassStartOrderManuallyFinalized,
}

impl StartlistEventKind {
    /// Kinds produced by operator overrides; these invalidate computed start times.
    #[must_use]
    pub const fn is_manual_override(self) -> bool {
        matches!(
            self,
            Self::LaneOrderManuallyReassigned | Self::ClassStartOrderManuallyFinalized
        )
    }
}

// ============================================================================
// DOMAIN EVENT ENUM
// ============================================================================

/// Something that happened to a startlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum StartlistEvent {
    SettingsEntered(Box<StartlistSettingsEnteredEvent>),
    LaneOrderAndIntervalsAssigned(Box<LaneOrderAndIntervalsAssignedEvent>),
    PlayerOrderAndIntervalsAssigned(Box<PlayerOrderAndIntervalsAssignedEvent>),
    StartTimesAssigned(Box<StartTimesAssignedEvent>),
    StartTimesInvalidated(Box<StartTimesInvalidatedEvent>),
    StartlistFinalized(Box<StartlistFinalizedEvent>),
    StartlistVersionGenerated(Box<StartlistVersionGeneratedEvent>),
    LaneOrderManuallyReassigned(Box<LaneOrderManuallyReassignedEvent>),
    ClassStartOrderManuallyFinalized(Box<ClassStartOrderManuallyFinalizedEvent>),
}

impl StartlistEvent {
    #[must_use]
    pub const fn kind(&self) -> StartlistEventKind {
        match self {
            Self::SettingsEntered(_) => StartlistEventKind::SettingsEntered,
            Self::LaneOrderAndIntervalsAssigned(_) => {
                StartlistEventKind::LaneOrderAndIntervalsAssigned
            }
            Self::PlayerOrderAndIntervalsAssigned(_) => {
                StartlistEventKind::PlayerOrderAndIntervalsAssigned
            }
            Self::StartTimesAssigned(_) => StartlistEventKind::StartTimesAssigned,
            Self::StartTimesInvalidated(_) => StartlistEventKind::StartTimesInvalidated,
            Self::StartlistFinalized(_) => StartlistEventKind::StartlistFinalized,
            Self::StartlistVersionGenerated(_) => StartlistEventKind::StartlistVersionGenerated,
            Self::LaneOrderManuallyReassigned(_) => {
                StartlistEventKind::LaneOrderManuallyReassigned
            }
            Self::ClassStartOrderManuallyFinalized(_) => {
                StartlistEventKind::ClassStartOrderManuallyFinalized
            }
        }
    }

    /// The aggregate this event belongs to.
    #[must_use]
    pub const fn startlist_id(&self) -> &StartlistId {
        match self {
            Self::SettingsEntered(e) => &e.startlist_id,
            Self::LaneOrderAndIntervalsAssigned(e) => &e.startlist_id,
            Self::PlayerOrderAndIntervalsAssigned(e) => &e.startlist_id,
            Self::StartTimesAssigned(e) => &e.startlist_id,
            Self::StartTimesInvalidated(e) => &e.startlist_id,
            Self::StartlistFinalized(e) => &e.startlist_id,
            Self::StartlistVersionGenerated(e) => &e.startlist_id,
            Self::LaneOrderManuallyReassigned(e) => &e.startlist_id,
            Self::ClassStartOrderManuallyFinalized(e) => &e.startlist_id,
        }
    }

    #[must_use]
    pub const fn occurred_at(&self) -> &DateTime<Utc> {
        match self {
            Self::SettingsEntered(e) => &e.occurred_at,
            Self::LaneOrderAndIntervalsAssigned(e) => &e.occurred_at,
            Self::PlayerOrderAndIntervalsAssigned(e) => &e.occurred_at,
            Self::StartTimesAssigned(e) => &e.occurred_at,
            Self::StartTimesInvalidated(e) => &e.occurred_at,
            Self::StartlistFinalized(e) => &e.occurred_at,
            Self::StartlistVersionGenerated(e) => &e.occurred_at,
            Self::LaneOrderManuallyReassigned(e) => &e.occurred_at,
            Self::ClassStartOrderManuallyFinalized(e) => &e.occurred_at,
        }
    }

    // ------------------------------------------------------------------------
    // Constructors
    // ------------------------------------------------------------------------

    #[must_use]
    pub fn settings_entered(
        startlist_id: StartlistId,
        settings: StartlistSettings,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self::SettingsEntered(Box::new(StartlistSettingsEnteredEvent {
            startlist_id,
            settings,
            occurred_at,
        }))
    }

    #[must_use]
    pub fn lane_order_assigned(
        startlist_id: StartlistId,
        lane_assignments: Vec<LaneAssignment>,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self::LaneOrderAndIntervalsAssigned(Box::new(LaneOrderAndIntervalsAssignedEvent {
            startlist_id,
            lane_assignments,
            occurred_at,
        }))
    }

    #[must_use]
    pub fn player_order_assigned(
        startlist_id: StartlistId,
        class_assignments: Vec<ClassAssignment>,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self::PlayerOrderAndIntervalsAssigned(Box::new(PlayerOrderAndIntervalsAssignedEvent {
            startlist_id,
            class_assignments,
            occurred_at,
        }))
    }

    #[must_use]
    pub fn start_times_assigned(
        startlist_id: StartlistId,
        start_times: Vec<StartTime>,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self::StartTimesAssigned(Box::new(StartTimesAssignedEvent {
            startlist_id,
            start_times,
            occurred_at,
        }))
    }

    #[must_use]
    pub fn start_times_invalidated(
        startlist_id: StartlistId,
        reason: String,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self::StartTimesInvalidated(Box::new(StartTimesInvalidatedEvent {
            startlist_id,
            reason,
            occurred_at,
        }))
    }

    #[must_use]
    pub fn finalized(snapshot: StartlistSnapshot, occurred_at: DateTime<Utc>) -> Self {
        Self::StartlistFinalized(Box::new(StartlistFinalizedEvent {
            startlist_id: snapshot.id.clone(),
            snapshot,
            occurred_at,
        }))
    }

    #[must_use]
    pub fn version_generated(snapshot: StartlistSnapshot, occurred_at: DateTime<Utc>) -> Self {
        Self::StartlistVersionGenerated(Box::new(StartlistVersionGeneratedEvent {
            startlist_id: snapshot.id.clone(),
            snapshot,
            occurred_at,
        }))
    }

    #[must_use]
    pub fn lane_order_manually_reassigned(
        startlist_id: StartlistId,
        lane_assignments: Vec<LaneAssignment>,
        reason: Option<String>,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self::LaneOrderManuallyReassigned(Box::new(LaneOrderManuallyReassignedEvent {
            startlist_id,
            lane_assignments,
            reason,
            occurred_at,
        }))
    }

    #[must_use]
    pub fn class_start_order_manually_finalized(
        startlist_id: StartlistId,
        class_assignments: Vec<ClassAssignment>,
        reason: Option<String>,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self::ClassStartOrderManuallyFinalized(Box::new(ClassStartOrderManuallyFinalizedEvent {
            startlist_id,
            class_assignments,
            reason,
            occurred_at,
        }))
    }
}

// ============================================================================
// EVENT PAYLOADS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartlistSettingsEnteredEvent {
    pub startlist_id: StartlistId,
    pub settings: StartlistSettings,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneOrderAndIntervalsAssignedEvent {
    pub startlist_id: StartlistId,
    pub lane_assignments: Vec<LaneAssignment>,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerOrderAndIntervalsAssignedEvent {
    pub startlist_id: StartlistId,
    pub class_assignments: Vec<ClassAssignment>,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartTimesAssignedEvent {
    pub startlist_id: StartlistId,
    pub start_times: Vec<StartTime>,
    pub occurred_at: DateTime<Utc>,
}

/// Start times were cleared; `reason` is kept for audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartTimesInvalidatedEvent {
    pub startlist_id: StartlistId,
    pub reason: String,
    pub occurred_at: DateTime<Utc>,
}

/// The startlist was frozen. Carries an independent copy of its final state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartlistFinalizedEvent {
    pub startlist_id: StartlistId,
    pub snapshot: StartlistSnapshot,
    pub occurred_at: DateTime<Utc>,
}

/// A new published version of the startlist exists; drives history tracking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartlistVersionGeneratedEvent {
    pub startlist_id: StartlistId,
    pub snapshot: StartlistSnapshot,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneOrderManuallyReassignedEvent {
    pub startlist_id: StartlistId,
    pub lane_assignments: Vec<LaneAssignment>,
    pub reason: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassStartOrderManuallyFinalizedEvent {
    pub startlist_id: StartlistId,
    pub class_assignments: Vec<ClassAssignment>,
    pub reason: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

// ============================================================================
// SERIALIZATION HELPERS
// ============================================================================

/// Render an event as JSON.
///
/// # Errors
///
/// Returns `serde_json::Error` if serialization fails.
pub fn serialize_event(event: &StartlistEvent) -> Result<String, serde_json::Error> {
    serde_json::to_string(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn id() -> StartlistId {
        StartlistId::parse("sl-1").expect("valid id")
    }

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn test_kind_tag_matches_variant() -> Result<(), serde_json::Error> {
        let event = StartlistEvent::start_times_invalidated(id(), "manual".to_string(), at());
        let json = serialize_event(&event)?;
        assert!(json.contains("\"kind\":\"start_times_invalidated\""));
        assert_eq!(event.kind().to_string(), "start_times_invalidated");

        let back: StartlistEvent = serde_json::from_str(&json)?;
        assert_eq!(back, event);
        Ok(())
    }

    #[test]
    fn test_manual_override_kinds() {
        let manual = StartlistEvent::lane_order_manually_reassigned(id(), Vec::new(), None, at());
        assert!(manual.kind().is_manual_override());

        let system = StartlistEvent::lane_order_assigned(id(), Vec::new(), at());
        assert!(!system.kind().is_manual_override());
    }

    #[test]
    fn test_accessors_reach_payload() {
        let event = StartlistEvent::finalized(StartlistSnapshot::empty(id()), at());
        assert_eq!(event.startlist_id(), &id());
        assert_eq!(event.occurred_at(), &at());
    }
}
