//! Command payloads accepted by the use cases.
//!
//! Commands deserialize from JSON so scripts and transports can feed them
//! straight into [`crate::application::StartlistApplication::dispatch`].

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::domain::identifiers::StartlistId;
use crate::domain::value_objects::{ClassAssignment, LaneAssignment, StartTime, StartlistSettings};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnterStartlistSettingsCommand {
    pub startlist_id: StartlistId,
    pub settings: StartlistSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignLaneOrderCommand {
    pub startlist_id: StartlistId,
    pub lane_assignments: Vec<LaneAssignment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignPlayerOrderCommand {
    pub startlist_id: StartlistId,
    pub class_assignments: Vec<ClassAssignment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignStartTimesCommand {
    pub startlist_id: StartlistId,
    pub start_times: Vec<StartTime>,
}

/// Compute start times from the current lane and class order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleStartTimesCommand {
    pub startlist_id: StartlistId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalizeStartlistCommand {
    pub startlist_id: StartlistId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManuallyReassignLaneOrderCommand {
    pub startlist_id: StartlistId,
    pub lane_assignments: Vec<LaneAssignment>,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManuallyFinalizeClassOrderCommand {
    pub startlist_id: StartlistId,
    pub class_assignments: Vec<ClassAssignment>,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidateStartTimesCommand {
    pub startlist_id: StartlistId,
    pub reason: String,
}

/// Any startlist command, tagged by `command`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum StartlistCommand {
    EnterSettings(EnterStartlistSettingsCommand),
    AssignLaneOrder(AssignLaneOrderCommand),
    AssignPlayerOrder(AssignPlayerOrderCommand),
    AssignStartTimes(AssignStartTimesCommand),
    ScheduleStartTimes(ScheduleStartTimesCommand),
    Finalize(FinalizeStartlistCommand),
    ManuallyReassignLaneOrder(ManuallyReassignLaneOrderCommand),
    ManuallyFinalizeClassOrder(ManuallyFinalizeClassOrderCommand),
    InvalidateStartTimes(InvalidateStartTimesCommand),
}

impl StartlistCommand {
    #[must_use]
    pub const fn startlist_id(&self) -> &StartlistId {
        match self {
            Self::EnterSettings(command) => &command.startlist_id,
            Self::AssignLaneOrder(command) => &command.startlist_id,
            Self::AssignPlayerOrder(command) => &command.startlist_id,
            Self::AssignStartTimes(command) => &command.startlist_id,
            Self::ScheduleStartTimes(command) => &command.startlist_id,
            Self::Finalize(command) => &command.startlist_id,
            Self::ManuallyReassignLaneOrder(command) => &command.startlist_id,
            Self::ManuallyFinalizeClassOrder(command) => &command.startlist_id,
            Self::InvalidateStartTimes(command) => &command.startlist_id,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::EnterSettings(_) => "enter_settings",
            Self::AssignLaneOrder(_) => "assign_lane_order",
            Self::AssignPlayerOrder(_) => "assign_player_order",
            Self::AssignStartTimes(_) => "assign_start_times",
            Self::ScheduleStartTimes(_) => "schedule_start_times",
            Self::Finalize(_) => "finalize",
            Self::ManuallyReassignLaneOrder(_) => "manually_reassign_lane_order",
            Self::ManuallyFinalizeClassOrder(_) => "manually_finalize_class_order",
            Self::InvalidateStartTimes(_) => "invalidate_start_times",
        }
    }
}
