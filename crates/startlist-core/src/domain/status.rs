//! Startlist lifecycle status.

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Progress of a startlist through scheduling.
///
/// `Draft` → `SettingsEntered` → `LaneOrderAssigned` → `ClassOrderAssigned`
/// → `StartTimesAssigned` → `Finalized`. Invalidating start times steps back
/// to the lane/class-assigned region; only `Finalized` is terminal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum StartlistStatus {
    #[default]
    Draft,
    SettingsEntered,
    LaneOrderAssigned,
    ClassOrderAssigned,
    StartTimesAssigned,
    Finalized,
}

impl StartlistStatus {
    #[must_use]
    pub const fn is_finalized(self) -> bool {
        matches!(self, Self::Finalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_display_matches_wire_name() {
        assert_eq!(StartlistStatus::LaneOrderAssigned.to_string(), "LANE_ORDER_ASSIGNED");
    }

    #[test]
    fn test_parse_from_wire_name() {
        assert_eq!(
            StartlistStatus::from_str("START_TIMES_ASSIGNED"),
            Ok(StartlistStatus::StartTimesAssigned)
        );
        assert!(StartlistStatus::from_str("CREATED_MAYBE").is_err());
    }

    #[test]
    fn test_only_finalized_is_terminal() {
        assert!(StartlistStatus::Finalized.is_finalized());
        assert!(!StartlistStatus::StartTimesAssigned.is_finalized());
    }
}
