//! Built-in sample scenario

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use startlist_core::application::commands::{
    AssignLaneOrderCommand, AssignPlayerOrderCommand, AssignStartTimesCommand,
    EnterStartlistSettingsCommand, FinalizeStartlistCommand,
};
use startlist_core::domain::{
    ClassAssignment, ClassId, Duration, EventId, LaneAssignment, PlayerId, StartTime,
    StartlistSettings,
};
use startlist_core::{StartlistCommand, StartlistId};

fn instant(raw: &str) -> Result<DateTime<Utc>> {
    raw.parse::<DateTime<Utc>>()
        .with_context(|| format!("Invalid demo timestamp {raw}"))
}

/// One class of two players on one lane, scheduled and finalized.
///
/// # Errors
/// Returns an error only if the fixed demo data fails validation.
pub fn demo_commands() -> Result<Vec<StartlistCommand>> {
    let startlist_id = StartlistId::parse("demo")?;
    let m21 = ClassId::parse("M21")?;
    let p1 = PlayerId::parse("p1")?;
    let p2 = PlayerId::parse("p2")?;

    let settings = StartlistSettings::new(
        EventId::parse("e1")?,
        instant("2024-01-01T10:00:00Z")?,
        Duration::from_millis(60_000),
        Duration::from_millis(45_000),
        2,
    )?;
    let lane = LaneAssignment::new(1, vec![m21.clone()], Duration::from_millis(60_000), 2)?;
    let class = ClassAssignment::new(
        m21,
        vec![p1.clone(), p2.clone()],
        Duration::from_millis(45_000),
    )?;
    let start_times = vec![
        StartTime::new(p1, instant("2024-01-01T10:00:00Z")?, 1)?,
        StartTime::new(p2, instant("2024-01-01T10:00:45Z")?, 1)?,
    ];

    Ok(vec![
        StartlistCommand::EnterSettings(EnterStartlistSettingsCommand {
            startlist_id: startlist_id.clone(),
            settings,
        }),
        StartlistCommand::AssignLaneOrder(AssignLaneOrderCommand {
            startlist_id: startlist_id.clone(),
            lane_assignments: vec![lane],
        }),
        StartlistCommand::AssignPlayerOrder(AssignPlayerOrderCommand {
            startlist_id: startlist_id.clone(),
            class_assignments: vec![class],
        }),
        StartlistCommand::AssignStartTimes(AssignStartTimesCommand {
            startlist_id: startlist_id.clone(),
            start_times,
        }),
        StartlistCommand::Finalize(FinalizeStartlistCommand { startlist_id }),
    ])
}
