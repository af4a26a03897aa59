//! Shared fixtures for startlist integration tests.

#![allow(dead_code)]
#![allow(clippy::expect_used)]

use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};
use startlist_core::application::commands::{
    AssignLaneOrderCommand, AssignPlayerOrderCommand, AssignStartTimesCommand,
    EnterStartlistSettingsCommand, FinalizeStartlistCommand,
};
use startlist_core::application::ports::EventSubscriber;
use startlist_core::domain::{
    ClassAssignment, ClassId, Duration, EventId, FixedClock, LaneAssignment, PlayerId, StartTime,
    StartlistEvent, StartlistEventKind, StartlistId, StartlistSettings,
};
use startlist_core::{InMemoryStartlistSystem, StartlistCommand, StartlistConfig};

pub fn at(hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, hour, minute, second)
        .single()
        .expect("valid timestamp")
}

pub fn startlist_id() -> StartlistId {
    StartlistId::parse("sl-1").expect("valid id")
}

pub fn class_id(raw: &str) -> ClassId {
    ClassId::parse(raw).expect("valid id")
}

pub fn player_id(raw: &str) -> PlayerId {
    PlayerId::parse(raw).expect("valid id")
}

pub fn settings() -> StartlistSettings {
    StartlistSettings::new(
        EventId::parse("e1").expect("valid id"),
        at(10, 0, 0),
        Duration::from_millis(60_000),
        Duration::from_millis(45_000),
        2,
    )
    .expect("valid settings")
}

pub fn lane(number: u32, classes: &[&str]) -> LaneAssignment {
    LaneAssignment::new(
        number,
        classes.iter().map(|raw| class_id(raw)).collect(),
        Duration::from_millis(60_000),
        2,
    )
    .expect("valid lane")
}

pub fn class(raw: &str, players: &[&str]) -> ClassAssignment {
    ClassAssignment::new(
        class_id(raw),
        players.iter().map(|raw| player_id(raw)).collect(),
        Duration::from_millis(45_000),
    )
    .expect("valid class")
}

pub fn start(player: &str, second_offset: u32, lane_number: u32) -> StartTime {
    StartTime::new(
        player_id(player),
        at(10, second_offset / 60, second_offset % 60),
        lane_number,
    )
    .expect("valid start")
}

/// System wired with a fixed clock and default config.
pub fn system() -> InMemoryStartlistSystem {
    system_with(&StartlistConfig::default())
}

pub fn system_with(config: &StartlistConfig) -> InMemoryStartlistSystem {
    InMemoryStartlistSystem::build(config, Arc::new(FixedClock::new(at(9, 0, 0))))
        .expect("system wired")
}

/// The enter-settings → lanes → classes → start times sequence for M21 (p1, p2).
pub fn scheduling_commands() -> Vec<StartlistCommand> {
    vec![
        StartlistCommand::EnterSettings(EnterStartlistSettingsCommand {
            startlist_id: startlist_id(),
            settings: settings(),
        }),
        StartlistCommand::AssignLaneOrder(AssignLaneOrderCommand {
            startlist_id: startlist_id(),
            lane_assignments: vec![lane(1, &["M21"])],
        }),
        StartlistCommand::AssignPlayerOrder(AssignPlayerOrderCommand {
            startlist_id: startlist_id(),
            class_assignments: vec![class("M21", &["p1", "p2"])],
        }),
        StartlistCommand::AssignStartTimes(AssignStartTimesCommand {
            startlist_id: startlist_id(),
            start_times: vec![start("p1", 0, 1), start("p2", 45, 1)],
        }),
    ]
}

pub fn finalize_command() -> StartlistCommand {
    StartlistCommand::Finalize(FinalizeStartlistCommand {
        startlist_id: startlist_id(),
    })
}

pub async fn run_all(system: &InMemoryStartlistSystem, commands: Vec<StartlistCommand>) {
    for command in commands {
        system
            .application
            .dispatch(command)
            .await
            .expect("command succeeds");
    }
}

/// Subscriber recording every event it sees.
#[derive(Default)]
pub struct RecordingSubscriber {
    events: Mutex<Vec<StartlistEvent>>,
}

impl RecordingSubscriber {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<StartlistEvent> {
        self.events.lock().expect("lock healthy").clone()
    }

    pub fn kinds(&self) -> Vec<StartlistEventKind> {
        self.events().iter().map(StartlistEvent::kind).collect()
    }
}

#[async_trait::async_trait]
impl EventSubscriber for RecordingSubscriber {
    fn name(&self) -> &str {
        "recording_subscriber"
    }

    async fn handle(&self, event: &StartlistEvent) -> anyhow::Result<()> {
        self.events.lock().expect("lock healthy").push(event.clone());
        Ok(())
    }
}
