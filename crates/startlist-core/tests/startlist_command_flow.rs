//! End-to-end command flow over the in-memory stack.
//!
//! Covers load → mutate → save → publish, create-if-missing for settings,
//! not-found handling, atomic failure and version history.

#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod common;

use common::{
    class, finalize_command, lane, run_all, scheduling_commands, settings, start, startlist_id,
    system, RecordingSubscriber,
};
use startlist_core::application::commands::{
    AssignLaneOrderCommand, AssignStartTimesCommand, EnterStartlistSettingsCommand,
    InvalidateStartTimesCommand, ScheduleStartTimesCommand,
};
use startlist_core::domain::{DomainError, StartlistEventKind, StartlistRepository};
use startlist_core::{StartlistApplicationError, StartlistCommand, StartlistStatus};

#[tokio::test]
async fn scheduling_then_finalizing_freezes_two_start_times() {
    let system = system();
    run_all(&system, scheduling_commands()).await;

    let snapshot = system
        .application
        .dispatch(finalize_command())
        .await
        .expect("finalize succeeds");

    assert_eq!(snapshot.status, StartlistStatus::Finalized);
    assert_eq!(snapshot.start_times.len(), 2);
    let stored = system
        .application
        .get(&startlist_id())
        .await
        .expect("startlist stored");
    assert_eq!(stored, snapshot);
}

#[tokio::test]
async fn events_are_published_in_command_order() {
    let system = system();
    let recorder = RecordingSubscriber::new();
    system
        .event_bus
        .subscribe(recorder.clone())
        .expect("subscribed");

    let mut commands = scheduling_commands();
    commands.push(finalize_command());
    run_all(&system, commands).await;

    assert_eq!(
        recorder.kinds(),
        vec![
            StartlistEventKind::SettingsEntered,
            StartlistEventKind::LaneOrderAndIntervalsAssigned,
            StartlistEventKind::PlayerOrderAndIntervalsAssigned,
            StartlistEventKind::StartTimesAssigned,
            StartlistEventKind::StartlistFinalized,
            StartlistEventKind::StartlistVersionGenerated,
        ]
    );
}

#[tokio::test]
async fn enter_settings_creates_missing_startlist() {
    let system = system();

    let snapshot = system
        .application
        .dispatch(StartlistCommand::EnterSettings(EnterStartlistSettingsCommand {
            startlist_id: startlist_id(),
            settings: settings(),
        }))
        .await
        .expect("settings entered");

    assert_eq!(snapshot.status, StartlistStatus::SettingsEntered);
    assert_eq!(system.repository.len().expect("lock healthy"), 1);
}

#[tokio::test]
async fn other_commands_require_existing_startlist() {
    let system = system();

    let error = system
        .application
        .dispatch(StartlistCommand::AssignLaneOrder(AssignLaneOrderCommand {
            startlist_id: startlist_id(),
            lane_assignments: vec![lane(1, &["M21"])],
        }))
        .await
        .expect_err("startlist missing");

    assert!(matches!(error, StartlistApplicationError::NotFound(ref id) if *id == startlist_id()));
    assert_eq!(error.http_status(), 404);
    assert!(system.repository.is_empty().expect("lock healthy"));
}

#[tokio::test]
async fn query_reports_missing_startlist() {
    let error = system()
        .application
        .get(&startlist_id())
        .await
        .expect_err("startlist missing");

    assert!(error.is_not_found());
}

#[tokio::test]
async fn finalize_without_start_times_is_rejected() {
    let system = system();
    let mut commands = scheduling_commands();
    commands.truncate(3);
    run_all(&system, commands).await;

    let error = system
        .application
        .dispatch(finalize_command())
        .await
        .expect_err("finalize rejected");

    assert_eq!(
        error.to_string(),
        "Startlist can only be finalized after assigning start times."
    );
    assert_eq!(error.http_status(), 400);
}

#[tokio::test]
async fn rejected_command_persists_nothing_and_rolls_back() {
    let system = system();
    run_all(&system, scheduling_commands()).await;
    let before = system
        .application
        .get(&startlist_id())
        .await
        .expect("startlist stored");
    let recorder = RecordingSubscriber::new();
    system
        .event_bus
        .subscribe(recorder.clone())
        .expect("subscribed");

    let error = system
        .application
        .dispatch(StartlistCommand::AssignStartTimes(AssignStartTimesCommand {
            startlist_id: startlist_id(),
            start_times: vec![start("p1", 0, 1), start("p1", 45, 1)],
        }))
        .await
        .expect_err("duplicate player rejected");

    assert!(matches!(
        error,
        StartlistApplicationError::InvalidCommand(DomainError::Invariant(ref message))
            if message == "Start times must be unique per player."
    ));
    let after = system
        .application
        .get(&startlist_id())
        .await
        .expect("startlist stored");
    assert_eq!(after, before);
    assert!(recorder.events().is_empty());
    assert_eq!(system.transactions.stats().rolled_back, 1);
}

#[tokio::test]
async fn loaded_aggregates_carry_no_pending_events() {
    let system = system();
    run_all(&system, scheduling_commands()).await;

    let loaded = system
        .repository
        .find_by_id(&startlist_id())
        .await
        .expect("lookup succeeds")
        .expect("startlist stored");

    assert!(loaded.pending_events().is_empty());
}

#[tokio::test]
async fn explicit_invalidation_without_start_times_reports_dedicated_error() {
    let system = system();
    let mut commands = scheduling_commands();
    commands.truncate(3);
    run_all(&system, commands).await;

    let error = system
        .application
        .dispatch(StartlistCommand::InvalidateStartTimes(
            InvalidateStartTimesCommand {
                startlist_id: startlist_id(),
                reason: "operator request".to_string(),
            },
        ))
        .await
        .expect_err("nothing to invalidate");

    assert!(error.is_no_start_times_assigned());
}

#[tokio::test]
async fn schedule_computes_and_assigns_start_times() {
    let system = system();
    let mut commands = scheduling_commands();
    commands.truncate(3);
    run_all(&system, commands).await;

    let snapshot = system
        .application
        .dispatch(StartlistCommand::ScheduleStartTimes(ScheduleStartTimesCommand {
            startlist_id: startlist_id(),
        }))
        .await
        .expect("schedule succeeds");

    assert_eq!(snapshot.status, StartlistStatus::StartTimesAssigned);
    assert_eq!(
        snapshot.start_times,
        vec![start("p1", 0, 1), start("p2", 45, 1)]
    );
}

#[tokio::test]
async fn finalized_startlist_rejects_further_commands() {
    let system = system();
    let mut commands = scheduling_commands();
    commands.push(finalize_command());
    run_all(&system, commands).await;

    let error = system
        .application
        .dispatch(StartlistCommand::ScheduleStartTimes(ScheduleStartTimesCommand {
            startlist_id: startlist_id(),
        }))
        .await
        .expect_err("finalized startlist is frozen");

    assert!(matches!(
        error,
        StartlistApplicationError::InvalidCommand(DomainError::AlreadyFinalized)
    ));
}

#[tokio::test]
async fn finalization_records_numbered_version() {
    let system = system();
    let mut commands = scheduling_commands();
    commands.push(finalize_command());
    run_all(&system, commands).await;

    let versions = system
        .versions
        .versions(&startlist_id())
        .expect("lock healthy");

    assert_eq!(versions.len(), 1);
    assert_eq!(versions[0].version, 1);
    assert_eq!(versions[0].snapshot.status, StartlistStatus::Finalized);
}

#[tokio::test]
async fn class_assignments_are_kept_when_classes_change_lanes() {
    let system = system();
    run_all(&system, scheduling_commands()).await;

    let snapshot = system
        .application
        .dispatch(StartlistCommand::AssignLaneOrder(AssignLaneOrderCommand {
            startlist_id: startlist_id(),
            lane_assignments: vec![lane(2, &["M21"])],
        }))
        .await
        .expect("lanes replaced");

    assert_eq!(snapshot.class_assignments, vec![class("M21", &["p1", "p2"])]);
    assert_eq!(snapshot.status, StartlistStatus::StartTimesAssigned);
}
