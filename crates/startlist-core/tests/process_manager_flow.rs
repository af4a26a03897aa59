//! Automatic start-time invalidation after manual overrides.

#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use common::{
    at, class, lane, run_all, scheduling_commands, startlist_id, system, RecordingSubscriber,
};
use startlist_core::application::commands::{
    ManuallyFinalizeClassOrderCommand, ManuallyReassignLaneOrderCommand,
};
use startlist_core::application::process_manager::{
    CLASS_ORDER_FINALIZED_REASON, LANE_ORDER_REASSIGNED_REASON,
};
use startlist_core::application::StartlistCommandContext;
use startlist_core::domain::{
    FixedClock, RepositoryError, RepositoryResult, Startlist, StartlistEvent, StartlistEventKind,
    StartlistFactory, StartlistId, StartlistRepository,
};
use startlist_core::infrastructure::{
    ImmediateTransactionManager, InMemoryEventBus, InMemoryStartlistRepository,
    SubscriberFailurePolicy,
};
use startlist_core::{
    StartlistApplication, StartlistApplicationError, StartlistCommand, StartlistProcessManager,
    StartlistStatus,
};

fn reassign_lanes() -> StartlistCommand {
    StartlistCommand::ManuallyReassignLaneOrder(ManuallyReassignLaneOrderCommand {
        startlist_id: startlist_id(),
        lane_assignments: vec![lane(2, &["M21"])],
        reason: Some("lane 1 flooded".to_string()),
    })
}

fn reorder_class() -> StartlistCommand {
    StartlistCommand::ManuallyFinalizeClassOrder(ManuallyFinalizeClassOrderCommand {
        startlist_id: startlist_id(),
        class_assignments: vec![class("M21", &["p2", "p1"])],
        reason: None,
    })
}

fn invalidation_reasons(recorder: &RecordingSubscriber) -> Vec<String> {
    recorder
        .events()
        .into_iter()
        .filter_map(|event| match event {
            StartlistEvent::StartTimesInvalidated(payload) => Some(payload.reason),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn manual_lane_reassignment_invalidates_start_times() {
    let system = system();
    run_all(&system, scheduling_commands()).await;
    let recorder = RecordingSubscriber::new();
    system
        .event_bus
        .subscribe(recorder.clone())
        .expect("subscribed");

    let returned = system
        .application
        .dispatch(reassign_lanes())
        .await
        .expect("manual override succeeds");

    let stored = system
        .application
        .get(&startlist_id())
        .await
        .expect("startlist stored");
    assert!(stored.start_times.is_empty());
    assert_eq!(stored.status, StartlistStatus::ClassOrderAssigned);
    assert_eq!(stored.lane_assignments, vec![lane(2, &["M21"])]);
    assert_eq!(returned, stored);
    assert_eq!(
        invalidation_reasons(&recorder),
        vec![LANE_ORDER_REASSIGNED_REASON.to_string()]
    );
}

#[tokio::test]
async fn manual_class_order_invalidates_start_times() {
    let system = system();
    run_all(&system, scheduling_commands()).await;
    let recorder = RecordingSubscriber::new();
    system
        .event_bus
        .subscribe(recorder.clone())
        .expect("subscribed");

    let returned = system
        .application
        .dispatch(reorder_class())
        .await
        .expect("manual override succeeds");

    let stored = system
        .application
        .get(&startlist_id())
        .await
        .expect("startlist stored");
    assert!(stored.start_times.is_empty());
    assert!(returned.start_times.is_empty());
    assert_eq!(returned.status, StartlistStatus::ClassOrderAssigned);
    assert_eq!(
        invalidation_reasons(&recorder),
        vec![CLASS_ORDER_FINALIZED_REASON.to_string()]
    );
}

#[tokio::test]
async fn manual_override_without_start_times_is_silent_noop() {
    let system = system();
    let mut commands = scheduling_commands();
    commands.truncate(3);
    run_all(&system, commands).await;
    let recorder = RecordingSubscriber::new();
    system
        .event_bus
        .subscribe(recorder.clone())
        .expect("subscribed");

    system
        .application
        .dispatch(reorder_class())
        .await
        .expect("swallowed nothing-to-invalidate");

    assert_eq!(
        recorder.kinds(),
        vec![StartlistEventKind::ClassStartOrderManuallyFinalized]
    );
}

/// Repository whose lookups start failing once `fail_after_saves` saves happened.
struct FlakyRepository {
    inner: InMemoryStartlistRepository,
    saves: AtomicUsize,
    fail_after_saves: usize,
}

#[async_trait::async_trait]
impl StartlistRepository for FlakyRepository {
    async fn find_by_id(&self, id: &StartlistId) -> RepositoryResult<Option<Startlist>> {
        if self.saves.load(Ordering::SeqCst) >= self.fail_after_saves {
            return Err(RepositoryError::storage("connection reset"));
        }
        self.inner.find_by_id(id).await
    }

    async fn save(&self, startlist: &Startlist) -> RepositoryResult<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save(startlist).await
    }
}

#[tokio::test]
async fn other_invalidation_failures_propagate_to_the_publisher() {
    let factory = StartlistFactory::new(Arc::new(FixedClock::new(at(9, 0, 0))));
    let repository = Arc::new(FlakyRepository {
        inner: InMemoryStartlistRepository::new(factory.clone()),
        saves: AtomicUsize::new(0),
        fail_after_saves: 5,
    });
    let bus = Arc::new(InMemoryEventBus::new(SubscriberFailurePolicy::Propagate));
    let context = StartlistCommandContext::new(
        repository,
        Arc::new(ImmediateTransactionManager::new()),
        bus.clone(),
        factory,
    );
    let application = StartlistApplication::new(&context);
    bus.subscribe(Arc::new(StartlistProcessManager::new(
        application.invalidate_start_times(),
    )))
    .expect("subscribed");
    for command in scheduling_commands() {
        application.dispatch(command).await.expect("command succeeds");
    }

    let error = application
        .dispatch(reassign_lanes())
        .await
        .expect_err("invalidation failure surfaces");

    assert!(matches!(
        error,
        StartlistApplicationError::Persistence(RepositoryError::Storage(_))
    ));
    assert_eq!(error.http_status(), 503);
}

#[tokio::test]
async fn finalized_version_is_untouched_by_later_overrides() {
    let system = system();
    let mut commands = scheduling_commands();
    commands.push(common::finalize_command());
    run_all(&system, commands).await;

    let error = system
        .application
        .dispatch(reassign_lanes())
        .await
        .expect_err("finalized startlist is frozen");

    assert_eq!(error.http_status(), 400);
    let stored = system
        .application
        .get(&startlist_id())
        .await
        .expect("startlist stored");
    assert_eq!(stored.start_times.len(), 2);
    assert_eq!(stored.status, StartlistStatus::Finalized);
    assert!(at(10, 0, 0) <= stored.start_times[0].start_time());
}
