//! Assembly of the in-memory startlist stack.
//!
//! The event bus, process manager and invalidation use case reference each
//! other: the bus delivers to the process manager, which publishes through
//! the bus again. The cycle lives as long as the system.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use std::sync::Arc;

use crate::application::dispatch::StartlistApplication;
use crate::application::process_manager::StartlistProcessManager;
use crate::application::service::StartlistCommandContext;
use crate::config::StartlistConfig;
use crate::domain::clock::DomainClock;
use crate::domain::factory::StartlistFactory;
use crate::infrastructure::{
    ImmediateTransactionManager, InMemoryEventBus, InMemoryStartlistRepository,
    StartlistVersionHistory,
};

/// Fully wired in-memory system.
#[derive(Debug, Clone)]
pub struct InMemoryStartlistSystem {
    pub application: StartlistApplication,
    pub repository: Arc<InMemoryStartlistRepository>,
    pub event_bus: Arc<InMemoryEventBus>,
    pub transactions: Arc<ImmediateTransactionManager>,
    pub versions: Arc<StartlistVersionHistory>,
}

impl InMemoryStartlistSystem {
    /// Wire repository, transactions, bus, process manager and version history.
    ///
    /// # Errors
    ///
    /// Fails if a subscriber cannot be registered.
    pub fn build(config: &StartlistConfig, clock: Arc<dyn DomainClock>) -> anyhow::Result<Self> {
        let factory = StartlistFactory::new(clock);
        let repository = Arc::new(InMemoryStartlistRepository::new(factory.clone()));
        let transactions = Arc::new(ImmediateTransactionManager::new());
        let event_bus = Arc::new(InMemoryEventBus::new(
            config.event_bus.subscriber_failure,
        ));
        let versions = Arc::new(StartlistVersionHistory::new());

        let context = StartlistCommandContext::new(
            repository.clone(),
            transactions.clone(),
            event_bus.clone(),
            factory,
        );
        let application = StartlistApplication::new(&context);

        event_bus.subscribe(Arc::new(StartlistProcessManager::new(
            application.invalidate_start_times(),
        )))?;
        event_bus.subscribe(versions.clone())?;

        Ok(Self {
            application,
            repository,
            event_bus,
            transactions,
            versions,
        })
    }
}
