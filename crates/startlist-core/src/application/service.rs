//! Shared load, mutate, save and publish flow behind every command.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::error::{
    to_application_error, ApplicationResult, StartlistApplicationError,
};
use crate::application::ports::{
    execute_in_transaction, ApplicationEventPublisher, TransactionManager,
};
use crate::domain::aggregates::Startlist;
use crate::domain::errors::DomainResult;
use crate::domain::factory::StartlistFactory;
use crate::domain::identifiers::StartlistId;
use crate::domain::repository::StartlistRepository;
use crate::domain::snapshot::StartlistSnapshot;

/// What to do when the target startlist has never been saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// Fail with `NotFound`.
    RequireExisting,
    /// Start from a fresh draft.
    CreateIfMissing,
}

/// Ports shared by all command use cases.
#[derive(Clone)]
pub struct StartlistCommandContext {
    repository: Arc<dyn StartlistRepository>,
    transactions: Arc<dyn TransactionManager>,
    publisher: Arc<dyn ApplicationEventPublisher>,
    factory: StartlistFactory,
}

impl StartlistCommandContext {
    #[must_use]
    pub fn new(
        repository: Arc<dyn StartlistRepository>,
        transactions: Arc<dyn TransactionManager>,
        publisher: Arc<dyn ApplicationEventPublisher>,
        factory: StartlistFactory,
    ) -> Self {
        Self {
            repository,
            transactions,
            publisher,
            factory,
        }
    }

    #[must_use]
    pub fn repository(&self) -> Arc<dyn StartlistRepository> {
        Arc::clone(&self.repository)
    }

    /// Apply `mutation` to one startlist as a single unit of work.
    ///
    /// Load, mutation and save run inside a transaction; a failure at any of
    /// these steps persists nothing. Events are pulled and published only
    /// after commit. The returned snapshot is read back from the repository
    /// once publication finishes, so it includes any follow-up changes made
    /// by subscribers.
    ///
    /// # Errors
    ///
    /// - `NotFound` when the startlist is missing under `RequireExisting`
    /// - `InvalidCommand` / `NoStartTimesAssigned` when the mutation is rejected
    /// - `Persistence` when storage or the transaction fails
    /// - whatever a subscriber raises during publication, normalized
    pub async fn execute<F>(
        &self,
        operation: &'static str,
        startlist_id: &StartlistId,
        mode: LoadMode,
        mutation: F,
    ) -> ApplicationResult<StartlistSnapshot>
    where
        F: FnOnce(&mut Startlist) -> DomainResult<()> + Send,
    {
        debug!(operation, startlist_id = %startlist_id, "Executing startlist command");

        let repository = Arc::clone(&self.repository);
        let factory = self.factory.clone();
        let id = startlist_id.clone();
        let mut startlist = execute_in_transaction(self.transactions.as_ref(), move || async move {
            let mut startlist = match (repository.find_by_id(&id).await?, mode) {
                (Some(existing), _) => existing,
                (None, LoadMode::CreateIfMissing) => factory.create(id),
                (None, LoadMode::RequireExisting) => {
                    return Err(StartlistApplicationError::NotFound(id));
                }
            };
            mutation(&mut startlist)?;
            repository.save(&startlist).await?;
            Ok(startlist)
        })
        .await?;

        let events = startlist.pull_domain_events();
        debug!(operation, count = events.len(), "Publishing startlist events");
        self.publisher
            .publish(events)
            .await
            .map_err(to_application_error)?;

        // Subscribers may have issued follow-up commands against this startlist.
        let current = self
            .repository
            .find_by_id(startlist_id)
            .await?
            .ok_or_else(|| StartlistApplicationError::NotFound(startlist_id.clone()))?;

        info!(
            operation,
            startlist_id = %startlist_id,
            status = %current.status(),
            "Startlist command completed"
        );
        Ok(current.to_snapshot())
    }
}

impl std::fmt::Debug for StartlistCommandContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StartlistCommandContext")
            .field("factory", &self.factory)
            .finish_non_exhaustive()
    }
}
