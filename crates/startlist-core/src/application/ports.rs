//! Outbound ports of the application layer.
//!
//! All ports are `Send + Sync` async traits consumed as `Arc<dyn ...>`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use std::future::Future;

use tracing::warn;

use crate::application::error::{ApplicationResult, StartlistApplicationError};
use crate::domain::events::StartlistEvent;
use crate::domain::repository::RepositoryResult;

// ============================================================================
// EVENT PUBLICATION
// ============================================================================

/// Delivers committed domain events to interested parties.
#[async_trait::async_trait]
pub trait ApplicationEventPublisher: Send + Sync {
    /// Deliver `events` in order.
    ///
    /// # Errors
    ///
    /// Returns a subscriber failure when the publisher propagates them.
    async fn publish(&self, events: Vec<StartlistEvent>) -> anyhow::Result<()>;
}

/// Receiver of published events.
#[async_trait::async_trait]
pub trait EventSubscriber: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// # Errors
    ///
    /// Any failure raised while reacting to the event.
    async fn handle(&self, event: &StartlistEvent) -> anyhow::Result<()>;
}

// ============================================================================
// TRANSACTIONS
// ============================================================================

/// Logical unit-of-work boundary around load, mutate and save.
#[async_trait::async_trait]
pub trait TransactionManager: Send + Sync {
    /// # Errors
    ///
    /// Returns `Storage` if a transaction cannot be opened.
    async fn begin(&self) -> RepositoryResult<()>;

    /// # Errors
    ///
    /// Returns `Storage` if the work cannot be made durable.
    async fn commit(&self) -> RepositoryResult<()>;

    /// # Errors
    ///
    /// Returns `Storage` if the rollback itself fails.
    async fn rollback(&self) -> RepositoryResult<()>;
}

/// Run `work` inside a transaction: commit when it succeeds, roll back when
/// it fails.
///
/// A failed rollback is logged; the error from `work` is what the caller sees.
///
/// # Errors
///
/// Returns the error from `work`, or `Persistence` if begin or commit fails.
pub async fn execute_in_transaction<T, F, Fut>(
    transactions: &dyn TransactionManager,
    work: F,
) -> ApplicationResult<T>
where
    F: FnOnce() -> Fut + Send,
    Fut: Future<Output = ApplicationResult<T>> + Send,
    T: Send,
{
    transactions
        .begin()
        .await
        .map_err(StartlistApplicationError::Persistence)?;

    match work().await {
        Ok(value) => {
            transactions
                .commit()
                .await
                .map_err(StartlistApplicationError::Persistence)?;
            Ok(value)
        }
        Err(error) => {
            if let Err(rollback_error) = transactions.rollback().await {
                warn!(error = %rollback_error, "Transaction rollback failed");
            }
            Err(error)
        }
    }
}
