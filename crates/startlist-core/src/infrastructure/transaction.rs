//! Logical transaction manager for the in-memory adapters.
//!
//! Work executes immediately and there is nothing to undo: atomicity comes
//! from the command flow saving only after the mutation fully succeeds. The
//! manager counts its calls so the boundary stays observable.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::application::ports::TransactionManager;
use crate::domain::repository::RepositoryResult;

/// Begin/commit/rollback counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionStats {
    pub begun: u64,
    pub committed: u64,
    pub rolled_back: u64,
}

#[derive(Debug, Default)]
pub struct ImmediateTransactionManager {
    begun: AtomicU64,
    committed: AtomicU64,
    rolled_back: AtomicU64,
}

impl ImmediateTransactionManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn stats(&self) -> TransactionStats {
        TransactionStats {
            begun: self.begun.load(Ordering::SeqCst),
            committed: self.committed.load(Ordering::SeqCst),
            rolled_back: self.rolled_back.load(Ordering::SeqCst),
        }
    }
}

#[async_trait::async_trait]
impl TransactionManager for ImmediateTransactionManager {
    async fn begin(&self) -> RepositoryResult<()> {
        self.begun.fetch_add(1, Ordering::SeqCst);
        debug!("Transaction begun");
        Ok(())
    }

    async fn commit(&self) -> RepositoryResult<()> {
        self.committed.fetch_add(1, Ordering::SeqCst);
        debug!("Transaction committed");
        Ok(())
    }

    async fn rollback(&self) -> RepositoryResult<()> {
        self.rolled_back.fetch_add(1, Ordering::SeqCst);
        debug!("Transaction rolled back");
        Ok(())
    }
}
