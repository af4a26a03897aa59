//! In-memory startlist repository.
//!
//! Snapshots are stored as JSON text keyed by startlist id, so every load
//! yields a freshly reconstituted aggregate that shares nothing with the
//! saved one.
//!
//! Not safe for concurrent mutation of the same startlist: two commands
//! interleaving on one id race on load and save, and the later save wins.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::domain::aggregates::Startlist;
use crate::domain::factory::StartlistFactory;
use crate::domain::identifiers::StartlistId;
use crate::domain::repository::{RepositoryError, RepositoryResult, StartlistRepository};
use crate::domain::snapshot::StartlistSnapshot;

#[derive(Debug, Clone)]
pub struct InMemoryStartlistRepository {
    records: Arc<Mutex<HashMap<StartlistId, String>>>,
    factory: StartlistFactory,
}

impl InMemoryStartlistRepository {
    #[must_use]
    pub fn new(factory: StartlistFactory) -> Self {
        Self {
            records: Arc::new(Mutex::new(HashMap::new())),
            factory,
        }
    }

    /// Number of stored startlists.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the lock is poisoned.
    pub fn len(&self) -> RepositoryResult<usize> {
        self.records
            .lock()
            .map(|records| records.len())
            .map_err(|e| RepositoryError::storage(format!("Lock poisoned: {e}")))
    }

    /// # Errors
    ///
    /// Returns `Storage` if the lock is poisoned.
    pub fn is_empty(&self) -> RepositoryResult<bool> {
        self.len().map(|len| len == 0)
    }
}

#[async_trait::async_trait]
impl StartlistRepository for InMemoryStartlistRepository {
    async fn find_by_id(&self, id: &StartlistId) -> RepositoryResult<Option<Startlist>> {
        let record = self
            .records
            .lock()
            .map_err(|e| RepositoryError::storage(format!("Lock poisoned: {e}")))?
            .get(id)
            .cloned();

        record
            .map(|json| {
                serde_json::from_str::<StartlistSnapshot>(&json)
                    .map(|snapshot| self.factory.reconstitute(snapshot))
                    .map_err(|e| RepositoryError::serialization(e.to_string()))
            })
            .transpose()
    }

    async fn save(&self, startlist: &Startlist) -> RepositoryResult<()> {
        let json = serde_json::to_string(&startlist.to_snapshot())
            .map_err(|e| RepositoryError::serialization(e.to_string()))?;
        self.records
            .lock()
            .map_err(|e| RepositoryError::storage(format!("Lock poisoned: {e}")))?
            .insert(startlist.id().clone(), json);
        debug!(startlist_id = %startlist.id(), status = %startlist.status(), "Saved startlist");
        Ok(())
    }
}
