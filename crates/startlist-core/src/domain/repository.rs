//! Persistence port for the startlist aggregate.
//!
//! The trait lives in the domain layer and speaks only in domain types;
//! adapters live under `crate::infrastructure`.
//!
//! # Error Conditions
//!
//! - `NotFound`: a load that requires the aggregate found nothing
//! - `Storage`: the backing store failed (lock poisoned, I/O, connectivity)
//! - `Serialization`: persisted state could not be encoded or decoded

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use crate::domain::aggregates::Startlist;
use crate::domain::identifiers::StartlistId;

// ============================================================================
// SHARED ERROR TYPES
// ============================================================================

/// Failures raised by repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("startlist not found: {0}")]
    NotFound(StartlistId),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl RepositoryError {
    #[must_use]
    pub fn storage(reason: impl Into<String>) -> Self {
        Self::Storage(reason.into())
    }

    #[must_use]
    pub fn serialization(reason: impl Into<String>) -> Self {
        Self::Serialization(reason.into())
    }
}

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

// ============================================================================
// STARTLIST REPOSITORY
// ============================================================================

/// Repository for the [`Startlist`] aggregate.
///
/// Loaded aggregates carry no pending events. Saving overwrites any previous
/// state stored under the same id.
#[async_trait::async_trait]
pub trait StartlistRepository: Send + Sync {
    /// Load a startlist, or `None` if it was never saved.
    ///
    /// # Errors
    ///
    /// Returns `Storage` or `Serialization` when the backing store fails.
    async fn find_by_id(&self, id: &StartlistId) -> RepositoryResult<Option<Startlist>>;

    /// Persist the current state of a startlist (create or update).
    ///
    /// # Errors
    ///
    /// Returns `Storage` or `Serialization` when the backing store fails.
    async fn save(&self, startlist: &Startlist) -> RepositoryResult<()>;
}
