//! Domain error taxonomy.
//!
//! Every aggregate and value-object invariant violation surfaces as a
//! [`DomainError`]. The dedicated variants exist so callers can match on the
//! conditions they treat specially (the process manager tolerates
//! [`DomainError::NoStartTimesAssigned`], for instance); everything else is a
//! generic [`DomainError::Invariant`] carrying its exact message.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use thiserror::Error;

use crate::domain::identifiers::IdentifierError;

/// Errors raised by the startlist domain layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Duration was negative or not finite
    #[error("Duration must be a non-negative finite number of milliseconds (got {0}).")]
    InvalidDuration(String),

    /// An identifier failed validation
    #[error("{0}")]
    InvalidIdentifier(#[from] IdentifierError),

    /// Settings are required but have not been entered yet
    #[error("Startlist settings must be entered before this operation.")]
    SettingsNotEntered,

    /// Start times cannot be assigned before class assignments exist
    #[error("Class assignments must be completed before assigning start times.")]
    ClassAssignmentsNotCompleted,

    /// There are no start times to invalidate
    #[error("No start times have been assigned to invalidate.")]
    NoStartTimesAssigned,

    /// The startlist is frozen
    #[error("Startlist has already been finalized.")]
    AlreadyFinalized,

    /// Generic invariant violation with its exact message
    #[error("{0}")]
    Invariant(String),
}

impl DomainError {
    /// Create a generic invariant violation.
    #[must_use]
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::Invariant(message.into())
    }

    /// Whether this is the benign "nothing to invalidate" condition.
    #[must_use]
    pub const fn is_no_start_times_assigned(&self) -> bool {
        matches!(self, Self::NoStartTimesAssigned)
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
