//! Application-level error taxonomy.
//!
//! Every failure leaving a command or query is a [`StartlistApplicationError`].
//! Callers outside the crate map it onto their transport with
//! [`StartlistApplicationError::http_status`].

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use thiserror::Error;

use crate::domain::errors::DomainError;
use crate::domain::identifiers::StartlistId;
use crate::domain::repository::RepositoryError;

pub type ApplicationResult<T> = Result<T, StartlistApplicationError>;

/// Normalized failure of a startlist command or query.
#[derive(Debug, Error)]
pub enum StartlistApplicationError {
    /// Target startlist does not exist and the command may not create it.
    #[error("Startlist {0} was not found.")]
    NotFound(StartlistId),

    /// A domain rule rejected the command.
    #[error("{0}")]
    InvalidCommand(DomainError),

    /// Invalidation was requested but there is nothing to invalidate.
    #[error("{0}")]
    NoStartTimesAssigned(DomainError),

    /// The repository or transaction manager failed.
    #[error("Persistence failure: {0}")]
    Persistence(RepositoryError),

    #[error("Unexpected error: {message}")]
    Unexpected {
        message: String,
        #[source]
        cause: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl StartlistApplicationError {
    /// Status code for an HTTP adapter: rule violations are the caller's
    /// fault, storage outages are retryable.
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::InvalidCommand(_) | Self::NoStartTimesAssigned(_) => 400,
            Self::NotFound(_) => 404,
            Self::Persistence(_) => 503,
            Self::Unexpected { .. } => 500,
        }
    }

    #[must_use]
    pub const fn is_no_start_times_assigned(&self) -> bool {
        matches!(self, Self::NoStartTimesAssigned(_))
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<DomainError> for StartlistApplicationError {
    fn from(error: DomainError) -> Self {
        if error.is_no_start_times_assigned() {
            Self::NoStartTimesAssigned(error)
        } else {
            Self::InvalidCommand(error)
        }
    }
}

impl From<RepositoryError> for StartlistApplicationError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Persistence(other),
        }
    }
}

/// Normalize an arbitrary failure into the application taxonomy.
///
/// Application errors pass through unchanged, domain and repository errors
/// are converted, anything else becomes `Unexpected` with the original kept
/// as its source.
#[must_use]
pub fn to_application_error(error: anyhow::Error) -> StartlistApplicationError {
    let error = match error.downcast::<StartlistApplicationError>() {
        Ok(application) => return application,
        Err(other) => other,
    };
    let error = match error.downcast::<DomainError>() {
        Ok(domain) => return domain.into(),
        Err(other) => other,
    };
    match error.downcast::<RepositoryError>() {
        Ok(repository) => repository.into(),
        Err(other) => StartlistApplicationError::Unexpected {
            message: other.to_string(),
            cause: other.into(),
        },
    }
}
