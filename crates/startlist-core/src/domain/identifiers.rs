//! Semantic newtypes for domain identifiers
//!
//! # Parse-at-Boundaries Pattern
//!
//! Each identifier type:
//! - Trims whitespace before validation (boundary sanitization)
//! - Rejects empty and oversized values
//! - Implements serde serialization/deserialization with validation
//! - Provides safe access to the underlying value
//!
//! Identifiers in this module:
//! - [`StartlistId`] - Startlist aggregate identity
//! - [`EventId`] - Orienteering event the startlist belongs to
//! - [`ClassId`] - Competition class (e.g. `M21`)
//! - [`PlayerId`] - Player or SI card identifier

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum length accepted for any identifier.
pub const MAX_IDENTIFIER_LENGTH: usize = 128;

// ============================================================================
// UNIFIED IDENTIFIER ERROR
// ============================================================================

/// Unified error type for all identifier validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// Identifier is empty or contains only whitespace
    #[error("{kind} identifier cannot be empty")]
    Empty {
        /// Which identifier was being parsed
        kind: &'static str,
    },

    /// Identifier exceeds maximum length
    #[error("{kind} identifier too long: {actual} characters (max {max})")]
    TooLong {
        /// Which identifier was being parsed
        kind: &'static str,
        /// The maximum allowed length
        max: usize,
        /// The actual length provided
        actual: usize,
    },
}

fn validate(kind: &'static str, raw: &str) -> Result<String, IdentifierError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(IdentifierError::Empty { kind });
    }
    let actual = trimmed.chars().count();
    if actual > MAX_IDENTIFIER_LENGTH {
        return Err(IdentifierError::TooLong {
            kind,
            max: MAX_IDENTIFIER_LENGTH,
            actual,
        });
    }
    Ok(trimmed.to_string())
}

macro_rules! define_identifier {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Parse and validate an identifier.
            ///
            /// # Errors
            ///
            /// Returns `IdentifierError` if the value is empty or too long.
            pub fn parse(raw: impl AsRef<str>) -> Result<Self, IdentifierError> {
                validate($kind, raw.as_ref()).map(Self)
            }

            /// Borrow the underlying value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdentifierError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = IdentifierError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::parse(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

define_identifier!(
    /// Identity of a startlist aggregate.
    StartlistId,
    "startlist"
);

define_identifier!(
    /// Identifier of the event a startlist schedules.
    EventId,
    "event"
);

define_identifier!(
    /// Competition class identifier.
    ClassId,
    "class"
);

define_identifier!(
    /// Player (or SI card) identifier.
    PlayerId,
    "player"
);
