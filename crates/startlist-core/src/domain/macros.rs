//! Invariant checking macros for the domain layer.
//!
//! # Design Principles
//!
//! - **Zero panic**: All macros return `Result`, never panic
//! - **Consistent error messages**: Callers pass the exact domain error to surface
//!
//! # Example
//!
//! ```rust,ignore
//! use startlist_core::{invariant, domain::DomainError};
//!
//! fn check_lane_count(lane_count: u32) -> Result<(), DomainError> {
//!     invariant!(
//!         lane_count >= 1,
//!         DomainError::invariant("Lane count must be at least 1.")
//!     );
//!     Ok(())
//! }
//! ```

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

/// Runtime invariant check with custom error.
///
/// Returns `Err(error_expression)` from the enclosing function when the
/// condition does not hold. The error expression is only evaluated on failure.
///
/// # Syntax
///
/// ```rust,ignore
/// invariant!(condition, error_expression);
/// ```
#[macro_export]
macro_rules! invariant {
    ($condition:expr, $error:expr $(,)?) => {
        if !$condition {
            return Err($error);
        }
    };
}
