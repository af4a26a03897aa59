//! Non-negative millisecond duration.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use std::fmt;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};

/// Immutable, non-negative span of time in whole milliseconds.
///
/// Equality is by value. Serialized as a bare millisecond count.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Duration {
    milliseconds: u64,
}

impl Duration {
    /// Zero-length duration.
    pub const ZERO: Self = Self { milliseconds: 0 };

    /// Create a duration from an unsigned millisecond count.
    #[must_use]
    pub const fn from_millis(milliseconds: u64) -> Self {
        Self { milliseconds }
    }

    /// Create a duration from whole seconds.
    #[must_use]
    pub const fn from_secs(seconds: u64) -> Self {
        Self {
            milliseconds: seconds.saturating_mul(1000),
        }
    }

    /// Create a duration from a signed millisecond count.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDuration` if the value is negative.
    pub fn try_from_millis(milliseconds: i64) -> DomainResult<Self> {
        u64::try_from(milliseconds)
            .map(Self::from_millis)
            .map_err(|_| DomainError::InvalidDuration(milliseconds.to_string()))
    }

    /// Create a duration from a floating point millisecond count, rounded to
    /// the nearest millisecond.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDuration` for negative, NaN or infinite input.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn try_from_f64(milliseconds: f64) -> DomainResult<Self> {
        if !milliseconds.is_finite() || milliseconds < 0.0 || milliseconds > u64::MAX as f64 {
            return Err(DomainError::InvalidDuration(milliseconds.to_string()));
        }
        Ok(Self::from_millis(milliseconds.round() as u64))
    }

    /// Milliseconds in this duration.
    #[must_use]
    pub const fn as_millis(self) -> u64 {
        self.milliseconds
    }

    /// Whether this duration is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.milliseconds == 0
    }

    /// Multiply by a step count, saturating on overflow.
    #[must_use]
    pub fn times(self, steps: usize) -> Self {
        let steps = u64::try_from(steps).unwrap_or(u64::MAX);
        Self::from_millis(self.milliseconds.saturating_mul(steps))
    }

    /// Convert into a chrono delta for timestamp arithmetic.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDuration` if the value does not fit chrono's range.
    pub fn to_time_delta(self) -> DomainResult<TimeDelta> {
        i64::try_from(self.milliseconds)
            .ok()
            .and_then(TimeDelta::try_milliseconds)
            .ok_or_else(|| DomainError::InvalidDuration(self.milliseconds.to_string()))
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.milliseconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_millis_rejected() {
        assert_eq!(
            Duration::try_from_millis(-1),
            Err(DomainError::InvalidDuration("-1".to_string()))
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(Duration::try_from_f64(f64::NAN).is_err());
        assert!(Duration::try_from_f64(f64::INFINITY).is_err());
        assert!(Duration::try_from_f64(-0.5).is_err());
    }

    #[test]
    fn test_float_rounds_to_nearest_millisecond() -> DomainResult<()> {
        assert_eq!(Duration::try_from_f64(44_999.6)?, Duration::from_millis(45_000));
        Ok(())
    }

    #[test]
    fn test_equality_by_value() {
        assert_eq!(Duration::from_secs(45), Duration::from_millis(45_000));
    }

    #[test]
    fn test_times_scales_interval() {
        assert_eq!(Duration::from_secs(45).times(3), Duration::from_millis(135_000));
    }

    #[test]
    fn test_serializes_as_bare_millis() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&Duration::from_millis(60_000))?, "60000");
        let back: Duration = serde_json::from_str("60000")?;
        assert_eq!(back, Duration::from_millis(60_000));
        assert!(serde_json::from_str::<Duration>("-5").is_err());
        Ok(())
    }
}
