//! Player running order within a class.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::Duration;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::identifiers::{ClassId, PlayerId};

/// Ordered players of one class, with the interval between players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ClassAssignmentRecord")]
pub struct ClassAssignment {
    class_id: ClassId,
    player_order: Vec<PlayerId>,
    interval: Duration,
}

impl ClassAssignment {
    /// Create a class assignment.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Invariant` if the player order is empty or lists
    /// a player twice.
    pub fn new(
        class_id: ClassId,
        player_order: Vec<PlayerId>,
        interval: Duration,
    ) -> DomainResult<Self> {
        crate::invariant!(
            !player_order.is_empty(),
            DomainError::invariant(format!(
                "Class {class_id} must have at least one player in its start order."
            ))
        );
        if let Some(duplicate) = player_order.iter().duplicates().next() {
            return Err(DomainError::invariant(format!(
                "Player {duplicate} appears more than once in class {class_id}."
            )));
        }

        Ok(Self {
            class_id,
            player_order,
            interval,
        })
    }

    #[must_use]
    pub const fn class_id(&self) -> &ClassId {
        &self.class_id
    }

    #[must_use]
    pub fn player_order(&self) -> &[PlayerId] {
        &self.player_order
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }
}

#[derive(Deserialize)]
struct ClassAssignmentRecord {
    class_id: ClassId,
    player_order: Vec<PlayerId>,
    interval: Duration,
}

impl TryFrom<ClassAssignmentRecord> for ClassAssignment {
    type Error = DomainError;

    fn try_from(record: ClassAssignmentRecord) -> Result<Self, Self::Error> {
        Self::new(record.class_id, record.player_order, record.interval)
    }
}
