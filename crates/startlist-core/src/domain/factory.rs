//! Construction of startlist aggregates with an injected clock.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use std::sync::Arc;

use crate::domain::aggregates::Startlist;
use crate::domain::clock::DomainClock;
use crate::domain::identifiers::StartlistId;
use crate::domain::snapshot::StartlistSnapshot;

/// Hands out aggregates that all share one clock.
#[derive(Debug, Clone)]
pub struct StartlistFactory {
    clock: Arc<dyn DomainClock>,
}

impl StartlistFactory {
    #[must_use]
    pub fn new(clock: Arc<dyn DomainClock>) -> Self {
        Self { clock }
    }

    /// Fresh `Draft` startlist with no pending events.
    #[must_use]
    pub fn create(&self, id: StartlistId) -> Startlist {
        Startlist::create_new(id, Arc::clone(&self.clock))
    }

    /// Rehydrate from persisted state without emitting events.
    #[must_use]
    pub fn reconstitute(&self, snapshot: StartlistSnapshot) -> Startlist {
        Startlist::reconstitute(snapshot, Arc::clone(&self.clock))
    }

    #[must_use]
    pub fn clock(&self) -> Arc<dyn DomainClock> {
        Arc::clone(&self.clock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::FixedClock;
    use crate::domain::status::StartlistStatus;
    use chrono::{TimeZone, Utc};

    fn factory() -> StartlistFactory {
        let instant = Utc
            .with_ymd_and_hms(2024, 1, 1, 9, 0, 0)
            .single()
            .expect("valid timestamp");
        StartlistFactory::new(Arc::new(FixedClock::new(instant)))
    }

    #[test]
    fn test_create_yields_draft_without_events() {
        let id = StartlistId::parse("sl-1").expect("valid id");

        let startlist = factory().create(id.clone());

        assert_eq!(startlist.id(), &id);
        assert_eq!(startlist.status(), StartlistStatus::Draft);
        assert!(startlist.pending_events().is_empty());
    }

    #[test]
    fn test_reconstitute_preserves_status() {
        let id = StartlistId::parse("sl-1").expect("valid id");
        let mut snapshot = StartlistSnapshot::empty(id);
        snapshot.status = StartlistStatus::Finalized;

        let startlist = factory().reconstitute(snapshot.clone());

        assert_eq!(startlist.to_snapshot(), snapshot);
        assert!(startlist.pending_events().is_empty());
    }
}
