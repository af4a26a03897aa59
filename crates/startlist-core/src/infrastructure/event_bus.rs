//! In-process event bus.
//!
//! Events are delivered sequentially: for each event in order, each
//! subscriber in registration order. Subscribers may publish again from
//! inside `handle`; the registry lock is never held while a subscriber runs.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use std::sync::{Arc, RwLock};

use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::{debug, warn};

use crate::application::ports::{ApplicationEventPublisher, EventSubscriber};
use crate::domain::events::StartlistEvent;

/// How a failing subscriber affects the rest of a publication.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SubscriberFailurePolicy {
    /// Stop at the first failure and return it to the publisher.
    #[default]
    Propagate,
    /// Log the failure and keep notifying the remaining subscribers.
    Isolate,
}

pub struct InMemoryEventBus {
    subscribers: RwLock<Vec<Arc<dyn EventSubscriber>>>,
    failure_policy: SubscriberFailurePolicy,
}

impl InMemoryEventBus {
    #[must_use]
    pub fn new(failure_policy: SubscriberFailurePolicy) -> Self {
        Self {
            subscribers: RwLock::new(Vec::new()),
            failure_policy,
        }
    }

    /// Register a subscriber; it receives every event published afterwards.
    ///
    /// # Errors
    ///
    /// Fails if the registry lock is poisoned.
    pub fn subscribe(&self, subscriber: Arc<dyn EventSubscriber>) -> anyhow::Result<()> {
        debug!(subscriber = subscriber.name(), "Registering event subscriber");
        self.subscribers
            .write()
            .map_err(|e| anyhow!("Subscriber registry lock poisoned: {e}"))?
            .push(subscriber);
        Ok(())
    }

    #[must_use]
    pub const fn failure_policy(&self) -> SubscriberFailurePolicy {
        self.failure_policy
    }

    fn snapshot_subscribers(&self) -> anyhow::Result<Vec<Arc<dyn EventSubscriber>>> {
        self.subscribers
            .read()
            .map(|subscribers| subscribers.clone())
            .map_err(|e| anyhow!("Subscriber registry lock poisoned: {e}"))
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new(SubscriberFailurePolicy::default())
    }
}

impl std::fmt::Debug for InMemoryEventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let subscribers = self.subscribers.read().map_or(0, |subscribers| subscribers.len());
        f.debug_struct("InMemoryEventBus")
            .field("subscribers", &subscribers)
            .field("failure_policy", &self.failure_policy)
            .finish()
    }
}

#[async_trait::async_trait]
impl ApplicationEventPublisher for InMemoryEventBus {
    async fn publish(&self, events: Vec<StartlistEvent>) -> anyhow::Result<()> {
        let subscribers = self.snapshot_subscribers()?;
        for event in &events {
            debug!(kind = %event.kind(), startlist_id = %event.startlist_id(), "Publishing event");
            for subscriber in &subscribers {
                if let Err(error) = subscriber.handle(event).await {
                    match self.failure_policy {
                        SubscriberFailurePolicy::Propagate => return Err(error),
                        SubscriberFailurePolicy::Isolate => {
                            warn!(
                                subscriber = subscriber.name(),
                                kind = %event.kind(),
                                error = %error,
                                "Event subscriber failed"
                            );
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
