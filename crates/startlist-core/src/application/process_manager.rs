//! Reacts to manual overrides by invalidating stale start times.
//!
//! Manual lane or class reordering makes any previously assigned start times
//! meaningless. The process manager listens for the two override events and
//! runs [`InvalidateStartTimesUseCase`] for the affected startlist.
//!
//! Invalidation is idempotent: when there is nothing to invalidate the
//! failure is logged and swallowed. Every other failure propagates to
//! whoever published the triggering event.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::commands::InvalidateStartTimesCommand;
use crate::application::ports::EventSubscriber;
use crate::application::use_cases::InvalidateStartTimesUseCase;
use crate::domain::events::StartlistEvent;
use crate::domain::identifiers::StartlistId;

pub const LANE_ORDER_REASSIGNED_REASON: &str =
    "Lane order was manually reassigned; start times must be recalculated.";
pub const CLASS_ORDER_FINALIZED_REASON: &str =
    "Class start order was manually finalized; start times must be recalculated.";

#[derive(Debug, Clone)]
pub struct StartlistProcessManager {
    invalidate_start_times: Arc<InvalidateStartTimesUseCase>,
}

impl StartlistProcessManager {
    #[must_use]
    pub const fn new(invalidate_start_times: Arc<InvalidateStartTimesUseCase>) -> Self {
        Self {
            invalidate_start_times,
        }
    }

    async fn invalidate(&self, startlist_id: &StartlistId, reason: &str) -> anyhow::Result<()> {
        let command = InvalidateStartTimesCommand {
            startlist_id: startlist_id.clone(),
            reason: reason.to_string(),
        };
        match self.invalidate_start_times.execute(command).await {
            Ok(_) => {
                info!(
                    startlist_id = %startlist_id,
                    reason,
                    "Start times invalidated after manual override"
                );
                Ok(())
            }
            Err(error) if error.is_no_start_times_assigned() => {
                warn!(
                    startlist_id = %startlist_id,
                    "No start times to invalidate after manual override"
                );
                Ok(())
            }
            Err(error) => Err(error.into()),
        }
    }
}

#[async_trait::async_trait]
impl EventSubscriber for StartlistProcessManager {
    fn name(&self) -> &str {
        "startlist_process_manager"
    }

    async fn handle(&self, event: &StartlistEvent) -> anyhow::Result<()> {
        match event {
            StartlistEvent::LaneOrderManuallyReassigned(payload) => {
                self.invalidate(&payload.startlist_id, LANE_ORDER_REASSIGNED_REASON)
                    .await
            }
            StartlistEvent::ClassStartOrderManuallyFinalized(payload) => {
                self.invalidate(&payload.startlist_id, CLASS_ORDER_FINALIZED_REASON)
                    .await
            }
            _ => Ok(()),
        }
    }
}
