//! Operator override of the lane order.
//!
//! The resulting event triggers start-time invalidation through the
//! process manager.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use crate::application::commands::ManuallyReassignLaneOrderCommand;
use crate::application::error::ApplicationResult;
use crate::application::service::{LoadMode, StartlistCommandContext};
use crate::domain::snapshot::StartlistSnapshot;

#[derive(Debug, Clone)]
pub struct ManuallyReassignLaneOrderUseCase {
    context: StartlistCommandContext,
}

impl ManuallyReassignLaneOrderUseCase {
    #[must_use]
    pub const fn new(context: StartlistCommandContext) -> Self {
        Self { context }
    }

    /// # Errors
    ///
    /// See [`StartlistCommandContext::execute`].
    pub async fn execute(
        &self,
        command: ManuallyReassignLaneOrderCommand,
    ) -> ApplicationResult<StartlistSnapshot> {
        let ManuallyReassignLaneOrderCommand {
            startlist_id,
            lane_assignments,
            reason,
        } = command;
        self.context
            .execute(
                "manually_reassign_lane_order",
                &startlist_id,
                LoadMode::RequireExisting,
                move |startlist| startlist.manually_reassign_lane_order(lane_assignments, reason),
            )
            .await
    }
}
