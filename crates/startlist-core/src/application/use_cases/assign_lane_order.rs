//! Assign the class order and interval of each lane.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use crate::application::commands::AssignLaneOrderCommand;
use crate::application::error::ApplicationResult;
use crate::application::service::{LoadMode, StartlistCommandContext};
use crate::domain::snapshot::StartlistSnapshot;

#[derive(Debug, Clone)]
pub struct AssignLaneOrderUseCase {
    context: StartlistCommandContext,
}

impl AssignLaneOrderUseCase {
    #[must_use]
    pub const fn new(context: StartlistCommandContext) -> Self {
        Self { context }
    }

    /// # Errors
    ///
    /// See [`StartlistCommandContext::execute`].
    pub async fn execute(
        &self,
        command: AssignLaneOrderCommand,
    ) -> ApplicationResult<StartlistSnapshot> {
        let AssignLaneOrderCommand {
            startlist_id,
            lane_assignments,
        } = command;
        self.context
            .execute(
                "assign_lane_order",
                &startlist_id,
                LoadMode::RequireExisting,
                move |startlist| startlist.assign_lane_order_and_intervals(lane_assignments),
            )
            .await
    }
}
