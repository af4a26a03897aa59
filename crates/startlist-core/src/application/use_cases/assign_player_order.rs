//! Assign the player order and interval of each class.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use crate::application::commands::AssignPlayerOrderCommand;
use crate::application::error::ApplicationResult;
use crate::application::service::{LoadMode, StartlistCommandContext};
use crate::domain::snapshot::StartlistSnapshot;

#[derive(Debug, Clone)]
pub struct AssignPlayerOrderUseCase {
    context: StartlistCommandContext,
}

impl AssignPlayerOrderUseCase {
    #[must_use]
    pub const fn new(context: StartlistCommandContext) -> Self {
        Self { context }
    }

    /// # Errors
    ///
    /// See [`StartlistCommandContext::execute`].
    pub async fn execute(
        &self,
        command: AssignPlayerOrderCommand,
    ) -> ApplicationResult<StartlistSnapshot> {
        let AssignPlayerOrderCommand {
            startlist_id,
            class_assignments,
        } = command;
        self.context
            .execute(
                "assign_player_order",
                &startlist_id,
                LoadMode::RequireExisting,
                move |startlist| startlist.assign_player_order_and_intervals(class_assignments),
            )
            .await
    }
}
