//! Assign explicit start times.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use crate::application::commands::AssignStartTimesCommand;
use crate::application::error::ApplicationResult;
use crate::application::service::{LoadMode, StartlistCommandContext};
use crate::domain::snapshot::StartlistSnapshot;

#[derive(Debug, Clone)]
pub struct AssignStartTimesUseCase {
    context: StartlistCommandContext,
}

impl AssignStartTimesUseCase {
    #[must_use]
    pub const fn new(context: StartlistCommandContext) -> Self {
        Self { context }
    }

    /// # Errors
    ///
    /// See [`StartlistCommandContext::execute`].
    pub async fn execute(
        &self,
        command: AssignStartTimesCommand,
    ) -> ApplicationResult<StartlistSnapshot> {
        let AssignStartTimesCommand {
            startlist_id,
            start_times,
        } = command;
        self.context
            .execute(
                "assign_start_times",
                &startlist_id,
                LoadMode::RequireExisting,
                move |startlist| startlist.assign_start_times(start_times),
            )
            .await
    }
}
