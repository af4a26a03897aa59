//! Clear previously assigned start times.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use crate::application::commands::InvalidateStartTimesCommand;
use crate::application::error::ApplicationResult;
use crate::application::service::{LoadMode, StartlistCommandContext};
use crate::domain::snapshot::StartlistSnapshot;

#[derive(Debug, Clone)]
pub struct InvalidateStartTimesUseCase {
    context: StartlistCommandContext,
}

impl InvalidateStartTimesUseCase {
    #[must_use]
    pub const fn new(context: StartlistCommandContext) -> Self {
        Self { context }
    }

    /// # Errors
    ///
    /// See [`StartlistCommandContext::execute`].
    pub async fn execute(
        &self,
        command: InvalidateStartTimesCommand,
    ) -> ApplicationResult<StartlistSnapshot> {
        let InvalidateStartTimesCommand {
            startlist_id,
            reason,
        } = command;
        self.context
            .execute(
                "invalidate_start_times",
                &startlist_id,
                LoadMode::RequireExisting,
                move |startlist| startlist.invalidate_start_times(reason),
            )
            .await
    }
}
