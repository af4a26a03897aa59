//! Freeze a fully scheduled startlist.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use crate::application::commands::FinalizeStartlistCommand;
use crate::application::error::ApplicationResult;
use crate::application::service::{LoadMode, StartlistCommandContext};
use crate::domain::snapshot::StartlistSnapshot;

#[derive(Debug, Clone)]
pub struct FinalizeStartlistUseCase {
    context: StartlistCommandContext,
}

impl FinalizeStartlistUseCase {
    #[must_use]
    pub const fn new(context: StartlistCommandContext) -> Self {
        Self { context }
    }

    /// # Errors
    ///
    /// See [`StartlistCommandContext::execute`].
    pub async fn execute(
        &self,
        command: FinalizeStartlistCommand,
    ) -> ApplicationResult<StartlistSnapshot> {
        let FinalizeStartlistCommand { startlist_id } = command;
        self.context
            .execute(
                "finalize",
                &startlist_id,
                LoadMode::RequireExisting,
                move |startlist| startlist.finalize_startlist(),
            )
            .await
    }
}
