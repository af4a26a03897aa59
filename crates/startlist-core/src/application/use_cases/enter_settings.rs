//! Enter or replace the scheduling settings, creating the startlist on first use.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use crate::application::commands::EnterStartlistSettingsCommand;
use crate::application::error::ApplicationResult;
use crate::application::service::{LoadMode, StartlistCommandContext};
use crate::domain::snapshot::StartlistSnapshot;

#[derive(Debug, Clone)]
pub struct EnterSettingsUseCase {
    context: StartlistCommandContext,
}

impl EnterSettingsUseCase {
    #[must_use]
    pub const fn new(context: StartlistCommandContext) -> Self {
        Self { context }
    }

    /// # Errors
    ///
    /// See [`StartlistCommandContext::execute`].
    pub async fn execute(
        &self,
        command: EnterStartlistSettingsCommand,
    ) -> ApplicationResult<StartlistSnapshot> {
        let EnterStartlistSettingsCommand {
            startlist_id,
            settings,
        } = command;
        self.context
            .execute(
                "enter_settings",
                &startlist_id,
                LoadMode::CreateIfMissing,
                move |startlist| startlist.enter_settings(settings),
            )
            .await
    }
}
