//! Operator override of the class start order.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use crate::application::commands::ManuallyFinalizeClassOrderCommand;
use crate::application::error::ApplicationResult;
use crate::application::service::{LoadMode, StartlistCommandContext};
use crate::domain::snapshot::StartlistSnapshot;

#[derive(Debug, Clone)]
pub struct ManuallyFinalizeClassOrderUseCase {
    context: StartlistCommandContext,
}

impl ManuallyFinalizeClassOrderUseCase {
    #[must_use]
    pub const fn new(context: StartlistCommandContext) -> Self {
        Self { context }
    }

    /// # Errors
    ///
    /// See [`StartlistCommandContext::execute`].
    pub async fn execute(
        &self,
        command: ManuallyFinalizeClassOrderCommand,
    ) -> ApplicationResult<StartlistSnapshot> {
        let ManuallyFinalizeClassOrderCommand {
            startlist_id,
            class_assignments,
            reason,
        } = command;
        self.context
            .execute(
                "manually_finalize_class_order",
                &startlist_id,
                LoadMode::RequireExisting,
                move |startlist| {
                    startlist.manually_finalize_class_start_order(class_assignments, reason)
                },
            )
            .await
    }
}
