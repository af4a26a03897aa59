//! Compute start times from lane and class order, then assign them.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use crate::application::commands::ScheduleStartTimesCommand;
use crate::application::error::ApplicationResult;
use crate::application::service::{LoadMode, StartlistCommandContext};
use crate::domain::errors::DomainError;
use crate::domain::services::StartTimeCalculator;
use crate::domain::snapshot::StartlistSnapshot;

#[derive(Debug, Clone)]
pub struct ScheduleStartTimesUseCase {
    context: StartlistCommandContext,
}

impl ScheduleStartTimesUseCase {
    #[must_use]
    pub const fn new(context: StartlistCommandContext) -> Self {
        Self { context }
    }

    /// Emits the same `StartTimesAssigned` event as an explicit assignment.
    ///
    /// # Errors
    ///
    /// Calculator failures surface as `InvalidCommand`; see also
    /// [`StartlistCommandContext::execute`].
    pub async fn execute(
        &self,
        command: ScheduleStartTimesCommand,
    ) -> ApplicationResult<StartlistSnapshot> {
        self.context
            .execute(
                "schedule_start_times",
                &command.startlist_id,
                LoadMode::RequireExisting,
                |startlist| {
                    if startlist.status().is_finalized() {
                        return Err(DomainError::AlreadyFinalized);
                    }
                    let start_times = StartTimeCalculator::calculate(
                        startlist.settings(),
                        startlist.lane_assignments(),
                        startlist.class_assignments(),
                    )?;
                    startlist.assign_start_times(start_times)
                },
            )
            .await
    }
}
