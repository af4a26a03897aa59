//! Single entry point wiring every use case behind one handle.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use std::sync::Arc;

use crate::application::commands::StartlistCommand;
use crate::application::error::ApplicationResult;
use crate::application::query::GetStartlistQuery;
use crate::application::service::StartlistCommandContext;
use crate::application::use_cases::{
    AssignLaneOrderUseCase, AssignPlayerOrderUseCase, AssignStartTimesUseCase,
    EnterSettingsUseCase, FinalizeStartlistUseCase, InvalidateStartTimesUseCase,
    ManuallyFinalizeClassOrderUseCase, ManuallyReassignLaneOrderUseCase,
    ScheduleStartTimesUseCase,
};
use crate::domain::identifiers::StartlistId;
use crate::domain::snapshot::StartlistSnapshot;

/// All startlist use cases sharing one set of ports.
#[derive(Debug, Clone)]
pub struct StartlistApplication {
    enter_settings: EnterSettingsUseCase,
    assign_lane_order: AssignLaneOrderUseCase,
    assign_player_order: AssignPlayerOrderUseCase,
    assign_start_times: AssignStartTimesUseCase,
    schedule_start_times: ScheduleStartTimesUseCase,
    finalize: FinalizeStartlistUseCase,
    manually_reassign_lane_order: ManuallyReassignLaneOrderUseCase,
    manually_finalize_class_order: ManuallyFinalizeClassOrderUseCase,
    invalidate_start_times: Arc<InvalidateStartTimesUseCase>,
    get_startlist: GetStartlistQuery,
}

impl StartlistApplication {
    #[must_use]
    pub fn new(context: &StartlistCommandContext) -> Self {
        Self {
            enter_settings: EnterSettingsUseCase::new(context.clone()),
            assign_lane_order: AssignLaneOrderUseCase::new(context.clone()),
            assign_player_order: AssignPlayerOrderUseCase::new(context.clone()),
            assign_start_times: AssignStartTimesUseCase::new(context.clone()),
            schedule_start_times: ScheduleStartTimesUseCase::new(context.clone()),
            finalize: FinalizeStartlistUseCase::new(context.clone()),
            manually_reassign_lane_order: ManuallyReassignLaneOrderUseCase::new(context.clone()),
            manually_finalize_class_order: ManuallyFinalizeClassOrderUseCase::new(context.clone()),
            invalidate_start_times: Arc::new(InvalidateStartTimesUseCase::new(context.clone())),
            get_startlist: GetStartlistQuery::new(context.repository()),
        }
    }

    /// Shared invalidation use case, for wiring the process manager.
    #[must_use]
    pub fn invalidate_start_times(&self) -> Arc<InvalidateStartTimesUseCase> {
        Arc::clone(&self.invalidate_start_times)
    }

    /// Route a command to its use case.
    ///
    /// # Errors
    ///
    /// Whatever the selected use case returns.
    pub async fn dispatch(
        &self,
        command: StartlistCommand,
    ) -> ApplicationResult<StartlistSnapshot> {
        match command {
            StartlistCommand::EnterSettings(command) => self.enter_settings.execute(command).await,
            StartlistCommand::AssignLaneOrder(command) => {
                self.assign_lane_order.execute(command).await
            }
            StartlistCommand::AssignPlayerOrder(command) => {
                self.assign_player_order.execute(command).await
            }
            StartlistCommand::AssignStartTimes(command) => {
                self.assign_start_times.execute(command).await
            }
            StartlistCommand::ScheduleStartTimes(command) => {
                self.schedule_start_times.execute(command).await
            }
            StartlistCommand::Finalize(command) => self.finalize.execute(command).await,
            StartlistCommand::ManuallyReassignLaneOrder(command) => {
                self.manually_reassign_lane_order.execute(command).await
            }
            StartlistCommand::ManuallyFinalizeClassOrder(command) => {
                self.manually_finalize_class_order.execute(command).await
            }
            StartlistCommand::InvalidateStartTimes(command) => {
                self.invalidate_start_times.execute(command).await
            }
        }
    }

    /// # Errors
    ///
    /// See [`GetStartlistQuery::execute`].
    pub async fn get(&self, startlist_id: &StartlistId) -> ApplicationResult<StartlistSnapshot> {
        self.get_startlist.execute(startlist_id).await
    }
}
