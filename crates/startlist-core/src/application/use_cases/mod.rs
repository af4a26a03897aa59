//! One use case per startlist command.
//!
//! Each use case unpacks its command and hands a single aggregate mutation to
//! [`StartlistCommandContext::execute`](super::service::StartlistCommandContext::execute).

pub mod assign_lane_order;
pub mod assign_player_order;
pub mod assign_start_times;
pub mod enter_settings;
pub mod finalize;
pub mod invalidate_start_times;
pub mod manually_finalize_class_order;
pub mod manually_reassign_lane_order;
pub mod schedule_start_times;

pub use assign_lane_order::AssignLaneOrderUseCase;
pub use assign_player_order::AssignPlayerOrderUseCase;
pub use assign_start_times::AssignStartTimesUseCase;
pub use enter_settings::EnterSettingsUseCase;
pub use finalize::FinalizeStartlistUseCase;
pub use invalidate_start_times::InvalidateStartTimesUseCase;
pub use manually_finalize_class_order::ManuallyFinalizeClassOrderUseCase;
pub use manually_reassign_lane_order::ManuallyReassignLaneOrderUseCase;
pub use schedule_start_times::ScheduleStartTimesUseCase;
