//! Immutable, self-validating value objects.
//!
//! Every constructor returns `DomainResult<Self>`; deserialization runs the
//! same validation, so a value object held anywhere in the crate is valid.

pub mod class_assignment;
pub mod duration;
pub mod lane_assignment;
pub mod settings;
pub mod start_time;

pub use class_assignment::ClassAssignment;
pub use duration::Duration;
pub use lane_assignment::LaneAssignment;
pub use settings::StartlistSettings;
pub use start_time::StartTime;
