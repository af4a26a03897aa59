//! # Domain Layer
//!
//! Pure startlist scheduling model: no I/O, no global state, time injected
//! through [`DomainClock`].
//!
//! ## Module Structure
//!
//! - **`identifiers`** - [`StartlistId`], [`EventId`], [`ClassId`], [`PlayerId`]
//! - **`value_objects`** - [`Duration`], [`StartlistSettings`],
//!   [`LaneAssignment`], [`ClassAssignment`], [`StartTime`]
//! - **`policy`** - [`StartTimeAssignmentPolicy`]
//! - **`aggregates`** - the [`Startlist`] state machine
//! - **`factory`** - [`StartlistFactory`]
//! - **`events`** - [`StartlistEvent`] and its payloads
//! - **`services`** - [`StartTimeCalculator`]
//! - **`repository`** - [`StartlistRepository`] port
//!
//! ## Error Handling
//!
//! Every fallible operation returns [`DomainResult`]. Errors are expected
//! business outcomes, never panics.

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

pub mod aggregates;
pub mod clock;
pub mod errors;
pub mod events;
pub mod factory;
pub mod identifiers;
pub mod macros;
pub mod policy;
pub mod repository;
pub mod services;
pub mod snapshot;
pub mod status;
pub mod value_objects;

pub use aggregates::Startlist;
pub use clock::{DomainClock, FixedClock, SystemClock};
pub use errors::{DomainError, DomainResult};
pub use events::{serialize_event, StartlistEvent, StartlistEventKind};
pub use factory::StartlistFactory;
pub use identifiers::{ClassId, EventId, IdentifierError, PlayerId, StartlistId};
pub use policy::StartTimeAssignmentPolicy;
pub use repository::{RepositoryError, RepositoryResult, StartlistRepository};
pub use services::StartTimeCalculator;
pub use snapshot::StartlistSnapshot;
pub use status::StartlistStatus;
pub use value_objects::{ClassAssignment, Duration, LaneAssignment, StartTime, StartlistSettings};
