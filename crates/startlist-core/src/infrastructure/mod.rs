//! # Infrastructure Layer
//!
//! In-process adapters for the domain and application ports.

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

pub mod event_bus;
pub mod in_memory_repository;
pub mod transaction;
pub mod version_history;

pub use event_bus::{InMemoryEventBus, SubscriberFailurePolicy};
pub use in_memory_repository::InMemoryStartlistRepository;
pub use transaction::{ImmediateTransactionManager, TransactionStats};
pub use version_history::{StartlistVersion, StartlistVersionHistory};
