//! # Application Layer
//!
//! Orchestrates the domain: every command loads one startlist, applies one
//! mutation inside a transaction, saves it, and publishes the resulting
//! events after commit.
//!
//! - **`commands`** - Command payloads and the tagged [`StartlistCommand`]
//! - **`service`** - [`StartlistCommandContext`], the shared command flow
//! - **`use_cases`** - One use case per command
//! - **`query`** - [`GetStartlistQuery`]
//! - **`process_manager`** - Invalidates start times after manual overrides
//! - **`ports`** - Publisher, subscriber and transaction ports
//! - **`error`** - [`StartlistApplicationError`] and its normalization

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

pub mod commands;
pub mod dispatch;
pub mod error;
pub mod ports;
pub mod process_manager;
pub mod query;
pub mod service;
pub mod use_cases;

pub use commands::StartlistCommand;
pub use dispatch::StartlistApplication;
pub use error::{to_application_error, ApplicationResult, StartlistApplicationError};
pub use ports::{
    execute_in_transaction, ApplicationEventPublisher, EventSubscriber, TransactionManager,
};
pub use process_manager::StartlistProcessManager;
pub use query::GetStartlistQuery;
pub use service::{LoadMode, StartlistCommandContext};
