//! # Startlist Core
//!
//! Orienteering startlist scheduling: settings, lane order, class order,
//! start times and finalization, modelled as a single event-emitting
//! aggregate behind async ports.
//!
//! ## Laws (Compiler Enforced)
//!
//! - No `unwrap()` - returns `Result` instead
//! - No `expect()` - returns `Result` instead
//! - No `panic!()` - returns `Result` instead
//! - No `unsafe` - safe Rust only
//!
//! ## Layers
//!
//! - [`domain`] - aggregate, value objects, events, policy, repository port
//! - [`application`] - command use cases, query, process manager, ports
//! - [`infrastructure`] - in-memory repository, event bus, transactions
//! - [`config`] - layered TOML/env configuration
//! - [`wiring`] - assembles the in-memory stack

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::panic))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![forbid(unsafe_code)]

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod wiring;

pub use application::{
    StartlistApplication, StartlistApplicationError, StartlistCommand, StartlistProcessManager,
};
pub use config::{load_config, ConfigError, StartlistConfig};
pub use domain::{
    DomainError, Startlist, StartlistEvent, StartlistId, StartlistSnapshot, StartlistStatus,
};
pub use wiring::InMemoryStartlistSystem;
