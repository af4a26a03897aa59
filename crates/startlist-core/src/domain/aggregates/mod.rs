//! # Aggregate Roots
//!
//! [`Startlist`] is the single consistency boundary of the crate. All state
//! changes go through its methods, each of which either applies completely
//! and records an event, or fails and changes nothing.
//!
//! ## Related Modules
//!
//! - **`crate::domain::value_objects`** - Validated building blocks
//! - **`crate::domain::events`** - Events recorded by the aggregate
//! - **`crate::domain::repository`** - Persistence port for the aggregate

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

pub mod startlist;

pub use startlist::Startlist;
