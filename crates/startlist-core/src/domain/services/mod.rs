//! Stateless domain services.

pub mod start_time_calculator;

pub use start_time_calculator::StartTimeCalculator;
