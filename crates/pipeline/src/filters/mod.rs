//! Filter implementations for the trip pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod day;
pub mod month;

// Re-export for convenience
pub use day::DayFilter;
pub use month::MonthFilter;
