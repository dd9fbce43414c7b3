//! # Stats Crate
//!
//! Descriptive statistics over a (possibly filtered) trip table.
//!
//! ## Reports
//!
//! Four independent, side-effect-free reports:
//! - **time**: most common month, weekday and start hour
//! - **station**: most common start station, end station and trip
//! - **duration**: total, mean, shortest and longest trip
//! - **users**: user-type counts, gender counts, birth-year range and mode
//!
//! Every report returns structured data; turning it into text is up to the
//! caller. Modes break ties by taking the smallest value, so results are
//! reproducible run to run.
//!
//! ## Example Usage
//!
//! ```ignore
//! use stats::{time_stats, station_stats, duration_stats, user_stats};
//!
//! let time = time_stats(&table)?;
//! println!("Busiest hour: {}", time.popular_hour.value);
//!
//! let users = user_stats(&table);
//! for entry in &users.user_types {
//!     println!("{}: {}", entry.value, entry.count);
//! }
//! ```
//!
//! Empty tables are not errors for the caller to fear: `time_stats`,
//! `station_stats` and `duration_stats` return `StatsError::EmptyTable`,
//! and `user_stats` reports `NoData`.

pub mod error;
pub mod mode;
pub mod time;
pub mod station;
pub mod duration;
pub mod users;

// Re-export commonly used types
pub use error::{Result, StatsError};
pub use mode::{Popular, ValueCount, mode, value_counts};
pub use time::{TimeReport, time_stats};
pub use station::{StationReport, station_stats};
pub use duration::{DurationReport, duration_stats};
pub use users::{Availability, BirthYearSummary, UserReport, user_stats};
