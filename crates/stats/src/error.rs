//! Error types for the statistics engine.

use thiserror::Error;

/// Errors returned by the report functions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// The table has no rows, so there is no mode or mean to report
    #[error("no trips available for the {report} report")]
    EmptyTable { report: &'static str },
}

pub type Result<T> = std::result::Result<T, StatsError>;
