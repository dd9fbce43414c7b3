//! Error types for the data-loader crate.
//!
//! Two families live here:
//! - validation errors for user-supplied city, month and day names
//! - load errors raised while reading a city's trip CSV

use thiserror::Error;

/// Errors that can occur while validating filters or loading trip data
///
/// The `#[derive(Error)]` macro from thiserror implements
/// `std::error::Error` and `Display` from the `#[error(...)]` attributes.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// City name is not one of the recognised cities
    #[error("Unknown city: {0:?} (expected chicago, new york city or washington)")]
    InvalidCity(String),

    /// Month is neither "all" nor one of January..June
    #[error("Unknown month: {0:?} (data covers january to june, or use 'all')")]
    InvalidMonth(String),

    /// Day is neither "all" nor a weekday name
    #[error("Unknown day: {0:?} (expected a weekday name or 'all')")]
    InvalidDay(String),

    /// Dataset file could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV reader rejected the input (bad quoting, uneven rows, ...)
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// A column every city provides is missing from the header
    #[error("Missing required column: {column}")]
    MissingColumn { column: String },

    /// A row's start time could not be parsed; the whole load is aborted
    #[error("Malformed start time {value:?} at line {line}")]
    MalformedTimestamp { line: u64, value: String },

    /// Line in data file couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: u64,
        reason: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
