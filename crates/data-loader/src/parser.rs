//! Parser for the per-city trip CSV files.
//!
//! Header layout (Chicago and New York City; Washington lacks the last two):
//! `,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year`
//!
//! The unnamed leading index column and any other unknown columns are ignored.

use crate::error::{DataLoadError, Result};
use crate::types::{Columns, TripRecord};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::io::Read;

pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

/// Columns every city provides
const REQUIRED_COLUMNS: [&str; 5] = [START_TIME, END_TIME, TRIP_DURATION, START_STATION, END_STATION];

/// Timestamp layouts accepted for "Start Time", tried in order
const TIMESTAMP_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// One CSV row as it appears in the file, before validation
///
/// Numeric columns are read as text so failures can be reported with the
/// column name and line number.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time")]
    end_time: String,
    #[serde(rename = "Trip Duration")]
    trip_duration: String,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<String>,
}

/// Parse a whole trip CSV
///
/// Returns the optional columns found in the header together with every row
/// in file order. Any malformed row aborts the parse.
pub fn parse_trips<R: Read>(reader: R, file: &str) -> Result<(Columns, Vec<TripRecord>)> {
    // Trimmed headers are what both the column check and serde see
    let mut reader = csv::ReaderBuilder::new()
        .flexible(false)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let has_column = |name: &str| headers.iter().any(|h| h == name);

    for column in REQUIRED_COLUMNS {
        if !has_column(column) {
            return Err(DataLoadError::MissingColumn {
                column: column.to_string(),
            });
        }
    }
    let columns = Columns {
        gender: has_column(GENDER),
        birth_year: has_column(BIRTH_YEAR),
    };

    let mut trips = Vec::new();
    let mut record = csv::StringRecord::new();
    while reader.read_record(&mut record)? {
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let raw: RawTrip = record.deserialize(Some(&headers))?;
        trips.push(build_trip(raw, file, line)?);
    }

    Ok((columns, trips))
}

/// Validate one raw row into a TripRecord
fn build_trip(raw: RawTrip, file: &str, line: u64) -> Result<TripRecord> {
    let start_time = parse_timestamp(&raw.start_time).ok_or_else(|| {
        DataLoadError::MalformedTimestamp {
            line,
            value: raw.start_time.clone(),
        }
    })?;

    let duration = parse_duration(&raw.trip_duration).ok_or_else(|| DataLoadError::ParseError {
        file: file.to_string(),
        line,
        reason: format!("Invalid {}: {:?}", TRIP_DURATION, raw.trip_duration),
    })?;

    let birth_year = match non_blank(raw.birth_year) {
        Some(text) => Some(parse_birth_year(&text).ok_or_else(|| DataLoadError::ParseError {
            file: file.to_string(),
            line,
            reason: format!("Invalid {}: {:?}", BIRTH_YEAR, text),
        })?),
        None => None,
    };

    let mut trip = TripRecord::new(start_time, raw.start_station, raw.end_station, duration)
        .with_end_time(raw.end_time);
    trip.user_type = non_blank(raw.user_type);
    trip.gender = non_blank(raw.gender);
    trip.birth_year = birth_year;
    Ok(trip)
}

/// Parse a start timestamp in any of the supported layouts
///
/// A bare date is read as midnight.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Trip duration in seconds; must be finite and non-negative
fn parse_duration(s: &str) -> Option<f64> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|secs| secs.is_finite() && *secs >= 0.0)
}

/// Birth years are stored as "1989" or "1989.0"
fn parse_birth_year(s: &str) -> Option<i32> {
    let value = s.parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= i32::MAX as f64 {
        Some(value as i32)
    } else {
        None
    }
}

/// Treat empty or whitespace-only cells as missing
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
