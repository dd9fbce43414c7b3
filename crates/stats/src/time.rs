//! Most frequent times of travel.

use crate::error::{Result, StatsError};
use crate::mode::{Popular, mode};
use data_loader::TripTable;
use serde::Serialize;
use tracing::{debug, instrument};

/// Popular month, weekday and start hour
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeReport {
    /// Calendar month number (1-12)
    pub popular_month: Popular<u32>,
    /// Full weekday name; ties go to the alphabetically first name
    pub popular_day: Popular<&'static str>,
    /// Start hour (0-23)
    pub popular_hour: Popular<u32>,
}

/// Compute the time-of-travel report
///
/// Fails with `EmptyTable` when there are no trips.
#[instrument(skip(table), fields(trips = table.len()))]
pub fn time_stats(table: &TripTable) -> Result<TimeReport> {
    let empty = || StatsError::EmptyTable { report: "time of travel" };

    let popular_month = mode(table.iter().map(|t| t.month())).ok_or_else(empty)?;
    let popular_day = mode(table.iter().map(|t| t.day_name())).ok_or_else(empty)?;
    let popular_hour = mode(table.iter().map(|t| t.hour())).ok_or_else(empty)?;

    debug!(
        month = popular_month.value,
        day = popular_day.value,
        hour = popular_hour.value,
        "Computed time of travel"
    );
    Ok(TimeReport {
        popular_month,
        popular_day,
        popular_hour,
    })
}
