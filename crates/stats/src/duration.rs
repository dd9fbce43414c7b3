//! Total and average trip duration.

use crate::error::{Result, StatsError};
use data_loader::TripTable;
use serde::Serialize;
use tracing::instrument;

/// Trip duration aggregates, all in raw seconds
///
/// Rendering as hours:minutes:seconds is left to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationReport {
    pub trips: usize,
    pub total_seconds: f64,
    pub mean_seconds: f64,
    pub shortest_seconds: f64,
    pub longest_seconds: f64,
}

/// Compute the duration report
///
/// The mean of zero trips is undefined, so an empty table is an error
/// rather than a division by zero.
#[instrument(skip(table), fields(trips = table.len()))]
pub fn duration_stats(table: &TripTable) -> Result<DurationReport> {
    if table.is_empty() {
        return Err(StatsError::EmptyTable { report: "trip duration" });
    }

    let mut total = 0.0;
    let mut shortest = f64::INFINITY;
    let mut longest = f64::NEG_INFINITY;
    for trip in table {
        total += trip.duration_secs;
        shortest = shortest.min(trip.duration_secs);
        longest = longest.max(trip.duration_secs);
    }

    Ok(DurationReport {
        trips: table.len(),
        total_seconds: total,
        mean_seconds: total / table.len() as f64,
        shortest_seconds: shortest,
        longest_seconds: longest,
    })
}
