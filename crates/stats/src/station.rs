//! Most popular stations and trip.

use crate::error::{Result, StatsError};
use crate::mode::{Popular, mode};
use data_loader::TripTable;
use serde::Serialize;
use tracing::instrument;

/// Popular start station, end station and (start, end) combination
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationReport {
    pub popular_start: Popular<String>,
    pub popular_end: Popular<String>,
    /// The (start, end) pair counted as one key
    pub popular_trip: Popular<(String, String)>,
}

/// Compute the station-popularity report
///
/// Ties are broken by name (pairs compare start first, then end).
#[instrument(skip(table), fields(trips = table.len()))]
pub fn station_stats(table: &TripTable) -> Result<StationReport> {
    let empty = || StatsError::EmptyTable { report: "station" };

    let start = mode(table.iter().map(|t| t.start_station.as_str())).ok_or_else(empty)?;
    let end = mode(table.iter().map(|t| t.end_station.as_str())).ok_or_else(empty)?;
    let pair = mode(
        table
            .iter()
            .map(|t| (t.start_station.as_str(), t.end_station.as_str())),
    )
    .ok_or_else(empty)?;

    Ok(StationReport {
        popular_start: owned(start),
        popular_end: owned(end),
        popular_trip: Popular {
            value: (pair.value.0.to_string(), pair.value.1.to_string()),
            count: pair.count,
        },
    })
}

fn owned(popular: Popular<&str>) -> Popular<String> {
    Popular {
        value: popular.value.to_string(),
        count: popular.count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use data_loader::{City, Columns, TripRecord};

    fn table(pairs: &[(&str, &str)]) -> TripTable {
        let start = NaiveDate::from_ymd_opt(2017, 4, 1)
            .unwrap()
            .and_hms_opt(17, 0, 0)
            .unwrap();
        let rows = pairs
            .iter()
            .map(|(from, to)| TripRecord::new(start, *from, *to, 120.0))
            .collect();
        TripTable::new(City::NewYorkCity, Columns::all(), rows)
    }

    #[test]
    fn test_popular_stations() {
        let report = station_stats(&table(&[("X", "Y"), ("X", "Z"), ("W", "Z"), ("X", "Z")])).unwrap();
        assert_eq!(report.popular_start.value, "X");
        assert_eq!(report.popular_start.count, 3);
        assert_eq!(report.popular_end.value, "Z");
        assert_eq!(report.popular_trip.value, ("X".to_string(), "Z".to_string()));
        assert_eq!(report.popular_trip.count, 2);
    }

    #[test]
    fn test_start_station_tie_break() {
        let report = station_stats(&table(&[("B", "1"), ("A", "1"), ("B", "2"), ("A", "2")])).unwrap();
        assert_eq!(report.popular_start.value, "A");
        // ("A","1") is the smallest of four single-count pairs
        assert_eq!(report.popular_trip.value, ("A".to_string(), "1".to_string()));
    }

    #[test]
    fn test_pair_is_a_joint_key() {
        // Most common start (P) and end (Q) never occur together
        let report = station_stats(&table(&[("P", "R"), ("P", "S"), ("T", "Q"), ("U", "Q"), ("V", "V"), ("V", "V")])).unwrap();
        assert_eq!(report.popular_trip.value, ("V".to_string(), "V".to_string()));
    }

    #[test]
    fn test_empty_table() {
        assert!(matches!(
            station_stats(&table(&[])),
            Err(StatsError::EmptyTable { report: "station" })
        ));
    }
}
