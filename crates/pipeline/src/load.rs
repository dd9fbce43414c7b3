//! Loading a filtered trip table in one call.
//!
//! Combines the dataset loader with the filter pipeline: read the city's
//! file, then keep only the trips matching the month and day selection.

use crate::filter_pipeline::FilterPipeline;
use data_loader::{FilterCriteria, Result, TripTable};
use std::path::Path;
use tracing::{debug, instrument};

/// Load the trips selected by `criteria`
///
/// An empty result is valid and is not an error.
#[instrument(skip(data_dir, criteria), fields(criteria = %criteria))]
pub fn load(data_dir: &Path, criteria: &FilterCriteria) -> Result<TripTable> {
    let table = TripTable::load_city(data_dir, criteria.city)?;
    Ok(filter(table, criteria))
}

/// Validate raw city/month/day strings, then load
///
/// Unknown values are rejected before the dataset is touched.
pub fn load_by_name(data_dir: &Path, city: &str, month: &str, day: &str) -> Result<TripTable> {
    let criteria = FilterCriteria::parse(city, month, day)?;
    load(data_dir, &criteria)
}

/// Narrow an already-loaded city table to the month and day in `criteria`
///
/// Used by callers that keep unfiltered tables around between runs.
pub fn filter(table: TripTable, criteria: &FilterCriteria) -> TripTable {
    let before = table.len();
    let filtered = FilterPipeline::from_criteria(criteria).apply(table);
    debug!(before, after = filtered.len(), "Filtered trips");
    filtered
}
