//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! independent row predicates to be applied to a trip table.

use data_loader::{TripRecord, TripTable};

/// Core trait for filtering trips.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - A filter only decides whether a single row stays (`keep`)
/// - `apply` takes ownership of the table and returns the surviving rows in
///   their original order, so filters never invent or reorder rows
pub trait Filter {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `trip` survives this filter
    fn keep(&self, trip: &TripRecord) -> bool;

    /// Apply this filter to a table.
    fn apply(&self, table: TripTable) -> TripTable {
        table.retain_rows(|trip| self.keep(trip))
    }
}
