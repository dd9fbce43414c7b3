//! # Data Loader Crate
//!
//! This crate handles loading the bikeshare trip datasets (one CSV per city).
//!
//! ## Main Components
//!
//! - **types**: Core domain types (City, Month, FilterCriteria, TripRecord, TripTable)
//! - **parser**: Parse trip CSV rows into Rust structs
//! - **loader**: Locate a city's file and build a TripTable from it
//! - **error**: Error types for validation and data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{City, TripTable};
//! use std::path::Path;
//!
//! let table = TripTable::load_city(Path::new("data"), City::Chicago)?;
//! let first = &table.rows()[0];
//! println!("{} trips, first left {} at {}h", table.len(), first.start_station, first.hour());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod loader;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{
    // Enums and filter domains
    City,
    Month,
    DAYS,
    ALL,
    parse_month,
    parse_day,
    weekday_name,
    // Core types
    Columns,
    FilterCriteria,
    TripRecord,
    TripTable,
};
pub use chrono::Weekday;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_table_creation() {
        let table = TripTable::empty(City::Chicago, Columns::all());

        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert_eq!(table.rows().len(), 0);
    }

    #[test]
    fn test_table_iteration() {
        let start = NaiveDate::from_ymd_opt(2017, 1, 1)
            .unwrap()
            .and_hms_opt(9, 7, 57)
            .unwrap();
        let table = TripTable::new(
            City::Washington,
            Columns::default(),
            vec![
                TripRecord::new(start, "A", "B", 100.0).with_user_type("Subscriber"),
                TripRecord::new(start, "B", "A", 200.0).with_user_type("Customer"),
            ],
        );

        let total: f64 = table.iter().map(|t| t.duration_secs).sum();
        assert_eq!(total, 300.0);

        let types: Vec<_> = (&table)
            .into_iter()
            .filter_map(|t| t.user_type.as_deref())
            .collect();
        assert_eq!(types, vec!["Subscriber", "Customer"]);
    }
}
