//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::filters::{DayFilter, MonthFilter};
use crate::traits::Filter;
use data_loader::{FilterCriteria, TripTable};

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(MonthFilter::new(Month::March))
///     .add_filter(DayFilter::new(Weekday::Fri));
///
/// let filtered = pipeline.apply(table);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Pipeline for the month and day parts of `criteria`, month first
    ///
    /// "all" (None) adds no filter for that part.
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        let mut pipeline = Self::new();
        if let Some(month) = criteria.month {
            pipeline = pipeline.add_filter(MonthFilter::new(month));
        }
        if let Some(day) = criteria.day {
            pipeline = pipeline.add_filter(DayFilter::new(day));
        }
        pipeline
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the table.
    pub fn apply(&self, table: TripTable) -> TripTable {
        let mut current = table;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use data_loader::{City, Columns, Month, TripRecord, Weekday};

    fn sample_table() -> TripTable {
        let starts = [(1, 6), (3, 3), (3, 6), (3, 10), (5, 5)];
        let rows = starts
            .iter()
            .enumerate()
            .map(|(i, &(month, day))| {
                let start = NaiveDate::from_ymd_opt(2017, month, day)
                    .unwrap()
                    .and_hms_opt(9, 0, 0)
                    .unwrap();
                TripRecord::new(start, format!("s{i}"), "Dock", 60.0)
            })
            .collect();
        TripTable::new(City::Chicago, Columns::all(), rows)
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let filtered = pipeline.apply(sample_table());
        assert_eq!(filtered, sample_table());
    }

    #[test]
    fn test_from_criteria_with_all() {
        let criteria = FilterCriteria::city(City::Chicago);
        assert!(FilterPipeline::from_criteria(&criteria).is_empty());
    }

    #[test]
    fn test_month_and_day() {
        // 2017-03-03 and 2017-03-10 are Fridays, 2017-01-06 is a Friday in January
        let criteria = FilterCriteria {
            city: City::Chicago,
            month: Some(Month::March),
            day: Some(Weekday::Fri),
        };
        let pipeline = FilterPipeline::from_criteria(&criteria);
        assert_eq!(pipeline.len(), 2);

        let filtered = pipeline.apply(sample_table());
        let stations: Vec<_> = filtered.iter().map(|t| t.start_station.as_str()).collect();
        assert_eq!(stations, vec!["s1", "s3"]);
    }

    #[test]
    fn test_filter_order_does_not_matter() {
        let month_first = FilterPipeline::new()
            .add_filter(MonthFilter::new(Month::March))
            .add_filter(DayFilter::new(Weekday::Fri));
        let day_first = FilterPipeline::new()
            .add_filter(DayFilter::new(Weekday::Fri))
            .add_filter(MonthFilter::new(Month::March));

        assert_eq!(month_first.apply(sample_table()), day_first.apply(sample_table()));
    }
}
