//! Rider demographics: user types, gender and birth years.
//!
//! Washington's dataset has no Gender or Birth Year column. Those parts of
//! the report say so explicitly instead of printing empty counts.

use crate::mode::{ValueCount, mode, value_counts};
use data_loader::TripTable;
use serde::Serialize;
use tracing::instrument;

/// Outcome of a demographic statistic
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum Availability<T> {
    Available(T),
    /// The source has no such column
    Unavailable,
    /// The column exists but no selected trip has a value
    NoData,
}

impl<T> Availability<T> {
    pub fn available(&self) -> Option<&T> {
        match self {
            Availability::Available(value) => Some(value),
            _ => None,
        }
    }
}

/// Oldest, youngest and most common rider birth year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthYearSummary {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserReport {
    /// Trips per user type, most frequent first (rows without a type are skipped)
    pub user_types: Vec<ValueCount>,
    pub gender: Availability<Vec<ValueCount>>,
    pub birth_years: Availability<BirthYearSummary>,
}

/// Compute the user-demographics report
///
/// Never fails: an empty table gives empty user-type counts and `NoData`
/// (or `Unavailable`) for the optional columns.
#[instrument(skip(table), fields(trips = table.len()))]
pub fn user_stats(table: &TripTable) -> UserReport {
    let user_types = value_counts(table.iter().filter_map(|t| t.user_type.as_deref()));

    let gender = if !table.has_gender() {
        Availability::Unavailable
    } else {
        let counts = value_counts(table.iter().filter_map(|t| t.gender.as_deref()));
        if counts.is_empty() {
            Availability::NoData
        } else {
            Availability::Available(counts)
        }
    };

    let birth_years = if !table.has_birth_year() {
        Availability::Unavailable
    } else {
        match birth_year_summary(table.iter().filter_map(|t| t.birth_year)) {
            Some(summary) => Availability::Available(summary),
            None => Availability::NoData,
        }
    };

    UserReport {
        user_types,
        gender,
        birth_years,
    }
}

fn birth_year_summary(years: impl Iterator<Item = i32> + Clone) -> Option<BirthYearSummary> {
    Some(BirthYearSummary {
        earliest: years.clone().min()?,
        most_recent: years.clone().max()?,
        most_common: mode(years)?.value,
    })
}
