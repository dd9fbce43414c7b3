//! Core domain types for the bikeshare datasets.
//!
//! This module defines the fundamental data structures used throughout the system:
//! - Enumerations for the fixed filter domains (City, Month, weekday names)
//! - FilterCriteria, the validated user selection
//! - TripRecord, one rental with its derived time fields
//! - TripTable, the ordered in-memory dataset

use crate::error::{DataLoadError, Result};
use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Filter Domains
// =============================================================================

/// Sentinel accepted for the month and day prompts meaning "no filter"
pub const ALL: &str = "all";

/// Cities with a trip dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lowercase name as typed by users
    pub fn name(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// CSV file holding this city's trips
    pub fn file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for City {
    type Err = DataLoadError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        City::ALL
            .into_iter()
            .find(|city| city.name() == wanted)
            .ok_or_else(|| DataLoadError::InvalidCity(s.to_string()))
    }
}

/// Months covered by the datasets (January to June)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    /// Calendar month number, 1 for January
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "january",
            Month::February => "february",
            Month::March => "march",
            Month::April => "april",
            Month::May => "may",
            Month::June => "june",
        }
    }

    /// Inverse of `number`; `None` outside January..June
    pub fn from_number(number: u32) -> Option<Month> {
        Month::ALL.into_iter().find(|m| m.number() == number)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = DataLoadError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Month::ALL
            .into_iter()
            .find(|month| month.name() == wanted)
            .ok_or_else(|| DataLoadError::InvalidMonth(s.to_string()))
    }
}

/// Weekdays in ISO order, Monday first
pub const DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English weekday name, e.g. "Monday"
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Parse a month selection; "all" means no month filter
pub fn parse_month(s: &str) -> Result<Option<Month>> {
    if s.trim().eq_ignore_ascii_case(ALL) {
        return Ok(None);
    }
    s.parse().map(Some)
}

/// Parse a day selection; "all" means no day filter
///
/// Only full weekday names are accepted ("monday", not "mon").
pub fn parse_day(s: &str) -> Result<Option<Weekday>> {
    let trimmed = s.trim();
    if trimmed.eq_ignore_ascii_case(ALL) {
        return Ok(None);
    }
    DAYS.into_iter()
        .find(|day| weekday_name(*day).eq_ignore_ascii_case(trimmed))
        .map(Some)
        .ok_or_else(|| DataLoadError::InvalidDay(s.to_string()))
}

/// A validated city/month/day selection
///
/// `None` for month or day means that filter is not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCriteria {
    pub city: City,
    pub month: Option<Month>,
    pub day: Option<Weekday>,
}

impl FilterCriteria {
    /// Criteria for a whole city with no time filters
    pub fn city(city: City) -> Self {
        Self {
            city,
            month: None,
            day: None,
        }
    }

    /// Validate raw user input into criteria
    pub fn parse(city: &str, month: &str, day: &str) -> Result<Self> {
        Ok(Self {
            city: city.parse()?,
            month: parse_month(month)?,
            day: parse_day(day)?,
        })
    }
}

impl fmt::Display for FilterCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "city={} month={} day={}",
            self.city,
            self.month.map(Month::name).unwrap_or(ALL),
            self.day.map(weekday_name).unwrap_or(ALL),
        )
    }
}

// =============================================================================
// Trip Records
// =============================================================================

/// One bike rental
///
/// The month, weekday and hour are derived from `start_time` when the record
/// is built and are only reachable through accessors, so they always agree
/// with the timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    start_time: NaiveDateTime,
    /// End time exactly as it appeared in the source
    pub end_time: String,
    pub duration_secs: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
    month: u32,
    day_of_week: Weekday,
    hour: u32,
}

impl TripRecord {
    pub fn new(
        start_time: NaiveDateTime,
        start_station: impl Into<String>,
        end_station: impl Into<String>,
        duration_secs: f64,
    ) -> Self {
        Self {
            start_time,
            end_time: String::new(),
            duration_secs,
            start_station: start_station.into(),
            end_station: end_station.into(),
            user_type: None,
            gender: None,
            birth_year: None,
            month: start_time.month(),
            day_of_week: start_time.weekday(),
            hour: start_time.hour(),
        }
    }

    pub fn with_end_time(mut self, end_time: impl Into<String>) -> Self {
        self.end_time = end_time.into();
        self
    }

    pub fn with_user_type(mut self, user_type: impl Into<String>) -> Self {
        self.user_type = Some(user_type.into());
        self
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn with_birth_year(mut self, year: i32) -> Self {
        self.birth_year = Some(year);
        self
    }

    pub fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }

    /// Calendar month of the start time (1-12)
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day_of_week(&self) -> Weekday {
        self.day_of_week
    }

    /// Full English name of the start weekday
    pub fn day_name(&self) -> &'static str {
        weekday_name(self.day_of_week)
    }

    /// Hour of the start time (0-23)
    pub fn hour(&self) -> u32 {
        self.hour
    }
}

// =============================================================================
// TripTable - The In-Memory Dataset
// =============================================================================

/// Optional columns a city's source may or may not provide
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Columns {
    pub gender: bool,
    pub birth_year: bool,
}

impl Columns {
    /// Every optional column present (Chicago, New York City)
    pub fn all() -> Self {
        Self {
            gender: true,
            birth_year: true,
        }
    }
}

/// Ordered trips for one city
///
/// Rows keep source order. Filtering consumes a table and hands back a new
/// one with the same city and column set; nothing edits rows in place.
#[derive(Debug, Clone, PartialEq)]
pub struct TripTable {
    city: City,
    columns: Columns,
    rows: Vec<TripRecord>,
}

impl TripTable {
    /// Build a table from rows in source order
    ///
    /// `columns` lists the optional columns the source declared. A column is
    /// also marked present when any row carries a value for it, so the flags
    /// never claim a column is missing while rows hold its data.
    pub fn new(city: City, mut columns: Columns, rows: Vec<TripRecord>) -> Self {
        columns.gender |= rows.iter().any(|trip| trip.gender.is_some());
        columns.birth_year |= rows.iter().any(|trip| trip.birth_year.is_some());
        Self {
            city,
            columns,
            rows,
        }
    }

    /// An empty table for `city`
    pub fn empty(city: City, columns: Columns) -> Self {
        Self::new(city, columns, Vec::new())
    }

    pub fn city(&self) -> City {
        self.city
    }

    pub fn columns(&self) -> Columns {
        self.columns
    }

    pub fn has_gender(&self) -> bool {
        self.columns.gender
    }

    pub fn has_birth_year(&self) -> bool {
        self.columns.birth_year
    }

    pub fn rows(&self) -> &[TripRecord] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TripRecord> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Keep only the rows matching `keep`, preserving order
    pub fn retain_rows(self, mut keep: impl FnMut(&TripRecord) -> bool) -> TripTable {
        let rows = self.rows.into_iter().filter(|trip| keep(trip)).collect();
        TripTable { rows, ..self }
    }
}

impl<'a> IntoIterator for &'a TripTable {
    type Item = &'a TripRecord;
    type IntoIter = std::slice::Iter<'a, TripRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 15, 0)
            .unwrap()
    }

    #[test]
    fn test_city_parsing_is_case_insensitive() {
        assert_eq!("Chicago".parse::<City>().unwrap(), City::Chicago);
        assert_eq!("  NEW YORK CITY ".parse::<City>().unwrap(), City::NewYorkCity);
        assert!(matches!(
            "boston".parse::<City>(),
            Err(DataLoadError::InvalidCity(_))
        ));
    }

    #[test]
    fn test_city_file_names() {
        assert_eq!(City::NewYorkCity.file_name(), "new_york_city.csv");
        assert_eq!(City::Washington.file_name(), "washington.csv");
    }

    #[test]
    fn test_month_selection() {
        assert_eq!(parse_month("all").unwrap(), None);
        assert_eq!(parse_month("March").unwrap(), Some(Month::March));
        assert_eq!(Month::March.number(), 3);
        assert_eq!(Month::from_number(6), Some(Month::June));
        assert_eq!(Month::from_number(7), None);
        assert!(matches!(parse_month("july"), Err(DataLoadError::InvalidMonth(_))));
    }

    #[test]
    fn test_day_selection() {
        assert_eq!(parse_day("ALL").unwrap(), None);
        assert_eq!(parse_day("sunday").unwrap(), Some(Weekday::Sun));
        assert!(matches!(parse_day("sun"), Err(DataLoadError::InvalidDay(_))));
    }

    #[test]
    fn test_filter_criteria_parse() {
        let criteria = FilterCriteria::parse("washington", "all", "Friday").unwrap();
        assert_eq!(criteria.city, City::Washington);
        assert_eq!(criteria.month, None);
        assert_eq!(criteria.day, Some(Weekday::Fri));
        assert_eq!(criteria.to_string(), "city=washington month=all day=Friday");

        assert!(FilterCriteria::parse("washington", "december", "all").is_err());
    }

    #[test]
    fn test_derived_fields_follow_start_time() {
        // 2017-03-05 was a Sunday
        let trip = TripRecord::new(at(2017, 3, 5, 22), "A", "B", 60.0);
        assert_eq!(trip.month(), 3);
        assert_eq!(trip.day_of_week(), Weekday::Sun);
        assert_eq!(trip.day_name(), "Sunday");
        assert_eq!(trip.hour(), 22);
        assert_eq!(trip.start_time(), at(2017, 3, 5, 22));
    }

    #[test]
    fn test_retain_rows_keeps_order_and_columns() {
        let table = TripTable::new(
            City::Chicago,
            Columns::all(),
            vec![
                TripRecord::new(at(2017, 1, 2, 8), "A", "B", 10.0),
                TripRecord::new(at(2017, 2, 2, 8), "C", "D", 20.0),
                TripRecord::new(at(2017, 1, 9, 8), "E", "F", 30.0),
            ],
        );

        let january = table.retain_rows(|trip| trip.month() == 1);
        assert_eq!(january.len(), 2);
        assert_eq!(january.rows()[0].start_station, "A");
        assert_eq!(january.rows()[1].start_station, "E");
        assert_eq!(january.columns(), Columns::all());
        assert_eq!(january.city(), City::Chicago);
    }

    #[test]
    fn test_columns_follow_row_values() {
        let table = TripTable::new(
            City::Washington,
            Columns::default(),
            vec![TripRecord::new(at(2017, 1, 2, 8), "A", "B", 10.0).with_gender("Female")],
        );
        assert!(table.has_gender());
        assert!(!table.has_birth_year());

        // A declared column with no values stays declared
        let declared = TripTable::empty(City::Chicago, Columns::all());
        assert_eq!(declared.columns(), Columns::all());
    }
}
