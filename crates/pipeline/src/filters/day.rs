//! Filter trips by the weekday they started on.

use crate::traits::Filter;
use data_loader::{TripRecord, Weekday};

/// Keeps trips whose derived weekday equals the chosen day.
pub struct DayFilter {
    day: Weekday,
}

impl DayFilter {
    pub fn new(day: Weekday) -> Self {
        Self { day }
    }
}

impl Filter for DayFilter {
    fn name(&self) -> &str {
        "DayFilter"
    }

    fn keep(&self, trip: &TripRecord) -> bool {
        trip.day_of_week() == self.day
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use data_loader::{City, Columns, TripTable};

    #[test]
    fn test_day_filter() {
        // 2017-01-02 is a Monday; days 2..=8 cover one full week
        let rows = (2..=8)
            .map(|day| {
                let start = NaiveDate::from_ymd_opt(2017, 1, day)
                    .unwrap()
                    .and_hms_opt(8, 30, 0)
                    .unwrap();
                TripRecord::new(start, format!("station-{day}"), "Dock", 60.0)
            })
            .collect();
        let table = TripTable::new(City::Washington, Columns::default(), rows);

        let saturdays = DayFilter::new(Weekday::Sat).apply(table);

        assert_eq!(saturdays.len(), 1);
        assert_eq!(saturdays.rows()[0].start_station, "station-7");
        assert_eq!(saturdays.rows()[0].day_name(), "Saturday");
    }
}
