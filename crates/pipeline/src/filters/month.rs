//! Filter trips by the calendar month they started in.

use crate::traits::Filter;
use data_loader::{Month, TripRecord};

/// Keeps trips whose derived month equals the chosen month.
pub struct MonthFilter {
    month: Month,
}

impl MonthFilter {
    pub fn new(month: Month) -> Self {
        Self { month }
    }
}

impl Filter for MonthFilter {
    fn name(&self) -> &str {
        "MonthFilter"
    }

    fn keep(&self, trip: &TripRecord) -> bool {
        trip.month() == self.month.number()
    }
}
