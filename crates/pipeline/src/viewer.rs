//! Paginated access to a trip table's raw rows.
//!
//! The viewer itself holds no state; callers keep the offset (directly or
//! in a `Pager`) and ask for one window at a time.

use data_loader::{TripRecord, TripTable};

/// Rows shown per page unless the caller asks otherwise
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Up to `size` rows starting at `offset`
///
/// Returns fewer rows near the end and an empty slice once `offset` is past
/// the last row. Never fails.
pub fn window(table: &TripTable, offset: usize, size: usize) -> &[TripRecord] {
    let rows = table.rows();
    let start = offset.min(rows.len());
    let end = offset.saturating_add(size).min(rows.len());
    &rows[start..end]
}

/// Caller-held cursor over successive windows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    offset: usize,
    size: usize,
}

impl Pager {
    /// A pager at the first row; a zero `size` is raised to one row
    pub fn new(size: usize) -> Self {
        Self {
            offset: 0,
            size: size.max(1),
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn page_size(&self) -> usize {
        self.size
    }

    /// The current window; advances the offset past it
    pub fn next_page<'a>(&mut self, table: &'a TripTable) -> &'a [TripRecord] {
        let page = window(table, self.offset, self.size);
        self.offset = self.offset.saturating_add(page.len());
        page
    }

    /// Whether another call to `next_page` would return rows
    pub fn has_more(&self, table: &TripTable) -> bool {
        self.offset < table.len()
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use data_loader::{City, Columns};

    fn table_of(n: usize) -> TripTable {
        let start = NaiveDate::from_ymd_opt(2017, 2, 1)
            .unwrap()
            .and_hms_opt(7, 0, 0)
            .unwrap();
        let rows = (0..n)
            .map(|i| TripRecord::new(start, format!("row-{i}"), "Dock", i as f64))
            .collect();
        TripTable::new(City::Chicago, Columns::all(), rows)
    }

    #[test]
    fn test_window_shorter_than_page() {
        let table = table_of(3);
        let page = window(&table, 0, DEFAULT_PAGE_SIZE);
        assert_eq!(page.len(), 3);
        assert_eq!(page, table.rows());
    }

    #[test]
    fn test_window_past_end_is_empty() {
        let table = table_of(3);
        assert!(window(&table, 10, 5).is_empty());
        assert!(window(&table, 3, 5).is_empty());
        assert!(window(&table, usize::MAX, 5).is_empty());
    }

    #[test]
    fn test_window_partial_last_page() {
        let table = table_of(7);
        let page = window(&table, 5, 5);
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].start_station, "row-5");
    }

    #[test]
    fn test_pager_walks_the_table() {
        let table = table_of(12);
        let mut pager = Pager::default();

        assert_eq!(pager.next_page(&table).len(), 5);
        assert_eq!(pager.next_page(&table)[0].start_station, "row-5");
        assert!(pager.has_more(&table));
        assert_eq!(pager.next_page(&table).len(), 2);
        assert!(!pager.has_more(&table));
        assert!(pager.next_page(&table).is_empty());
        assert_eq!(pager.offset(), 12);

        pager.reset();
        assert_eq!(pager.next_page(&table)[0].start_station, "row-0");
    }

    #[test]
    fn test_zero_page_size_still_advances() {
        let table = table_of(2);
        let mut pager = Pager::new(0);
        assert_eq!(pager.page_size(), 1);

        assert_eq!(pager.next_page(&table).len(), 1);
        assert_eq!(pager.next_page(&table).len(), 1);
        assert!(!pager.has_more(&table));
    }
}
