//! Pipeline for narrowing trip tables and paging through them.
//!
//! This crate provides:
//! - Filter trait and the month / day-of-week filters
//! - FilterPipeline for composing filters
//! - `load`, which reads a city's dataset and applies the selected filters
//! - A stateless paginated viewer over table rows
//!
//! ## Example Usage
//! ```ignore
//! use data_loader::FilterCriteria;
//! use pipeline::{load, viewer::Pager};
//!
//! let criteria = FilterCriteria::parse("chicago", "march", "friday")?;
//! let table = load(Path::new("data"), &criteria)?;
//!
//! let mut pager = Pager::default();
//! for trip in pager.next_page(&table) {
//!     println!("{} -> {}", trip.start_station, trip.end_station);
//! }
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod load;
pub mod viewer;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use load::{filter, load, load_by_name};
pub use viewer::{DEFAULT_PAGE_SIZE, Pager, window};
