//! Loading a city's trips from disk into a TripTable.
//!
//! The file is opened read-only and fully materialised; a bad row fails the
//! whole load so two loads of the same file always agree.

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::{City, TripTable};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, instrument};

impl TripTable {
    /// Load every trip for `city` from `data_dir`
    ///
    /// This is the main entry point for loading data. The file name comes
    /// from the fixed city mapping (`City::file_name`).
    #[instrument(skip(data_dir), fields(data_dir = %data_dir.display()))]
    pub fn load_city(data_dir: &Path, city: City) -> Result<Self> {
        Self::load_from_path(&data_dir.join(city.file_name()), city)
    }

    /// Load trips for `city` from an explicit CSV path
    pub fn load_from_path(path: &Path, city: City) -> Result<Self> {
        if !path.is_file() {
            return Err(DataLoadError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let file = File::open(path)?;
        debug!("Reading {}", path.display());

        let table = Self::from_reader(BufReader::new(file), city)?;
        info!(
            city = %city,
            trips = table.len(),
            gender = table.has_gender(),
            birth_year = table.has_birth_year(),
            "Loaded trip dataset"
        );
        Ok(table)
    }

    /// Build a table from any CSV source (files, in-memory buffers in tests)
    pub fn from_reader<R: Read>(reader: R, city: City) -> Result<Self> {
        let (columns, rows) = parser::parse_trips(reader, city.file_name())?;
        Ok(TripTable::new(city, columns, rows))
    }
}
