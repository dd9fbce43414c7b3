//! The interactive question-and-answer loop.
//!
//! Reads answers line by line from any `BufRead` and writes prompts and
//! reports to any `Write`, so the whole conversation can be driven from a
//! test. End of input ends the session quietly.

use crate::render;
use anyhow::Result;
use colored::Colorize;
use data_loader::{parse_day, parse_month, City, FilterCriteria, TripTable};
use pipeline::Pager;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};

pub struct Session<R, W> {
    input: R,
    output: W,
    data_dir: PathBuf,
    page_size: usize,
    /// Unfiltered tables from earlier rounds, keyed by city
    cache: HashMap<City, TripTable>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, data_dir: PathBuf, page_size: usize) -> Self {
        Self {
            input,
            output,
            data_dir,
            page_size,
            cache: HashMap::new(),
        }
    }

    /// Run rounds of filter → reports → raw data until the user stops
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "{}", "Hello! Let's explore some US bikeshare data!".bold())?;

            let Some(criteria) = self.get_filters()? else {
                return Ok(());
            };
            info!(%criteria, "Exploring selection");

            match self.load(&criteria) {
                Ok(table) => {
                    render::write_reports(&mut self.output, &table)?;
                    self.show_raw_data(&table)?;
                }
                Err(err) => writeln!(self.output, "{} {}", "Could not load data:".red(), err)?,
            }

            let Some(answer) = self.prompt("\nWould you like to restart? Enter yes or no.\n")? else {
                return Ok(());
            };
            if !answer.eq_ignore_ascii_case("yes") {
                return Ok(());
            }
        }
    }

    /// Ask for city, month and day, re-asking until each answer is valid
    fn get_filters(&mut self) -> Result<Option<FilterCriteria>> {
        let Some(city) = self.ask_until(
            "Which city's data would you like to see? (Chicago, New York City, Washington): ",
            "Sorry, there is no data for that city.",
            |answer| answer.parse::<City>(),
        )?
        else {
            return Ok(None);
        };
        let Some(month) = self.ask_until(
            "Enter the month you would like to see data for. If not, enter 'all': ",
            "Our database only has data from January to June. If you want to see all data, enter 'all'",
            parse_month,
        )?
        else {
            return Ok(None);
        };
        let Some(day) = self.ask_until(
            "Enter the day of week, or 'all': ",
            "Please enter a day of the week, or 'all'.",
            parse_day,
        )?
        else {
            return Ok(None);
        };

        writeln!(self.output, "{}", "-".repeat(40))?;
        Ok(Some(FilterCriteria { city, month, day }))
    }

    /// Load the selection, reusing an earlier unfiltered table for the city
    fn load(&mut self, criteria: &FilterCriteria) -> data_loader::Result<TripTable> {
        let full = match self.cache.entry(criteria.city) {
            Entry::Occupied(entry) => {
                debug!(city = %criteria.city, "Using cached trips");
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(TripTable::load_city(&self.data_dir, criteria.city)?),
        };
        Ok(pipeline::filter(full.clone(), criteria))
    }

    /// Offer the selected rows page by page
    fn show_raw_data(&mut self, table: &TripTable) -> Result<()> {
        let size = self.page_size;
        let mut pager = Pager::new(size);
        let mut question = format!("Would you like to view {size} rows of individual trip data? yes/no: ");

        loop {
            if !pager.has_more(table) {
                let message = if pager.offset() == 0 {
                    "No trips to show."
                } else {
                    "No more trips to show."
                };
                writeln!(self.output, "{message}")?;
                return Ok(());
            }
            if self.ask_yes_no(&question)? != Some(true) {
                return Ok(());
            }

            let offset = pager.offset();
            render::write_trips(&mut self.output, pager.next_page(table), offset)?;
            question = format!("View the next {size}? yes/no: ");
        }
    }

    fn ask_yes_no(&mut self, question: &str) -> Result<Option<bool>> {
        self.ask_until(question, "Invalid input. Please enter 'yes' or 'no'.", |answer| {
            match answer.to_lowercase().as_str() {
                "yes" => Ok(true),
                "no" => Ok(false),
                _ => Err(()),
            }
        })
    }

    /// Repeat `question` until `parse` accepts the answer
    fn ask_until<T, E: std::fmt::Debug>(
        &mut self,
        question: &str,
        retry: &str,
        parse: impl Fn(&str) -> std::result::Result<T, E>,
    ) -> Result<Option<T>> {
        loop {
            let Some(answer) = self.prompt(question)? else {
                return Ok(None);
            };
            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => {
                    debug!(?err, answer = %answer, "Rejected input");
                    writeln!(self.output, "{}", retry.yellow())?;
                }
            }
        }
    }

    /// Print `question` and read one trimmed line; `None` at end of input
    fn prompt(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
