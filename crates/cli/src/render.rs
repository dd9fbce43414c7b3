//! Console rendering of the four reports and of raw trip rows.

use colored::Colorize;
use data_loader::{weekday_name, FilterCriteria, Month, TripRecord, TripTable, ALL};
use serde::Serialize;
use stats::{
    duration_stats, station_stats, time_stats, user_stats, Availability, DurationReport,
    StationReport, StatsError, TimeReport, UserReport, ValueCount,
};
use std::io::{self, Write};
use std::time::Instant;
use tracing::debug;

const SEPARATOR_WIDTH: usize = 40;

/// Print all four reports, each followed by the time it took
pub fn write_reports(out: &mut dyn Write, table: &TripTable) -> io::Result<()> {
    section(out, "Calculating The Most Frequent Times of Travel...", |out| {
        match time_stats(table) {
            Ok(report) => write_time(out, &report),
            Err(err) => write_no_data(out, &err),
        }
    })?;
    section(out, "Calculating The Most Popular Stations and Trip...", |out| {
        match station_stats(table) {
            Ok(report) => write_stations(out, &report),
            Err(err) => write_no_data(out, &err),
        }
    })?;
    section(out, "Calculating Trip Duration...", |out| {
        match duration_stats(table) {
            Ok(report) => write_duration(out, &report),
            Err(err) => write_no_data(out, &err),
        }
    })?;
    section(out, "Calculating User Stats...", |out| {
        write_users(out, &user_stats(table))
    })
}

fn section(
    out: &mut dyn Write,
    title: &str,
    body: impl FnOnce(&mut dyn Write) -> io::Result<()>,
) -> io::Result<()> {
    writeln!(out, "\n{}\n", title.bold().blue())?;
    let started = Instant::now();
    body(out)?;
    writeln!(out, "\nThis took {:.6} seconds.", started.elapsed().as_secs_f64())?;
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))
}

fn write_no_data(out: &mut dyn Write, err: &StatsError) -> io::Result<()> {
    debug!(%err, "Report skipped");
    writeln!(
        out,
        "{}",
        "No trips match these filters, so there is nothing to compute.".yellow()
    )
}

fn write_time(out: &mut dyn Write, report: &TimeReport) -> io::Result<()> {
    writeln!(
        out,
        "Month with the highest usage is: {} ({} trips)",
        month_label(report.popular_month.value),
        report.popular_month.count
    )?;
    writeln!(
        out,
        "Most popular day of the week is: {} ({} trips)",
        report.popular_day.value, report.popular_day.count
    )?;
    writeln!(
        out,
        "Most frequent start hour: {:02}:00 ({} trips)",
        report.popular_hour.value, report.popular_hour.count
    )
}

fn write_stations(out: &mut dyn Write, report: &StationReport) -> io::Result<()> {
    writeln!(
        out,
        "Most popular start station is: {} ({} trips)",
        report.popular_start.value, report.popular_start.count
    )?;
    writeln!(
        out,
        "Most popular end station is: {} ({} trips)",
        report.popular_end.value, report.popular_end.count
    )?;
    let (from, to) = &report.popular_trip.value;
    writeln!(
        out,
        "Most frequently used combination of start and end stations is: {} → {} ({} trips)",
        from, to, report.popular_trip.count
    )
}

fn write_duration(out: &mut dyn Write, report: &DurationReport) -> io::Result<()> {
    writeln!(
        out,
        "Total cumulative travel time is: {}",
        format_hms(report.total_seconds)
    )?;
    writeln!(
        out,
        "Bike users' average travel time is: {}",
        format_hms(report.mean_seconds)
    )?;
    writeln!(
        out,
        "Shortest trip: {}  Longest trip: {}  ({} trips)",
        format_hms(report.shortest_seconds),
        format_hms(report.longest_seconds),
        report.trips
    )
}

fn write_users(out: &mut dyn Write, report: &UserReport) -> io::Result<()> {
    writeln!(out, "{}", "User types:".bold())?;
    if report.user_types.is_empty() {
        writeln!(out, "  No user type recorded for these trips.")?;
    }
    write_counts(out, &report.user_types)?;

    match &report.gender {
        Availability::Available(counts) => {
            writeln!(out, "{}", "Gender:".bold())?;
            write_counts(out, counts)?;
        }
        Availability::Unavailable => {
            writeln!(out, "Sorry, there is no gender data at the moment.")?
        }
        Availability::NoData => writeln!(out, "No gender recorded for these trips.")?,
    }

    match &report.birth_years {
        Availability::Available(years) => writeln!(
            out,
            "The oldest user is born in {}. \nThe youngest user is born in {}. \nMost users are born in {}.",
            years.earliest, years.most_recent, years.most_common
        ),
        Availability::Unavailable => {
            writeln!(out, "Sorry, there is no birth year data at the moment.")
        }
        Availability::NoData => writeln!(out, "No birth year recorded for these trips."),
    }
}

fn write_counts(out: &mut dyn Write, counts: &[ValueCount]) -> io::Result<()> {
    for entry in counts {
        writeln!(out, "  {:<12} {}", entry.value, entry.count)?;
    }
    Ok(())
}

/// Print raw trips; `offset` is the table position of the first row
pub fn write_trips(out: &mut dyn Write, rows: &[TripRecord], offset: usize) -> io::Result<()> {
    for (i, trip) in rows.iter().enumerate() {
        writeln!(
            out,
            "{} {} → {} ({})",
            format!("#{}", offset + i + 1).green(),
            trip.start_time(),
            trip.end_time,
            format_hms(trip.duration_secs)
        )?;
        writeln!(out, "    {} → {}", trip.start_station, trip.end_station)?;

        let rider: Vec<String> = [
            trip.user_type.clone(),
            trip.gender.clone(),
            trip.birth_year.map(|year| format!("born {year}")),
        ]
        .into_iter()
        .flatten()
        .collect();
        if !rider.is_empty() {
            writeln!(out, "    {}", rider.join(", "))?;
        }
    }
    Ok(())
}

/// Elapsed seconds as H:MM:SS; hours keep counting past 24
pub fn format_hms(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
}

/// "March" for 3; months outside the dataset range fall back to the number
pub fn month_label(number: u32) -> String {
    match Month::from_number(number) {
        Some(month) => capitalize(month.name()),
        None => number.to_string(),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Every report for one selection, shaped for `--json`
///
/// Reports that need at least one trip are `null` for an empty selection.
#[derive(Debug, Serialize)]
pub struct ReportBundle {
    pub city: &'static str,
    pub month: &'static str,
    pub day: &'static str,
    pub trips: usize,
    pub time: Option<TimeReport>,
    pub stations: Option<StationReport>,
    pub duration: Option<DurationReport>,
    pub users: UserReport,
}

impl ReportBundle {
    pub fn compute(table: &TripTable, criteria: &FilterCriteria) -> Self {
        Self {
            city: criteria.city.name(),
            month: criteria.month.map(Month::name).unwrap_or(ALL),
            day: criteria.day.map(weekday_name).unwrap_or(ALL),
            trips: table.len(),
            time: time_stats(table).ok(),
            stations: station_stats(table).ok(),
            duration: duration_stats(table).ok(),
            users: user_stats(table),
        }
    }
}
