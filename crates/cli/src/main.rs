use anyhow::{Context, Result};
use clap::Parser;
use data_loader::{parse_day, parse_month, City, FilterCriteria, ALL};
use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing::info;

mod render;
mod session;

use render::ReportBundle;
use session::Session;

/// Bikeshare - explore US bike share trip data
#[derive(Parser)]
#[command(name = "bikeshare")]
#[command(about = "Descriptive statistics over US bike share trips", long_about = None)]
struct Cli {
    /// Directory holding chicago.csv, new_york_city.csv and washington.csv
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Raw trips shown per page
    #[arg(long, default_value = "5")]
    page_size: NonZeroUsize,

    /// Run once for this city without prompting
    #[arg(long)]
    city: Option<City>,

    /// Month filter (january..june or "all") for --city
    #[arg(long, requires = "city")]
    month: Option<String>,

    /// Day filter (monday..sunday or "all") for --city
    #[arg(long, requires = "city")]
    day: Option<String>,

    /// Print the reports as JSON (with --city)
    #[arg(long, requires = "city")]
    json: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so they never mix with prompts and reports
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.city {
        Some(city) => handle_once(&cli, city),
        None => {
            let mut session = Session::new(
                io::stdin().lock(),
                io::stdout(),
                cli.data_dir.clone(),
                cli.page_size.get(),
            );
            session.run()
        }
    }
}

/// Handle a non-interactive run selected with --city
fn handle_once(cli: &Cli, city: City) -> Result<()> {
    let criteria = FilterCriteria {
        city,
        month: parse_month(cli.month.as_deref().unwrap_or(ALL))?,
        day: parse_day(cli.day.as_deref().unwrap_or(ALL))?,
    };
    info!(%criteria, "Running once");

    let table = pipeline::load(&cli.data_dir, &criteria)
        .with_context(|| format!("Failed to load trips for {}", criteria.city))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut out, &ReportBundle::compute(&table, &criteria))?;
        writeln!(out)?;
    } else {
        writeln!(out, "{} trips selected ({})", table.len(), criteria)?;
        render::write_reports(&mut out, &table)?;
    }
    Ok(())
}
