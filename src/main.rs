use chrono::NaiveDate;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use ncei_daily::{NceiClient, ServiceConfig, StationQuery, VariableMode};
use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Retrieve daily summaries from the NCEI data service and save them to netCDF files.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// NCEI station IDs, separated by spaces and/or commas
    #[arg(required = true, value_name = "STATION")]
    stations: Vec<String>,

    /// Print station information only, without retrieving data
    #[arg(short, long)]
    info: bool,

    /// Retrieve every available element instead of the core five
    #[arg(short, long)]
    all: bool,

    /// Start date in YYYY-MM-DD format [default: 1750-01-01]
    #[arg(short, long, value_parser = parse_date)]
    start: Option<NaiveDate>,

    /// End date in YYYY-MM-DD format [default: today]
    #[arg(short, long, value_parser = parse_date)]
    end: Option<NaiveDate>,

    /// Directory to save files in
    #[arg(short, long, default_value = ".")]
    path: PathBuf,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Only log warnings and errors
    #[arg(long)]
    quiet: bool,
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("'{value}' is not a YYYY-MM-DD date: {e}"))
}

fn split_stations(raw: &[String]) -> Vec<String> {
    raw.iter()
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|station| !station.is_empty())
        .map(str::to_string)
        .collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let default_filter = if args.quiet { "warn" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = ServiceConfig::builder()
        .maybe_timeout(args.timeout.map(Duration::from_secs))
        .build();
    let start = args.start.unwrap_or(config.epoch_start);

    let client = NceiClient::builder()
        .config(config)
        .output_dir(args.path.clone())
        .build()?;
    let end = args.end.unwrap_or_else(|| client.today());

    if start > end {
        Args::command()
            .error(
                ErrorKind::ArgumentConflict,
                format!("start date {start} is after end date {end}"),
            )
            .exit();
    }

    let mode = if args.all {
        VariableMode::All
    } else {
        VariableMode::Core
    };
    let queries: Vec<StationQuery> = split_stations(&args.stations)
        .into_iter()
        .map(|station| {
            StationQuery::builder()
                .station(station)
                .start(start)
                .end(end)
                .mode(mode)
                .info_only(args.info)
                .build()
        })
        .collect();

    let summary = client.run(&queries);
    for report in &summary.reports {
        println!("{report}");
    }
    for path in &summary.saved {
        println!("Saved data to {}", path.display());
    }

    Ok(())
}
