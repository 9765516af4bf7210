//! CLI entry point for the bikeshare trip explorer.
//!
//! Provides a scripted `analyze` subcommand and the interactive prompt loop
//! that collects city/month/day selections and pages through raw rows.

use anyhow::Result;
use bikeshare_stats::cities::City;
use bikeshare_stats::dataset::{DayFilter, MonthFilter, TripTable, load_trips};
use bikeshare_stats::output::{print_json, print_raw_page, print_report};
use bikeshare_stats::stats::analyze;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

/// Rows shown per page when viewing raw data.
const PAGE_SIZE: usize = 10;

#[derive(Parser)]
#[command(name = "bikeshare_stats")]
#[command(about = "Explore US bikeshare trip data", long_about = None)]
struct Cli {
    /// Directory containing the city CSV files
    /// (BIKESHARE_DATA_DIR overrides this when set)
    #[arg(long, default_value = "data")]
    data_dir: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze trips for one city with optional month/day filters
    Analyze {
        /// City: c, n, w, or a full city name
        city: String,

        /// Month filter: all, january..june
        #[arg(short, long, default_value = "all")]
        month: String,

        /// Day filter: all, monday..sunday
        #[arg(short, long, default_value = "all")]
        day: String,

        /// Emit the result bundles as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Dump the filtered rows after the statistics, a page at a time
        #[arg(long)]
        raw: bool,
    },
    /// Prompt for city, month, and day, with a run-again loop
    Interactive,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    fmt()
        .with_target(true)
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let data_dir = PathBuf::from(
        std::env::var("BIKESHARE_DATA_DIR").unwrap_or(cli.data_dir),
    );

    match cli.command {
        Commands::Analyze {
            city,
            month,
            day,
            json,
            raw,
        } => {
            let city = City::parse(&city)?;
            let month = MonthFilter::parse(&month)?;
            let day = DayFilter::parse(&day)?;

            let table = load_trips(&data_dir, city, month, day)?;
            let report = analyze(&table);

            if json {
                print_json(&report)?;
            } else {
                print_report(&report);
            }

            if raw {
                let mut offset = 0;
                while let Some(rows) = table.page(offset, PAGE_SIZE) {
                    print_raw_page(rows, offset);
                    offset += PAGE_SIZE;
                }
            }
        }
        Commands::Interactive => loop {
            run_interactive(&data_dir)?;
            let again = prompt("\nWould you like to restart? Enter yes.\n")?;
            if again != "yes" {
                break;
            }
        },
    }

    Ok(())
}

/// One pass of the original prompt flow: filters, report, raw-row paging.
fn run_interactive(data_dir: &std::path::Path) -> Result<()> {
    println!("Hello! Let's explore some US bikeshare data!\n");

    let city = prompt_until_valid(
        "Choose a city (c = Chicago, n = New York City, w = Washington):\n",
        |input| City::parse(input).ok(),
    )?;
    let month = prompt_until_valid(
        "\nWhich month? all, january, february, march, april, may or june?\n",
        |input| MonthFilter::parse(input).ok(),
    )?;
    let day = prompt_until_valid(
        "\nWhich day? all, monday, tuesday, wednesday, thursday, friday, saturday or sunday?\n",
        |input| DayFilter::parse(input).ok(),
    )?;

    info!(city = city.display_name(), "Loading trips");
    let table = load_trips(data_dir, city, month, day)?;
    let report = analyze(&table);
    print_report(&report);

    page_raw_rows(&table)
}

/// Shows raw rows ten at a time for as long as the user keeps answering yes.
fn page_raw_rows(table: &TripTable) -> Result<()> {
    let mut answer = prompt("\nDo you want to see raw data? Type y or yes to see data\n")?;
    let mut offset = 0;

    while answer == "y" || answer == "yes" {
        match table.page(offset, PAGE_SIZE) {
            Some(rows) => {
                println!("{} rows in the filtered set", table.len());
                print_raw_page(rows, offset);
            }
            None => {
                println!("\nThere is no more data to show\n");
                break;
            }
        }
        offset += PAGE_SIZE;
        answer = prompt("\nDo you want to see more data? Type y or yes to see data\n")?;
    }

    println!("\nEnding showing raw data\n");
    Ok(())
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_lowercase())
}

fn prompt_until_valid<T>(message: &str, parse: impl Fn(&str) -> Option<T>) -> Result<T> {
    loop {
        let input = prompt(message)?;
        if let Some(value) = parse(&input) {
            return Ok(value);
        }
        println!("    Sorry, I do not know what you mean. Please try again.");
    }
}
