//! Text and JSON rendering of an analysis report.
//!
//! The statistics engine returns plain values; everything about how they
//! look on a terminal lives here.

use anyhow::Result;

use crate::dataset::{DAY_NAMES, MONTH_NAMES, TripRecord};
use crate::stats::Hms;
use crate::stats::types::{AnalysisReport, CategoryCount, ColumnStat};

const RULE: &str = "----------------------------------------";

fn month_name(ordinal: u32) -> &'static str {
    match ordinal {
        1..=6 => MONTH_NAMES[ordinal as usize - 1],
        7 => "july",
        8 => "august",
        9 => "september",
        10 => "october",
        11 => "november",
        12 => "december",
        _ => "unknown",
    }
}

fn day_name(ordinal: u32) -> &'static str {
    match ordinal {
        1..=7 => DAY_NAMES[ordinal as usize - 1],
        _ => "unknown",
    }
}

fn format_hms(seconds: f64) -> String {
    let hms = Hms::from_seconds(seconds);
    format!(
        "{} hours, {} minutes and {} seconds",
        hms.hours, hms.minutes, hms.seconds
    )
}

/// Prints the whole report as terminal text, one section per statistic group.
pub fn print_report(report: &AnalysisReport) {
    println!("\nMost frequent times of travel:");
    match &report.time.stats {
        Some(time) => {
            println!("  Month:       {}", month_name(time.most_common_month));
            println!("  Day of week: {}", day_name(time.most_common_day_of_week));
            println!("  Start hour:  {:02}:00", time.most_common_start_hour);
        }
        None => println!("  No trips matched the filter."),
    }
    println!("{RULE}");

    println!("\nMost popular stations and trip:");
    match &report.stations.stats {
        Some(stations) => {
            println!("  Start station: {}", stations.most_common_start_station);
            println!("  End station:   {}", stations.most_common_end_station);
            println!("  Trip:          {}", stations.most_common_trip);
        }
        None => println!("  No trips matched the filter."),
    }
    println!("{RULE}");

    println!("\nTrip durations:");
    let durations = &report.durations.stats;
    if durations.trip_count == 0 {
        println!("  No trips matched the filter.");
    } else {
        println!(
            "  Total trip time over this period is {}.",
            format_hms(durations.total_seconds)
        );
        println!(
            "  Average trip time over this period is {}.",
            format_hms(durations.average_seconds)
        );
    }
    println!("{RULE}");

    println!("\nRider demographics:");
    print_counts("user type", &report.users.stats.user_type_counts);
    print_counts("gender", &report.users.stats.gender_counts);
    match &report.users.stats.birth_year_summary {
        ColumnStat::Available(summary) => {
            println!("  Most senior rider born in: {}", summary.earliest);
            println!("  Youngest rider born in:    {}", summary.most_recent);
            println!("  Most common birth year:    {}", summary.most_common);
        }
        ColumnStat::NoData => println!("  No birth year values in the filtered data."),
        ColumnStat::Unavailable => {
            println!("  No birth year data available in this data set.")
        }
    }
    println!("{RULE}");
}

fn print_counts(label: &str, stat: &ColumnStat<Vec<CategoryCount>>) {
    match stat {
        ColumnStat::Available(counts) => {
            println!("  Number of trips per {label}:");
            for entry in counts {
                println!("    {:<12} {}", entry.value, entry.count);
            }
        }
        ColumnStat::NoData => println!("  No {label} values in the filtered data."),
        ColumnStat::Unavailable => println!("  No {label} data available in this data set."),
    }
}

/// Emits the report as pretty-printed JSON on stdout.
pub fn print_json(report: &AnalysisReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Prints one page of raw trip rows, numbered from the table offset.
pub fn print_raw_page(rows: &[TripRecord], offset: usize) {
    for (i, row) in rows.iter().enumerate() {
        println!(
            "{:>6}  {}  {} -> {}  ({}s)",
            offset + i,
            row.start_time,
            row.start_station,
            row.end_station,
            row.trip_duration
        );
    }
}
