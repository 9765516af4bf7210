//! Descriptive statistics over a filtered trip table.
//!
//! Four independent groups: times of travel, station popularity, trip
//! durations, and rider demographics. Each is a pure function of the table
//! and tolerates empty input and absent source columns.

pub mod duration;
pub mod stations;
pub mod time;
pub mod types;
pub mod users;
pub mod utility;

use serde::Serialize;
use std::time::Instant;
use tracing::debug;

use crate::dataset::TripTable;
use crate::stats::types::AnalysisReport;

/// A statistic bundle together with the wall-clock time it took to compute.
#[derive(Debug, Clone, Serialize)]
pub struct Timed<T> {
    pub stats: T,
    pub elapsed_seconds: f64,
}

fn timed<T>(label: &str, compute: impl FnOnce() -> T) -> Timed<T> {
    let start = Instant::now();
    let stats = compute();
    let elapsed_seconds = start.elapsed().as_secs_f64();
    debug!(label, elapsed_seconds, "Statistic group computed");
    Timed {
        stats,
        elapsed_seconds,
    }
}

/// Computes all four statistic groups over the table.
///
/// The groups share no state; any order would produce the same report.
pub fn analyze(table: &TripTable) -> AnalysisReport {
    AnalysisReport {
        time: timed("time", || time::time_stats(table)),
        stations: timed("stations", || stations::station_stats(table)),
        durations: timed("durations", || duration::duration_stats(table)),
        users: timed("users", || users::user_stats(table)),
    }
}

pub use types::{ColumnStat, Hms};
