//! Total and average trip duration.

use crate::dataset::TripTable;
use crate::stats::types::DurationStats;

/// Sum and arithmetic mean of `trip_duration` over the table. An empty
/// table yields zeros with `trip_count == 0` rather than a division error.
pub fn duration_stats(table: &TripTable) -> DurationStats {
    let trip_count = table.len();
    let total_seconds: f64 = table.records().iter().map(|r| r.trip_duration).sum();
    let average_seconds = if trip_count == 0 {
        0.0
    } else {
        total_seconds / trip_count as f64
    };

    DurationStats {
        total_seconds,
        average_seconds,
        trip_count,
    }
}
