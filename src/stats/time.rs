//! Most frequent times of travel.

use crate::dataset::TripTable;
use crate::stats::types::TimeStats;
use crate::stats::utility::mode;

/// Modal month, day of week, and start hour. `None` when the table is empty;
/// all three modes exist or none does, since they come from the same rows.
pub fn time_stats(table: &TripTable) -> Option<TimeStats> {
    let most_common_month = mode(table.records().iter().map(|r| r.month))?;
    let most_common_day_of_week = mode(table.records().iter().map(|r| r.day_of_week))?;
    let most_common_start_hour = mode(table.records().iter().map(|r| r.start_hour()))?;

    Some(TimeStats {
        most_common_month,
        most_common_day_of_week,
        most_common_start_hour,
    })
}
