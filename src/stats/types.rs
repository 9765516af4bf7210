//! Result bundles produced by the statistics engine.
//!
//! Every bundle is a plain serializable value so that any presentation
//! layer (terminal text, JSON) can consume it uniformly.

use serde::Serialize;

use crate::stats::Timed;

/// Modal times of travel. Ordinals follow the dataset convention:
/// month 1 = January, day 1 = Monday, hour 0-23.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeStats {
    pub most_common_month: u32,
    pub most_common_day_of_week: u32,
    pub most_common_start_hour: u32,
}

/// Modal stations and station pair. The trip key is direction-sensitive:
/// "A to B" and "B to A" count separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationStats {
    pub most_common_start_station: String,
    pub most_common_end_station: String,
    pub most_common_trip: String,
}

/// Total and average trip duration, in seconds. `trip_count == 0` is the
/// explicit empty outcome; both sums are 0.0 in that case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationStats {
    pub total_seconds: f64,
    pub average_seconds: f64,
    pub trip_count: usize,
}

/// A duration broken into whole hours, minutes, and seconds by truncating
/// division. Fractional seconds are dropped, never rounded up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hms {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Hms {
    pub fn from_seconds(total: f64) -> Hms {
        let whole = if total.is_finite() && total > 0.0 {
            total.trunc() as u64
        } else {
            0
        };
        Hms {
            hours: whole / 3600,
            minutes: whole % 3600 / 60,
            seconds: whole % 60,
        }
    }
}

/// Outcome of a statistic over an optional source column.
///
/// `Unavailable` means the column is absent from the dataset entirely;
/// `NoData` means the column exists but no row has a usable value. The two
/// must stay distinguishable for callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum ColumnStat<T> {
    Available(T),
    NoData,
    Unavailable,
}

impl<T> ColumnStat<T> {
    pub fn as_available(&self) -> Option<&T> {
        match self {
            ColumnStat::Available(v) => Some(v),
            _ => None,
        }
    }
}

/// Occurrence count for one categorical value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub value: String,
    pub count: usize,
}

/// Min, max, and mode of the birth-year column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthYearSummary {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// Rider demographics. Each result is independent: one column being absent
/// leaves the others untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub user_type_counts: ColumnStat<Vec<CategoryCount>>,
    pub gender_counts: ColumnStat<Vec<CategoryCount>>,
    pub birth_year_summary: ColumnStat<BirthYearSummary>,
}

/// All four statistic groups for one filtered trip table.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub time: Timed<Option<TimeStats>>,
    pub stations: Timed<Option<StationStats>>,
    pub durations: Timed<DurationStats>,
    pub users: Timed<UserStats>,
}
