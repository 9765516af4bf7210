//! Trip dataset loading and filtering.
//!
//! Reads a city's CSV into memory, derives calendar fields from the start
//! timestamp, and restricts rows by month and day-of-week criteria.

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::cities::City;

/// Month names accepted by the month filter, ordinal = index + 1.
/// The datasets span January through June only.
pub const MONTH_NAMES: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

/// Day names accepted by the day filter, ordinal = index + 1 (Monday = 1).
/// Must stay aligned with `Weekday::number_from_monday`, which the loader
/// uses to derive `day_of_week`.
pub const DAY_NAMES: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("unknown city `{0}`")]
    UnknownCity(String),
    #[error("unknown month `{0}` (expected all, january..june)")]
    UnknownMonth(String),
    #[error("unknown day `{0}` (expected all, monday..sunday)")]
    UnknownDay(String),
    #[error("no dataset for {city}: {}", .path.display())]
    DatasetNotFound { city: &'static str, path: PathBuf },
    #[error("row {row}: cannot parse start time `{value}`")]
    MalformedTimestamp { row: usize, value: String },
    #[error("row {row}: malformed record")]
    MalformedRecord {
        row: usize,
        #[source]
        source: csv::Error,
    },
    #[error("failed to read dataset")]
    Csv(#[from] csv::Error),
}

/// Month restriction: `All` or a single month ordinal (1 = January).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Only(u32),
}

impl MonthFilter {
    pub fn parse(input: &str) -> Result<Self, DatasetError> {
        let input = input.trim().to_lowercase();
        if input == "all" {
            return Ok(MonthFilter::All);
        }
        MONTH_NAMES
            .iter()
            .position(|m| *m == input)
            .map(|i| MonthFilter::Only(i as u32 + 1))
            .ok_or(DatasetError::UnknownMonth(input))
    }

    fn matches(&self, month: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(m) => *m == month,
        }
    }
}

/// Day-of-week restriction: `All` or a single ordinal (1 = Monday .. 7 = Sunday).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(u32),
}

impl DayFilter {
    pub fn parse(input: &str) -> Result<Self, DatasetError> {
        let input = input.trim().to_lowercase();
        if input == "all" {
            return Ok(DayFilter::All);
        }
        DAY_NAMES
            .iter()
            .position(|d| *d == input)
            .map(|i| DayFilter::Only(i as u32 + 1))
            .ok_or(DatasetError::UnknownDay(input))
    }

    fn matches(&self, day: u32) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(d) => *d == day,
        }
    }
}

/// A single row as it appears in the source CSV. Demographic columns vary by
/// city, so they default to `None` when the column is missing entirely.
#[derive(Debug, Deserialize)]
struct RawTripRecord {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time", default)]
    end_time: String,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

/// One trip, with calendar fields derived at load time.
#[derive(Debug, Clone, Serialize)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub end_time: String,
    pub trip_duration: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    /// 1 = January .. 12 = December, from `start_time`.
    pub month: u32,
    /// 1 = Monday .. 7 = Sunday, from `start_time`.
    pub day_of_week: u32,
}

impl TripRecord {
    /// Hour of day (0-23) of the trip start, derived on demand.
    pub fn start_hour(&self) -> u32 {
        self.start_time.hour()
    }
}

/// Which demographic columns the source file actually carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DemographicColumns {
    pub user_type: bool,
    pub gender: bool,
    pub birth_year: bool,
}

/// The filtered working set: all trips matching the requested criteria,
/// with derived columns retained for the statistics pass.
#[derive(Debug, Clone)]
pub struct TripTable {
    records: Vec<TripRecord>,
    demographics: DemographicColumns,
}

impl TripTable {
    pub fn new(records: Vec<TripRecord>, demographics: DemographicColumns) -> Self {
        Self {
            records,
            demographics,
        }
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn demographics(&self) -> DemographicColumns {
        self.demographics
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the page of rows starting at `offset`, or `None` once the
    /// offset is past the end of the table.
    pub fn page(&self, offset: usize, page_size: usize) -> Option<&[TripRecord]> {
        if offset >= self.records.len() {
            return None;
        }
        let end = (offset + page_size).min(self.records.len());
        Some(&self.records[offset..end])
    }
}

/// Loads the trips for `city` and restricts them by `month` and `day`.
///
/// The start timestamp must parse for every row; a single unparsable value
/// aborts the load, since all derived fields depend on it.
pub fn load_trips(
    data_dir: &Path,
    city: City,
    month: MonthFilter,
    day: DayFilter,
) -> Result<TripTable, DatasetError> {
    let path = data_dir.join(city.data_file());
    if !path.exists() {
        return Err(DatasetError::DatasetNotFound {
            city: city.display_name(),
            path,
        });
    }

    let mut reader = csv::Reader::from_path(&path)?;

    let headers = reader.headers()?.clone();
    let has_column = |name: &str| headers.iter().any(|h| h == name);
    let demographics = DemographicColumns {
        user_type: has_column("User Type"),
        gender: has_column("Gender"),
        birth_year: has_column("Birth Year"),
    };

    let mut records = Vec::new();
    for (i, result) in reader.deserialize().enumerate() {
        // Data rows start after the header line.
        let row = i + 2;
        let raw: RawTripRecord =
            result.map_err(|source| DatasetError::MalformedRecord { row, source })?;

        let start_time = parse_start_time(&raw.start_time).ok_or_else(|| {
            DatasetError::MalformedTimestamp {
                row,
                value: raw.start_time.clone(),
            }
        })?;

        let record = TripRecord {
            month: start_time.month(),
            day_of_week: start_time.weekday().number_from_monday(),
            start_time,
            end_time: raw.end_time,
            trip_duration: raw.trip_duration,
            start_station: raw.start_station,
            end_station: raw.end_station,
            user_type: non_blank(raw.user_type),
            gender: non_blank(raw.gender),
            birth_year: raw.birth_year.map(|y| y as i32),
        };

        if month.matches(record.month) && day.matches(record.day_of_week) {
            records.push(record);
        }
    }

    info!(
        city = city.display_name(),
        rows = records.len(),
        "Dataset loaded and filtered"
    );
    debug!(?demographics, "Demographic columns detected");

    Ok(TripTable::new(records, demographics))
}

fn parse_start_time(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M"))
        .ok()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
