//! Rider demographics.
//!
//! The demographic columns vary by city and may be absent from the file
//! entirely. Absence is decided up front from the detected columns, never
//! by attempting a computation and catching its failure.

use crate::dataset::TripTable;
use crate::stats::types::{BirthYearSummary, CategoryCount, ColumnStat, UserStats};
use crate::stats::utility::{mode, value_counts};

/// User-type counts, gender counts, and the birth-year summary. Each result
/// is independently `Unavailable` (column absent), `NoData` (column present
/// but no usable values), or `Available`.
pub fn user_stats(table: &TripTable) -> UserStats {
    let cols = table.demographics();

    let user_type_counts = if cols.user_type {
        counts_of(table.records().iter().filter_map(|r| r.user_type.clone()))
    } else {
        ColumnStat::Unavailable
    };

    let gender_counts = if cols.gender {
        counts_of(table.records().iter().filter_map(|r| r.gender.clone()))
    } else {
        ColumnStat::Unavailable
    };

    let birth_year_summary = if cols.birth_year {
        birth_years(table.records().iter().filter_map(|r| r.birth_year))
    } else {
        ColumnStat::Unavailable
    };

    UserStats {
        user_type_counts,
        gender_counts,
        birth_year_summary,
    }
}

fn counts_of(values: impl Iterator<Item = String>) -> ColumnStat<Vec<CategoryCount>> {
    let counts = value_counts(values);
    if counts.is_empty() {
        ColumnStat::NoData
    } else {
        ColumnStat::Available(counts)
    }
}

fn birth_years(values: impl Iterator<Item = i32>) -> ColumnStat<BirthYearSummary> {
    let years: Vec<i32> = values.collect();
    let (Some(earliest), Some(most_recent)) =
        (years.iter().min().copied(), years.iter().max().copied())
    else {
        return ColumnStat::NoData;
    };
    // Non-empty here, so the mode exists.
    let Some(most_common) = mode(years) else {
        return ColumnStat::NoData;
    };

    ColumnStat::Available(BirthYearSummary {
        earliest,
        most_recent,
        most_common,
    })
}
