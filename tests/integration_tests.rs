use std::path::Path;

use bikeshare_stats::cities::City;
use bikeshare_stats::dataset::{DayFilter, MonthFilter, load_trips};
use bikeshare_stats::stats::analyze;
use bikeshare_stats::stats::types::ColumnStat;

fn fixtures() -> &'static Path {
    Path::new("tests/fixtures")
}

#[test]
fn test_full_pipeline_unfiltered() {
    let table = load_trips(fixtures(), City::Chicago, MonthFilter::All, DayFilter::All)
        .expect("fixture should load");
    assert_eq!(table.len(), 5);

    let report = analyze(&table);

    let time = report.time.stats.expect("non-empty table has time stats");
    // January and June tie at two trips each; the smaller ordinal wins.
    assert_eq!(time.most_common_month, 1);
    assert_eq!(time.most_common_day_of_week, 1);
    assert_eq!(time.most_common_start_hour, 8);

    let stations = report.stations.stats.expect("non-empty table has station stats");
    assert_eq!(stations.most_common_start_station, "A");
    assert_eq!(stations.most_common_end_station, "A");
    assert_eq!(stations.most_common_trip, "A to B");

    let durations = report.durations.stats;
    assert_eq!(durations.trip_count, 5);
    assert_eq!(durations.total_seconds, 3450.0);
    assert_eq!(durations.average_seconds, 690.0);

    let user_types = report
        .users
        .stats
        .user_type_counts
        .as_available()
        .expect("user type column present")
        .clone();
    assert_eq!(user_types[0].value, "Subscriber");
    assert_eq!(user_types[0].count, 3);
    assert_eq!(user_types[1].value, "Customer");
    assert_eq!(user_types[1].count, 2);

    let genders = report
        .users
        .stats
        .gender_counts
        .as_available()
        .expect("gender column present")
        .clone();
    // Two each; equal counts come out in ascending value order.
    assert_eq!(genders[0].value, "Female");
    assert_eq!(genders[1].value, "Male");

    let years = report
        .users
        .stats
        .birth_year_summary
        .as_available()
        .copied()
        .expect("birth year column present");
    assert_eq!(years.earliest, 1961);
    assert_eq!(years.most_recent, 1992);
    assert_eq!(years.most_common, 1992);
}

#[test]
fn test_full_pipeline_with_filters() {
    let month = MonthFilter::parse("june").unwrap();
    let table =
        load_trips(fixtures(), City::Chicago, month, DayFilter::All).expect("fixture should load");
    assert_eq!(table.len(), 2);
    assert!(table.records().iter().all(|r| r.month == 6));

    let report = analyze(&table);
    assert_eq!(report.durations.stats.total_seconds, 1350.0);
    assert_eq!(report.durations.stats.average_seconds, 675.0);

    let day = DayFilter::parse("sunday").unwrap();
    let month = MonthFilter::parse("january").unwrap();
    let table = load_trips(fixtures(), City::Chicago, month, day).expect("fixture should load");
    assert_eq!(table.len(), 2);
    assert_eq!(
        analyze(&table).stations.stats.unwrap().most_common_trip,
        "A to B"
    );
}

#[test]
fn test_city_without_demographic_columns() {
    let table = load_trips(
        fixtures(),
        City::Washington,
        MonthFilter::All,
        DayFilter::All,
    )
    .expect("fixture should load");

    let report = analyze(&table);

    // Demographics are unavailable; the other groups are unaffected.
    assert_eq!(report.users.stats.user_type_counts, ColumnStat::Unavailable);
    assert_eq!(report.users.stats.gender_counts, ColumnStat::Unavailable);
    assert_eq!(report.users.stats.birth_year_summary, ColumnStat::Unavailable);

    assert_eq!(report.durations.stats.total_seconds, 2700.0);
    assert!(report.time.stats.is_some());
}

#[test]
fn test_unknown_city_dataset_missing() {
    let err = load_trips(
        fixtures(),
        City::NewYorkCity,
        MonthFilter::All,
        DayFilter::All,
    )
    .unwrap_err();
    assert!(err.to_string().contains("New York City"));
}

#[test]
fn test_report_round_trips_through_json() {
    let table = load_trips(fixtures(), City::Chicago, MonthFilter::All, DayFilter::All)
        .expect("fixture should load");
    let report = analyze(&table);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["durations"]["stats"]["trip_count"], 5);
    assert_eq!(json["users"]["stats"]["gender_counts"]["status"], "available");
}
