//! Most popular stations and station pair.

use crate::dataset::TripTable;
use crate::stats::types::StationStats;
use crate::stats::utility::mode;

/// Separator used to build the trip grouping key. Part of the rendered
/// value, so changing it changes reported output.
const TRIP_SEPARATOR: &str = " to ";

/// Modal start station, end station, and directed station pair.
/// `None` when the table is empty. The pair key is built per row and
/// discarded after the computation; the table itself is never touched.
pub fn station_stats(table: &TripTable) -> Option<StationStats> {
    let most_common_start_station =
        mode(table.records().iter().map(|r| r.start_station.clone()))?;
    let most_common_end_station = mode(table.records().iter().map(|r| r.end_station.clone()))?;
    let most_common_trip = mode(
        table
            .records()
            .iter()
            .map(|r| format!("{}{}{}", r.start_station, TRIP_SEPARATOR, r.end_station)),
    )?;

    Some(StationStats {
        most_common_start_station,
        most_common_end_station,
        most_common_trip,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{DemographicColumns, TripRecord, TripTable};
    use chrono::NaiveDateTime;

    fn trip(start_station: &str, end_station: &str) -> TripRecord {
        let start_time =
            NaiveDateTime::parse_from_str("2017-01-02 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        TripRecord {
            start_time,
            end_time: String::new(),
            trip_duration: 600.0,
            start_station: start_station.to_string(),
            end_station: end_station.to_string(),
            user_type: None,
            gender: None,
            birth_year: None,
            month: 1,
            day_of_week: 1,
        }
    }

    fn table(records: Vec<TripRecord>) -> TripTable {
        TripTable::new(records, DemographicColumns::default())
    }

    #[test]
    fn test_empty_table_has_no_station_stats() {
        assert_eq!(station_stats(&table(Vec::new())), None);
    }

    #[test]
    fn test_modal_stations_and_trip() {
        let t = table(vec![trip("A", "B"), trip("A", "C"), trip("D", "C")]);
        let stats = station_stats(&t).unwrap();

        assert_eq!(stats.most_common_start_station, "A");
        assert_eq!(stats.most_common_end_station, "C");
        // All pairs occur once; lexicographically smallest wins the tie.
        assert_eq!(stats.most_common_trip, "A to B");
    }

    #[test]
    fn test_trip_key_is_direction_sensitive() {
        let t = table(vec![
            trip("A", "B"),
            trip("A", "B"),
            trip("B", "A"),
        ]);
        assert_eq!(station_stats(&t).unwrap().most_common_trip, "A to B");
    }
}
