//! Aggregator Module
//! Per-state lookup structures derived once from the loaded airport table.

use crate::data::AirportRecord;
use indexmap::IndexMap;

/// State code -> maximum elevation, in first-appearance order.
pub type StateElevationIndex = IndexMap<String, f64>;

/// State code -> (airport type -> count), both levels in first-appearance order.
pub type StateTypeCounts = IndexMap<String, IndexMap<String, usize>>;

/// The single highest airport in the table.
#[derive(Debug, Clone, PartialEq)]
pub struct HighestAirport {
    pub name: String,
    pub airport_type: String,
    pub elevation_ft: f64,
}

/// The three derived structures every page reads from.
#[derive(Debug, Clone, Default)]
pub struct Aggregates {
    pub max_elevation_by_state: StateElevationIndex,
    pub types_by_state: StateTypeCounts,
    pub highest_airport: Option<HighestAirport>,
}

impl Aggregates {
    pub fn compute(records: &[AirportRecord]) -> Self {
        Self {
            max_elevation_by_state: state_max_elevation(records),
            types_by_state: state_type_counts(records),
            highest_airport: highest_airport(records),
        }
    }
}

/// The last two characters of a region code, e.g. `US-MA` -> `MA`.
pub fn state_code(region: &str) -> &str {
    let start = region
        .char_indices()
        .rev()
        .nth(1)
        .map(|(i, _)| i)
        .unwrap_or(0);
    &region[start..]
}

/// Maximum elevation per state. Rows without an elevation are skipped.
pub fn state_max_elevation(records: &[AirportRecord]) -> StateElevationIndex {
    records
        .iter()
        .filter_map(|r| r.elevation_ft.map(|e| (state_code(&r.iso_region), e)))
        .fold(IndexMap::new(), |mut index, (state, elevation)| {
            index
                .entry(state.to_string())
                .and_modify(|max: &mut f64| *max = max.max(elevation))
                .or_insert(elevation);
            index
        })
}

/// Airport count per (state, type).
pub fn state_type_counts(records: &[AirportRecord]) -> StateTypeCounts {
    records.iter().fold(IndexMap::new(), |mut counts, r| {
        *counts
            .entry(state_code(&r.iso_region).to_string())
            .or_insert_with(IndexMap::new)
            .entry(r.airport_type.clone())
            .or_insert(0) += 1;
        counts
    })
}

/// First row in table order whose elevation equals the table-wide maximum.
///
/// Scans the whole table so an unsorted table gives the same answer.
pub fn highest_airport(records: &[AirportRecord]) -> Option<HighestAirport> {
    let max = records
        .iter()
        .filter_map(|r| r.elevation_ft)
        .fold(None, |acc: Option<f64>, e| Some(acc.map_or(e, |m| m.max(e))))?;

    records
        .iter()
        .find(|r| r.elevation_ft == Some(max))
        .map(|r| HighestAirport {
            name: r.name.clone(),
            airport_type: r.airport_type.clone(),
            elevation_ft: max,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{four_rows, record};

    #[test]
    fn test_state_code() {
        assert_eq!(state_code("US-MA"), "MA");
        assert_eq!(state_code("US-NH"), "NH");
        assert_eq!(state_code("X"), "X");
        assert_eq!(state_code(""), "");
    }

    #[test]
    fn test_four_row_scenario() {
        let aggregates = Aggregates::compute(&four_rows());

        let max: Vec<(&str, f64)> = aggregates
            .max_elevation_by_state
            .iter()
            .map(|(s, e)| (s.as_str(), *e))
            .collect();
        assert_eq!(max, vec![("MA", 50.0), ("CT", 5.0)]);

        assert_eq!(aggregates.types_by_state["MA"]["small_airport"], 1);
        assert_eq!(aggregates.types_by_state["MA"]["heliport"], 1);
        assert_eq!(aggregates.types_by_state["CT"]["small_airport"], 2);
        assert_eq!(aggregates.types_by_state["CT"].len(), 1);

        let highest = aggregates.highest_airport.unwrap();
        assert_eq!(highest.airport_type, "heliport");
        assert_eq!(highest.name, "Airport 2");
        assert_eq!(highest.elevation_ft, 50.0);
    }

    #[test]
    fn test_missing_elevation_excluded_from_max() {
        let records = vec![
            record("1", "US-VT", "small_airport", None),
            record("2", "US-VT", "heliport", Some(300.0)),
            record("3", "US-RI", "heliport", None),
        ];

        let index = state_max_elevation(&records);
        assert_eq!(index.get("VT"), Some(&300.0));
        assert!(index.get("RI").is_none());

        // Counting ignores elevation entirely.
        let counts = state_type_counts(&records);
        assert_eq!(counts["RI"]["heliport"], 1);
        assert_eq!(counts["VT"].values().sum::<usize>(), 2);
    }

    #[test]
    fn test_highest_airport_tolerates_unsorted_table() {
        let records = vec![
            record("1", "US-ME", "small_airport", Some(100.0)),
            record("2", "US-ME", "heliport", Some(900.0)),
            record("3", "US-NH", "seaplane_base", Some(900.0)),
        ];

        let highest = highest_airport(&records).unwrap();
        assert_eq!(highest.name, "Airport 2");
        assert_eq!(highest.elevation_ft, 900.0);
    }

    #[test]
    fn test_highest_airport_empty_table() {
        assert_eq!(highest_airport(&[]), None);
        assert_eq!(
            highest_airport(&[record("1", "US-MA", "heliport", None)]),
            None
        );
    }

    #[test]
    fn test_type_counts_sum_to_state_rows() {
        let records = four_rows();
        let counts = state_type_counts(&records);

        for (state, types) in &counts {
            let rows = records
                .iter()
                .filter(|r| state_code(&r.iso_region) == state.as_str())
                .count();
            assert_eq!(types.values().sum::<usize>(), rows);
        }
    }
}
