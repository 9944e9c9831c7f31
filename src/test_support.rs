//! Shared fixtures for unit tests.

use crate::data::{AirportLoader, AirportRecord, AirportTable};
use polars::prelude::*;

pub(crate) fn record(
    id: &str,
    region: &str,
    airport_type: &str,
    elevation: Option<f64>,
) -> AirportRecord {
    AirportRecord {
        id: id.to_string(),
        name: format!("Airport {id}"),
        airport_type: airport_type.to_string(),
        lat: Some(42.0),
        lon: Some(-71.0),
        elevation_ft: elevation,
        iso_region: region.to_string(),
    }
}

/// Four rows, already in elevation-descending order.
pub(crate) fn four_rows() -> Vec<AirportRecord> {
    vec![
        record("2", "US-MA", "heliport", Some(50.0)),
        record("1", "US-MA", "small_airport", Some(10.0)),
        record("3", "US-CT", "small_airport", Some(5.0)),
        record("4", "US-CT", "small_airport", Some(5.0)),
    ]
}

/// The four-row table run through the loader.
pub(crate) fn four_row_table() -> AirportTable {
    let df = df! {
        "id" => [1i64, 2, 3, 4],
        "type" => ["small_airport", "heliport", "small_airport", "small_airport"],
        "name" => ["Harbor Field", "Summit Pad", "River Strip", "Valley Strip"],
        "latitude_deg" => [42.0, 42.4, 41.6, 41.8],
        "longitude_deg" => [-71.0, -71.4, -72.6, -72.8],
        "elevation_ft" => [10.0, 50.0, 5.0, 5.0],
        "iso_region" => ["US-MA", "US-MA", "US-CT", "US-CT"],
    }
    .unwrap();

    AirportLoader::from_dataframe(df).unwrap()
}

/// Two rows, neither with a recorded elevation.
pub(crate) fn no_elevation_table() -> AirportTable {
    let df = df! {
        "id" => [1i64, 2],
        "type" => ["heliport", "small_airport"],
        "name" => ["Ridge Heliport", "Meadow Strip"],
        "latitude_deg" => [44.3, 43.1],
        "longitude_deg" => [-71.8, -72.1],
        "elevation_ft" => [None::<f64>, None],
        "iso_region" => ["US-NH", "US-VT"],
    }
    .unwrap();

    AirportLoader::from_dataframe(df).unwrap()
}
