//! Data module - airport CSV loading and the working table

mod loader;

pub use loader::{AirportLoader, LoaderError};

use polars::prelude::DataFrame;

/// Primary key column.
pub const ID: &str = "id";
pub const NAME: &str = "name";
pub const TYPE: &str = "type";
pub const ELEVATION: &str = "elevation_ft";
pub const REGION: &str = "iso_region";
pub const LAT: &str = "lat";
pub const LON: &str = "lon";

/// Source names of the coordinate columns, renamed to [`LAT`] / [`LON`] on load.
pub const SOURCE_LAT: &str = "latitude_deg";
pub const SOURCE_LON: &str = "longitude_deg";

/// Columns no page ever reads.
pub const DROPPED_COLUMNS: [&str; 5] = [
    "continent",
    "iata_code",
    "home_link",
    "wikipedia_link",
    "keywords",
];

/// One row of the working table.
#[derive(Debug, Clone, PartialEq)]
pub struct AirportRecord {
    pub id: String,
    pub name: String,
    pub airport_type: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub elevation_ft: Option<f64>,
    pub iso_region: String,
}

/// The cleaned, elevation-sorted airport table.
///
/// Holds both the polars frame (used by the pivot engine) and the typed rows
/// (used by the aggregator and the map), always in the same order.
#[derive(Debug, Clone)]
pub struct AirportTable {
    df: DataFrame,
    records: Vec<AirportRecord>,
}

impl AirportTable {
    pub(crate) fn new(df: DataFrame, records: Vec<AirportRecord>) -> Self {
        Self { df, records }
    }

    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    pub fn records(&self) -> &[AirportRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Column names of the working table.
    pub fn columns(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}
