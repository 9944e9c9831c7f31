//! Airport CSV Loader Module
//! Reads the airport spreadsheet with Polars and produces the cleaned working table.

use super::{
    AirportRecord, AirportTable, DROPPED_COLUMNS, ELEVATION, ID, LAT, LON, NAME, REGION,
    SOURCE_LAT, SOURCE_LON, TYPE,
};
use polars::prelude::*;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Columns the working table cannot be built without.
const REQUIRED_COLUMNS: [&str; 7] = [ID, NAME, TYPE, ELEVATION, REGION, SOURCE_LAT, SOURCE_LON];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Data file not found: {0}")]
    NotFound(String),
    #[error("Missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("Row {row} has no value for required column '{column}'")]
    MissingValue { column: &'static str, row: usize },
    #[error("Duplicate airport id '{0}'")]
    DuplicateId(String),
}

/// Loads and cleans the airport table.
pub struct AirportLoader;

impl AirportLoader {
    /// Load the airport CSV and clean it into the working table.
    pub fn load_csv(path: &Path) -> Result<AirportTable, LoaderError> {
        if !path.exists() {
            return Err(LoaderError::NotFound(path.display().to_string()));
        }

        let path_str = path.to_string_lossy().to_string();
        let df = LazyCsvReader::new(&path_str)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;

        info!(
            path = %path.display(),
            rows = df.height(),
            columns = df.width(),
            "read airport csv"
        );

        Self::from_dataframe(df)
    }

    /// Clean a raw airport frame: drop unused columns, rename the coordinates,
    /// sort by elevation descending and index the rows by id.
    pub fn from_dataframe(df: DataFrame) -> Result<AirportTable, LoaderError> {
        for required in REQUIRED_COLUMNS {
            if df.column(required).is_err() {
                return Err(LoaderError::MissingColumn(required));
            }
        }

        let selection: Vec<Expr> = df
            .get_column_names()
            .iter()
            .map(|name| name.as_str())
            .filter(|name| !DROPPED_COLUMNS.contains(name))
            .map(|name| match name {
                SOURCE_LAT => col(name).cast(DataType::Float64).alias(LAT),
                SOURCE_LON => col(name).cast(DataType::Float64).alias(LON),
                ELEVATION => col(name).cast(DataType::Float64),
                ID | NAME | TYPE | REGION => col(name).cast(DataType::String),
                other => col(other),
            })
            .collect();

        // Missing elevations sink to the bottom; ties keep file order.
        let df = df
            .lazy()
            .select(selection)
            .sort_by_exprs(
                [col(ELEVATION)],
                SortMultipleOptions::default()
                    .with_order_descending(true)
                    .with_nulls_last(true)
                    .with_maintain_order(true),
            )
            .collect()?;

        let records = Self::collect_records(&df)?;
        debug!(rows = records.len(), "airport table cleaned");

        Ok(AirportTable::new(df, records))
    }

    /// Materialize typed rows in table order, rejecting duplicate ids.
    fn collect_records(df: &DataFrame) -> Result<Vec<AirportRecord>, LoaderError> {
        let ids = df.column(ID)?.as_materialized_series().str()?;
        let names = df.column(NAME)?.as_materialized_series().str()?;
        let types = df.column(TYPE)?.as_materialized_series().str()?;
        let regions = df.column(REGION)?.as_materialized_series().str()?;
        let elevations = df.column(ELEVATION)?.as_materialized_series().f64()?;
        let lats = df.column(LAT)?.as_materialized_series().f64()?;
        let lons = df.column(LON)?.as_materialized_series().f64()?;

        let mut seen: HashSet<&str> = HashSet::with_capacity(df.height());
        let mut records = Vec::with_capacity(df.height());

        for row in 0..df.height() {
            let id = ids.get(row).ok_or(LoaderError::MissingValue { column: ID, row })?;
            if !seen.insert(id) {
                return Err(LoaderError::DuplicateId(id.to_string()));
            }
            let iso_region = regions
                .get(row)
                .ok_or(LoaderError::MissingValue { column: REGION, row })?;

            records.push(AirportRecord {
                id: id.to_string(),
                name: names.get(row).unwrap_or_default().to_string(),
                airport_type: types.get(row).unwrap_or_default().to_string(),
                lat: lats.get(row),
                lon: lons.get(row),
                elevation_ft: elevations.get(row),
                iso_region: iso_region.to_string(),
            });
        }

        Ok(records)
    }
}
