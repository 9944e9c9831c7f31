//! Pivot Engine
//! Cross-tabulates one numeric column by two categorical columns using Polars.

use polars::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Name of the aggregated column in the grouped frame.
const VALUE_ALIAS: &str = "__pivot_value";

#[derive(Error, Debug)]
pub enum PivotError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Column '{0}' not found")]
    MissingColumn(String),
    #[error("No rows with a value for '{0}'")]
    NoRows(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{0}' is not one of mean, max, min, count")]
pub struct InvalidAggFunc(pub String);

/// Aggregation applied to every pivot cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AggFunc {
    #[default]
    Mean,
    Max,
    Min,
    Count,
}

impl AggFunc {
    pub const ALL: [AggFunc; 4] = [AggFunc::Mean, AggFunc::Max, AggFunc::Min, AggFunc::Count];

    pub fn as_str(&self) -> &'static str {
        match self {
            AggFunc::Mean => "mean",
            AggFunc::Max => "max",
            AggFunc::Min => "min",
            AggFunc::Count => "count",
        }
    }

    fn expr(&self, values: &str) -> Expr {
        let value = col(values);
        let agg = match self {
            AggFunc::Mean => value.mean(),
            AggFunc::Max => value.max(),
            AggFunc::Min => value.min(),
            AggFunc::Count => value.count(),
        };
        agg.cast(DataType::Float64).alias(VALUE_ALIAS)
    }
}

impl fmt::Display for AggFunc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive exact match. Surrounding whitespace is not trimmed,
/// so `"Mean "` is rejected.
impl FromStr for AggFunc {
    type Err = InvalidAggFunc;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        AggFunc::ALL
            .into_iter()
            .find(|f| f.as_str() == lowered)
            .ok_or_else(|| InvalidAggFunc(s.to_string()))
    }
}

/// Two-dimensional aggregation result. Undefined cells are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotResult {
    pub agg: AggFunc,
    pub row_labels: Vec<String>,
    pub column_labels: Vec<String>,
    pub cells: Vec<Vec<Option<f64>>>,
}

impl PivotResult {
    /// Cell at (row label, column label).
    pub fn get(&self, row: &str, column: &str) -> Option<f64> {
        let r = self.row_labels.iter().position(|l| l == row)?;
        let c = self.column_labels.iter().position(|l| l == column)?;
        self.cells[r][c]
    }

    /// Number of defined cells.
    pub fn defined_cells(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Builds pivot tables from the working frame.
pub struct PivotEngine;

impl PivotEngine {
    /// Aggregate `values` grouped by `index` (rows) and `columns` (columns).
    ///
    /// Rows with a null key take no part. For `mean`, `max` and `min` rows with
    /// a null value are dropped too; `count` keeps them and counts only the
    /// non-null values, so a group of missing values reports 0. Labels are
    /// sorted ascending and only combinations with at least one row are defined.
    pub fn pivot(
        df: &DataFrame,
        index: &str,
        columns: &str,
        values: &str,
        agg: AggFunc,
    ) -> Result<PivotResult, PivotError> {
        for name in [index, columns, values] {
            if df.column(name).is_err() {
                return Err(PivotError::MissingColumn(name.to_string()));
            }
        }

        let keys_present = col(index).is_not_null().and(col(columns).is_not_null());
        let predicate = match agg {
            AggFunc::Count => keys_present,
            _ => keys_present.and(col(values).is_not_null()),
        };

        let grouped = df
            .clone()
            .lazy()
            .filter(predicate)
            .group_by([
                col(index).cast(DataType::String),
                col(columns).cast(DataType::String),
            ])
            .agg([agg.expr(values)])
            .collect()?;

        if grouped.height() == 0 {
            return Err(PivotError::NoRows(values.to_string()));
        }

        let row_keys = grouped.column(index)?.as_materialized_series().str()?;
        let col_keys = grouped.column(columns)?.as_materialized_series().str()?;
        let aggregated = grouped.column(VALUE_ALIAS)?.as_materialized_series().f64()?;

        let mut cells: BTreeMap<(String, String), f64> = BTreeMap::new();
        for i in 0..grouped.height() {
            if let (Some(r), Some(c), Some(v)) =
                (row_keys.get(i), col_keys.get(i), aggregated.get(i))
            {
                if !v.is_nan() {
                    cells.insert((r.to_string(), c.to_string()), round2(v));
                }
            }
        }

        let row_labels: Vec<String> = cells
            .keys()
            .map(|(r, _)| r.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let column_labels: Vec<String> = cells
            .keys()
            .map(|(_, c)| c.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let grid = row_labels
            .iter()
            .map(|r| {
                column_labels
                    .iter()
                    .map(|c| cells.get(&(r.clone(), c.clone())).copied())
                    .collect()
            })
            .collect();

        Ok(PivotResult {
            agg,
            row_labels,
            column_labels,
            cells: grid,
        })
    }
}
