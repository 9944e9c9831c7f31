//! Stats module - per-state aggregates and pivot tables

mod aggregator;
mod pivot;

pub use aggregator::{
    highest_airport, state_code, state_max_elevation, state_type_counts, Aggregates,
    HighestAirport, StateElevationIndex, StateTypeCounts,
};
pub use pivot::{round2, AggFunc, InvalidAggFunc, PivotEngine, PivotError, PivotResult};
