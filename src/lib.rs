//! New England Airports - dashboard over a static airport spreadsheet
//!
//! Loads the airport CSV once, derives per-state aggregates and renders five
//! pages: a home page, a bar chart, a pie chart, a pivot table and a map.

pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
pub mod logging;
pub mod stats;
pub mod views;

#[cfg(test)]
pub(crate) mod test_support;
