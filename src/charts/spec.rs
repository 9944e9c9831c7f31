//! Chart Specifications
//! Backend-independent descriptions of the bar and pie charts, drawn by both
//! the interactive plotter and the static PNG renderer.

use crate::stats::{StateElevationIndex, StateTypeCounts};

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

/// One bar per category, drawn in the given order.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<Bar>,
}

impl BarChartSpec {
    /// Maximum airport elevation per state, states in index order.
    pub fn max_elevation_by_state(index: &StateElevationIndex) -> Self {
        Self {
            title: "Maximum Airport Elevations by State".to_string(),
            x_label: "States".to_string(),
            y_label: "Maximum Airport Elevation (ft)".to_string(),
            bars: index
                .iter()
                .map(|(state, elevation)| Bar {
                    label: state.clone(),
                    value: *elevation,
                })
                .collect(),
        }
    }

    pub fn labels(&self) -> Vec<String> {
        self.bars.iter().map(|b| b.label.clone()).collect()
    }

    pub fn max_value(&self) -> f64 {
        self.bars.iter().map(|b| b.value).fold(0.0, f64::max)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
    /// Share of the whole pie, 0..=100.
    pub percent: f64,
}

impl PieSlice {
    /// Percentage label, one decimal place.
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.percent)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieChartSpec {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChartSpec {
    /// Airport type breakdown for one state. `None` when the state is unknown.
    pub fn airport_types(counts: &StateTypeCounts, state: &str) -> Option<Self> {
        let types = counts.get(state)?;
        let total: usize = types.values().sum();

        let slices = types
            .iter()
            .map(|(airport_type, &count)| PieSlice {
                label: airport_type.clone(),
                count,
                percent: if total == 0 {
                    0.0
                } else {
                    count as f64 * 100.0 / total as f64
                },
            })
            .collect();

        Some(Self {
            title: format!("Airport Types in {state}"),
            slices,
        })
    }

    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }
}
