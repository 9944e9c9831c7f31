//! Charts module - chart specs, interactive plotting and static rendering

mod plotter;
mod renderer;
mod spec;

pub use plotter::ChartPlotter;
pub use renderer::{RenderError, StaticChartRenderer, BAR_SIZE, PIE_SIZE};
pub use spec::{Bar, BarChartSpec, PieChartSpec, PieSlice};
