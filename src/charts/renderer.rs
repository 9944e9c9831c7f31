//! Static Chart Renderer
//! Draws the bar and pie chart specs to PNG files with plotters.
//!
//! Layout mirrors the interactive pages:
//! 1. Bar chart: title on top, one blue bar per state, state codes on the x axis
//! 2. Pie chart: slices in spec order, each labelled "type (12.5%)"

use crate::charts::{BarChartSpec, PieChartSpec};
use plotters::element::Pie;
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

pub const BAR_SIZE: (u32, u32) = (1000, 800);
pub const PIE_SIZE: (u32, u32) = (700, 700);

const BAR_COLOR: RGBColor = RGBColor(31, 119, 180);

/// Slice colours, cycled.
const PALETTE: [RGBColor; 8] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
];

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Nothing to draw")]
    Empty,
    #[error("Drawing failed: {0}")]
    Draw(String),
}

fn draw_err<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Draw(e.to_string())
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render a bar chart to `path` (format from the extension, normally PNG).
    pub fn render_bar_chart(
        spec: &BarChartSpec,
        path: &Path,
        size: (u32, u32),
    ) -> Result<(), RenderError> {
        if spec.bars.is_empty() {
            return Err(RenderError::Empty);
        }

        let root = BitMapBackend::new(path, size).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let labels = spec.labels();
        let n = spec.bars.len() as i32;
        let y_max = (spec.max_value() * 1.1).max(1.0);

        let mut chart = ChartBuilder::on(&root)
            .caption(&spec.title, ("sans-serif", 28))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(80)
            .build_cartesian_2d((0..n).into_segmented(), 0f64..y_max)
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc(spec.x_label.as_str())
            .y_desc(spec.y_label.as_str())
            .x_labels(labels.len())
            .x_label_formatter(&|x| match x {
                SegmentValue::CenterOf(i) => labels.get(*i as usize).cloned().unwrap_or_default(),
                _ => String::new(),
            })
            .draw()
            .map_err(draw_err)?;

        chart
            .draw_series(spec.bars.iter().enumerate().map(|(i, bar)| {
                let i = i as i32;
                let mut rect = Rectangle::new(
                    [
                        (SegmentValue::Exact(i), 0.0),
                        (SegmentValue::Exact(i + 1), bar.value),
                    ],
                    BAR_COLOR.filled(),
                );
                rect.set_margin(0, 0, 10, 10);
                rect
            }))
            .map_err(draw_err)?;

        root.present().map_err(draw_err)?;
        Ok(())
    }

    /// Render a pie chart to `path`.
    pub fn render_pie_chart(
        spec: &PieChartSpec,
        path: &Path,
        size: (u32, u32),
    ) -> Result<(), RenderError> {
        if spec.total() == 0 {
            return Err(RenderError::Empty);
        }

        let root = BitMapBackend::new(path, size).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;
        let root = root
            .titled(&spec.title, ("sans-serif", 26))
            .map_err(draw_err)?;

        let (w, h) = root.dim_in_pixel();
        let center = (w as i32 / 2, h as i32 / 2);
        let radius = f64::from(w.min(h)) * 0.32;

        let sizes: Vec<f64> = spec.slices.iter().map(|s| s.count as f64).collect();
        let colors: Vec<RGBColor> = (0..spec.slices.len())
            .map(|i| PALETTE[i % PALETTE.len()])
            .collect();
        let labels: Vec<String> = spec
            .slices
            .iter()
            .map(|s| format!("{} ({})", s.label, s.percent_label()))
            .collect();

        let mut pie = Pie::new(&center, &radius, &sizes[..], &colors[..], &labels[..]);
        pie.label_style(("sans-serif", 16).into_font().color(&BLACK));
        root.draw(&pie).map_err(draw_err)?;

        root.present().map_err(draw_err)?;
        Ok(())
    }
}
