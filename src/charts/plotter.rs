//! Chart Plotter Module
//! Draws the page views interactively with egui and egui_plot.

use crate::charts::{BarChartSpec, PieChartSpec};
use crate::stats::PivotResult;
use crate::views::{IconMarker, MapSpec};
use egui::{Align2, Color32, FontId, RichText, Sense, Shape, Stroke};
use egui_plot::{Bar, BarChart, MarkerShape, Plot, PlotBounds, PlotPoint, PlotPoints, Points};

pub const BAR_COLOR: Color32 = Color32::from_rgb(31, 119, 180);
pub const MARKER_COLOR: Color32 = Color32::from_rgb(214, 39, 40);

pub const PALETTE: [Color32; 8] = [
    Color32::from_rgb(31, 119, 180),  // Blue
    Color32::from_rgb(255, 127, 14),  // Orange
    Color32::from_rgb(44, 160, 44),   // Green
    Color32::from_rgb(214, 39, 40),   // Red
    Color32::from_rgb(148, 103, 189), // Purple
    Color32::from_rgb(140, 86, 75),   // Brown
    Color32::from_rgb(227, 119, 194), // Pink
    Color32::from_rgb(127, 127, 127), // Grey
];

/// Arc segments per full turn when tessellating pie slices.
const PIE_SEGMENTS: f32 = 180.0;

/// Draws page views with egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn slice_color(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    /// Bar chart with category labels on the x axis.
    pub fn draw_bar_chart(ui: &mut egui::Ui, spec: &BarChartSpec) {
        ui.label(RichText::new(&spec.title).size(16.0).strong());

        let x_labels = spec.labels();
        let bars: Vec<Bar> = spec
            .bars
            .iter()
            .enumerate()
            .map(|(i, bar)| {
                Bar::new(i as f64, bar.value)
                    .name(&bar.label)
                    .width(0.6)
                    .fill(BAR_COLOR)
            })
            .collect();

        Plot::new("max_elevation_by_state")
            .height(ui.available_height().max(300.0))
            .allow_scroll(false)
            .x_axis_label(spec.x_label.clone())
            .y_axis_label(spec.y_label.clone())
            .include_y(0.0)
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if (mark.value - idx).abs() > f64::EPSILON || idx < 0.0 {
                    return String::new();
                }
                x_labels.get(idx as usize).cloned().unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).color(BAR_COLOR).name("Max elevation"));
            });
    }

    /// Pie chart with percentage labels inside each slice and a legend below.
    pub fn draw_pie_chart(ui: &mut egui::Ui, spec: &PieChartSpec) {
        let total = spec.total();
        if total == 0 {
            ui.label("No airports");
            return;
        }

        let side = ui.available_width().min(ui.available_height() - 80.0).clamp(240.0, 520.0);
        let (rect, _) = ui.allocate_exact_size(egui::vec2(side, side), Sense::hover());
        let painter = ui.painter_at(rect);
        let center = rect.center();
        let radius = side * 0.45;

        // Matplotlib starts at three o'clock and runs counter-clockwise.
        let mut start = 0.0f32;
        for (i, slice) in spec.slices.iter().enumerate() {
            let sweep = std::f32::consts::TAU * slice.count as f32 / total as f32;
            let color = Self::slice_color(i);
            let steps = ((PIE_SEGMENTS * sweep / std::f32::consts::TAU).ceil() as usize).max(1);

            for step in 0..steps {
                let a0 = start + sweep * step as f32 / steps as f32;
                let a1 = start + sweep * (step + 1) as f32 / steps as f32;
                let p0 = center + radius * egui::vec2(a0.cos(), -a0.sin());
                let p1 = center + radius * egui::vec2(a1.cos(), -a1.sin());
                painter.add(Shape::convex_polygon(
                    vec![center, p0, p1],
                    color,
                    Stroke::NONE,
                ));
            }

            let mid = start + sweep / 2.0;
            let label_pos = center + radius * 0.6 * egui::vec2(mid.cos(), -mid.sin());
            painter.text(
                label_pos,
                Align2::CENTER_CENTER,
                slice.percent_label(),
                FontId::proportional(14.0),
                Color32::WHITE,
            );

            start += sweep;
        }

        ui.add_space(8.0);
        ui.horizontal_wrapped(|ui| {
            for (i, slice) in spec.slices.iter().enumerate() {
                let (swatch, _) = ui.allocate_exact_size(egui::vec2(14.0, 14.0), Sense::hover());
                ui.painter().rect_filled(swatch, 3.0, Self::slice_color(i));
                ui.label(format!("{} ({})", slice.label, slice.count));
                ui.add_space(10.0);
            }
        });
    }

    /// Pivot table as a striped grid. Undefined cells stay blank.
    pub fn draw_pivot_table(ui: &mut egui::Ui, pivot: &PivotResult) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::ScrollArea::both().show(ui, |ui| {
                    egui::Grid::new("pivot_table")
                        .striped(true)
                        .min_col_width(70.0)
                        .spacing([12.0, 4.0])
                        .show(ui, |ui| {
                            ui.label(RichText::new("iso_region").strong());
                            for column in &pivot.column_labels {
                                ui.label(RichText::new(column).strong());
                            }
                            ui.end_row();

                            for (row, cells) in pivot.row_labels.iter().zip(&pivot.cells) {
                                ui.label(RichText::new(row).strong());
                                for cell in cells {
                                    match cell {
                                        Some(v) => ui.label(format!("{v:.2}")),
                                        None => ui.label(""),
                                    };
                                }
                                ui.end_row();
                            }
                        });
                });
            });
    }

    /// Airport markers on a lon/lat plane. Hovering shows the nearest airport.
    ///
    /// When `reset_view` is set the plot jumps to the map's initial view state.
    pub fn draw_map(ui: &mut egui::Ui, spec: &MapSpec, reset_view: bool) {
        let markers: Vec<IconMarker> = spec.markers().to_vec();
        let size = ui.available_size();
        let (min, max) = spec
            .initial_view_state
            .bounds(f64::from(size.x.max(1.0)), f64::from(size.y.max(1.0)));

        let points: PlotPoints = markers.iter().map(|m| [m.lon, m.lat]).collect();
        let icon = markers.first().map(|m| m.icon_data.clone()).unwrap_or_default();
        let radius = (icon.width as f32 / 25.0).max(3.0);

        Plot::new("airport_map")
            .height(size.y.max(300.0))
            .x_axis_label("lon")
            .y_axis_label("lat")
            .show_grid(false)
            .label_formatter(move |_name, value| Self::hover_label(&markers, value))
            .show(ui, |plot_ui| {
                if reset_view {
                    plot_ui.set_plot_bounds(PlotBounds::from_min_max(min, max));
                }
                plot_ui.points(
                    Points::new(points)
                        .shape(MarkerShape::Diamond)
                        .radius(radius)
                        .filled(true)
                        .color(MARKER_COLOR)
                        .name("Airports"),
                );
            });
    }

    /// Tooltip text for the marker nearest the pointer.
    fn hover_label(markers: &[IconMarker], value: &PlotPoint) -> String {
        markers
            .iter()
            .min_by(|a, b| {
                let da = (a.lon - value.x).powi(2) + (a.lat - value.y).powi(2);
                let db = (b.lon - value.x).powi(2) + (b.lat - value.y).powi(2);
                da.total_cmp(&db)
            })
            .map(|m| format!("{}\n{}\n{:.4}, {:.4}", m.name, m.airport_type, m.lat, m.lon))
            .unwrap_or_default()
    }
}
