//! Page Viewer Widget
//! Central panel that draws whichever view the selector produced.

use crate::charts::ChartPlotter;
use crate::views::{
    HomeView, PivotView, TypesView, View, ViewInputs, AGG_PROMPT, INVALID_AGG_WARNING,
    STATE_PROMPT,
};
use egui::{Color32, ComboBox, RichText, TextureHandle};

const HOME_IMAGE_WIDTH: f32 = 800.0;
const WARNING_COLOR: Color32 = Color32::from_rgb(230, 162, 60);
const ERROR_COLOR: Color32 = Color32::from_rgb(220, 53, 69);

/// Actions triggered from inside a page
#[derive(Debug, Clone, PartialEq)]
pub enum PageAction {
    None,
    ExportBarChart,
    ExportPieChart,
    CopyDeckJson,
}

/// Draws the current page and owns the page-level status line.
pub struct PageViewer {
    home_image: Result<TextureHandle, String>,
    status: Option<(String, bool)>,
    reset_map_view: bool,
}

impl PageViewer {
    pub fn new(home_image: Result<TextureHandle, String>) -> Self {
        Self {
            home_image,
            status: None,
            reset_map_view: true,
        }
    }

    /// Show a status line under the page title until the page changes.
    pub fn set_status(&mut self, message: impl Into<String>, is_error: bool) {
        self.status = Some((message.into(), is_error));
    }

    /// Clear page-local state after navigating.
    pub fn page_changed(&mut self) {
        self.status = None;
        self.reset_map_view = true;
    }

    pub fn show(&mut self, ui: &mut egui::Ui, view: &View, inputs: &mut ViewInputs) -> PageAction {
        let mut action = PageAction::None;

        ui.heading(RichText::new(view.title()).size(26.0));
        ui.add_space(10.0);

        match view {
            View::Home(home) => self.show_home(ui, home),
            View::ElevationByState(spec) => {
                if ui.button("💾 Save PNG").clicked() {
                    action = PageAction::ExportBarChart;
                }
                self.show_status(ui);
                ChartPlotter::draw_bar_chart(ui, spec);
            }
            View::TypesByState(types) => {
                if Self::show_types(ui, types, inputs) {
                    action = PageAction::ExportPieChart;
                }
                self.show_status(ui);
                if let Some(chart) = &types.chart {
                    ChartPlotter::draw_pie_chart(ui, chart);
                }
            }
            View::ElevationByStateAndType(pivot) => Self::show_pivot(ui, pivot, inputs),
            View::Map(map) => {
                if ui.button("📋 Copy deck.gl JSON").clicked() {
                    action = PageAction::CopyDeckJson;
                }
                self.show_status(ui);
                ChartPlotter::draw_map(ui, map, self.reset_map_view);
                self.reset_map_view = false;
            }
        }

        action
    }

    fn show_status(&self, ui: &mut egui::Ui) {
        if let Some((message, is_error)) = &self.status {
            let color = if *is_error {
                ERROR_COLOR
            } else {
                Color32::from_rgb(40, 167, 69)
            };
            ui.label(RichText::new(message).size(12.0).color(color));
        }
    }

    fn show_home(&self, ui: &mut egui::Ui, home: &HomeView) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            match &self.home_image {
                Ok(texture) => {
                    let [w, h] = texture.size();
                    let width = HOME_IMAGE_WIDTH.min(ui.available_width());
                    let height = width * h as f32 / w.max(1) as f32;
                    ui.add(egui::Image::new(egui::load::SizedTexture::new(
                        texture.id(),
                        egui::vec2(width, height),
                    )));
                }
                Err(error) => {
                    ui.colored_label(ERROR_COLOR, format!("Could not load image: {error}"));
                }
            }

            ui.add_space(10.0);
            ui.label(RichText::new(home.description).size(14.0));
            ui.add_space(10.0);
            ui.label(RichText::new(&home.highest_sentence).size(14.0));
        });
    }

    /// State selector. Returns true when the export button was clicked.
    fn show_types(ui: &mut egui::Ui, types: &TypesView, inputs: &mut ViewInputs) -> bool {
        let mut export = false;

        ui.label(STATE_PROMPT);
        ui.horizontal(|ui| {
            let selected = types.selected.clone().unwrap_or_default();
            ComboBox::from_id_salt("pie_state")
                .width(120.0)
                .selected_text(&selected)
                .show_ui(ui, |ui| {
                    for state in &types.options {
                        if ui.selectable_label(selected == *state, state).clicked() {
                            inputs.selected_state = Some(state.clone());
                        }
                    }
                });

            ui.add_enabled_ui(types.chart.is_some(), |ui| {
                if ui.button("💾 Save PNG").clicked() {
                    export = true;
                }
            });
        });
        ui.add_space(10.0);

        export
    }

    fn show_pivot(ui: &mut egui::Ui, pivot: &PivotView, inputs: &mut ViewInputs) {
        ui.label(AGG_PROMPT);
        ui.add(egui::TextEdit::singleline(&mut inputs.agg_text).desired_width(200.0));
        ui.add_space(10.0);

        match pivot {
            PivotView::Invalid => {
                ui.colored_label(WARNING_COLOR, INVALID_AGG_WARNING);
            }
            PivotView::Failed(message) => {
                ui.colored_label(ERROR_COLOR, message);
            }
            PivotView::Table(result) => ChartPlotter::draw_pivot_table(ui, result),
        }
    }
}
