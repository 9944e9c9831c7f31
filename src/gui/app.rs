//! Airport Dashboard Main Application
//! Main window with the page sidebar and the page viewer.

use crate::charts::{StaticChartRenderer, BAR_SIZE, PIE_SIZE};
use crate::data::AirportTable;
use crate::gui::{ControlPanel, ControlPanelAction, PageAction, PageViewer};
use crate::stats::Aggregates;
use crate::views::{select_view, Dashboard, View};
use egui::{ColorImage, SidePanel, TextureHandle, TextureOptions};
use std::path::Path;
use tracing::{debug, info, warn};

/// Main application window.
pub struct DashboardApp {
    table: AirportTable,
    aggregates: Aggregates,
    dashboard: Dashboard,
    control_panel: ControlPanel,
    page_viewer: PageViewer,
}

impl DashboardApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        table: AirportTable,
        aggregates: Aggregates,
        image_path: &Path,
    ) -> Self {
        let home_image = Self::load_home_image(&cc.egui_ctx, image_path);
        let control_panel = ControlPanel::new(table.len(), aggregates.types_by_state.len());

        Self {
            table,
            aggregates,
            dashboard: Dashboard::new(),
            control_panel,
            page_viewer: PageViewer::new(home_image),
        }
    }

    /// Decode the Home page image into a texture. Failure only affects Home.
    fn load_home_image(ctx: &egui::Context, path: &Path) -> Result<TextureHandle, String> {
        let image = image::open(path).map_err(|e| {
            warn!(path = %path.display(), error = %e, "home image unavailable");
            format!("{}: {}", path.display(), e)
        })?;

        let rgba = image.to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        let color_image = ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
        debug!(path = %path.display(), width = size[0], height = size[1], "home image loaded");

        Ok(ctx.load_texture("home_image", color_image, TextureOptions::LINEAR))
    }

    fn handle_select_page(&mut self, page: crate::views::Page) {
        if self.dashboard.select_page(page) {
            debug!(page = page.label(), "page selected");
            self.page_viewer.page_changed();
        }
    }

    /// Handle page actions - exports and clipboard
    fn handle_page_action(&mut self, ctx: &egui::Context, action: PageAction, view: &View) {
        match (action, view) {
            (PageAction::ExportBarChart, View::ElevationByState(spec)) => {
                let Some(path) = Self::pick_png("max_elevation_by_state.png") else {
                    return;
                };
                let result = StaticChartRenderer::render_bar_chart(spec, &path, BAR_SIZE);
                self.report_export(result, &path);
            }
            (PageAction::ExportPieChart, View::TypesByState(types)) => {
                let Some(chart) = &types.chart else {
                    return;
                };
                let file_name = format!(
                    "airport_types_{}.png",
                    types.selected.as_deref().unwrap_or("state")
                );
                let Some(path) = Self::pick_png(&file_name) else {
                    return;
                };
                let result = StaticChartRenderer::render_pie_chart(chart, &path, PIE_SIZE);
                self.report_export(result, &path);
            }
            (PageAction::CopyDeckJson, View::Map(map)) => match map.to_deck_json() {
                Ok(json) => {
                    ctx.copy_text(json);
                    self.page_viewer
                        .set_status(format!("Copied {} markers", map.markers().len()), false);
                }
                Err(e) => {
                    warn!(error = %e, "deck json serialization failed");
                    self.page_viewer.set_status(format!("Copy failed: {e}"), true);
                }
            },
            _ => {}
        }
    }

    fn pick_png(default_name: &str) -> Option<std::path::PathBuf> {
        rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name(default_name)
            .save_file()
    }

    fn report_export(&mut self, result: Result<(), crate::charts::RenderError>, path: &Path) {
        match result {
            Ok(()) => {
                info!(path = %path.display(), "chart exported");
                self.page_viewer
                    .set_status(format!("Saved {}", path.display()), false);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "chart export failed");
                self.page_viewer.set_status(format!("Export error: {e}"), true);
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - page selector
        SidePanel::left("control_panel")
            .min_width(260.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                let action = self.control_panel.show(ui, self.dashboard.page());
                match action {
                    ControlPanelAction::SelectPage(page) => self.handle_select_page(page),
                    ControlPanelAction::None => {}
                }
            });

        // Every frame recomputes the current page from the loaded table.
        let view = select_view(
            self.dashboard.page(),
            &self.table,
            &self.aggregates,
            &self.dashboard.inputs,
        );

        // Central panel - current page
        let action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                self.page_viewer
                    .show(ui, &view, &mut self.dashboard.inputs)
            })
            .inner;

        if action != PageAction::None {
            self.handle_page_action(ctx, action, &view);
        }
    }
}
