//! Control Panel Widget
//! Left side panel with the page selector.

use crate::views::Page;
use egui::{Color32, RichText};

/// Sidebar with one radio button per page.
pub struct ControlPanel {
    pub row_count: usize,
    pub state_count: usize,
}

impl ControlPanel {
    pub fn new(row_count: usize, state_count: usize) -> Self {
        Self {
            row_count,
            state_count,
        }
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui, current: Page) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("✈ New England Airports")
                    .size(20.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        ui.label(RichText::new("Choose a page").size(14.0).strong());
        ui.add_space(5.0);

        let mut selected = current;
        for page in Page::ALL {
            ui.radio_value(&mut selected, page, page.label());
        }
        if selected != current {
            action = ControlPanelAction::SelectPage(selected);
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(5.0);

        ui.label(
            RichText::new(format!(
                "{} airports across {} states",
                self.row_count, self.state_count
            ))
            .size(11.0)
            .color(Color32::GRAY),
        );

        action
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    SelectPage(Page),
}
