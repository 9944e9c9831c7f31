//! Page selection and view-local input state.

use crate::stats::AggFunc;

/// The five mutually exclusive dashboard pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    ElevationByState,
    TypesByState,
    ElevationByStateAndType,
    Map,
}

impl Page {
    /// Sidebar order.
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::ElevationByState,
        Page::TypesByState,
        Page::ElevationByStateAndType,
        Page::Map,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::ElevationByState => "Airport Elevation by State",
            Page::TypesByState => "Airport Types by State",
            Page::ElevationByStateAndType => "Elevation by State and Airport Type",
            Page::Map => "Airport Map",
        }
    }
}

/// Input owned by the current page. Discarded on every page switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewInputs {
    /// State chosen on the airport types page; `None` means the first state.
    pub selected_state: Option<String>,
    /// Raw text of the aggregation function box.
    pub agg_text: String,
}

impl Default for ViewInputs {
    fn default() -> Self {
        Self {
            selected_state: None,
            agg_text: AggFunc::default().to_string(),
        }
    }
}

/// Current page plus its inputs.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    page: Page,
    pub inputs: ViewInputs,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Switch pages. Re-selecting the current page keeps its inputs;
    /// moving to another page resets them. Returns whether the page changed.
    pub fn select_page(&mut self, page: Page) -> bool {
        if page == self.page {
            return false;
        }
        self.page = page;
        self.inputs = ViewInputs::default();
        true
    }
}
