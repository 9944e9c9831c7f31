//! Views module - page selection and per-page rendering instructions

mod map;
mod page;
mod selector;

pub use map::{IconDescriptor, IconLayer, IconMarker, MapSpec, ViewState, ICON_URL, MAP_STYLE};
pub use page::{Dashboard, Page, ViewInputs};
pub use selector::{
    highest_sentence, pivot_view, select_view, HomeView, PivotView, TypesView, View, AGG_PROMPT,
    HOME_DESCRIPTION, HOME_TITLE, INVALID_AGG_WARNING, STATE_PROMPT,
};
