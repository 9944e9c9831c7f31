//! View Selector
//! Turns the current page and its inputs into one rendering instruction set.

use super::map::MapSpec;
use super::page::{Page, ViewInputs};
use crate::charts::{BarChartSpec, PieChartSpec};
use crate::data::{AirportTable, ELEVATION, REGION, TYPE};
use crate::stats::{AggFunc, Aggregates, HighestAirport, PivotEngine, PivotResult};
use tracing::debug;

pub const HOME_TITLE: &str = "New England Airports Data";
pub const HOME_DESCRIPTION: &str = "The New England Airports dataset contains data about every \
airport in New England. There is information about the elevations of the airports, as well as \
data about the location and type of each airport.";
pub const INVALID_AGG_WARNING: &str =
    "Please enter a valid aggregation function (mean, max, min, or count)";
pub const AGG_PROMPT: &str = "Enter aggregation function (mean, max, min, count):";
pub const STATE_PROMPT: &str = "Please select the state you would like to view data on";

#[derive(Debug, Clone, PartialEq)]
pub struct HomeView {
    pub title: &'static str,
    pub description: &'static str,
    pub highest_sentence: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypesView {
    /// States offered by the selector, in first-appearance order.
    pub options: Vec<String>,
    pub selected: Option<String>,
    pub chart: Option<PieChartSpec>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PivotView {
    /// The text box does not name an aggregation function.
    Invalid,
    /// The pivot could not be built.
    Failed(String),
    Table(PivotResult),
}

/// Everything one page needs to draw itself.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Home(HomeView),
    ElevationByState(BarChartSpec),
    TypesByState(TypesView),
    ElevationByStateAndType(PivotView),
    Map(MapSpec),
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Home(home) => home.title,
            View::ElevationByState(_) => Page::ElevationByState.label(),
            View::TypesByState(_) => Page::TypesByState.label(),
            View::ElevationByStateAndType(_) => Page::ElevationByStateAndType.label(),
            View::Map(_) => Page::Map.label(),
        }
    }
}

/// Compute the view for `page`. Pure apart from logging.
pub fn select_view(
    page: Page,
    table: &AirportTable,
    aggregates: &Aggregates,
    inputs: &ViewInputs,
) -> View {
    match page {
        Page::Home => View::Home(HomeView {
            title: HOME_TITLE,
            description: HOME_DESCRIPTION,
            highest_sentence: highest_sentence(aggregates.highest_airport.as_ref()),
        }),
        Page::ElevationByState => View::ElevationByState(BarChartSpec::max_elevation_by_state(
            &aggregates.max_elevation_by_state,
        )),
        Page::TypesByState => View::TypesByState(types_view(aggregates, inputs)),
        Page::ElevationByStateAndType => {
            View::ElevationByStateAndType(pivot_view(table, &inputs.agg_text))
        }
        Page::Map => View::Map(MapSpec::from_records(table.records())),
    }
}

pub fn highest_sentence(highest: Option<&HighestAirport>) -> String {
    match highest {
        Some(h) => format!(
            "The airport with the highest elevation in New England is {name}, at an elevation \
             of {elevation:?} ft. {name} is a {kind}.",
            name = h.name,
            elevation = h.elevation_ft,
            kind = h.airport_type,
        ),
        None => "No airport in the data set has a recorded elevation.".to_string(),
    }
}

fn types_view(aggregates: &Aggregates, inputs: &ViewInputs) -> TypesView {
    let options: Vec<String> = aggregates.types_by_state.keys().cloned().collect();

    let selected = inputs
        .selected_state
        .as_ref()
        .filter(|s| options.contains(s))
        .or_else(|| options.first())
        .cloned();

    let chart = selected
        .as_deref()
        .and_then(|state| PieChartSpec::airport_types(&aggregates.types_by_state, state));

    TypesView {
        options,
        selected,
        chart,
    }
}

/// Validate the aggregation text and build the elevation pivot.
pub fn pivot_view(table: &AirportTable, agg_text: &str) -> PivotView {
    let agg: AggFunc = match agg_text.parse() {
        Ok(agg) => agg,
        Err(err) => {
            debug!(error = %err, "rejected aggregation function");
            return PivotView::Invalid;
        }
    };

    match PivotEngine::pivot(table.dataframe(), REGION, TYPE, ELEVATION, agg) {
        Ok(result) => PivotView::Table(result),
        Err(err) => {
            debug!(error = %err, agg = %agg, "pivot failed");
            PivotView::Failed(format!(
                "Something went wrong while creating the pivot table: {err}"
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{four_row_table, no_elevation_table};

    fn view(page: Page, inputs: &ViewInputs) -> View {
        let table = four_row_table();
        let aggregates = Aggregates::compute(table.records());
        select_view(page, &table, &aggregates, inputs)
    }

    #[test]
    fn test_home_sentence() {
        let View::Home(home) = view(Page::Home, &ViewInputs::default()) else {
            panic!("expected home view");
        };
        assert_eq!(
            home.highest_sentence,
            "The airport with the highest elevation in New England is Summit Pad, at an \
             elevation of 50.0 ft. Summit Pad is a heliport."
        );
        assert_eq!(home.title, HOME_TITLE);
    }

    #[test]
    fn test_home_sentence_keeps_fraction() {
        let highest = HighestAirport {
            name: "Notch Airfield".to_string(),
            airport_type: "small_airport".to_string(),
            elevation_ft: 1497.5,
        };
        assert!(highest_sentence(Some(&highest)).contains("elevation of 1497.5 ft."));
    }

    #[test]
    fn test_home_sentence_without_result() {
        assert_eq!(
            highest_sentence(None),
            "No airport in the data set has a recorded elevation."
        );
    }

    #[test]
    fn test_bar_chart_view() {
        let View::ElevationByState(bar) = view(Page::ElevationByState, &ViewInputs::default())
        else {
            panic!("expected bar chart");
        };
        assert_eq!(bar.labels(), vec!["MA", "CT"]);
        assert_eq!(bar.bars[1].value, 5.0);
    }

    #[test]
    fn test_types_view_defaults_to_first_state() {
        let View::TypesByState(types) = view(Page::TypesByState, &ViewInputs::default()) else {
            panic!("expected types view");
        };
        assert_eq!(types.options, vec!["MA", "CT"]);
        assert_eq!(types.selected.as_deref(), Some("MA"));
        assert_eq!(types.chart.unwrap().slices.len(), 2);
    }

    #[test]
    fn test_types_view_selected_state() {
        let inputs = ViewInputs {
            selected_state: Some("CT".to_string()),
            ..ViewInputs::default()
        };
        let View::TypesByState(types) = view(Page::TypesByState, &inputs) else {
            panic!("expected types view");
        };
        let chart = types.chart.unwrap();
        assert_eq!(chart.slices.len(), 1);
        assert_eq!(chart.slices[0].count, 2);
        assert_eq!(chart.slices[0].percent_label(), "100.0%");
    }

    #[test]
    fn test_pivot_rejects_untrimmed_input() {
        let inputs = ViewInputs {
            agg_text: "Mean ".to_string(),
            ..ViewInputs::default()
        };
        assert_eq!(
            view(Page::ElevationByStateAndType, &inputs),
            View::ElevationByStateAndType(PivotView::Invalid)
        );
    }

    #[test]
    fn test_pivot_accepts_mixed_case() {
        let inputs = ViewInputs {
            agg_text: "COUNT".to_string(),
            ..ViewInputs::default()
        };
        let View::ElevationByStateAndType(PivotView::Table(result)) =
            view(Page::ElevationByStateAndType, &inputs)
        else {
            panic!("expected pivot table");
        };
        assert_eq!(result.get("US-MA", "small_airport"), Some(1.0));
        assert_eq!(result.get("US-MA", "heliport"), Some(1.0));
        assert_eq!(result.get("US-CT", "small_airport"), Some(2.0));
        assert_eq!(result.get("US-CT", "heliport"), None);
    }

    #[test]
    fn test_pivot_failure_is_reported_on_page() {
        let table = no_elevation_table();
        let aggregates = Aggregates::compute(table.records());

        let view = select_view(
            Page::ElevationByStateAndType,
            &table,
            &aggregates,
            &ViewInputs::default(),
        );
        let View::ElevationByStateAndType(PivotView::Failed(msg)) = view else {
            panic!("expected a pivot failure");
        };
        assert!(msg.starts_with("Something went wrong while creating the pivot table"));
    }

    #[test]
    fn test_pivot_default_is_mean() {
        let View::ElevationByStateAndType(PivotView::Table(result)) =
            view(Page::ElevationByStateAndType, &ViewInputs::default())
        else {
            panic!("expected pivot table");
        };
        assert_eq!(result.agg, AggFunc::Mean);
        assert_eq!(result.get("US-CT", "small_airport"), Some(5.0));
    }

    #[test]
    fn test_map_view() {
        let View::Map(map) = view(Page::Map, &ViewInputs::default()) else {
            panic!("expected map");
        };
        assert_eq!(map.markers().len(), 4);
        assert!((map.initial_view_state.latitude - 41.95).abs() < 1e-9);
    }
}
