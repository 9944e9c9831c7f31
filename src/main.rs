//! New England Airports - dashboard entry point

use anyhow::{anyhow, Context};
use clap::Parser;
use eframe::egui;
use ne_airports::config::Args;
use ne_airports::data::AirportLoader;
use ne_airports::gui::DashboardApp;
use ne_airports::logging;
use ne_airports::stats::Aggregates;
use std::time::Instant;
use tracing::{error, info, warn};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_tracing(&args.log_level);

    // The dashboard cannot show any page without its data.
    let start = Instant::now();
    let table = AirportLoader::load_csv(&args.data)
        .inspect_err(|e| error!(path = %args.data.display(), error = %e, "failed to load airports"))
        .with_context(|| format!("failed to load airport data from {}", args.data.display()))?;
    let aggregates = Aggregates::compute(table.records());
    logging::log_step("load", start);

    if table.is_empty() {
        warn!(path = %args.data.display(), "airport data has no rows");
    }
    info!(
        airports = table.len(),
        states = aggregates.max_elevation_by_state.len(),
        "airport data ready"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([1000.0, 700.0])
            .with_title("New England Airports"),
        ..Default::default()
    };

    let image_path = args.image.clone();
    eframe::run_native(
        "New England Airports",
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, table, aggregates, &image_path)))),
    )
    .map_err(|e| anyhow!("window error: {e}"))
}
