//! Command-line configuration.
//!
//! Every option has a default matching the files shipped next to the binary,
//! so running with no arguments loads `new_england_airports.csv` from the
//! working directory.

use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_DATA_PATH: &str = "new_england_airports.csv";
pub const DEFAULT_IMAGE_PATH: &str =
    "Logan-Takeoff-GettyImages-143183998-8e734debd82248b6b59ef908d9f1bb44.jpg";

/// Command-line arguments for the dashboard
#[derive(Parser, Debug, Clone)]
#[command(name = "ne-airports")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Airport CSV to load
    #[arg(long, env = "AIRPORTS_DATA", default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Image shown on the Home page
    #[arg(long, env = "AIRPORTS_IMAGE", default_value = DEFAULT_IMAGE_PATH)]
    pub image: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "AIRPORTS_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}
