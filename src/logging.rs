//! Logging setup.

use std::time::Instant;
use tracing::info;

/// Initialize the tracing subscriber with the given log level.
/// `RUST_LOG`, when set, takes precedence.
pub fn init_tracing(log_level: &str) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(val) => val,
        Err(_) => log_level.to_string(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();
}

/// Log the completion of a startup step with its duration.
pub fn log_step(step: &str, start_time: Instant) {
    let duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;
    info!(step = step, duration_ms = duration_ms, "startup step finished");
}
