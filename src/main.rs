// TimeBrush Application
// Main entry point

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use timebrush::services::settings::resolve_config;
use timebrush::services::transport;
use timebrush::ui_egui::TimeBrushApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting TimeBrush");

    // Optional first argument: path to a timebrush.toml
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = resolve_config(config_path.as_deref())?;

    // A grid that cannot be built is fatal; nothing is rendered.
    let grid_config = config
        .grid_config()
        .context("Invalid grid configuration")?;
    let transport = transport::from_config(&config)?;
    log::info!("Availability store: {}", transport.describe());

    let labels = config.labels.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("TimeBrush")
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "TimeBrush",
        options,
        Box::new(move |_cc| Ok(Box::new(TimeBrushApp::new(grid_config, labels, transport)))),
    )
    .map_err(|err| anyhow!("UI terminated with an error: {}", err))
}
