//! Electrostatic Force Calculator - desktop entry point.

use anyhow::anyhow;
use coulomb_calc::config::{AppConfig, MIN_WINDOW_SIZE};
use coulomb_calc::data::MeasurementStore;
use coulomb_calc::gui::CoulombApp;
use eframe::egui;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::parse_args();

    // Initialize tracing
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter(rust_log.as_deref())?)
        .init();

    let store = if config.empty {
        MeasurementStore::new()
    } else {
        MeasurementStore::seeded()
    };

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.inner_size())
            .with_min_inner_size(MIN_WINDOW_SIZE)
            .with_title("ElectroStatic Force Calculator"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "ElectroStatic Force Calculator",
        options,
        Box::new(|cc| Ok(Box::new(CoulombApp::new(cc, store)))),
    )
    .map_err(|e| anyhow!("failed to run window: {e}"))
}
