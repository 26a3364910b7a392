pub mod app;
pub mod color_theme;
pub mod config;
pub mod format;
pub mod media;
pub mod models;
pub mod preferences;
pub mod theme;

use eframe::{self, egui};

pub use app::MyWorldApp;
pub use config::FrontendConfig;

/// Launches the egui application with default window options.
pub fn run_frontend() -> Result<(), eframe::Error> {
    run_frontend_with_options(default_native_options())
}

/// Launches the egui app with caller-provided options.
pub fn run_frontend_with_options(options: eframe::NativeOptions) -> Result<(), eframe::Error> {
    let _ = env_logger::builder().is_test(false).try_init();
    let config = FrontendConfig::from_env();
    log::info!(
        "LLM: {} at {}",
        config.generator.model,
        config.generator.api_url
    );
    eframe::run_native(
        "My World",
        options,
        Box::new(move |cc| Ok(Box::new(MyWorldApp::new(cc, config)?))),
    )
}

fn default_native_options() -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("My World")
            .with_inner_size([480.0, 820.0])
            .with_min_inner_size([360.0, 560.0]),
        ..Default::default()
    }
}
