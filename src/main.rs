mod app;
mod config;
mod data;
mod state;
mod ui;

use std::path::Path;

use app::AirLensApp;
use config::AnalysisConfig;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let config = AnalysisConfig::load_or_default(Path::new("airlens.json"));
    let mut state = AppState::new(config);
    state.refresh();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "AirLens – PM10 Telemetry Audit",
        options,
        Box::new(|_cc| Ok(Box::new(AirLensApp::new(state)))),
    )
}
