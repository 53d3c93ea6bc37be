use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct AirLensApp {
    pub state: AppState,
}

impl AirLensApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for AirLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Metrics row: the numeric verdict ----
        egui::TopBottomPanel::top("metrics_row").show(ctx, |ui| {
            panels::metrics_row(ui, &self.state);
        });

        // ---- Central panel: annotated time-series plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::telemetry_plot(ui, &self.state);
        });
    }
}
