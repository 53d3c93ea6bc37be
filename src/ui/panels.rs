use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::classify::ClassificationSummary;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(series) = &state.series {
            ui.label(format!(
                "{} samples from {}",
                format_count(series.len()),
                state.config.source.display()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Metrics row – the numeric verdict tiles
// ---------------------------------------------------------------------------

/// Render the three summary tiles: totals, breaches, safe-rate.
pub fn metrics_row(ui: &mut Ui, state: &AppState) {
    let Some(summary) = &state.summary else {
        return;
    };

    ui.add_space(4.0);
    ui.columns(3, |cols: &mut [Ui]| {
        metric_tile(
            &mut cols[0],
            "Total data points",
            format_count(summary.total_samples),
        );
        metric_tile(
            &mut cols[1],
            "Hazard events (LED = red)",
            format_count(summary.hazard_count),
        );
        metric_tile(&mut cols[2], "Safe operation rate", safety_text(summary));
    });
    ui.add_space(4.0);
}

fn metric_tile(ui: &mut Ui, label: &str, value: String) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(label);
        ui.heading(RichText::new(value).strong());
    });
}

/// The empty series has no safe-rate; it reads `N/A`, never `0%`.
fn safety_text(summary: &ClassificationSummary) -> String {
    match summary.safety_percentage {
        Some(pct) => format!("{pct:.2}%"),
        None => "N/A".to_string(),
    }
}

/// Format a count with thousands separators.
pub fn format_count(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open PM10 telemetry")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.open_source(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_safety_text() {
        let mut summary = ClassificationSummary {
            total_samples: 3,
            hazard_count: 1,
            safety_percentage: Some(66.666_666),
        };
        assert_eq!(safety_text(&summary), "66.67%");

        summary.safety_percentage = None;
        assert_eq!(safety_text(&summary), "N/A");
    }
}
