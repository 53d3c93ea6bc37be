use std::ops::RangeInclusive;

use chrono::DateTime;
use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{GridMark, HLine, Legend, Line, LineStyle, Plot, PlotPoints, Polygon};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Telemetry plot (central panel)
// ---------------------------------------------------------------------------

/// Render the time series with threshold line and safe/hazard bands.
pub fn telemetry_plot(ui: &mut Ui, state: &AppState) {
    let Some(series) = &state.series else {
        let text = state
            .status_message
            .as_deref()
            .unwrap_or("Open a telemetry file to audit it  (File → Open…)");
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading(text);
        });
        return;
    };

    let threshold = state.config.threshold_pm10;
    let max_pm10 = series.max_pm10().unwrap_or(threshold);
    // Hazard band tops out 10 % above the peak so the worst reading sits
    // inside it even when the whole series stayed safe.
    let band_top = (max_pm10 * 1.1).max(threshold * 1.1);

    let (mut x0, mut x1) = match series.time_bounds() {
        Some((first, last)) => (first.timestamp() as f64, last.timestamp() as f64),
        None => (0.0, 1.0),
    };
    if x0 == x1 {
        // Single sample: give the bands some width.
        x0 -= 1800.0;
        x1 += 1800.0;
    }

    let points: PlotPoints = series
        .samples()
        .iter()
        .map(|s| [s.timestamp.timestamp() as f64, s.pm10])
        .collect();

    Plot::new("pm10_plot")
        .legend(Legend::default())
        .x_axis_formatter(|mark: GridMark, _range: &RangeInclusive<f64>| format_tick(mark.value))
        .x_axis_label("Time")
        .y_axis_label("PM10 (µg/m³)")
        .label_formatter(|name, value| {
            let when = format_tick(value.x);
            if name.is_empty() {
                format!("{when}\n{:.1} µg/m³", value.y)
            } else {
                format!("{name}\n{when}\n{:.1} µg/m³", value.y)
            }
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.polygon(zone(
                x0,
                x1,
                0.0,
                threshold,
                Color32::from_rgba_unmultiplied(0, 160, 60, 14),
                "Safe state (green LED)",
            ));
            plot_ui.polygon(zone(
                x0,
                x1,
                threshold,
                band_top,
                Color32::from_rgba_unmultiplied(220, 40, 40, 22),
                "Hazard state (red LED)",
            ));

            plot_ui.hline(
                HLine::new(threshold)
                    .color(Color32::RED)
                    .style(LineStyle::dashed_loose())
                    .width(1.5)
                    .name(format!("Trigger limit ({threshold} µg/m³)")),
            );

            plot_ui.line(
                Line::new(points)
                    .name("PM10")
                    .color(Color32::LIGHT_BLUE)
                    .width(1.5),
            );
        });
}

/// Shaded horizontal band between two y values.
fn zone(x0: f64, x1: f64, y0: f64, y1: f64, fill: Color32, name: &str) -> Polygon {
    let corners = PlotPoints::from(vec![[x0, y0], [x1, y0], [x1, y1], [x0, y1]]);
    Polygon::new(corners)
        .fill_color(fill)
        .stroke(Stroke::NONE)
        .name(name)
}

/// Axis / hover label from a unix-seconds plot coordinate.
fn format_tick(secs: f64) -> String {
    DateTime::from_timestamp(secs as i64, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}
