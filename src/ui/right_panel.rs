//! Right panel UI: trend chart, severity distribution, and risk meters.

use crate::events::SeverityTier;
use crate::globe::TierCounts;
use crate::state::{AppState, TREND_SERIES};
use crate::ui::colors;
use eframe::egui::{self, RichText, ScrollArea};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};

pub fn render_right_panel(ctx: &egui::Context, state: &mut AppState, counts: TierCounts) {
    egui::SidePanel::right("right_panel")
        .resizable(true)
        .default_width(260.0)
        .min_width(220.0)
        .max_width(380.0)
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Analytics");
                ui.separator();

                render_trends_section(ui);
                ui.add_space(5.0);

                render_distribution_section(ui, counts);
                ui.add_space(5.0);

                render_risk_section(ui, state);
                ui.add_space(5.0);

                render_view_section(ui, state);
            });
        });
}

fn render_trends_section(ui: &mut egui::Ui) {
    egui::CollapsingHeader::new(RichText::new("Trends").strong())
        .default_open(true)
        .show(ui, |ui| {
            let series = |values: &[f64]| -> PlotPoints {
                values
                    .iter()
                    .enumerate()
                    .map(|(i, v)| [i as f64, *v])
                    .collect()
            };

            Plot::new("trends_plot")
                .height(150.0)
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .legend(Legend::default())
                .x_axis_formatter(|mark, _range| {
                    let idx = mark.value.round() as usize;
                    TREND_SERIES
                        .months
                        .get(idx)
                        .map(|m| m.to_string())
                        .unwrap_or_default()
                })
                .show(ui, |plot_ui| {
                    plot_ui.line(
                        Line::new("Crop Health Index", series(TREND_SERIES.crop_health))
                            .color(colors::charts::CROP_HEALTH),
                    );
                    plot_ui.line(
                        Line::new("Disaster Risk Level", series(TREND_SERIES.risk_level))
                            .color(colors::charts::RISK_LEVEL),
                    );
                });
        });
}

fn render_distribution_section(ui: &mut egui::Ui, counts: TierCounts) {
    egui::CollapsingHeader::new(RichText::new("Alert Distribution").strong())
        .default_open(true)
        .show(ui, |ui| {
            let bars: Vec<Bar> = SeverityTier::all()
                .iter()
                .enumerate()
                .map(|(i, tier)| {
                    Bar::new(i as f64, counts.get(*tier) as f64)
                        .width(0.6)
                        .fill(tier.color())
                        .name(tier.label())
                })
                .collect();

            Plot::new("distribution_plot")
                .height(120.0)
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .show_grid(false)
                .x_axis_formatter(|mark, _range| {
                    let idx = mark.value.round() as usize;
                    SeverityTier::all()
                        .get(idx)
                        .map(|t| t.label().to_string())
                        .unwrap_or_default()
                })
                .show(ui, |plot_ui| {
                    plot_ui.bar_chart(BarChart::new("Alerts", bars));
                });
        });
}

fn render_risk_section(ui: &mut egui::Ui, state: &AppState) {
    egui::CollapsingHeader::new(RichText::new("Risk Metrics").strong())
        .default_open(true)
        .show(ui, |ui| {
            risk_meter(ui, "Crop Risk", state.metrics.crop_risk);
            risk_meter(ui, "Water Stress", state.metrics.water_stress);
            risk_meter(ui, "Disaster Risk", state.metrics.disaster_risk);
        });
}

fn render_view_section(ui: &mut egui::Ui, state: &mut AppState) {
    egui::CollapsingHeader::new(RichText::new("View").strong())
        .default_open(false)
        .show(ui, |ui| {
            ui.checkbox(&mut state.view.auto_rotate, "Auto-rotate");
            ui.checkbox(&mut state.view.show_clouds, "Cloud layer");
            ui.checkbox(&mut state.view.marker_pulse, "Marker pulse");
        });
}

fn risk_meter(ui: &mut egui::Ui, label: &str, percent: f32) {
    ui.label(RichText::new(label).small().color(colors::ui::LABEL));
    ui.add(
        egui::ProgressBar::new(percent / 100.0)
            .text(RichText::new(format!("{:.0}%", percent)).small()),
    );
    ui.add_space(4.0);
}
