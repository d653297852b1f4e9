//! Left panel UI: alert counts, marker filter, and refresh controls.

use crate::events::SeverityTier;
use crate::globe::TierCounts;
use crate::state::{AppState, FeedPhase, TierFilter};
use crate::ui::colors;
use eframe::egui::{self, RichText};

pub fn render_left_panel(ctx: &egui::Context, state: &mut AppState, counts: TierCounts) {
    egui::SidePanel::left("left_panel")
        .resizable(true)
        .default_width(220.0)
        .min_width(180.0)
        .max_width(320.0)
        .show(ctx, |ui| {
            ui.heading("Alerts");
            ui.separator();

            for tier in SeverityTier::all() {
                render_count_row(ui, *tier, counts.get(*tier));
            }

            ui.add_space(10.0);
            ui.separator();

            ui.label(RichText::new("Filter").strong());
            egui::ComboBox::from_id_salt("tier_filter")
                .selected_text(state.view.filter.label())
                .width(150.0)
                .show_ui(ui, |ui| {
                    for filter in TierFilter::all() {
                        ui.selectable_value(&mut state.view.filter, *filter, filter.label());
                    }
                });

            ui.add_space(10.0);
            ui.separator();

            let is_fetching = state.feed.phase == FeedPhase::Fetching;
            ui.add_enabled_ui(!is_fetching, |ui| {
                if ui
                    .button(format!(
                        "{} Refresh now",
                        egui_phosphor::regular::ARROWS_CLOCKWISE
                    ))
                    .clicked()
                {
                    state.refresh_requested = true;
                }
            });

            if is_fetching {
                ui.add_space(5.0);
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Fetching events...");
                });
            }

            ui.add_space(10.0);

            ui.group(|ui| {
                stat_row(ui, "Last update", &state.feed.format_last_refresh());
                stat_row(ui, "Fetches", &state.feed.fetches_issued.to_string());
                if state.feed.fetches_failed > 0 {
                    stat_row(ui, "Failed", &state.feed.fetches_failed.to_string());
                }
                if let Some(latency) = state.feed.last_fetch_latency_ms {
                    stat_row(ui, "Latency", &format!("{:.0} ms", latency));
                }
                if state.feed.skipped_count > 0 {
                    stat_row(
                        ui,
                        "No geometry",
                        &state.feed.skipped_count.to_string(),
                    );
                }
            });

            if let Some(ref error) = state.feed.last_error {
                ui.add_space(5.0);
                ui.label(
                    RichText::new(error)
                        .small()
                        .color(colors::feed::STALE),
                );
            }
        });
}

fn render_count_row(ui: &mut egui::Ui, tier: SeverityTier, count: usize) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("\u{25CF}").color(tier.color()));
        ui.label(RichText::new(tier.label()).color(colors::ui::VALUE));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(count.to_string())
                    .strong()
                    .monospace()
                    .color(tier.color()),
            );
        });
    });
}

fn stat_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(label).small().color(colors::ui::LABEL));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(value).small().monospace().color(colors::ui::VALUE));
        });
    });
}
