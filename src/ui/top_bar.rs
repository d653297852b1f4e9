//! Top bar UI: app title, feed phase indicator, and status.

use crate::state::{AppState, FeedPhase};
use crate::ui::colors;
use eframe::egui::{self, Color32, RichText};

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_bar")
        .exact_height(36.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(
                    RichText::new(format!(
                        "{} TerraWatch",
                        egui_phosphor::regular::GLOBE_HEMISPHERE_WEST
                    ))
                    .strong()
                    .size(16.0)
                    .color(Color32::WHITE),
                );

                ui.separator();

                // Feed phase indicator: colored dot plus label, pulsing
                // while a fetch is in flight.
                let phase_color = match state.feed.phase {
                    FeedPhase::Idle => colors::feed::LIVE,
                    FeedPhase::Fetching => colors::feed::FETCHING,
                    FeedPhase::Error => colors::feed::STALE,
                };
                let alpha = (state.feed.pulse_alpha() * 255.0) as u8;
                let dot_color = Color32::from_rgba_unmultiplied(
                    phase_color.r(),
                    phase_color.g(),
                    phase_color.b(),
                    alpha,
                );
                ui.label(RichText::new("\u{25CF}").size(13.0).color(dot_color));
                ui.label(
                    RichText::new(state.feed.phase.label())
                        .size(12.0)
                        .color(phase_color),
                );

                ui.separator();

                ui.label(
                    RichText::new(&state.status_message)
                        .size(13.0)
                        .color(Color32::GRAY),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!("{} events", state.feed.event_count))
                            .size(12.0)
                            .color(colors::ui::VALUE),
                    );
                });
            });
        });
}
