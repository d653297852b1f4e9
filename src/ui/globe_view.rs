//! Central globe view: camera interaction, the GL paint callback, and the
//! marker overlay.
//!
//! The globe itself is drawn by `GlobeRenderer` through an `egui_glow`
//! callback; markers are overlaid here in egui paint space using the same
//! camera, which keeps marker picking and labels in plain UI code.

use std::sync::{Arc, Mutex};

use eframe::egui::{self, Color32, FontId, Pos2, Rect, RichText, Sense, Stroke, Vec2};

use crate::globe::{GlobeRenderer, Marker, MarkerSet, OrbitCamera};
use crate::state::AppState;
use crate::ui::colors;

/// Base marker radius in pixels, before pulse scaling.
const MARKER_SCREEN_RADIUS: f32 = 5.0;

/// Pointer distance within which a marker shows its tooltip.
const HOVER_RADIUS: f32 = 10.0;

pub fn render_globe_view(
    ctx: &egui::Context,
    state: &mut AppState,
    camera: &mut OrbitCamera,
    marker_set: &MarkerSet,
    renderer: Option<&Arc<Mutex<GlobeRenderer>>>,
    pulse_time: f64,
) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available_size = ui.available_size();
        let (response, painter) = ui.allocate_painter(available_size, Sense::click_and_drag());
        let rect = response.rect;

        painter.rect_filled(rect, 0.0, colors::globe::BACKGROUND);

        camera.set_aspect(rect.width() / rect.height().max(1.0));
        handle_view_interaction(&response, state, camera);

        // Globe pass through the GL callback.
        if let Some(renderer) = renderer {
            let renderer = renderer.clone();
            let view_proj = camera.view_proj();
            let show_clouds = state.view.show_clouds;

            painter.add(egui::PaintCallback {
                rect,
                callback: Arc::new(egui_glow::CallbackFn::new(move |_info, glow_painter| {
                    if let Ok(renderer) = renderer.lock() {
                        renderer.paint(glow_painter.gl(), view_proj, show_clouds);
                    }
                })),
            });
        } else {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "3D globe unavailable (no GL context)",
                FontId::proportional(14.0),
                colors::ui::LABEL,
            );
        }

        render_markers(&painter, &response, rect, state, camera, marker_set, pulse_time);
        draw_overlay_info(ui, &rect, state);
    });
}

fn handle_view_interaction(response: &egui::Response, state: &AppState, camera: &mut OrbitCamera) {
    if response.dragged() {
        camera.rotate(response.drag_delta());
    } else if state.view.auto_rotate {
        let dt = response.ctx.input(|i| i.stable_dt).min(0.1);
        camera.spin(dt);
    }

    if response.hovered() {
        let scroll_delta = response.ctx.input(|i| i.raw_scroll_delta);
        if scroll_delta.y != 0.0 {
            camera.zoom(scroll_delta.y);
        }
    }

    if response.double_clicked() {
        camera.reset();
    }
}

fn render_markers(
    painter: &egui::Painter,
    response: &egui::Response,
    rect: Rect,
    state: &AppState,
    camera: &OrbitCamera,
    marker_set: &MarkerSet,
    pulse_time: f64,
) {
    let pulse = if state.view.marker_pulse {
        1.0 + 0.3 * (pulse_time * 5.0).sin() as f32
    } else {
        1.0
    };
    let radius = MARKER_SCREEN_RADIUS * pulse;

    let hover_pos = response.hover_pos();
    let mut hovered: Option<(&Marker, Pos2, f32)> = None;

    for marker in marker_set.markers() {
        if !state.view.filter.matches(marker.tier) {
            continue;
        }

        let world = marker.position.as_vec3();
        if !camera.is_front_facing(world) {
            continue;
        }
        let Some(screen) = camera.project_to_screen(world, rect) else {
            continue;
        };
        if !rect.contains(screen) {
            continue;
        }

        painter.circle_filled(screen, radius, marker.tier.color());
        painter.circle_stroke(screen, radius, Stroke::new(1.0, marker.tier.stroke_color()));

        if let Some(pointer) = hover_pos {
            let dist = pointer.distance(screen);
            if dist <= HOVER_RADIUS && hovered.map_or(true, |(_, _, best)| dist < best) {
                hovered = Some((marker, screen, dist));
            }
        }
    }

    if let Some((marker, screen, _)) = hovered {
        draw_marker_tooltip(painter, rect, marker, screen);
    }
}

fn draw_marker_tooltip(painter: &egui::Painter, rect: Rect, marker: &Marker, screen: Pos2) {
    let text = format!(
        "{}\n{} \u{2022} {}\n{}",
        marker.event.title,
        marker.event.category,
        marker.tier.label(),
        marker.event.id
    );
    let galley = painter.layout_no_wrap(
        text,
        FontId::proportional(12.0),
        colors::globe::OVERLAY_TEXT,
    );

    let padding = Vec2::new(6.0, 4.0);
    let mut anchor = screen + Vec2::new(10.0, -10.0 - galley.size().y);
    // Keep the tooltip inside the canvas.
    anchor.x = anchor.x.min(rect.right() - galley.size().x - 2.0 * padding.x);
    anchor.y = anchor.y.max(rect.top());

    let bg_rect = Rect::from_min_size(anchor, galley.size() + 2.0 * padding);
    painter.rect_filled(bg_rect, 3.0, colors::globe::tooltip_bg());
    painter.rect_stroke(
        bg_rect,
        3.0,
        Stroke::new(1.0, marker.tier.stroke_color()),
        egui::StrokeKind::Outside,
    );
    painter.galley(anchor + padding, galley, colors::globe::OVERLAY_TEXT);
}

fn draw_overlay_info(ui: &mut egui::Ui, rect: &Rect, state: &AppState) {
    let overlay_pos = rect.left_top() + Vec2::new(10.0, 10.0);
    let overlay_rect = Rect::from_min_size(overlay_pos, Vec2::new(220.0, 50.0));

    ui.scope_builder(egui::UiBuilder::new().max_rect(overlay_rect), |ui| {
        ui.vertical(|ui| {
            ui.label(
                RichText::new(format!("Events: {}", state.feed.event_count))
                    .monospace()
                    .size(12.0)
                    .color(Color32::from_rgb(200, 200, 220)),
            );
            ui.label(
                RichText::new(format!("Updated: {}", state.feed.format_last_refresh()))
                    .monospace()
                    .size(12.0)
                    .color(Color32::from_rgb(200, 200, 220)),
            );
        });
    });
}
