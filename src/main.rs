#![warn(clippy::all)]

//! TerraWatch - A web-based global disaster monitoring dashboard.
//!
//! Renders a rotatable 3D globe with severity-classified event markers fed
//! from a public events endpoint, alongside alert counts, trend charts, and
//! risk meters. Targets WASM for deployment and native desktop for
//! development.

mod events;
mod geo;
mod globe;
mod state;
mod ui;

use std::sync::{Arc, Mutex};

use eframe::egui;

use events::{FeedChannel, FetchResult, EVENTS_FEED_URL, EVENT_REFRESH_INTERVAL};
use globe::{GlobeRenderer, MarkerSet, OrbitCamera};
use state::{AppState, METRICS_TICK_INTERVAL};

// Native entry point
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();

    let native_options = eframe::NativeOptions::default();

    eframe::run_native(
        "TerraWatch",
        native_options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(cc)))),
    )
}

// WASM entry point - main is not called on wasm32
#[cfg(target_arch = "wasm32")]
fn main() {}

/// Entry point for the WASM application.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub async fn start() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirect `log` messages to `console.log`:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No window")
            .document()
            .expect("No document");

        let canvas = document
            .get_element_by_id("app_canvas")
            .expect("Failed to find app_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("app_canvas was not a HtmlCanvasElement");

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(DashboardApp::new(cc)))),
            )
            .await;

        // Remove the loading text once the app has loaded:
        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            match start_result {
                Ok(_) => {
                    loading_text.remove();
                }
                Err(e) => {
                    loading_text.set_inner_html(
                        "<p>The app has crashed. See the developer console for details.</p>",
                    );
                    panic!("Failed to start eframe: {e:?}");
                }
            }
        }
    });
}

/// Main application state and logic.
pub struct DashboardApp {
    /// Application state containing all sub-states
    state: AppState,

    /// Channel for async event feed fetches
    feed_channel: FeedChannel,

    /// Authoritative marker collection, rebuilt on each applied refresh
    marker_set: MarkerSet,

    /// Orbit camera for the globe view
    camera: OrbitCamera,

    /// GL globe pipeline; None when no glow context is available
    globe_renderer: Option<Arc<Mutex<GlobeRenderer>>>,

    /// When the last feed refresh was issued
    last_refresh_issued: Option<web_time::Instant>,

    /// When the cosmetic metrics were last recomputed
    last_metrics_tick: web_time::Instant,

    /// App start, drives the marker pulse animation
    started_at: web_time::Instant,
}

impl DashboardApp {
    /// Creates a new DashboardApp instance.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let globe_renderer = cc.gl.as_ref().and_then(|gl| match GlobeRenderer::new(gl) {
            Ok(renderer) => Some(Arc::new(Mutex::new(renderer))),
            Err(e) => {
                log::error!("Failed to build globe renderer: {}", e);
                None
            }
        });

        let mut state = AppState::new();

        // Seed with sample data so the globe is populated before the first
        // live fetch lands.
        let mut marker_set = MarkerSet::default_sphere();
        let samples = events::sample_events();
        marker_set.rebuild(&samples);
        state.feed.event_count = samples.len();
        state.status_message = "Showing sample data".to_string();

        log::info!(
            "Dashboard initialized with {} sample markers",
            marker_set.markers().len()
        );

        Self {
            state,
            feed_channel: FeedChannel::new(),
            marker_set,
            camera: OrbitCamera::default(),
            globe_renderer,
            last_refresh_issued: None,
            last_metrics_tick: web_time::Instant::now(),
            started_at: web_time::Instant::now(),
        }
    }

    /// Applies a completed fetch result.
    ///
    /// Results from superseded fetch attempts are discarded; an error leaves
    /// the previous marker collection untouched (a no-op refresh cycle).
    fn handle_fetch_result(&mut self, result: FetchResult) {
        if !self.feed_channel.is_current(result.generation()) {
            log::debug!(
                "Discarding superseded fetch result (generation {})",
                result.generation()
            );
            return;
        }

        match result {
            FetchResult::Success {
                events,
                fetch_latency_ms,
                ..
            } => {
                self.marker_set.rebuild(&events);
                let counts = self.marker_set.counts();
                let skipped = events.len() - counts.total();

                self.state
                    .feed
                    .apply_success(events.len(), skipped, fetch_latency_ms);
                self.state.status_message = if skipped > 0 {
                    format!("Feed updated: {} events ({} without geometry)", events.len(), skipped)
                } else {
                    format!("Feed updated: {} events", events.len())
                };

                log::info!(
                    "Applied refresh: {} markers ({} critical, {} warning, {} normal)",
                    counts.total(),
                    counts.critical,
                    counts.warning,
                    counts.normal
                );
            }
            FetchResult::Error { message, .. } => {
                log::error!("Feed fetch failed: {}", message);
                self.state.status_message = format!("Feed error: {}", message);
                self.state.feed.apply_failure(message);
            }
        }
    }

    /// Issues a feed fetch when the refresh interval elapsed or the user
    /// asked for one.
    fn schedule_refresh(&mut self, ctx: &egui::Context) {
        let due = self
            .last_refresh_issued
            .map_or(true, |at| at.elapsed() >= EVENT_REFRESH_INTERVAL);

        if (due || self.state.refresh_requested) && !self.feed_channel.is_fetching() {
            self.state.refresh_requested = false;
            self.last_refresh_issued = Some(web_time::Instant::now());
            self.state.feed.begin_fetch();
            self.feed_channel
                .fetch(ctx.clone(), EVENTS_FEED_URL.to_string());
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for completed fetches before scheduling new work.
        while let Some(result) = self.feed_channel.try_recv() {
            self.handle_fetch_result(result);
        }

        self.schedule_refresh(ctx);

        // Cosmetic metrics tick.
        let since_tick = self.last_metrics_tick.elapsed();
        if since_tick >= METRICS_TICK_INTERVAL {
            self.last_metrics_tick = web_time::Instant::now();
            self.state
                .metrics
                .advance(since_tick.as_secs_f64(), self.marker_set.counts());
        }

        // Animation bookkeeping.
        let dt = ctx.input(|i| i.stable_dt).min(0.1);
        self.state.feed.update_pulse(dt);

        let counts = self.marker_set.counts();
        ui::render_top_bar(ctx, &mut self.state);
        ui::render_left_panel(ctx, &mut self.state, counts);
        ui::render_right_panel(ctx, &mut self.state, counts);
        ui::render_globe_view(
            ctx,
            &mut self.state,
            &mut self.camera,
            &self.marker_set,
            self.globe_renderer.as_ref(),
            self.started_at.elapsed().as_secs_f64(),
        );

        // The globe and pulse animate continuously; otherwise wake up at
        // least once a second so interval timers still fire.
        if self.state.view.auto_rotate
            || self.state.view.marker_pulse
            || self.feed_channel.is_fetching()
        {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(std::time::Duration::from_secs(1));
        }
    }

    fn on_exit(&mut self, gl: Option<&glow::Context>) {
        if let (Some(gl), Some(renderer)) = (gl, &self.globe_renderer) {
            if let Ok(renderer) = renderer.lock() {
                renderer.destroy(gl);
            }
        }
    }
}
