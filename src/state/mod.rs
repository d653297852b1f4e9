//! Application state management.
//!
//! All state is owned by the dashboard controller and passed explicitly to
//! the UI and renderer; no module-level globals.

mod feed;
mod metrics;
mod viz;

pub use feed::{FeedPhase, FeedState};
pub use metrics::{MetricsState, METRICS_TICK_INTERVAL, TREND_SERIES};
pub use viz::{GlobeViewState, TierFilter};

/// Root application state containing all sub-states.
#[derive(Default)]
pub struct AppState {
    /// Feed refresh cycle state and session counters
    pub feed: FeedState,

    /// Risk meters and trend data for the analytics panel
    pub metrics: MetricsState,

    /// Globe view options and marker filter
    pub view: GlobeViewState,

    /// Status message displayed in the top bar
    pub status_message: String,

    /// Set by the UI to request an immediate feed refresh
    pub refresh_requested: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            status_message: "Ready".to_string(),
            ..Default::default()
        }
    }
}
