//! Feed refresh state machine.
//!
//! Tracks where the dashboard is in its fetch cycle for the status
//! indicator, plus session counters for the panels.

use chrono::{DateTime, Utc};

/// Current phase of the feed cycle.
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum FeedPhase {
    /// Between refreshes; the last applied data is current.
    #[default]
    Idle,
    /// A fetch is in flight.
    Fetching,
    /// The last fetch failed; previous data is still shown.
    Error,
}

impl FeedPhase {
    /// Human-readable label for the phase.
    pub fn label(&self) -> &'static str {
        match self {
            FeedPhase::Idle => "LIVE",
            FeedPhase::Fetching => "UPDATING",
            FeedPhase::Error => "STALE",
        }
    }
}

/// Feed cycle state and session statistics.
pub struct FeedState {
    /// Current phase of the refresh cycle.
    pub phase: FeedPhase,

    /// When the last successful refresh was applied.
    pub last_refresh_at: Option<DateTime<Utc>>,

    /// Message from the last failed fetch.
    pub last_error: Option<String>,

    /// Events received in the last applied refresh.
    pub event_count: usize,

    /// Events in the last refresh that carried no usable geometry.
    pub skipped_count: usize,

    /// Fetches issued this session.
    pub fetches_issued: u32,

    /// Fetches that failed this session.
    pub fetches_failed: u32,

    /// Latency of the last completed fetch in milliseconds.
    pub last_fetch_latency_ms: Option<f64>,

    /// Status indicator pulse phase (0.0 to 1.0, wraps).
    pub pulse_phase: f32,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            phase: FeedPhase::Idle,
            last_refresh_at: None,
            last_error: None,
            event_count: 0,
            skipped_count: 0,
            fetches_issued: 0,
            fetches_failed: 0,
            last_fetch_latency_ms: None,
            pulse_phase: 0.0,
        }
    }
}

impl FeedState {
    /// Marks a fetch as issued.
    pub fn begin_fetch(&mut self) {
        self.phase = FeedPhase::Fetching;
        self.fetches_issued += 1;
    }

    /// Applies a successful refresh.
    pub fn apply_success(&mut self, event_count: usize, skipped_count: usize, latency_ms: f64) {
        self.phase = FeedPhase::Idle;
        self.last_refresh_at = Some(Utc::now());
        self.last_error = None;
        self.event_count = event_count;
        self.skipped_count = skipped_count;
        self.last_fetch_latency_ms = Some(latency_ms);
    }

    /// Records a failed fetch. The previously applied data stays current.
    pub fn apply_failure(&mut self, message: String) {
        self.phase = FeedPhase::Error;
        self.last_error = Some(message);
        self.fetches_failed += 1;
    }

    /// Advances the pulse animation while a fetch is in flight.
    pub fn update_pulse(&mut self, dt: f32) {
        if self.phase == FeedPhase::Fetching {
            self.pulse_phase = (self.pulse_phase + dt) % 1.0;
        }
    }

    /// Indicator alpha: steady when idle, pulsing at ~1 Hz while fetching.
    pub fn pulse_alpha(&self) -> f32 {
        match self.phase {
            FeedPhase::Fetching => 0.5 + 0.5 * (self.pulse_phase * std::f32::consts::TAU).sin(),
            _ => 1.0,
        }
    }

    /// Formats the last refresh time for display.
    pub fn format_last_refresh(&self) -> String {
        match self.last_refresh_at {
            Some(at) => at.format("%H:%M:%S UTC").to_string(),
            None => "—".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successful_cycle_transitions() {
        let mut state = FeedState::default();
        assert_eq!(state.phase, FeedPhase::Idle);

        state.begin_fetch();
        assert_eq!(state.phase, FeedPhase::Fetching);
        assert_eq!(state.fetches_issued, 1);

        state.apply_success(42, 3, 120.5);
        assert_eq!(state.phase, FeedPhase::Idle);
        assert_eq!(state.event_count, 42);
        assert_eq!(state.skipped_count, 3);
        assert!(state.last_refresh_at.is_some());
        assert!(state.last_error.is_none());
    }

    #[test]
    fn test_failure_keeps_previous_data_counts() {
        let mut state = FeedState::default();
        state.begin_fetch();
        state.apply_success(10, 0, 50.0);

        state.begin_fetch();
        state.apply_failure("HTTP 503".to_string());

        assert_eq!(state.phase, FeedPhase::Error);
        assert_eq!(state.fetches_failed, 1);
        assert_eq!(state.last_error.as_deref(), Some("HTTP 503"));
        // The applied event count is untouched by the failed cycle.
        assert_eq!(state.event_count, 10);
    }

    #[test]
    fn test_success_clears_error() {
        let mut state = FeedState::default();
        state.begin_fetch();
        state.apply_failure("offline".to_string());

        state.begin_fetch();
        state.apply_success(5, 1, 80.0);
        assert!(state.last_error.is_none());
        assert_eq!(state.phase, FeedPhase::Idle);
    }

    #[test]
    fn test_pulse_only_animates_while_fetching() {
        let mut state = FeedState::default();
        state.update_pulse(0.25);
        assert_eq!(state.pulse_phase, 0.0);
        assert_eq!(state.pulse_alpha(), 1.0);

        state.begin_fetch();
        state.update_pulse(0.25);
        assert!(state.pulse_phase > 0.0);
    }
}
