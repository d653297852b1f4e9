//! Risk metrics and trend data for the analytics panel.
//!
//! The original dashboard animated these meters with random numbers; here
//! they are derived deterministically from elapsed time and the live
//! severity counts, so the display is reproducible and testable.

use std::time::Duration;

use crate::globe::TierCounts;

/// Interval between metric recomputations.
pub const METRICS_TICK_INTERVAL: Duration = Duration::from_secs(5);

/// Static monthly trend series shown in the trends chart.
pub struct TrendSeries {
    pub months: &'static [&'static str],
    pub crop_health: &'static [f64],
    pub risk_level: &'static [f64],
}

pub const TREND_SERIES: TrendSeries = TrendSeries {
    months: &["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
    crop_health: &[75.0, 78.0, 82.0, 79.0, 85.0, 88.0],
    risk_level: &[45.0, 52.0, 38.0, 65.0, 42.0, 35.0],
};

/// Slowly drifting risk meters, all in percent [0, 100].
pub struct MetricsState {
    pub crop_risk: f32,
    pub water_stress: f32,
    pub disaster_risk: f32,

    /// Accumulated dashboard uptime driving the drift.
    elapsed_secs: f64,
}

impl Default for MetricsState {
    fn default() -> Self {
        let mut state = Self {
            crop_risk: 0.0,
            water_stress: 0.0,
            disaster_risk: 0.0,
            elapsed_secs: 0.0,
        };
        state.recompute(TierCounts::default());
        state
    }
}

impl MetricsState {
    /// Advances the drift clock and recomputes the meters.
    pub fn advance(&mut self, dt_secs: f64, counts: TierCounts) {
        self.elapsed_secs += dt_secs;
        self.recompute(counts);
    }

    fn recompute(&mut self, counts: TierCounts) {
        let t = self.elapsed_secs;

        // Environmental meters wander on slow sine drifts.
        self.crop_risk = clamp_pct(30.0 + 18.0 * (0.11 * t).sin());
        self.water_stress = clamp_pct(45.0 + 22.0 * (0.07 * t + 1.3).sin());

        // Disaster risk follows the live severity mix: criticals weigh
        // three times a warning, normals not at all.
        let total = counts.total();
        let severity_load = if total > 0 {
            (3.0 * counts.critical as f64 + 1.5 * counts.warning as f64) / (3.0 * total as f64)
        } else {
            0.0
        };
        let wobble = 4.0 * (0.09 * t + 0.7).sin();
        self.disaster_risk = clamp_pct(10.0 + 85.0 * severity_load + wobble);
    }
}

fn clamp_pct(value: f64) -> f32 {
    value.clamp(0.0, 100.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(critical: usize, warning: usize, normal: usize) -> TierCounts {
        TierCounts {
            critical,
            warning,
            normal,
        }
    }

    #[test]
    fn test_metrics_are_deterministic() {
        let mut a = MetricsState::default();
        let mut b = MetricsState::default();

        for _ in 0..10 {
            a.advance(5.0, counts(2, 3, 10));
            b.advance(5.0, counts(2, 3, 10));
        }

        assert_eq!(a.crop_risk, b.crop_risk);
        assert_eq!(a.water_stress, b.water_stress);
        assert_eq!(a.disaster_risk, b.disaster_risk);
    }

    #[test]
    fn test_metrics_stay_in_percent_range() {
        let mut state = MetricsState::default();
        for i in 0..500 {
            state.advance(5.0, counts(i % 7, i % 5, i % 11));
            for value in [state.crop_risk, state.water_stress, state.disaster_risk] {
                assert!((0.0..=100.0).contains(&value), "out of range: {}", value);
            }
        }
    }

    #[test]
    fn test_disaster_risk_tracks_severity_mix() {
        let mut calm = MetricsState::default();
        let mut severe = MetricsState::default();

        calm.advance(5.0, counts(0, 0, 20));
        severe.advance(5.0, counts(20, 0, 0));

        assert!(severe.disaster_risk > calm.disaster_risk);
    }

    #[test]
    fn test_empty_counts_give_low_disaster_risk() {
        let mut state = MetricsState::default();
        state.advance(5.0, TierCounts::default());
        assert!(state.disaster_risk < 25.0);
    }

    #[test]
    fn test_trend_series_is_consistent() {
        assert_eq!(TREND_SERIES.months.len(), TREND_SERIES.crop_health.len());
        assert_eq!(TREND_SERIES.months.len(), TREND_SERIES.risk_level.len());
    }
}
