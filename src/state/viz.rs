//! Globe view options and marker filtering.

use crate::events::SeverityTier;

/// Which markers to show on the globe.
#[derive(Default, Clone, Copy, PartialEq, Eq)]
pub enum TierFilter {
    #[default]
    All,
    Critical,
    Warning,
    Normal,
}

impl TierFilter {
    pub fn label(&self) -> &'static str {
        match self {
            TierFilter::All => "All",
            TierFilter::Critical => "Critical",
            TierFilter::Warning => "Warning",
            TierFilter::Normal => "Normal",
        }
    }

    pub fn all() -> &'static [TierFilter] {
        &[
            TierFilter::All,
            TierFilter::Critical,
            TierFilter::Warning,
            TierFilter::Normal,
        ]
    }

    /// Whether a marker of the given tier passes this filter.
    pub fn matches(&self, tier: SeverityTier) -> bool {
        match self {
            TierFilter::All => true,
            TierFilter::Critical => tier == SeverityTier::Critical,
            TierFilter::Warning => tier == SeverityTier::Warning,
            TierFilter::Normal => tier == SeverityTier::Normal,
        }
    }
}

/// Globe view state.
pub struct GlobeViewState {
    /// Slow idle rotation when the user is not dragging.
    pub auto_rotate: bool,

    /// Draw the translucent cloud shell.
    pub show_clouds: bool,

    /// Pulse marker size over time.
    pub marker_pulse: bool,

    /// Active marker filter.
    pub filter: TierFilter,
}

impl Default for GlobeViewState {
    fn default() -> Self {
        Self {
            auto_rotate: true,
            show_clouds: true,
            marker_pulse: true,
            filter: TierFilter::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_filter_matches_every_tier() {
        for tier in SeverityTier::all() {
            assert!(TierFilter::All.matches(*tier));
        }
    }

    #[test]
    fn test_tier_filters_match_only_their_tier() {
        assert!(TierFilter::Critical.matches(SeverityTier::Critical));
        assert!(!TierFilter::Critical.matches(SeverityTier::Warning));
        assert!(TierFilter::Warning.matches(SeverityTier::Warning));
        assert!(!TierFilter::Warning.matches(SeverityTier::Normal));
        assert!(TierFilter::Normal.matches(SeverityTier::Normal));
        assert!(!TierFilter::Normal.matches(SeverityTier::Critical));
    }
}
