//! Severity classification for feed events.

use eframe::egui::Color32;

/// Severity tier derived from an event's category text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SeverityTier {
    /// Active fire events.
    Critical,
    /// Storm and flood events.
    Warning,
    /// Everything else.
    Normal,
}

impl SeverityTier {
    /// Display label for the tier.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Warning => "Warning",
            Self::Normal => "Normal",
        }
    }

    /// Marker fill color for this tier.
    pub fn color(&self) -> Color32 {
        match self {
            Self::Critical => Color32::from_rgb(255, 60, 60),
            Self::Warning => Color32::from_rgb(255, 170, 0),
            Self::Normal => Color32::from_rgb(0, 200, 100),
        }
    }

    /// Darker stroke color for marker outlines.
    pub fn stroke_color(&self) -> Color32 {
        match self {
            Self::Critical => Color32::from_rgb(160, 30, 30),
            Self::Warning => Color32::from_rgb(170, 110, 0),
            Self::Normal => Color32::from_rgb(0, 120, 60),
        }
    }

    pub fn all() -> &'static [SeverityTier] {
        &[Self::Critical, Self::Warning, Self::Normal]
    }
}

/// Classifies a category label into a severity tier.
///
/// Total and deterministic: case-insensitive substring match, with "fire"
/// taking precedence over "storm"/"flood" when both appear. Unrecognized
/// categories fall through to Normal rather than failing.
pub fn classify(category: &str) -> SeverityTier {
    let category = category.to_ascii_lowercase();

    if category.contains("fire") {
        SeverityTier::Critical
    } else if category.contains("storm") || category.contains("flood") {
        SeverityTier::Warning
    } else {
        SeverityTier::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_categories() {
        assert_eq!(classify("Wildfires"), SeverityTier::Critical);
        assert_eq!(classify("Severe Storms"), SeverityTier::Warning);
        assert_eq!(classify("Floods"), SeverityTier::Warning);
        assert_eq!(classify("Drought"), SeverityTier::Normal);
        assert_eq!(classify("Volcanoes"), SeverityTier::Normal);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(classify("WILDFIRE"), SeverityTier::Critical);
        assert_eq!(classify("fIrE"), SeverityTier::Critical);
        assert_eq!(classify("sToRmS"), SeverityTier::Warning);
        assert_eq!(classify("FLOODING"), SeverityTier::Warning);
    }

    #[test]
    fn test_fire_takes_precedence() {
        // Both substrings present: fire is checked first.
        assert_eq!(classify("Firestorm"), SeverityTier::Critical);
        assert_eq!(classify("storm-driven fire"), SeverityTier::Critical);
    }

    #[test]
    fn test_classify_is_total() {
        // Arbitrary and empty input maps to a tier, never an error.
        assert_eq!(classify(""), SeverityTier::Normal);
        assert_eq!(classify("???"), SeverityTier::Normal);
        assert_eq!(classify("Sea and Lake Ice"), SeverityTier::Normal);
    }

    #[test]
    fn test_classify_is_deterministic() {
        for category in ["Wildfires", "Severe Storms", "Dust and Haze", ""] {
            assert_eq!(classify(category), classify(category));
        }
    }
}
