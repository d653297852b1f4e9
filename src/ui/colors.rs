//! Centralized color constants for the UI.
//!
//! Severity tier colors live on `SeverityTier` itself; everything else the
//! panels need is collected here.

use eframe::egui::Color32;

/// General UI colors for labels and values.
pub mod ui {
    use super::Color32;

    /// Muted gray for stat labels.
    pub const LABEL: Color32 = Color32::from_rgb(100, 100, 100);
    /// Slightly brighter for stat values.
    pub const VALUE: Color32 = Color32::from_rgb(160, 160, 160);
    /// Success/positive indicator.
    #[allow(dead_code)] // Available for future UI elements
    pub const SUCCESS: Color32 = Color32::from_rgb(100, 200, 100);
}

/// Colors for the feed phase indicator.
pub mod feed {
    use super::Color32;

    /// Green - last refresh applied, data current.
    pub const LIVE: Color32 = Color32::from_rgb(100, 200, 100);
    /// Blue - fetch in flight.
    pub const FETCHING: Color32 = Color32::from_rgb(100, 180, 255);
    /// Red - last fetch failed, showing stale data.
    pub const STALE: Color32 = Color32::from_rgb(255, 80, 80);
}

/// Colors for the globe canvas.
pub mod globe {
    use super::Color32;

    /// Deep space background behind the globe.
    pub const BACKGROUND: Color32 = Color32::from_rgb(0, 0, 17);
    /// Overlay text in the canvas corner.
    pub const OVERLAY_TEXT: Color32 = Color32::from_rgb(200, 200, 220);
    /// Tooltip backdrop - requires alpha, use function.
    pub fn tooltip_bg() -> Color32 {
        Color32::from_rgba_unmultiplied(20, 20, 35, 230)
    }
}

/// Colors for the trend chart series.
pub mod charts {
    use super::Color32;

    /// Crop health line (emerald).
    pub const CROP_HEALTH: Color32 = Color32::from_rgb(16, 185, 129);
    /// Disaster risk line (red).
    pub const RISK_LEVEL: Color32 = Color32::from_rgb(239, 68, 68);
}
