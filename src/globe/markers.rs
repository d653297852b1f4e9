//! Marker set management.
//!
//! Owns the current collection of globe markers and reconciles it against
//! each freshly fetched event list. The whole collection is rebuilt on every
//! refresh cycle; with tens of events there is nothing to gain from
//! incremental diffing, and no marker identity persists across refreshes.

use glam::DVec3;

use crate::events::{classify, GeoEvent, SeverityTier};
use crate::geo::{project, MARKER_RADIUS};

/// A renderable point on the marker sphere.
#[derive(Debug, Clone)]
pub struct Marker {
    /// Position on the marker sphere (distance from origin == sphere radius).
    pub position: DVec3,
    /// Severity tier, determines marker color.
    pub tier: SeverityTier,
    /// The originating event, kept for labels and tooltips.
    pub event: GeoEvent,
}

/// Per-tier marker counts for one rebuilt collection.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TierCounts {
    pub critical: usize,
    pub warning: usize,
    pub normal: usize,
}

impl TierCounts {
    pub fn total(&self) -> usize {
        self.critical + self.warning + self.normal
    }

    pub fn get(&self, tier: SeverityTier) -> usize {
        match tier {
            SeverityTier::Critical => self.critical,
            SeverityTier::Warning => self.warning,
            SeverityTier::Normal => self.normal,
        }
    }

    fn record(&mut self, tier: SeverityTier) {
        match tier {
            SeverityTier::Critical => self.critical += 1,
            SeverityTier::Warning => self.warning += 1,
            SeverityTier::Normal => self.normal += 1,
        }
    }
}

/// Builds a fresh marker collection from an event list.
///
/// Events without a coordinate pair are skipped silently: upstream data is
/// allowed to be incomplete, and such events contribute to no marker and no
/// count. The marker list and the tier counts are produced together so
/// callers always observe a consistent pair.
pub fn build_markers(events: &[GeoEvent], radius: f64) -> (Vec<Marker>, TierCounts) {
    let mut markers = Vec::with_capacity(events.len());
    let mut counts = TierCounts::default();

    for event in events {
        let Some(coord) = event.coordinates else {
            continue;
        };

        let tier = classify(&event.category);
        counts.record(tier);
        markers.push(Marker {
            position: project(coord.x, coord.y, radius),
            tier,
            event: event.clone(),
        });
    }

    (markers, counts)
}

/// Authoritative holder of the current marker collection.
pub struct MarkerSet {
    markers: Vec<Marker>,
    counts: TierCounts,
    radius: f64,
}

impl MarkerSet {
    pub fn new(radius: f64) -> Self {
        Self {
            markers: Vec::new(),
            counts: TierCounts::default(),
            radius,
        }
    }

    /// A marker set on the default marker sphere.
    pub fn default_sphere() -> Self {
        Self::new(MARKER_RADIUS)
    }

    /// Replaces the whole collection from a new event list.
    ///
    /// The previous collection is discarded in full; markers and counts are
    /// swapped in together, never observable half-updated. Not designed for
    /// concurrent invocation; the update loop serializes rebuilds.
    pub fn rebuild(&mut self, events: &[GeoEvent]) {
        let (markers, counts) = build_markers(events, self.radius);
        self.markers = markers;
        self.counts = counts;
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn counts(&self) -> TierCounts {
        self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::Coord;

    fn event(id: &str, category: &str, lon: f64, lat: f64) -> GeoEvent {
        GeoEvent {
            id: id.to_string(),
            title: format!("Event {}", id),
            category: category.to_string(),
            coordinates: Some(Coord { x: lon, y: lat }),
        }
    }

    fn event_without_geometry(id: &str, category: &str) -> GeoEvent {
        GeoEvent {
            id: id.to_string(),
            title: format!("Event {}", id),
            category: category.to_string(),
            coordinates: None,
        }
    }

    #[test]
    fn test_rebuild_empty_input() {
        let mut set = MarkerSet::default_sphere();
        set.rebuild(&[]);

        assert!(set.markers().is_empty());
        assert_eq!(set.counts(), TierCounts::default());
        assert_eq!(set.counts().total(), 0);
    }

    #[test]
    fn test_rebuild_counts_sum_to_marker_count() {
        let events = vec![
            event("1", "Wildfires", -118.24, 34.05),
            event("2", "Severe Storms", 140.0, 35.0),
            event("3", "Floods", 77.1, 28.7),
            event("4", "Drought", 36.8, -1.29),
            event("5", "Volcanoes", -155.28, 19.41),
        ];

        let mut set = MarkerSet::default_sphere();
        set.rebuild(&events);

        assert_eq!(set.markers().len(), 5);
        let counts = set.counts();
        assert_eq!(counts.critical, 1);
        assert_eq!(counts.warning, 2);
        assert_eq!(counts.normal, 2);
        assert_eq!(counts.total(), set.markers().len());
    }

    #[test]
    fn test_missing_geometry_is_skipped_from_markers_and_counts() {
        let events = vec![
            event("1", "Wildfires", -118.24, 34.05),
            event_without_geometry("2", "Wildfires"),
            event_without_geometry("3", "Floods"),
        ];

        let (markers, counts) = build_markers(&events, MARKER_RADIUS);
        assert_eq!(markers.len(), 1);
        assert_eq!(counts.critical, 1);
        assert_eq!(counts.warning, 0);
        assert_eq!(counts.total(), 1);
    }

    #[test]
    fn test_markers_lie_on_marker_sphere() {
        let events = vec![
            event("1", "Wildfires", -118.24, 34.05),
            event("2", "Floods", 0.0, -90.0),
            event("3", "Drought", 180.0, 0.0),
        ];

        let (markers, _) = build_markers(&events, MARKER_RADIUS);
        for marker in &markers {
            let rel_err = (marker.position.length() - MARKER_RADIUS).abs() / MARKER_RADIUS;
            assert!(rel_err < 1e-9, "{} off sphere", marker.event.id);
        }
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let events = vec![
            event("1", "Wildfires", -118.24, 34.05),
            event_without_geometry("2", "Floods"),
            event("3", "Severe Storms", 140.0, 35.0),
        ];

        let mut set = MarkerSet::default_sphere();
        set.rebuild(&events);
        let first_positions: Vec<DVec3> = set.markers().iter().map(|m| m.position).collect();
        let first_counts = set.counts();

        set.rebuild(&events);
        let second_positions: Vec<DVec3> = set.markers().iter().map(|m| m.position).collect();

        assert_eq!(first_positions, second_positions);
        assert_eq!(first_counts, set.counts());
    }

    #[test]
    fn test_wildfire_example_event() {
        // {geometry:[{coordinates:[-118.24,34.05]}], categories:[{title:"Wildfires"}]}
        let events = vec![event("X", "Wildfires", -118.24, 34.05)];

        let (markers, counts) = build_markers(&events, MARKER_RADIUS);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].tier, SeverityTier::Critical);
        assert_eq!(
            (counts.critical, counts.warning, counts.normal),
            (1, 0, 0)
        );
    }

    #[test]
    fn test_rebuild_replaces_previous_collection() {
        let mut set = MarkerSet::default_sphere();
        set.rebuild(&[
            event("1", "Wildfires", -118.24, 34.05),
            event("2", "Floods", 77.1, 28.7),
        ]);
        assert_eq!(set.markers().len(), 2);

        // Next cycle's list fully supersedes the previous one.
        set.rebuild(&[event("9", "Drought", 36.8, -1.29)]);
        assert_eq!(set.markers().len(), 1);
        assert_eq!(set.markers()[0].event.id, "9");
        assert_eq!(set.counts().total(), 1);
    }
}
