//! Event feed payload types.
//!
//! The wire format mirrors the public EONET events endpoint: a JSON object
//! with an `events` array whose elements carry `categories` (array of
//! `{title}`) and `geometry` (array of `{coordinates: [lon, lat]}`). Both
//! arrays may be absent or empty; such events are tolerated and simply
//! contribute no marker downstream.

use geo_types::Coord;
use serde::Deserialize;

/// Top-level feed response.
#[derive(Debug, Clone, Deserialize)]
pub struct EventFeed {
    #[serde(default)]
    pub events: Vec<FeedEvent>,
}

/// One event as it appears on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedEvent {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub categories: Vec<FeedCategory>,
    #[serde(default)]
    pub geometry: Vec<FeedGeometry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedCategory {
    #[serde(default)]
    pub title: String,
}

/// One geometry entry. `coordinates` is kept as raw JSON because upstream
/// mixes point pairs with polygon nestings; anything that is not a plain
/// `[lon, lat]` number pair yields no coordinate.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedGeometry {
    #[serde(default)]
    pub coordinates: serde_json::Value,
}

impl FeedGeometry {
    /// Extracts a (lon, lat) pair if the coordinates are a plain point.
    pub fn lon_lat(&self) -> Option<(f64, f64)> {
        let arr = self.coordinates.as_array()?;
        if arr.len() < 2 {
            return None;
        }
        let lon = arr[0].as_f64()?;
        let lat = arr[1].as_f64()?;
        Some((lon, lat))
    }
}

impl FeedEvent {
    /// Converts the wire event into the immutable dashboard event.
    ///
    /// Takes the first category title (empty when none) and the first
    /// geometry that yields a usable point.
    pub fn into_geo_event(self) -> GeoEvent {
        let category = self
            .categories
            .first()
            .map(|c| c.title.clone())
            .unwrap_or_default();

        let coordinates = self
            .geometry
            .iter()
            .find_map(|g| g.lon_lat())
            .map(|(lon, lat)| Coord { x: lon, y: lat });

        GeoEvent {
            id: self.id,
            title: self.title,
            category,
            coordinates,
        }
    }
}

/// One hazard observation, as consumed by the marker set manager.
///
/// Immutable once created; the whole list is discarded when the next fetch
/// is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoEvent {
    /// Opaque identifier, unique within one fetch.
    pub id: String,
    /// Display label.
    pub title: String,
    /// Free-text classification label from the source.
    pub category: String,
    /// (longitude, latitude) in degrees; None when the source event carried
    /// no usable geometry.
    pub coordinates: Option<Coord<f64>>,
}

/// Parses a raw feed body and converts it into dashboard events.
pub fn parse_feed(body: &[u8]) -> Result<Vec<GeoEvent>, String> {
    let feed: EventFeed =
        serde_json::from_slice(body).map_err(|e| format!("Malformed feed body: {}", e))?;

    Ok(feed
        .events
        .into_iter()
        .map(FeedEvent::into_geo_event)
        .collect())
}

/// Built-in sample events shown before the first live fetch lands.
pub fn sample_events() -> Vec<GeoEvent> {
    let mk = |id: &str, title: &str, category: &str, lon: f64, lat: f64| GeoEvent {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        coordinates: Some(Coord { x: lon, y: lat }),
    };

    vec![
        mk("SAMPLE-1", "Angeles Basin Wildfire", "Wildfires", -118.2437, 34.0522),
        mk("SAMPLE-2", "East Africa Drought", "Drought", 36.8219, -1.2921),
        mk("SAMPLE-3", "Yamuna Floodplain Flooding", "Floods", 77.1025, 28.7041),
        mk("SAMPLE-4", "Cerrado Drought", "Drought", -47.8919, -15.7975),
        mk("SAMPLE-5", "Thames Valley Monitoring", "Monitoring", -0.1278, 51.5074),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_event() {
        let body = br#"{
            "events": [{
                "id": "EONET_1234",
                "title": "X",
                "categories": [{"title": "Wildfires"}],
                "geometry": [{"coordinates": [-118.24, 34.05]}]
            }]
        }"#;

        let events = parse_feed(body).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "EONET_1234");
        assert_eq!(events[0].category, "Wildfires");
        let coord = events[0].coordinates.unwrap();
        assert_eq!((coord.x, coord.y), (-118.24, 34.05));
    }

    #[test]
    fn test_parse_event_without_geometry() {
        let body = br#"{
            "events": [
                {"id": "a", "title": "No geometry", "categories": [{"title": "Drought"}]},
                {"id": "b", "title": "Empty geometry", "categories": [], "geometry": []}
            ]
        }"#;

        let events = parse_feed(body).unwrap();
        assert_eq!(events.len(), 2);
        assert!(events[0].coordinates.is_none());
        assert!(events[1].coordinates.is_none());
        assert_eq!(events[1].category, "");
    }

    #[test]
    fn test_parse_skips_polygon_coordinates() {
        // Nested polygon coordinates are not a point pair.
        let body = br#"{
            "events": [{
                "id": "poly",
                "title": "Polygon event",
                "categories": [{"title": "Floods"}],
                "geometry": [
                    {"coordinates": [[[0.0, 1.0], [2.0, 3.0]]]},
                    {"coordinates": [10.5, -4.25]}
                ]
            }]
        }"#;

        // The first usable point wins; the polygon entry is passed over.
        let events = parse_feed(body).unwrap();
        let coord = events[0].coordinates.unwrap();
        assert_eq!((coord.x, coord.y), (10.5, -4.25));
    }

    #[test]
    fn test_parse_malformed_body_is_an_error() {
        assert!(parse_feed(b"not json").is_err());
        assert!(parse_feed(b"{\"events\": 5}").is_err());
    }

    #[test]
    fn test_parse_empty_feed() {
        assert!(parse_feed(b"{}").unwrap().is_empty());
        assert!(parse_feed(b"{\"events\": []}").unwrap().is_empty());
    }

    #[test]
    fn test_sample_events_have_geometry() {
        let samples = sample_events();
        assert_eq!(samples.len(), 5);
        assert!(samples.iter().all(|e| e.coordinates.is_some()));
    }
}
