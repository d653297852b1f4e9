//! Geographic coordinate handling.

pub mod projection;

pub use projection::{project, GLOBE_RADIUS, MARKER_ALTITUDE, MARKER_RADIUS};
