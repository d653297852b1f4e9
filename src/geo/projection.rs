//! Geographic coordinate projection onto the globe.
//!
//! Converts (longitude, latitude) in degrees to a 3D Cartesian point on a
//! sphere centered at the origin. One convention is used everywhere in this
//! crate: longitude measured eastward, +Y as the polar axis, the prime
//! meridian crossing the equator at +X and 90°E at -Z. The globe mesh and
//! its texture coordinates are derived from the same mapping, so marker
//! placement and the texture seam cannot disagree.

use glam::DVec3;

/// Radius of the rendered globe.
pub const GLOBE_RADIUS: f64 = 2.0;

/// Height of event markers above the globe surface.
pub const MARKER_ALTITUDE: f64 = 0.1;

/// Radius of the sphere event markers sit on.
pub const MARKER_RADIUS: f64 = GLOBE_RADIUS + MARKER_ALTITUDE;

/// Projects geographic coordinates onto a sphere of the given radius.
///
/// Inputs are degrees: longitude nominally in [-180, 180], latitude in
/// [-90, 90]. Out-of-range values are not rejected; the trigonometric
/// mapping is defined for all reals, so they simply wrap around the sphere.
pub fn project(lon_deg: f64, lat_deg: f64, radius: f64) -> DVec3 {
    let lat = lat_deg.to_radians();
    let lon = lon_deg.to_radians();

    DVec3::new(
        radius * lat.cos() * lon.cos(),
        radius * lat.sin(),
        -radius * lat.cos() * lon.sin(),
    )
}

/// Texture coordinates for a given geographic position.
///
/// u runs west→east across [-180, 180]; v runs north→south so v=0 is the
/// north pole row of the texture.
pub fn uv(lon_deg: f64, lat_deg: f64) -> (f32, f32) {
    let u = (lon_deg + 180.0) / 360.0;
    let v = (90.0 - lat_deg) / 180.0;
    (u as f32, v as f32)
}
