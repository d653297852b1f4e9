//! Globe rendering: marker management, sphere geometry, procedural
//! textures, the GL pipeline, and the orbit camera.

pub mod camera;
pub mod markers;
pub mod mesh;
pub mod renderer;
pub mod texture;

pub use camera::OrbitCamera;
pub use markers::{build_markers, Marker, MarkerSet, TierCounts};
pub use renderer::GlobeRenderer;
