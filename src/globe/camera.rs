//! Orbit camera for the globe view.

use eframe::egui::{Pos2, Rect, Vec2};
use glam::{Mat4, Vec3};

use crate::geo::GLOBE_RADIUS;

/// Radians of yaw/pitch per dragged pixel.
const DRAG_SENSITIVITY: f32 = 0.01;

/// Camera distance limits (the original view allowed z in [2, 15]; the
/// lower bound here keeps the near plane outside the globe surface).
const MIN_DISTANCE: f32 = 2.5;
const MAX_DISTANCE: f32 = 15.0;

/// Idle spin rate in radians per second.
const AUTO_SPIN_RATE: f32 = 0.12;

/// Yaw/pitch/distance orbit camera looking at the globe center.
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub fov_y: f32,
    pub aspect: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.35,
            distance: 5.0,
            fov_y: 75f32.to_radians(),
            aspect: 1.6,
            z_near: 0.1,
            z_far: 100.0,
        }
    }
}

impl OrbitCamera {
    /// Applies a pointer drag, rotating the view around the globe.
    pub fn rotate(&mut self, drag_delta: Vec2) {
        self.yaw -= drag_delta.x * DRAG_SENSITIVITY;
        self.pitch += drag_delta.y * DRAG_SENSITIVITY;

        let limit = core::f32::consts::FRAC_PI_2 - 0.02;
        self.pitch = self.pitch.clamp(-limit, limit);
    }

    /// Applies scroll-wheel zoom.
    pub fn zoom(&mut self, scroll_delta: f32) {
        let factor = (-scroll_delta * 0.002).exp();
        self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Advances the idle auto-rotation.
    pub fn spin(&mut self, dt: f32) {
        self.yaw += AUTO_SPIN_RATE * dt;
    }

    /// Resets to the default orientation and distance.
    pub fn reset(&mut self) {
        *self = Self {
            aspect: self.aspect,
            ..Self::default()
        };
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect.max(1e-3);
    }

    /// Camera position in world space.
    pub fn eye(&self) -> Vec3 {
        Vec3::new(
            self.distance * self.yaw.cos() * self.pitch.cos(),
            self.distance * self.pitch.sin(),
            self.distance * self.yaw.sin() * self.pitch.cos(),
        )
    }

    /// Combined view-projection matrix.
    pub fn view_proj(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Y);
        let proj = Mat4::perspective_rh(self.fov_y, self.aspect, self.z_near, self.z_far);
        proj * view
    }

    /// Whether a point on (or just above) the globe surface is on the
    /// visible side of the horizon, rather than occluded by the globe.
    pub fn is_front_facing(&self, world: Vec3) -> bool {
        let eye = self.eye();
        let horizon_cos = GLOBE_RADIUS as f32 / eye.length();
        world.normalize().dot(eye.normalize()) > horizon_cos - 0.02
    }

    /// Projects a world-space point into screen coordinates within `rect`.
    ///
    /// Returns None for points behind the camera.
    pub fn project_to_screen(&self, world: Vec3, rect: Rect) -> Option<Pos2> {
        let clip = self.view_proj() * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }

        let ndc = clip.truncate() / clip.w;
        let center = rect.center();
        Some(Pos2::new(
            center.x + ndc.x * rect.width() * 0.5,
            center.y - ndc.y * rect.height() * 0.5,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_is_clamped() {
        let mut camera = OrbitCamera::default();

        for _ in 0..100 {
            camera.zoom(500.0);
        }
        assert!((camera.distance - MIN_DISTANCE).abs() < 1e-3);

        for _ in 0..100 {
            camera.zoom(-500.0);
        }
        assert!((camera.distance - MAX_DISTANCE).abs() < 1e-3);
    }

    #[test]
    fn test_pitch_is_clamped_short_of_poles() {
        let mut camera = OrbitCamera::default();
        camera.rotate(Vec2::new(0.0, 10_000.0));
        assert!(camera.pitch < core::f32::consts::FRAC_PI_2);
        camera.rotate(Vec2::new(0.0, -20_000.0));
        assert!(camera.pitch > -core::f32::consts::FRAC_PI_2);
    }

    #[test]
    fn test_point_under_camera_projects_to_center() {
        let mut camera = OrbitCamera::default();
        camera.yaw = 0.0;
        camera.pitch = 0.0;

        // Camera sits on +X looking at the origin; the sub-camera surface
        // point projects to the middle of the viewport.
        let rect = Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0));
        let screen = camera
            .project_to_screen(Vec3::new(GLOBE_RADIUS as f32, 0.0, 0.0), rect)
            .unwrap();

        assert!((screen.x - 400.0).abs() < 1e-2);
        assert!((screen.y - 300.0).abs() < 1e-2);
    }

    #[test]
    fn test_far_side_point_is_not_front_facing() {
        let mut camera = OrbitCamera::default();
        camera.yaw = 0.0;
        camera.pitch = 0.0;

        let near = Vec3::new(GLOBE_RADIUS as f32, 0.0, 0.0);
        let far = Vec3::new(-(GLOBE_RADIUS as f32), 0.0, 0.0);
        assert!(camera.is_front_facing(near));
        assert!(!camera.is_front_facing(far));
    }
}
