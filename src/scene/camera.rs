use glam::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::input::Viewport;

pub const PARALLAX_STRENGTH: f32 = 0.1;
pub const PARALLAX_FOLLOW: f32 = 0.02;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// vertical field of view in degrees
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub look_at: Vec3,
}

impl Camera {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            fov: 75.0,
            aspect: viewport.aspect(),
            near: 0.1,
            far: 1000.0,
            position: Vec3::new(0.0, 0.0, 6.0),
            look_at: Vec3::ZERO,
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.aspect = viewport.aspect();
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.look_at, Vec3::Y)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }

    /// Ease toward a pointer-scaled offset and keep aiming at the origin.
    /// Pointer y is up-positive and the offset mirrors it, like the
    /// ornament pull.
    pub fn follow_pointer(&mut self, pointer: Vec2) {
        let target = Vec2::new(pointer.x, -pointer.y) * PARALLAX_STRENGTH;
        let moved = self.position.truncate().lerp(target, PARALLAX_FOLLOW);
        self.position = moved.extend(self.position.z);
        self.look_at = Vec3::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_view_puts_origin_in_front_of_camera() {
        let camera = Camera::new(Viewport::new(1600, 800, 1.0));
        let origin = camera.view().transform_point3(Vec3::ZERO);
        assert!(origin.x.abs() < EPS);
        assert!(origin.y.abs() < EPS);
        assert!((origin.z + 6.0).abs() < EPS);
    }

    #[test]
    fn test_view_tracks_parallax_and_still_aims_at_origin() {
        let mut camera = Camera::new(Viewport::default());
        for _ in 0..50 {
            camera.follow_pointer(Vec2::new(1.0, 1.0));
        }
        assert!(camera.position.x > 0.0);
        assert!(camera.position.y < 0.0);
        let origin = camera.view().transform_point3(Vec3::ZERO);
        assert!(origin.x.abs() < EPS);
        assert!(origin.y.abs() < EPS);
    }

    #[test]
    fn test_projection_uses_aspect() {
        let camera = Camera::new(Viewport::new(1600, 800, 1.0));
        let clip = camera.view_projection().project_point3(Vec3::ZERO);
        assert!(clip.x.abs() < EPS && clip.y.abs() < EPS);
        let projection = camera.projection();
        // x scale is y scale over aspect
        assert!((projection.x_axis.x * 2.0 - projection.y_axis.y).abs() < EPS);
        assert!(camera.view_projection().is_finite());
    }
}
