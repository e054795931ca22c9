//! Orbit camera for the solid viewport.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use lathe::nalgebra::{Matrix4, Point3, Vector3};

/// Orbit camera circling the origin, where the sculpted solid lives.
pub struct OrbitCamera {
    /// Distance from the origin.
    pub distance: f32,
    /// Horizontal angle (radians).
    pub azimuth: f32,
    /// Vertical angle (radians), clamped to avoid flipping over the poles.
    pub elevation: f32,
    /// Vertical field of view in radians.
    pub fov: f32,
    near: f32,
    far: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            distance: 3.0,
            azimuth: 0.0,
            elevation: 0.3,
            fov: FRAC_PI_4,
            near: 0.01,
            far: 100.0,
        }
    }
}

impl OrbitCamera {
    /// The camera's eye position in world space.
    pub fn eye_position(&self) -> Point3<f32> {
        let (sin_elev, cos_elev) = self.elevation.sin_cos();
        let (sin_azim, cos_azim) = self.azimuth.sin_cos();

        Point3::new(
            self.distance * cos_elev * sin_azim,
            self.distance * sin_elev,
            self.distance * cos_elev * cos_azim,
        )
    }

    /// Combined view-projection matrix, column-major for the shader.
    pub fn view_projection(&self, aspect: f32) -> [[f32; 4]; 4] {
        let view = Matrix4::look_at_rh(&self.eye_position(), &Point3::origin(), &Vector3::y());
        let proj = Matrix4::new_perspective(aspect, self.fov, self.near, self.far);
        (proj * view).into()
    }

    /// Direction the headlight shines: from the eye toward the origin.
    pub fn light_direction(&self) -> [f32; 3] {
        let dir = (Point3::origin() - self.eye_position()).normalize();
        [dir.x, dir.y, dir.z]
    }

    /// Rotate by the given angular deltas (radians).
    pub fn rotate(&mut self, delta_azimuth: f32, delta_elevation: f32) {
        self.azimuth += delta_azimuth;
        self.elevation += delta_elevation;

        let limit = FRAC_PI_2 - 0.01;
        self.elevation = self.elevation.clamp(-limit, limit);
    }

    /// Zoom by the given factor.
    pub fn zoom(&mut self, factor: f32) {
        self.distance = (self.distance * factor).clamp(0.5, 50.0);
    }
}
