use glam::{Mat4, Vec3};

/// Perspective camera.
///
/// Projection parameters are fixed at construction; only the position is
/// mutable. The camera looks down -Z, matching the default orientation of
/// the rendered scene.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    fov_y: f32,
    aspect: f32,
    near: f32,
    far: f32,
}

impl Camera {
    /// Create a camera at the origin. `fov_y_degrees` is the vertical field
    /// of view.
    pub fn new(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            fov_y: fov_y_degrees.to_radians(),
            aspect,
            near,
            far,
        }
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, Vec3::NEG_Z, Vec3::Y)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }
}
