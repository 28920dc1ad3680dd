//! Camera for eye ray generation.

use phong_math::{normalize, Ray, Vec3};
use phong_scene::Scene;

/// Pinhole camera built from a scene's eye pose and field of view.
///
/// The basis is computed once; `get_ray` only does the per-pixel part.
/// `u` is `up x w` and is used as-is: if `up` is not perpendicular to the
/// view direction the image plane is skewed rather than corrected.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub screen_width: u32,
    pub screen_height: u32,

    origin: Vec3,
    // Points behind the camera
    w: Vec3,
    u: Vec3,
    up: Vec3,
    // Image plane distance, 1 / tan(fov / 2)
    d: f32,
}

impl Camera {
    /// Build the camera for the scene's current pose.
    pub fn new(scene: &Scene, screen_width: u32, screen_height: u32) -> Self {
        let eye = scene.eye();
        let forward = normalize(eye.look_at - eye.position);
        let w = -forward;

        Self {
            screen_width,
            screen_height,
            origin: eye.position,
            w,
            u: eye.up.cross(w),
            up: eye.up,
            d: 1.0 / (scene.fov() / 2.0).tan(),
        }
    }

    /// Generate the eye ray through pixel (i, j).
    ///
    /// Pixel (0, 0) is the upper-left corner of the image.
    pub fn get_ray(&self, i: u32, j: u32) -> Ray {
        let sx = -1.0 + 2.0 * i as f32 / self.screen_width as f32;
        let sy = 1.0 - 2.0 * j as f32 / self.screen_height as f32;

        let direction = normalize(-self.d * self.w + sx * self.u + sy * self.up);
        Ray::new(self.origin, direction)
    }
}

/// Generate the eye ray through pixel (i, j) for the scene's current camera.
pub fn eye_ray(scene: &Scene, i: u32, j: u32, screen_width: u32, screen_height: u32) -> Ray {
    Camera::new(scene, screen_width, screen_height).get_ray(i, j)
}
