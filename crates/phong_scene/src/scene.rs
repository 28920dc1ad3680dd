//! Scene state for the Phong tracer.
//!
//! A `Scene` is the single mutable container the tracer reads from: point
//! lights, spheres, ambient and background colors, field of view, and the
//! camera pose. It is owned by one tracer and mutated only through the
//! setters below.

use std::f32::consts::FRAC_PI_2;

use phong_math::{Color, Vec3, WHITE};
use serde::{Deserialize, Serialize};

/// A point light source.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    /// Light color (RGB, unclamped)
    pub color: Color,

    /// World-space position
    pub position: Vec3,
}

impl PointLight {
    pub fn new(color: Color, position: Vec3) -> Self {
        Self { color, position }
    }
}

/// A sphere with Phong surface parameters.
///
/// `ka` and `ks` are expected in `[0, 1]` and `radius` to be positive, but
/// neither is validated.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,

    /// Diffuse/albedo color (RGB)
    pub diffuse_color: Color,

    /// Ambient coefficient
    pub ka: f32,

    /// Specular coefficient
    pub ks: f32,

    /// Phong exponent of the specular lobe
    pub specular_exponent: f32,
}

impl Sphere {
    pub fn new(
        center: Vec3,
        radius: f32,
        diffuse_color: Color,
        ka: f32,
        ks: f32,
        specular_exponent: f32,
    ) -> Self {
        Self {
            center,
            radius,
            diffuse_color,
            ka,
            ks,
            specular_exponent,
        }
    }
}

/// Pinhole camera pose.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Eye {
    /// Camera position (ray origin)
    pub position: Vec3,

    /// Point the camera looks at
    pub look_at: Vec3,

    /// Up vector (not required to be perpendicular to the view direction)
    pub up: Vec3,
}

impl Default for Eye {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            look_at: Vec3::NEG_Z,
            up: Vec3::Y,
        }
    }
}

impl Eye {
    pub fn new(position: Vec3, look_at: Vec3, up: Vec3) -> Self {
        Self {
            position,
            look_at,
            up,
        }
    }

    /// Restore the default pose: at the origin, looking down -Z, +Y up.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Everything the tracer needs to color a ray.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    lights: Vec<PointLight>,
    spheres: Vec<Sphere>,
    ambient: Color,
    background: Color,
    /// Field of view in radians
    fov: f32,
    eye: Eye,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Default field of view, 90 degrees.
    pub const DEFAULT_FOV: f32 = FRAC_PI_2;

    /// Create a scene in the reset state.
    pub fn new() -> Self {
        Self {
            lights: Vec::new(),
            spheres: Vec::new(),
            ambient: WHITE,
            background: WHITE,
            fov: Self::DEFAULT_FOV,
            eye: Eye::default(),
        }
    }

    /// Empty the light and sphere lists and restore default colors, fov and
    /// camera pose.
    ///
    /// The lists are cleared in place so their allocations are reused.
    pub fn reset(&mut self) {
        self.lights.clear();
        self.spheres.clear();
        self.ambient = WHITE;
        self.background = WHITE;
        self.fov = Self::DEFAULT_FOV;
        self.eye.reset();
    }

    /// Append a point light. Duplicates are allowed.
    pub fn add_light(&mut self, color: Color, position: Vec3) {
        self.lights.push(PointLight::new(color, position));
    }

    pub fn set_ambient(&mut self, color: Color) {
        self.ambient = color;
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    /// Set the field of view from an angle in degrees.
    pub fn set_fov(&mut self, degrees: f32) {
        self.fov = degrees * (std::f32::consts::PI / 180.0);
    }

    /// Overwrite the camera pose.
    pub fn set_eye(&mut self, position: Vec3, look_at: Vec3, up: Vec3) {
        self.eye = Eye::new(position, look_at, up);
    }

    /// Append a sphere.
    pub fn add_sphere(
        &mut self,
        center: Vec3,
        radius: f32,
        diffuse_color: Color,
        ka: f32,
        ks: f32,
        specular_exponent: f32,
    ) {
        self.spheres.push(Sphere::new(
            center,
            radius,
            diffuse_color,
            ka,
            ks,
            specular_exponent,
        ));
    }

    /// Point lights in insertion order.
    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    /// Spheres in insertion order.
    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn ambient(&self) -> Color {
        self.ambient
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Field of view in radians.
    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn eye(&self) -> &Eye {
        &self.eye
    }

    /// Get light count.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Get sphere count.
    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }
}
