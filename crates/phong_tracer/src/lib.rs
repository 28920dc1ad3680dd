//! Phong Tracer - CPU ray tracing of spheres under point lights.
//!
//! One eye ray per pixel, nearest sphere hit, local Phong shading
//! (ambient + diffuse + specular). No shadows, no reflection bounces.
//!
//! Control flow for a pixel: [`Camera`] builds the eye ray,
//! [`find_nearest_hit`] picks the closest sphere, [`shade`] turns the hit
//! (or miss) into a color. [`RayTracer`] bundles the three around an owned
//! [`Scene`], and the [`renderer`] module drives it over a full frame.

pub mod camera;
pub mod intersect;
pub mod renderer;
pub mod shade;
pub mod tracer;

pub use camera::{eye_ray, Camera};
pub use intersect::{find_nearest_hit, sphere_intersection, Hit, RootPolicy};
pub use renderer::{
    color_to_rgba, pixel_count, render, render_frame, render_parallel, ImageBuffer,
    RenderConfig,
};
pub use shade::shade;
pub use tracer::RayTracer;

/// Re-export Vec3 and the color type from phong_math
pub use phong_math::{Color, Ray, Vec3};
/// Re-export the scene model
pub use phong_scene::{Command, Scene};
