//! Local Phong shading.
//!
//! Ambient plus per-light diffuse and specular terms. There are no shadow
//! rays and no secondary bounces: every light contributes to every hit.

use phong_math::{normalize, reflect, Color, Ray, WHITE};
use phong_scene::Scene;

use crate::intersect::Hit;

/// Compute the color seen along `ray` given its nearest hit.
///
/// A miss returns the scene background.
pub fn shade(scene: &Scene, ray: &Ray, hit: Option<&Hit>) -> Color {
    let Some(hit) = hit else {
        return scene.background();
    };

    let sphere = hit.sphere;
    let ambient = (sphere.ka * scene.ambient()) * sphere.diffuse_color;
    let normal = normalize(hit.point - sphere.center);

    // Same for every light
    let reflect_dir = normalize(reflect(ray.direction, normal));

    let mut light_term = Color::ZERO;
    for light in scene.lights() {
        let light_dir = normalize(light.position - hit.point);

        // Lights behind the surface subtract; only the specular lobe is clamped
        let diffuse = normal.dot(light_dir) * sphere.diffuse_color;

        let mut specular_dot = reflect_dir.dot(light_dir);
        if specular_dot < 0.0 {
            specular_dot = 0.0;
        }
        let specular = (specular_dot.powf(sphere.specular_exponent) * sphere.ks) * WHITE;

        light_term += (diffuse + specular) * light.color;
    }

    ambient + light_term
}
