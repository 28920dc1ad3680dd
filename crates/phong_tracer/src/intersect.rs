//! Ray-sphere intersection and nearest-hit selection.

use phong_math::{Ray, Vec3};
use phong_scene::Sphere;

/// Which root of the ray-sphere quadratic counts as the hit distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RootPolicy {
    /// The smaller root, whatever its sign. A sphere entirely behind the ray
    /// origin still registers a hit.
    #[default]
    Nearest,

    /// The smallest root with `t > 0`. Spheres behind the origin are missed,
    /// and an origin inside a sphere hits the far side.
    InFront,
}

/// The nearest sphere along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit<'a> {
    /// Sphere that was hit
    pub sphere: &'a Sphere,
    /// Ray parameter of the hit
    pub t: f32,
    /// Point of intersection, `origin + t * direction`
    pub point: Vec3,
}

/// Solve the ray-sphere quadratic and return the hit distance, if any.
///
/// The direction does not need to be unit length; `t` is measured in
/// multiples of it. A NaN root (degenerate ray) counts as a miss, and so
/// does a root of exactly zero: an origin lying on the surface does not
/// hit that sphere at the origin itself.
pub fn sphere_intersection(ray: &Ray, sphere: &Sphere, policy: RootPolicy) -> Option<f32> {
    let oc = ray.origin - sphere.center;
    let a = ray.direction.length_squared();
    let b = 2.0 * oc.dot(ray.direction);
    let c = oc.length_squared() - sphere.radius * sphere.radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrtd = discriminant.sqrt();
    let t1 = (-b + sqrtd) / (2.0 * a);
    let t2 = (-b - sqrtd) / (2.0 * a);

    let t = match policy {
        RootPolicy::Nearest => t1.min(t2),
        RootPolicy::InFront => {
            let (near, far) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
            if near > 0.0 {
                near
            } else if far > 0.0 {
                far
            } else {
                return None;
            }
        }
    };

    if t.is_nan() || t == 0.0 {
        None
    } else {
        Some(t)
    }
}

/// Find the sphere with the smallest hit distance along `ray`.
///
/// Ties go to the sphere that comes first in `spheres`.
pub fn find_nearest_hit<'a>(ray: &Ray, spheres: &'a [Sphere], policy: RootPolicy) -> Option<Hit<'a>> {
    let mut closest: Option<(f32, &'a Sphere)> = None;

    for sphere in spheres {
        if let Some(t) = sphere_intersection(ray, sphere, policy) {
            match closest {
                Some((closest_t, _)) if t >= closest_t => {}
                _ => closest = Some((t, sphere)),
            }
        }
    }

    closest.map(|(t, sphere)| Hit {
        sphere,
        t,
        point: ray.at(t),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use phong_math::Color;

    fn sphere(center: Vec3, radius: f32) -> Sphere {
        Sphere::new(center, radius, Color::ONE, 0.0, 0.0, 1.0)
    }

    #[test]
    fn test_sphere_hit_distance() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        let unit = sphere(Vec3::ZERO, 1.0);

        assert_eq!(sphere_intersection(&ray, &unit, RootPolicy::Nearest), Some(4.0));

        let hit = find_nearest_hit(&ray, std::slice::from_ref(&unit), RootPolicy::Nearest).unwrap();
        assert_eq!(hit.t, 4.0);
        assert_eq!(hit.point, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_sphere_miss() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Y);
        let unit = sphere(Vec3::ZERO, 1.0);

        assert_eq!(sphere_intersection(&ray, &unit, RootPolicy::Nearest), None);
        assert!(find_nearest_hit(&ray, &[unit], RootPolicy::Nearest).is_none());
    }

    #[test]
    fn test_tangent_ray_hits_once() {
        // Grazes the unit sphere at (1, 0, 0): discriminant is exactly zero
        let ray = Ray::new(Vec3::new(1.0, 0.0, 5.0), Vec3::NEG_Z);
        let unit = sphere(Vec3::ZERO, 1.0);

        let hit = find_nearest_hit(&ray, std::slice::from_ref(&unit), RootPolicy::Nearest).unwrap();
        assert_eq!(hit.t, 5.0);
        assert_eq!(hit.point, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_non_unit_direction() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -2.0));
        let unit = sphere(Vec3::ZERO, 1.0);

        let hit = find_nearest_hit(&ray, std::slice::from_ref(&unit), RootPolicy::Nearest).unwrap();
        assert_eq!(hit.t, 2.0);
        assert_eq!(hit.point, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_nearest_of_overlapping_spheres_any_order() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        let near = sphere(Vec3::new(0.0, 0.0, 0.5), 1.0);
        let far = sphere(Vec3::new(0.0, 0.0, -0.5), 1.0);

        for spheres in [[near, far], [far, near]] {
            let hit = find_nearest_hit(&ray, &spheres, RootPolicy::Nearest).unwrap();
            assert_eq!(*hit.sphere, near);
            assert_eq!(hit.t, 3.5);
        }
    }

    #[test]
    fn test_tie_goes_to_first() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        let a = Sphere::new(Vec3::ZERO, 1.0, Color::X, 0.0, 0.0, 1.0);
        let b = Sphere::new(Vec3::ZERO, 1.0, Color::Y, 0.0, 0.0, 1.0);

        let spheres = [a, b];
        let hit = find_nearest_hit(&ray, &spheres, RootPolicy::Nearest).unwrap();
        assert!(std::ptr::eq(hit.sphere, &spheres[0]));
    }

    #[test]
    fn test_nearest_policy_hits_sphere_behind() {
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let behind = sphere(Vec3::new(0.0, 0.0, 5.0), 1.0);

        assert_eq!(sphere_intersection(&ray, &behind, RootPolicy::Nearest), Some(-6.0));
        assert_eq!(sphere_intersection(&ray, &behind, RootPolicy::InFront), None);
    }

    #[test]
    fn test_nearest_policy_prefers_sphere_behind() {
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let behind = sphere(Vec3::new(0.0, 0.0, 5.0), 1.0);
        let ahead = sphere(Vec3::new(0.0, 0.0, -5.0), 1.0);
        let spheres = [ahead, behind];

        let hit = find_nearest_hit(&ray, &spheres, RootPolicy::Nearest).unwrap();
        assert_eq!(*hit.sphere, behind);

        let hit = find_nearest_hit(&ray, &spheres, RootPolicy::InFront).unwrap();
        assert_eq!(*hit.sphere, ahead);
        assert_eq!(hit.t, 4.0);
    }

    #[test]
    fn test_origin_inside_sphere() {
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let around = sphere(Vec3::ZERO, 2.0);

        assert_eq!(sphere_intersection(&ray, &around, RootPolicy::Nearest), Some(-2.0));
        assert_eq!(sphere_intersection(&ray, &around, RootPolicy::InFront), Some(2.0));
    }

    #[test]
    fn test_origin_on_surface_zero_root_misses() {
        // Roots are 0 and 2; the smaller one is exactly zero
        let ray = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::NEG_Z);
        let unit = sphere(Vec3::ZERO, 1.0);

        assert_eq!(sphere_intersection(&ray, &unit, RootPolicy::Nearest), None);
        assert_eq!(sphere_intersection(&ray, &unit, RootPolicy::InFront), Some(2.0));

        // A sphere further along is still found
        let ahead = sphere(Vec3::new(0.0, 0.0, -5.0), 1.0);
        let spheres = [unit, ahead];
        let hit = find_nearest_hit(&ray, &spheres, RootPolicy::Nearest).unwrap();
        assert_eq!(*hit.sphere, ahead);
        assert_eq!(hit.t, 5.0);
    }

    #[test]
    fn test_zero_direction_misses() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        let unit = sphere(Vec3::ZERO, 1.0);

        assert!(find_nearest_hit(&ray, &[unit], RootPolicy::Nearest).is_none());
    }

    #[test]
    fn test_empty_scene_misses() {
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!(find_nearest_hit(&ray, &[], RootPolicy::Nearest).is_none());
    }
}
