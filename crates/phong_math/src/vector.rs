//! Vector helpers with the exact semantics the tracer relies on.
//!
//! Everything else (add, subtract, scale, dot, cross, length) comes
//! straight from `glam::Vec3`.

use crate::Vec3;

/// Scale `v` to unit length.
///
/// A zero vector is multiplied by `+inf` instead of being rejected, so its
/// components come out as NaN. Callers never see a panic from this.
#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    let mag = v.length();
    let div = if mag == 0.0 { f32::INFINITY } else { 1.0 / mag };
    div * v
}

/// Mirror direction `d` about normal `n`: `d - 2 (d . n) n`.
#[inline]
pub fn reflect(d: Vec3, n: Vec3) -> Vec3 {
    d - 2.0 * d.dot(n) * n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_unit_length() {
        let vectors = [
            Vec3::new(3.0, 4.0, 0.0),
            Vec3::new(-1.0, 2.0, -3.0),
            Vec3::new(1e-3, 0.0, 0.0),
            Vec3::new(250.0, -75.5, 12.25),
        ];

        for v in vectors {
            let n = normalize(v);
            assert!((n.length() - 1.0).abs() < 1e-5, "|{:?}| = {}", n, n.length());
        }
    }

    #[test]
    fn test_normalize_keeps_direction() {
        let n = normalize(Vec3::new(0.0, 0.0, -5.0));
        assert_eq!(n, Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_normalize_zero_is_nan() {
        let n = normalize(Vec3::ZERO);
        assert!(n.x.is_nan());
        assert!(n.y.is_nan());
        assert!(n.z.is_nan());
    }

    #[test]
    fn test_dot_symmetric_and_bilinear() {
        let a = Vec3::new(1.0, -2.0, 3.0);
        let b = Vec3::new(4.0, 0.5, -1.0);
        let c = Vec3::new(-2.0, 1.0, 2.0);

        assert_eq!(a.dot(b), b.dot(a));
        assert!(((2.0 * a + c).dot(b) - (2.0 * a.dot(b) + c.dot(b))).abs() < 1e-5);
    }

    #[test]
    fn test_cross_self_is_zero() {
        let v = Vec3::new(1.5, -2.0, 7.0);
        assert_eq!(v.cross(v), Vec3::ZERO);
    }

    #[test]
    fn test_cross_right_handed() {
        assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
        assert_eq!(Vec3::Z.cross(Vec3::X), Vec3::Y);
    }

    #[test]
    fn test_reflect() {
        let d = Vec3::new(1.0, -1.0, 0.0);
        let r = reflect(d, Vec3::Y);
        assert_eq!(r, Vec3::new(1.0, 1.0, 0.0));

        // Head-on ray bounces straight back
        assert_eq!(reflect(Vec3::NEG_Z, Vec3::Z), Vec3::Z);
    }
}
