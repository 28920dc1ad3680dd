//! RGB color type.
//!
//! Colors are unclamped linear triples (r = x, g = y, b = z). Scaling,
//! addition and the component-wise product are the `Vec3` operators.
//! Clamping only happens when a color is mapped to display bytes.

use crate::Vec3;

/// Color type alias (RGB values, unclamped)
pub type Color = Vec3;

pub const WHITE: Color = Color::ONE;
pub const GREY: Color = Color::splat(0.5);
pub const BLACK: Color = Color::ZERO;
