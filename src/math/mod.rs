// math/ - Vector and matrix algebra plus small scalar helpers
//
// No allocation, no state.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;

use rand::Rng;
use rand::seq::SliceRandom;

/// Screen-space point in pixels, y growing downward
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[inline]
pub fn to_radians(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

/// Linear map of `v` from `from` onto `to`. Not clamped.
#[inline]
pub fn remap(v: f32, from: [f32; 2], to: [f32; 2]) -> f32 {
    to[0] + (v - from[0]) * (to[1] - to[0]) / (from[1] - from[0])
}

/// Uniform pick from a slice, `None` only when empty
#[inline]
pub fn sample<T: Copy, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Option<T> {
    items.choose(rng).copied()
}
