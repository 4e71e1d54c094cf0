//! Small additions on top of [`glam::Vec2`] arithmetic.
//!
//! Entity positions accumulate `direction * speed * dt` every frame, so exact
//! float comparison against tile centers is meaningless; equality is defined
//! component-wise within [`EPSILON`].

use glam::Vec2;

/// Component-wise equality threshold.
pub const EPSILON: f32 = 1e-6;

/// Returns true if both components of `a` and `b` differ by less than [`EPSILON`].
pub fn approx_eq(a: Vec2, b: Vec2) -> bool {
    (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
}

/// Scalar division that yields `None` instead of infinities on a zero divisor.
pub fn checked_div(v: Vec2, scalar: f32) -> Option<Vec2> {
    if scalar == 0.0 {
        None
    } else {
        Some(v / scalar)
    }
}

/// Truncates both components to integers, e.g. for pixel-keyed lookups.
pub fn as_int(v: Vec2) -> (i32, i32) {
    (v.x as i32, v.y as i32)
}
