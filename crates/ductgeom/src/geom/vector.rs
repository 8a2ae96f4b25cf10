//! Vector helpers on top of nalgebra's `Vector2`.

use nalgebra::Rotation2;

use super::types::{Point, Vec2};
use crate::cfg::DEGENERATE_LEN2;

/// Scalar cross product: determinant of `[[v.x, v.y], [u.x, u.y]]`.
/// Positive when `u` is counter-clockwise from `v`.
#[inline]
pub fn cross2d(v: Vec2, u: Vec2) -> f64 {
    v.x * u.y - v.y * u.x
}

/// Perpendicular `(-v.y, v.x)`, i.e. `v` rotated by +90°.
#[inline]
pub fn normal(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Unit vector along `v`, or `None` for a zero-length (or non-finite) input.
#[inline]
pub fn try_normalize(v: Vec2) -> Option<Vec2> {
    let len2 = v.norm_squared();
    if !len2.is_finite() || len2 <= DEGENERATE_LEN2 {
        return None;
    }
    Some(v / len2.sqrt())
}

#[inline]
pub fn points_distance(a: Point, b: Point) -> f64 {
    nalgebra::distance(&a, &b)
}

/// Angle from `v1` to `v2` in radians, normalised to `[0, 2π)`.
pub fn angle_between_vectors(v1: Vec2, v2: Vec2) -> f64 {
    let angle = cross2d(v1, v2).atan2(v1.dot(&v2));
    if angle < 0.0 {
        // -0.0 and tiny negatives must not land on 2π itself.
        let wrapped = angle + std::f64::consts::TAU;
        if wrapped >= std::f64::consts::TAU {
            0.0
        } else {
            wrapped
        }
    } else {
        angle
    }
}

#[inline]
pub fn rotate_vector(v: Vec2, theta: f64) -> Vec2 {
    Rotation2::new(theta) * v
}
