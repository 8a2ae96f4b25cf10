//! Closest point on a segment.

use super::types::{Line, Point};
use crate::cfg::DEGENERATE_LEN2;

/// Closest point to `c` on the segment `a → b`.
///
/// The projection ratio of `c - a` onto `b - a` is clamped to `[0, 1]`, so the
/// result always lies on the segment. A zero-length segment returns `a`.
pub fn closest_point_to_line(a: Point, b: Point, c: Point) -> Point {
    a + (b - a) * closest_point_param(&Line::new(a, b), c)
}

/// Segment parameter `t ∈ [0, 1]` of the closest point (0 for degenerate segments).
pub fn closest_point_param(line: &Line, c: Point) -> f64 {
    let v = line.direction();
    let len2 = v.norm_squared();
    if len2 <= DEGENERATE_LEN2 {
        return 0.0;
    }
    ((c - line.a).dot(&v) / len2).clamp(0.0, 1.0)
}

/// Distance from `c` to the segment.
#[inline]
pub fn distance_to_line(line: &Line, c: Point) -> f64 {
    nalgebra::distance(&closest_point_to_line(line.a, line.b, c), &c)
}
