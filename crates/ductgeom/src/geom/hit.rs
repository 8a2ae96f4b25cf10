//! Hit-testing: axis-aligned rects, oriented boxes, and "near a line" picks.

use super::project::distance_to_line;
use super::types::{KernelCfg, Line, OrientedBox, Point, Rect};
use super::vector::{cross2d, normal, try_normalize};

/// Axis-aligned containment, half-open on both axes: `[x, x+w) × [y, y+h)`.
#[inline]
pub fn in_rect(p: Point, r: &Rect) -> bool {
    r.contains(p)
}

/// Square of side `size` centred on `p`.
pub fn select_bbox(p: Point, size: f64) -> Rect {
    Rect::from_center_and_dimensions(p, size, size)
}

/// Select-tool point pick: `cursor` falls in the `cfg.select_bbox_size` square
/// around `target`.
pub fn pick_point(cursor: Point, target: Point, cfg: &KernelCfg) -> bool {
    in_rect(cursor, &select_bbox(target, cfg.select_bbox_size))
}

/// Select-tool line pick: `cursor` falls in the oriented box of width
/// `cfg.select_bbox_size` around `line`. Zero-length lines are never picked.
pub fn pick_line_box(cursor: Point, line: &Line, cfg: &KernelCfg) -> bool {
    line_bbox(line, cfg.select_bbox_size).is_some_and(|b| b.contains(cursor))
}

/// True when `p` is strictly closer than `threshold` to the segment.
#[inline]
pub fn point_hovers_line(p: Point, line: &Line, threshold: f64) -> bool {
    distance_to_line(line, p) < threshold
}

/// Oriented box of total width `size` around `line`.
///
/// Corner order: `a + n`, `a - n`, `b - n`, `b + n` where `n` is the unit
/// normal scaled to `size / 2`. `None` for a zero-length line or a width that
/// is not positive and finite.
pub fn line_bbox(line: &Line, size: f64) -> Option<OrientedBox> {
    if !(size.is_finite() && size > 0.0) {
        return None;
    }
    let n = try_normalize(normal(line.direction()))? * (size / 2.0);
    Some(OrientedBox([
        line.a + n,
        line.a - n,
        line.b - n,
        line.b + n,
    ]))
}

/// Point-in-quadrilateral test for four ordered corners.
///
/// For each edge `(p1, p2)` the sign of `normal(p2 - p1) · (p - p1)` is taken;
/// the point is inside iff every sign agrees (boundary counts as inside).
/// Either winding is accepted. Zero-length edges are ignored. A quad with zero
/// (or non-finite) area contains nothing.
pub fn rect_point_hit_test(quad: &[Point; 4], p: Point) -> bool {
    let [q0, q1, q2, q3] = *quad;
    let area2 = cross2d(q1 - q0, q2 - q0) + cross2d(q2 - q0, q3 - q0);
    if area2 == 0.0 || !area2.is_finite() {
        return false;
    }
    let mut any_pos = false;
    let mut any_neg = false;
    for i in 0..4 {
        let p1 = quad[i];
        let edge = quad[(i + 1) % 4] - p1;
        if edge.norm_squared() == 0.0 {
            continue;
        }
        let side = normal(edge).dot(&(p - p1));
        if side > 0.0 {
            any_pos = true;
        } else if side < 0.0 {
            any_neg = true;
        }
        if any_pos && any_neg {
            return false;
        }
    }
    true
}
