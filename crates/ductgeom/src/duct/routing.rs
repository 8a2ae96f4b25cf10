//! Constrained-angle suggestions for the next duct leg.
//!
//! The heading is the direction of the last committed leg. Candidate legs
//! leave the last point along the heading rotated by one of the canonical
//! joint angles; the cursor is projected onto each candidate ray and the
//! nearest projection becomes the suggestion.

use std::cmp::Ordering;

use crate::cfg::ANGLE_EPS_DEG;
use crate::geom::{
    angle_between_vectors, closest_point_to_line, rotate_vector, try_normalize, KernelCfg, Line,
    Point, Vec2,
};

/// Joint angles (degrees, counter-clockwise from the heading) a duct fitting
/// can realise. 270/300/315 are the clockwise −90/−60/−45 turns.
pub const DUCT_JOINT_ANGLES_DEG: [f64; 7] = [0.0, 45.0, 60.0, 90.0, 270.0, 300.0, 315.0];

/// Unit heading of the last leg, or `None` with fewer than two points or a
/// zero-length last leg.
pub fn last_heading(points: &[Point]) -> Option<Vec2> {
    match points {
        [.., prev, last] => try_normalize(*last - *prev),
        _ => None,
    }
}

/// Candidate rays from the last point, one per joint angle, in
/// `DUCT_JOINT_ANGLES_DEG` order. Ray length is `cfg.duct_ray_length / scale`
/// so the fan spans the same screen distance at every zoom level; a
/// non-positive or non-finite `scale` counts as 1.
pub fn duct_fan(points: &[Point], cfg: &KernelCfg, scale: f64) -> Vec<Line> {
    let (Some(heading), Some(&last)) = (last_heading(points), points.last()) else {
        return Vec::new();
    };
    let scale = if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    };
    let length = cfg.duct_ray_length / scale;
    DUCT_JOINT_ANGLES_DEG
        .iter()
        .map(|deg| {
            let dir = rotate_vector(heading, deg.to_radians());
            Line::new(last, last + dir * length)
        })
        .collect()
}

/// Projection of `cursor` onto every candidate ray (seven points), or an empty
/// list when there is no heading yet.
pub fn possible_points_for_next_duct_in_polyline(
    points: &[Point],
    cursor: Point,
    cfg: &KernelCfg,
    scale: f64,
) -> Vec<Point> {
    duct_fan(points, cfg, scale)
        .iter()
        .map(|ray| closest_point_to_line(ray.a, ray.b, cursor))
        .collect()
}

/// Best next endpoint for the cursor.
///
/// - Fewer than two points: no heading, the cursor itself is returned.
/// - Otherwise the candidate nearest to the cursor (first in fan order on ties).
/// - `None` only when the last leg has zero length.
pub fn suggest_possible_leg_placement(
    cursor: Point,
    points: &[Point],
    cfg: &KernelCfg,
    scale: f64,
) -> Option<Point> {
    if points.len() < 2 {
        return Some(cursor);
    }
    possible_points_for_next_duct_in_polyline(points, cursor, cfg, scale)
        .into_iter()
        .map(|p| (p, (p - cursor).norm_squared()))
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
        .map(|(p, _)| p)
}

/// Angle in degrees `[0, 360)` between the last leg and the leg ending at `p`.
/// `None` without a heading or when `p` repeats the last point.
pub fn joint_angle_deg(points: &[Point], p: Point) -> Option<f64> {
    let heading = last_heading(points)?;
    let next = p - *points.last()?;
    try_normalize(next)?;
    Some(angle_between_vectors(heading, next).to_degrees())
}

/// Canonical joint angle within `tolerance_deg` of `angle_deg`, measured on the
/// circle (359° is 1° away from 0°).
pub fn nearest_joint_angle(angle_deg: f64, tolerance_deg: f64) -> Option<f64> {
    DUCT_JOINT_ANGLES_DEG.iter().copied().find(|&canonical| {
        let d = (angle_deg - canonical).rem_euclid(360.0);
        d.min(360.0 - d) <= tolerance_deg.max(0.0) + ANGLE_EPS_DEG
    })
}

/// Strict gate: does `p` extend the polyline with a realisable joint?
///
/// With fewer than two points (or a zero-length last leg) any `p` other than
/// the last point is accepted. A leg of zero length is always rejected.
pub fn can_be_next_point_in_duct_polyline(points: &[Point], p: Point, cfg: &KernelCfg) -> bool {
    if let Some(&last) = points.last() {
        if try_normalize(p - last).is_none() {
            return false;
        }
    }
    if last_heading(points).is_none() {
        return true;
    }
    joint_angle_deg(points, p)
        .and_then(|a| nearest_joint_angle(a, cfg.angle_tolerance_deg))
        .is_some()
}
