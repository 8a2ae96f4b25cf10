//! Line transforms: scale and rotate about a pivot, and guide construction.

use nalgebra::Rotation2;

use super::types::{Line, Point, Vec2};
use super::vector::{angle_between_vectors, try_normalize};

/// Pivot for `rotate_line`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pivot {
    /// The line's own midpoint.
    Center,
    /// The world origin.
    Origin,
}

/// Scale both endpoints about the midpoint; the midpoint is unchanged.
pub fn scale_line(l: &Line, factor: f64) -> Line {
    let c = l.midpoint();
    Line::new(c + (l.a - c) * factor, c + (l.b - c) * factor)
}

/// Rotate both endpoints by `theta` radians about `pivot`.
pub fn rotate_line(l: &Line, theta: f64, pivot: Pivot) -> Line {
    let rot = Rotation2::new(theta);
    let c = match pivot {
        Pivot::Origin => Point::origin(),
        Pivot::Center => l.midpoint(),
    };
    Line::new(c + rot * (l.a - c), c + rot * (l.b - c))
}

/// Guide through `cursor` parallel to `anchor`, `span` units long and centred
/// on the cursor. A unit horizontal segment at the cursor is scaled up and
/// turned to the anchor's heading. `None` for a zero-length anchor.
pub fn guide_line(anchor: &Line, cursor: Point, span: f64) -> Option<Line> {
    let heading = try_normalize(anchor.direction())?;
    let half = Vec2::new(0.5, 0.0);
    let seed = Line::new(cursor - half, cursor + half);
    let alpha = angle_between_vectors(heading, Vec2::x());
    Some(rotate_line(&scale_line(&seed, span), -alpha, Pivot::Center))
}
