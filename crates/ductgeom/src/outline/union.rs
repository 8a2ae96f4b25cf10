use std::cmp::Ordering;

use crate::geom::{Point, Rect};

/// Stair-step outline of rectangles stacked top to bottom.
///
/// Rects are sorted by `y`. The outline starts at the first rect's top-left
/// and top-right corners, then for every following rect steps down at the
/// previous right edge to its `y` and across to its right edge, and closes at
/// the last rect's bottom-right and at the first rect's left edge on the last
/// bottom. The polygon is implicitly closed (the first vertex is not repeated)
/// and has `2n + 2` vertices for `n` rects.
///
/// This is not a general union: it assumes a shared left edge and right edges
/// that only matter in `y` order. Overlapping or horizontally disjoint rects
/// yield an approximate (possibly self-intersecting) outline.
pub fn calculate_rect_union(rects: &[Rect]) -> Vec<Point> {
    let mut sorted = rects.to_vec();
    sorted.sort_by(|a, b| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal));
    let (Some(first), Some(last)) = (sorted.first(), sorted.last()) else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(2 * sorted.len() + 2);
    out.push(Point::new(first.x, first.y));
    out.push(Point::new(first.right(), first.y));
    for pair in sorted.windows(2) {
        let (prev, cur) = (&pair[0], &pair[1]);
        out.push(Point::new(prev.right(), cur.y));
        out.push(Point::new(cur.right(), cur.y));
    }
    out.push(Point::new(last.right(), last.bottom()));
    out.push(Point::new(first.x, last.bottom()));
    out
}
