use std::fmt::Write as _;

use crate::geom::{try_normalize, Point};

/// One command of a vector path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(Point),
    LineTo(Point),
    QuadTo { ctrl: Point, to: Point },
    Close,
}

/// Rounded-corner path around a closed polygon.
///
/// Every edge is inset by `margin` at both ends (clamped to half the edge) and
/// consecutive edges are joined by a quadratic curve whose control point lies
/// `margin` past the inset end along the incoming edge, i.e. on the corner.
/// Repeated vertices are dropped; fewer than three distinct vertices give an
/// empty path.
pub fn rounded_path(polygon: &[Point], margin: f64) -> Vec<PathCmd> {
    let mut pts: Vec<Point> = Vec::with_capacity(polygon.len());
    for p in polygon {
        if pts.last() != Some(p) {
            pts.push(*p);
        }
    }
    while pts.len() > 1 && pts.first() == pts.last() {
        pts.pop();
    }
    let n = pts.len();
    if n < 3 {
        return Vec::new();
    }

    // (start, end, unit direction, effective margin) per edge.
    let mut edges = Vec::with_capacity(n);
    for i in 0..n {
        let (a, b) = (pts[i], pts[(i + 1) % n]);
        let Some(dir) = try_normalize(b - a) else {
            continue;
        };
        let m = margin.max(0.0).min((b - a).norm() / 2.0);
        edges.push((a + dir * m, b - dir * m, dir, m));
    }

    let Some(&(first_start, ..)) = edges.first() else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(2 * edges.len() + 2);
    out.push(PathCmd::MoveTo(first_start));
    for i in 0..edges.len() {
        let (_, end, dir, m) = edges[i];
        let next_start = edges[(i + 1) % edges.len()].0;
        out.push(PathCmd::LineTo(end));
        out.push(PathCmd::QuadTo {
            ctrl: end + dir * m,
            to: next_start,
        });
    }
    out.push(PathCmd::Close);
    out
}

/// SVG path data (`d` attribute) for a command list.
pub fn to_svg_path(cmds: &[PathCmd]) -> String {
    let mut s = String::new();
    for cmd in cmds {
        if !s.is_empty() {
            s.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = match cmd {
            PathCmd::MoveTo(p) => write!(s, "M {} {}", p.x, p.y),
            PathCmd::LineTo(p) => write!(s, "L {} {}", p.x, p.y),
            PathCmd::QuadTo { ctrl, to } => write!(s, "Q {} {} {} {}", ctrl.x, ctrl.y, to.x, to.y),
            PathCmd::Close => write!(s, "Z"),
        };
    }
    s
}
