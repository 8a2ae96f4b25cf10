//! Outlines of grouped rectangles.
//!
//! - `calculate_rect_union`: stair-step polygon around a y-sorted rect stack.
//! - `rounded_path` / `to_svg_path`: rounded-corner vector path for any closed polygon.

mod path;
mod union;

pub use path::{rounded_path, to_svg_path, PathCmd};
pub use union::calculate_rect_union;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{Point, Rect};

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn empty_stack_has_empty_outline() {
        assert!(calculate_rect_union(&[]).is_empty());
        assert!(rounded_path(&[], 10.0).is_empty());
    }

    #[test]
    fn single_rect_outline_is_its_corners() {
        let poly = calculate_rect_union(&[Rect::new(0.0, 0.0, 40.0, 20.0)]);
        assert_eq!(
            poly,
            vec![pt(0.0, 0.0), pt(40.0, 0.0), pt(40.0, 20.0), pt(0.0, 20.0)]
        );
    }

    #[test]
    fn stair_step_for_growing_stack() {
        // Deliberately unsorted input.
        let rects = [
            Rect::new(0.0, 20.0, 200.0, 20.0),
            Rect::new(0.0, 0.0, 100.0, 20.0),
            Rect::new(0.0, 40.0, 300.0, 20.0),
        ];
        let poly = calculate_rect_union(&rects);
        assert_eq!(poly.len(), 2 + 2 * (rects.len() - 1) + 2);
        assert_eq!(
            poly,
            vec![
                pt(0.0, 0.0),
                pt(100.0, 0.0),
                pt(100.0, 20.0),
                pt(200.0, 20.0),
                pt(200.0, 40.0),
                pt(300.0, 40.0),
                pt(300.0, 60.0),
                pt(0.0, 60.0),
            ]
        );
    }

    #[test]
    fn rounded_square_path() {
        let square = [pt(0.0, 0.0), pt(100.0, 0.0), pt(100.0, 100.0), pt(0.0, 100.0)];
        let cmds = rounded_path(&square, 10.0);
        // MoveTo + (LineTo, QuadTo) per edge + Close
        assert_eq!(cmds.len(), 1 + 2 * 4 + 1);
        assert_eq!(cmds[0], PathCmd::MoveTo(pt(10.0, 0.0)));
        assert_eq!(cmds[1], PathCmd::LineTo(pt(90.0, 0.0)));
        assert_eq!(
            cmds[2],
            PathCmd::QuadTo {
                ctrl: pt(100.0, 0.0),
                to: pt(100.0, 10.0)
            }
        );
        assert_eq!(cmds.last(), Some(&PathCmd::Close));
        // The last curve returns to the starting point.
        assert_eq!(
            cmds[8],
            PathCmd::QuadTo {
                ctrl: pt(0.0, 0.0),
                to: pt(10.0, 0.0)
            }
        );
        let svg = to_svg_path(&cmds[..3]);
        assert_eq!(svg, "M 10 0 L 90 0 Q 100 0 100 10");
    }

    #[test]
    fn short_edges_clamp_margin() {
        let tri = [pt(0.0, 0.0), pt(8.0, 0.0), pt(0.0, 8.0), pt(0.0, 0.0)];
        let cmds = rounded_path(&tri, 10.0);
        // Closing duplicate dropped: three edges.
        assert_eq!(cmds.len(), 1 + 2 * 3 + 1);
        assert_eq!(cmds[0], PathCmd::MoveTo(pt(4.0, 0.0)));
        assert_eq!(cmds[1], PathCmd::LineTo(pt(4.0, 0.0)));
    }

    #[test]
    fn degenerate_polygon_has_no_path() {
        assert!(rounded_path(&[pt(1.0, 1.0), pt(1.0, 1.0), pt(5.0, 5.0)], 10.0).is_empty());
        assert_eq!(to_svg_path(&[]), "");
    }

    #[test]
    fn union_outline_renders() {
        let poly = calculate_rect_union(&[
            Rect::new(0.0, 0.0, 100.0, 50.0),
            Rect::new(0.0, 50.0, 200.0, 50.0),
        ]);
        let svg = to_svg_path(&rounded_path(&poly, 10.0));
        assert!(svg.starts_with("M 10 0 L 90 0 Q 100 0 100 10"));
        assert!(svg.ends_with('Z'));
    }
}
