//! Hover and drag interactions for lines and rectangles.
//!
//! Each editable object carries one `Interaction` instead of a set of
//! independent flags: it is idle, hovered on a target, or dragging a target.
//! While dragging, a shadow copy of the geometry follows the cursor and only
//! replaces the real geometry when the drag is released.
//!
//! Targets
//! - Lines: endpoint A, endpoint B or the whole body (in that priority).
//! - Rects: one of the four edges (top, bottom, left, right in that priority).

use crate::geom::{point_hovers_line, points_distance, Line, Point, Rect, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineGrab {
    Body,
    EndpointA,
    EndpointB,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RectEdge {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interaction<T> {
    Idle,
    Hovered(T),
    Dragging(T),
}

impl<T: Copy> Interaction<T> {
    #[inline]
    pub fn hovered(&self) -> Option<T> {
        match self {
            Interaction::Hovered(t) => Some(*t),
            _ => None,
        }
    }
    #[inline]
    pub fn dragging(&self) -> Option<T> {
        match self {
            Interaction::Dragging(t) => Some(*t),
            _ => None,
        }
    }
}

/// Which part of `line` is under `p`, if any.
pub fn pick_line(line: &Line, p: Point, threshold: f64) -> Option<LineGrab> {
    if points_distance(line.a, p) < threshold {
        Some(LineGrab::EndpointA)
    } else if points_distance(line.b, p) < threshold {
        Some(LineGrab::EndpointB)
    } else if point_hovers_line(p, line, threshold) {
        Some(LineGrab::Body)
    } else {
        None
    }
}

/// Which edge of `rect` is under `p`, if any.
pub fn pick_rect_edge(rect: &Rect, p: Point, threshold: f64) -> Option<RectEdge> {
    [
        (RectEdge::Top, rect.top_line()),
        (RectEdge::Bottom, rect.bottom_line()),
        (RectEdge::Left, rect.left_line()),
        (RectEdge::Right, rect.right_line()),
    ]
    .into_iter()
    .find(|(_, edge)| point_hovers_line(p, edge, threshold))
    .map(|(which, _)| which)
}

/// Line after dragging `grab` by `delta`.
pub fn drag_line(line: &Line, grab: LineGrab, delta: Vec2) -> Line {
    match grab {
        LineGrab::Body => line.translated(delta),
        LineGrab::EndpointA => Line::new(line.a + delta, line.b),
        LineGrab::EndpointB => Line::new(line.a, line.b + delta),
    }
}

/// Rect after dragging `edge` by `delta`; only the component across the edge counts.
pub fn drag_rect(rect: &Rect, edge: RectEdge, delta: Vec2) -> Rect {
    let mut out = *rect;
    match edge {
        RectEdge::Top => out.move_top_line(delta.y),
        RectEdge::Bottom => out.move_bottom_line(delta.y),
        RectEdge::Left => out.move_left_line(delta.x),
        RectEdge::Right => out.move_right_line(delta.x),
    }
    out
}

/// Editable line with its interaction and drag shadow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineEdit {
    pub line: Line,
    pub shadow: Line,
    pub interaction: Interaction<LineGrab>,
}

impl LineEdit {
    pub fn new(line: Line) -> Self {
        Self {
            line,
            shadow: line,
            interaction: Interaction::Idle,
        }
    }

    /// Refresh the hover target. Does nothing while dragging.
    pub fn hover(&mut self, p: Point, threshold: f64) {
        if self.interaction.dragging().is_some() {
            return;
        }
        self.interaction = match pick_line(&self.line, p, threshold) {
            Some(grab) => Interaction::Hovered(grab),
            None => Interaction::Idle,
        };
    }

    /// Press: start dragging whatever is under `p`, or commit a running drag.
    /// Returns true when the geometry or the interaction changed.
    pub fn press(&mut self, p: Point, threshold: f64) -> bool {
        if self.interaction.dragging().is_some() {
            self.release();
            return true;
        }
        match pick_line(&self.line, p, threshold) {
            Some(grab) => {
                self.shadow = self.line;
                self.interaction = Interaction::Dragging(grab);
                true
            }
            None => false,
        }
    }

    /// Move the shadow by a world-space cursor delta.
    pub fn drag(&mut self, delta: Vec2) {
        if let Some(grab) = self.interaction.dragging() {
            self.shadow = drag_line(&self.shadow, grab, delta);
        }
    }

    /// Commit the shadow and return to idle.
    pub fn release(&mut self) {
        if self.interaction.dragging().is_some() {
            self.line = self.shadow;
        }
        self.interaction = Interaction::Idle;
    }
}

/// Editable rectangle with its interaction and drag shadow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectEdit {
    pub rect: Rect,
    pub shadow: Rect,
    pub interaction: Interaction<RectEdge>,
}

impl RectEdit {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            shadow: rect,
            interaction: Interaction::Idle,
        }
    }

    pub fn hover(&mut self, p: Point, threshold: f64) {
        if self.interaction.dragging().is_some() {
            return;
        }
        self.interaction = match pick_rect_edge(&self.rect, p, threshold) {
            Some(edge) => Interaction::Hovered(edge),
            None => Interaction::Idle,
        };
    }

    pub fn press(&mut self, p: Point, threshold: f64) -> bool {
        if self.interaction.dragging().is_some() {
            self.release();
            return true;
        }
        match pick_rect_edge(&self.rect, p, threshold) {
            Some(edge) => {
                self.shadow = self.rect;
                self.interaction = Interaction::Dragging(edge);
                true
            }
            None => false,
        }
    }

    pub fn drag(&mut self, delta: Vec2) {
        if let Some(edge) = self.interaction.dragging() {
            self.shadow = drag_rect(&self.shadow, edge, delta);
        }
    }

    /// Commit the shadow (with non-negative extents) and return to idle.
    pub fn release(&mut self) {
        if self.interaction.dragging().is_some() {
            self.rect = self.shadow.canonicalized();
        }
        self.interaction = Interaction::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::KernelCfg;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn endpoints_take_priority_over_body() {
        let hit = KernelCfg::default().hit_threshold;
        let l = Line::new(pt(0.0, 0.0), pt(100.0, 0.0));
        assert_eq!(pick_line(&l, pt(3.0, 2.0), hit), Some(LineGrab::EndpointA));
        assert_eq!(pick_line(&l, pt(97.0, -2.0), hit), Some(LineGrab::EndpointB));
        assert_eq!(pick_line(&l, pt(50.0, 5.0), hit), Some(LineGrab::Body));
        assert_eq!(pick_line(&l, pt(50.0, 15.0), hit), None);
    }

    #[test]
    fn rect_edges_are_picked() {
        let hit = KernelCfg::default().hit_threshold;
        let r = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(pick_rect_edge(&r, pt(50.0, 2.0), hit), Some(RectEdge::Top));
        assert_eq!(pick_rect_edge(&r, pt(50.0, 48.0), hit), Some(RectEdge::Bottom));
        assert_eq!(pick_rect_edge(&r, pt(-3.0, 25.0), hit), Some(RectEdge::Left));
        assert_eq!(pick_rect_edge(&r, pt(104.0, 25.0), hit), Some(RectEdge::Right));
        assert_eq!(pick_rect_edge(&r, pt(50.0, 25.0), hit), None);
    }

    #[test]
    fn hover_moves_between_targets() {
        let hit = KernelCfg::default().hit_threshold;
        let mut e = LineEdit::new(Line::new(pt(0.0, 0.0), pt(100.0, 0.0)));
        e.hover(pt(50.0, 1.0), hit);
        assert_eq!(e.interaction, Interaction::Hovered(LineGrab::Body));
        // Moving onto an endpoint replaces the body hover instead of adding to it.
        e.hover(pt(1.0, 1.0), hit);
        assert_eq!(e.interaction.hovered(), Some(LineGrab::EndpointA));
        e.hover(pt(50.0, 40.0), hit);
        assert_eq!(e.interaction, Interaction::Idle);
        assert_eq!(e.interaction.hovered(), None);
    }

    #[test]
    fn line_drag_commits_on_second_press() {
        let hit = KernelCfg::default().hit_threshold;
        let mut e = LineEdit::new(Line::new(pt(0.0, 0.0), pt(100.0, 0.0)));
        assert!(e.press(pt(100.0, 2.0), hit));
        assert_eq!(e.interaction, Interaction::Dragging(LineGrab::EndpointB));
        e.drag(Vec2::new(0.0, 30.0));
        e.drag(Vec2::new(0.0, 20.0));
        assert_eq!(e.shadow.b, pt(100.0, 50.0));
        // Real geometry is untouched until release; hover is ignored mid-drag.
        assert_eq!(e.line.b, pt(100.0, 0.0));
        e.hover(pt(500.0, 500.0), hit);
        assert!(e.interaction.dragging().is_some());
        assert_eq!(e.interaction.hovered(), None);
        assert!(e.press(pt(500.0, 500.0), hit));
        assert_eq!(e.line, Line::new(pt(0.0, 0.0), pt(100.0, 50.0)));
        assert_eq!(e.interaction, Interaction::Idle);
    }

    #[test]
    fn body_drag_translates() {
        let l = Line::new(pt(0.0, 0.0), pt(10.0, 0.0));
        assert_eq!(
            drag_line(&l, LineGrab::Body, Vec2::new(1.0, 2.0)),
            Line::new(pt(1.0, 2.0), pt(11.0, 2.0))
        );
    }

    #[test]
    fn rect_edge_drag_and_release() {
        let hit = KernelCfg::default().hit_threshold;
        let mut e = RectEdit::new(Rect::new(0.0, 0.0, 100.0, 50.0));
        assert!(!e.press(pt(50.0, 25.0), hit));
        assert!(e.press(pt(50.0, 1.0), hit));
        assert_eq!(e.interaction.dragging(), Some(RectEdge::Top));
        // Horizontal motion does not move the top edge; dragging past the bottom flips.
        e.drag(Vec2::new(40.0, 70.0));
        assert_eq!(e.shadow.x, 0.0);
        assert_eq!(e.shadow.height, -20.0);
        e.release();
        assert_eq!(e.rect, Rect::new(0.0, 50.0, 100.0, 20.0));
        assert_eq!(e.interaction, Interaction::Idle);
    }
}
