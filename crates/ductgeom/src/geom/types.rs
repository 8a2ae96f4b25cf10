//! Value types of the drawing model and the kernel configuration.
//!
//! - `Point` / `Vec2`: nalgebra point and vector; `Point - Point = Vec2`.
//! - `Line`: directed segment `a → b`.
//! - `Rect`: upper-left corner plus extents (y grows downwards on screen).
//! - `OrientedBox`: four ordered corners of a possibly rotated rectangle.
//! - `KernelCfg`: tunable thresholds shared by picking, routing and outlining.

use nalgebra::{Point2, Vector2};

/// Absolute position in world units.
pub type Point = Point2<f64>;
/// Displacement in world units.
pub type Vec2 = Vector2<f64>;

/// Kernel configuration (tunable design constants).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KernelCfg {
    /// Pick distance for lines, endpoints and rect edges.
    pub hit_threshold: f64,
    /// Length of each candidate ray in the routing fan, before zoom adjustment.
    pub duct_ray_length: f64,
    /// Allowed deviation from a canonical joint angle, in degrees.
    pub angle_tolerance_deg: f64,
    /// Inset at both ends of every edge of a rounded outline.
    pub corner_margin: f64,
    /// Side of the square used to pick points on screen.
    pub select_bbox_size: f64,
}

impl Default for KernelCfg {
    fn default() -> Self {
        Self {
            hit_threshold: 10.0,
            duct_ray_length: 2000.0,
            angle_tolerance_deg: 3.0,
            corner_margin: 10.0,
            select_bbox_size: 20.0,
        }
    }
}

/// Directed segment `a → b`. Zero-length lines are representable; operations
/// needing a direction return `None` or a documented fallback for them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub a: Point,
    pub b: Point,
}

impl Line {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }
    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.b - self.a
    }
    #[inline]
    pub fn midpoint(&self) -> Point {
        nalgebra::center(&self.a, &self.b)
    }
    #[inline]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }
    #[inline]
    pub fn translated(&self, d: Vec2) -> Self {
        Self {
            a: self.a + d,
            b: self.b + d,
        }
    }
}

/// Axis-aligned rectangle: upper-left corner `(x, y)` plus extents.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rect spanned by two opposite corners in any order. Extents are never negative.
    pub fn from_two_points(p1: Point, p2: Point) -> Self {
        let x = p1.x.min(p2.x);
        let y = p1.y.min(p2.y);
        Self {
            x,
            y,
            width: (p1.x - p2.x).abs(),
            height: (p1.y - p2.y).abs(),
        }
    }

    pub fn from_center_and_dimensions(center: Point, width: f64, height: f64) -> Self {
        Self {
            x: center.x - width / 2.0,
            y: center.y - height / 2.0,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn top_line(&self) -> Line {
        Line::new(Point::new(self.x, self.y), Point::new(self.right(), self.y))
    }
    pub fn bottom_line(&self) -> Line {
        Line::new(
            Point::new(self.x, self.bottom()),
            Point::new(self.right(), self.bottom()),
        )
    }
    pub fn left_line(&self) -> Line {
        Line::new(Point::new(self.x, self.y), Point::new(self.x, self.bottom()))
    }
    pub fn right_line(&self) -> Line {
        Line::new(
            Point::new(self.right(), self.y),
            Point::new(self.right(), self.bottom()),
        )
    }

    /// Corners in order top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> OrientedBox {
        OrientedBox([
            Point::new(self.x, self.y),
            Point::new(self.right(), self.y),
            Point::new(self.right(), self.bottom()),
            Point::new(self.x, self.bottom()),
        ])
    }

    // Edge drags: the opposite edge stays where it is.
    pub fn move_top_line(&mut self, dy: f64) {
        self.y += dy;
        self.height -= dy;
    }
    pub fn move_bottom_line(&mut self, dy: f64) {
        self.height += dy;
    }
    pub fn move_left_line(&mut self, dx: f64) {
        self.x += dx;
        self.width -= dx;
    }
    pub fn move_right_line(&mut self, dx: f64) {
        self.width += dx;
    }

    /// Flip negative extents produced by edge drags past the opposite edge.
    pub fn canonicalized(&self) -> Self {
        Self::from_two_points(
            Point::new(self.x, self.y),
            Point::new(self.right(), self.bottom()),
        )
    }

    /// Half-open containment `[x, x+w) × [y, y+h)`.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }
}

/// Four ordered corners of a possibly rotated rectangle, used for hit-testing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientedBox(pub [Point; 4]);

impl OrientedBox {
    pub fn contains(&self, p: Point) -> bool {
        super::hit::rect_point_hit_test(&self.0, p)
    }
}
