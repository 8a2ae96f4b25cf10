//! World/screen viewport: pan in screen pixels, zoom about the widget centre.
//!
//! `screen = c + s · (world − t − c)` with `c` the widget centre, `s` the zoom
//! and `t` the pan offset.

use crate::cfg::{MIN_SCALE, WHEEL_DEGREES_PER_STEP, ZOOM_PER_STEP};
use crate::geom::{Line, Point, Vec2};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub translate: Vec2,
    pub scale: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            translate: Vec2::zeros(),
            scale: 1.0,
        }
    }

    #[inline]
    fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn world_to_screen(&self, p: Point) -> Point {
        let c = self.center();
        Point::from(c + (p.coords - self.translate - c) * self.scale)
    }

    pub fn screen_to_world(&self, q: Point) -> Point {
        let c = self.center();
        Point::from((q.coords - c) / self.scale + c + self.translate)
    }

    pub fn line_to_screen(&self, l: &Line) -> Line {
        Line::new(self.world_to_screen(l.a), self.world_to_screen(l.b))
    }

    pub fn line_to_world(&self, l: &Line) -> Line {
        Line::new(self.screen_to_world(l.a), self.screen_to_world(l.b))
    }

    /// Hand-tool drag by a screen-space delta: the content follows the cursor.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.translate -= Vec2::new(dx, dy);
    }

    /// Apply a wheel event given in eighths of a degree (one 15° notch = 0.1 zoom).
    pub fn zoom_by_wheel(&mut self, angle_delta_eighths: i32) {
        let degrees = f64::from(angle_delta_eighths) / 8.0;
        let step = degrees / WHEEL_DEGREES_PER_STEP * ZOOM_PER_STEP;
        self.scale = (self.scale + step).max(MIN_SCALE);
    }

    /// Screen length (pixels) expressed in world units.
    #[inline]
    pub fn scaled(&self, len: f64) -> f64 {
        len / self.scale
    }
}

/// Measurement label: distance rounded to whole units, e.g. `"42m"`.
pub fn format_distance(d: f64) -> String {
    format!("{}m", d.round() as i64)
}
