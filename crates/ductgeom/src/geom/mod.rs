//! Planar geometry primitives used by every editor tool.
//!
//! Purpose
//! - Value types (`Point`, `Vec2`, `Line`, `Rect`, `OrientedBox`) and the
//!   pure functions the pointer handlers need: projection, picking,
//!   oriented hit-testing, angles and line transforms.
//!
//! Degenerate input policy
//! - Zero-length directions never produce NaN. `closest_point_to_line` falls
//!   back to the segment start, `line_bbox` and `guide_line` return `None`,
//!   `try_normalize` returns `None`. Quads with zero area contain nothing.

mod hit;
mod project;
mod transform;
mod types;
mod vector;

pub use hit::{
    in_rect, line_bbox, pick_line_box, pick_point, point_hovers_line, rect_point_hit_test,
    select_bbox,
};
pub use project::{closest_point_param, closest_point_to_line, distance_to_line};
pub use transform::{guide_line, rotate_line, scale_line, Pivot};
pub use types::{KernelCfg, Line, OrientedBox, Point, Rect, Vec2};
pub use vector::{
    angle_between_vectors, cross2d, normal, points_distance, rotate_vector, try_normalize,
};
