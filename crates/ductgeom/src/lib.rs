//! Interactive 2D geometry kernel for a duct-layout drawing editor.
//!
//! The editor front-end calls into this crate once per pointer event with the
//! cursor position and the current geometry. Everything here is a pure value
//! computation except `duct::DuctRouter`, which owns the in-progress polyline
//! of a routing gesture.
//!
//! Layout
//! - `geom`: points, lines, rects, projection, hit-testing, transforms.
//! - `duct`: constrained-angle routing suggestions and the router state machine.
//! - `outline`: stair-step union of stacked rectangles and its rounded path.
//! - `edit`: hover/drag interaction states for lines and rect edges.
//! - `view`: world/screen viewport transform.
//! - `rand`: replayable sampling of polylines and rect stacks.

pub mod api;
mod cfg;
pub mod duct;
pub mod edit;
pub mod geom;
pub mod outline;
pub mod rand;
pub mod view;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{KernelCfg, Line, OrientedBox, Point, Rect, Vec2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::duct::{
        can_be_next_point_in_duct_polyline, possible_points_for_next_duct_in_polyline,
        suggest_possible_leg_placement, DuctRouter, DUCT_JOINT_ANGLES_DEG,
    };
    pub use crate::geom::{
        angle_between_vectors, closest_point_to_line, cross2d, line_bbox, normal,
        point_hovers_line, points_distance, rect_point_hit_test, rotate_line, rotate_vector,
        scale_line, KernelCfg, Line, OrientedBox, Pivot, Point, Rect, Vec2,
    };
    pub use crate::outline::{calculate_rect_union, rounded_path, to_svg_path, PathCmd};
}
