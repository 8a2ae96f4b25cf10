//! Duct routing: angle-constrained polyline drawing.
//!
//! Real duct runs are joined by catalogue fittings, so every joint turns by
//! one of a few angles (0/45/60/90° either way). `routing` holds the pure
//! suggestion and acceptance functions; `router` threads them through the
//! begin/hover/commit gesture.

mod router;
mod routing;

pub use router::{DuctRouter, RouteState};
pub use routing::{
    can_be_next_point_in_duct_polyline, duct_fan, joint_angle_deg, last_heading,
    nearest_joint_angle, possible_points_for_next_duct_in_polyline,
    suggest_possible_leg_placement, DUCT_JOINT_ANGLES_DEG,
};
