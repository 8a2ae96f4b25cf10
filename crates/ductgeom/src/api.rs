//! Curated boundary consumed by the editor front-end.
//!
//! These are the entry points called on pointer events. Everything else in the
//! crate is reachable through its module path; prefer these re-exports in UI
//! code so the calling surface stays small.

pub use crate::duct::{
    can_be_next_point_in_duct_polyline, possible_points_for_next_duct_in_polyline,
    suggest_possible_leg_placement, DuctRouter,
};
pub use crate::edit::{pick_line, pick_rect_edge, Interaction, LineEdit, LineGrab, RectEdge, RectEdit};
pub use crate::geom::{
    angle_between_vectors, closest_point_to_line, guide_line, in_rect, line_bbox, pick_line_box,
    pick_point, point_hovers_line, points_distance, rect_point_hit_test, select_bbox,
};
pub use crate::outline::{calculate_rect_union, rounded_path, to_svg_path};
pub use crate::view::{format_distance, Viewport};
