//! Routing gesture state machine.
//!
//! `Inactive` → `begin` → `Active { polyline, pending }`; `hover` moves the
//! pending endpoint to the suggested placement, `commit` appends it, `finish`
//! hands the polyline back and `cancel` drops it. Both return to `Inactive`.

use super::routing::{can_be_next_point_in_duct_polyline, suggest_possible_leg_placement};
use crate::geom::{KernelCfg, Point};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum RouteState {
    #[default]
    Inactive,
    Active {
        polyline: Vec<Point>,
        pending: Point,
    },
}

/// Owner of the in-progress polyline of a routing gesture.
#[derive(Clone, Debug, Default)]
pub struct DuctRouter {
    cfg: KernelCfg,
    state: RouteState,
}

impl DuctRouter {
    pub fn new(cfg: KernelCfg) -> Self {
        Self {
            cfg,
            state: RouteState::Inactive,
        }
    }

    #[inline]
    pub fn state(&self) -> &RouteState {
        &self.state
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self.state, RouteState::Active { .. })
    }

    /// Committed points; empty while inactive.
    pub fn polyline(&self) -> &[Point] {
        match &self.state {
            RouteState::Active { polyline, .. } => polyline,
            RouteState::Inactive => &[],
        }
    }

    pub fn pending(&self) -> Option<Point> {
        match self.state {
            RouteState::Active { pending, .. } => Some(pending),
            RouteState::Inactive => None,
        }
    }

    /// Start a gesture at `start`. An active gesture is discarded first.
    pub fn begin(&mut self, start: Point) {
        if self.is_active() {
            tracing::debug!(points = self.polyline().len(), "route restarted");
        }
        tracing::debug!(x = start.x, y = start.y, "route begin");
        self.state = RouteState::Active {
            polyline: vec![start],
            pending: start,
        };
    }

    /// Move the pending endpoint for a cursor position and return it.
    /// `scale` is the viewport zoom. `None` while inactive.
    pub fn hover(&mut self, cursor: Point, scale: f64) -> Option<Point> {
        let cfg = self.cfg;
        match &mut self.state {
            RouteState::Active { polyline, pending } => {
                *pending = suggest_possible_leg_placement(cursor, polyline.as_slice(), &cfg, scale)
                    .unwrap_or(cursor);
                Some(*pending)
            }
            RouteState::Inactive => None,
        }
    }

    /// Append the pending endpoint. Returns false (and changes nothing) while
    /// inactive or when the pending leg is not a realisable joint.
    pub fn commit(&mut self) -> bool {
        let cfg = self.cfg;
        let RouteState::Active { polyline, pending } = &mut self.state else {
            return false;
        };
        if !can_be_next_point_in_duct_polyline(polyline.as_slice(), *pending, &cfg) {
            tracing::debug!(x = pending.x, y = pending.y, "route commit rejected");
            return false;
        }
        polyline.push(*pending);
        tracing::debug!(points = polyline.len(), "route commit");
        true
    }

    /// End the gesture and hand back the committed polyline.
    pub fn finish(&mut self) -> Vec<Point> {
        match std::mem::take(&mut self.state) {
            RouteState::Active { polyline, .. } => {
                tracing::debug!(points = polyline.len(), "route finish");
                polyline
            }
            RouteState::Inactive => Vec::new(),
        }
    }

    pub fn cancel(&mut self) {
        if self.is_active() {
            tracing::debug!(points = self.polyline().len(), "route cancel");
        }
        self.state = RouteState::Inactive;
    }
}
