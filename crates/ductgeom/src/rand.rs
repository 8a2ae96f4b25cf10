//! Replayable random fixtures: duct polylines and rect stacks.
//!
//! Purpose
//! - Deterministic inputs for property tests and benchmarks. A draw is fully
//!   identified by its `ReplayToken`, so a failing case can be replayed.
//!
//! Model
//! - Polylines start at the origin with a random heading; every further leg
//!   turns by a random canonical joint angle, so each vertex passes the
//!   routing acceptance gate.
//! - Rect stacks share a left edge, sit flush below each other and grow in
//!   width, which is the shape `calculate_rect_union` is defined for. They are
//!   returned shuffled.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::duct::DUCT_JOINT_ANGLES_DEG;
use crate::geom::{rotate_vector, Point, Rect, Vec2};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Polyline sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct PolylineCfg {
    /// Number of legs (points = legs + 1). At least 1.
    pub legs: usize,
    pub leg_min: f64,
    pub leg_max: f64,
}

impl Default for PolylineCfg {
    fn default() -> Self {
        Self {
            legs: 8,
            leg_min: 50.0,
            leg_max: 400.0,
        }
    }
}

/// Draw a duct polyline whose joints all use canonical angles.
pub fn draw_duct_polyline(cfg: PolylineCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let lo = cfg.leg_min.max(1e-3);
    let hi = cfg.leg_max.max(lo);
    let mut heading = rotate_vector(Vec2::x(), rng.gen::<f64>() * std::f64::consts::TAU);
    let mut out = Vec::with_capacity(cfg.legs.max(1) + 1);
    let mut cur = Point::origin();
    out.push(cur);
    for leg in 0..cfg.legs.max(1) {
        if leg > 0 {
            let turn = DUCT_JOINT_ANGLES_DEG[rng.gen_range(0..DUCT_JOINT_ANGLES_DEG.len())];
            heading = rotate_vector(heading, turn.to_radians());
        }
        cur += heading * rng.gen_range(lo..=hi);
        out.push(cur);
    }
    out
}

/// Rect stack sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StackCfg {
    pub count: usize,
    pub height_min: f64,
    pub height_max: f64,
    pub width_start: f64,
    /// Maximum width gained per rect (growth is in `[0, width_step_max]`).
    pub width_step_max: f64,
}

impl Default for StackCfg {
    fn default() -> Self {
        Self {
            count: 5,
            height_min: 10.0,
            height_max: 60.0,
            width_start: 100.0,
            width_step_max: 80.0,
        }
    }
}

/// Draw a shuffled stack of flush rects with non-decreasing widths.
pub fn draw_rect_stack(cfg: StackCfg, tok: ReplayToken) -> Vec<Rect> {
    let mut rng = tok.to_std_rng();
    let h_lo = cfg.height_min.max(1e-3);
    let h_hi = cfg.height_max.max(h_lo);
    let mut y = 0.0;
    let mut width = cfg.width_start.max(1e-3);
    let mut out = Vec::with_capacity(cfg.count);
    for _ in 0..cfg.count {
        let h = rng.gen_range(h_lo..=h_hi);
        out.push(Rect::new(0.0, y, width, h));
        y += h;
        width += rng.gen::<f64>() * cfg.width_step_max.max(0.0);
    }
    out.shuffle(&mut rng);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duct::can_be_next_point_in_duct_polyline;
    use crate::geom::KernelCfg;
    use crate::outline::calculate_rect_union;

    #[test]
    fn draws_are_replayable() {
        let tok = ReplayToken::new(7, 3);
        let a = draw_duct_polyline(PolylineCfg::default(), tok);
        let b = draw_duct_polyline(PolylineCfg::default(), tok);
        assert_eq!(a, b);
        let c = draw_duct_polyline(PolylineCfg::default(), ReplayToken::new(7, 4));
        assert_ne!(a, c);
    }

    #[test]
    fn sampled_polylines_pass_the_gate() {
        let cfg = KernelCfg::default();
        for index in 0..20 {
            let pts = draw_duct_polyline(PolylineCfg::default(), ReplayToken::new(2025, index));
            assert_eq!(pts.len(), 9);
            for k in 2..pts.len() {
                assert!(
                    can_be_next_point_in_duct_polyline(&pts[..k], pts[k], &cfg),
                    "index {index}, vertex {k}"
                );
            }
        }
    }

    #[test]
    fn sampled_stacks_outline() {
        for index in 0..10 {
            let rects = draw_rect_stack(StackCfg::default(), ReplayToken::new(42, index));
            assert_eq!(rects.len(), 5);
            let poly = calculate_rect_union(&rects);
            assert_eq!(poly.len(), 2 * rects.len() + 2);
            // Vertical steps only move down the page.
            assert!(poly.windows(2).take(poly.len() - 2).all(|w| w[1].y >= w[0].y));
        }
    }
}
