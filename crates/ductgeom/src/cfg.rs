//! Numeric defaults (internal).
//!
//! Policy
//! - Kernel-wide tunables live in `KernelCfg`; the constants here are fixed
//!   tolerances that callers never need to adjust.

/// Squared lengths at or below this are treated as zero-length directions.
pub(crate) const DEGENERATE_LEN2: f64 = 1e-18;
/// Slack (degrees) added to the joint-angle tolerance so that points lying on
/// a canonical ray pass the gate even at zero tolerance.
pub(crate) const ANGLE_EPS_DEG: f64 = 1e-9;
/// Lower bound for the viewport zoom factor.
pub(crate) const MIN_SCALE: f64 = 0.1;
/// Wheel degrees per zoom step, and zoom gained per step.
pub(crate) const WHEEL_DEGREES_PER_STEP: f64 = 15.0;
pub(crate) const ZOOM_PER_STEP: f64 = 0.1;
