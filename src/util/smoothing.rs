//! Frame-rate-independent exponential smoothing.
//!
//! All per-step interpolation in the rig goes through these helpers so the
//! feel of the camera does not change with the host's tick rate.

use std::f32::consts::{PI, TAU};

/// Move `current` toward `target` by an exponential approach step.
///
/// `speed` controls snappiness (higher = snappier); `dt` is the step length
/// in seconds. The result never overshoots and reaches the target only in
/// the limit: two steps of `dt/2` land within float error of one step of
/// `dt`.
#[inline]
#[must_use]
pub fn exp_approach(current: f32, target: f32, dt: f32, speed: f32) -> f32 {
    current + (target - current) * (1.0 - (-speed * dt).exp())
}

/// Like [`exp_approach`], but for angles in radians.
///
/// Interpolates along the shortest arc so smoothing a yaw from `359°` to
/// `1°` turns through `0°`, not backwards through `180°`.
#[inline]
#[must_use]
pub fn exp_approach_angle(
    current: f32,
    target: f32,
    dt: f32,
    speed: f32,
) -> f32 {
    let delta = shortest_angle_delta(current, target);
    current + delta * (1.0 - (-speed * dt).exp())
}

/// Signed shortest rotation from `from` to `to`, in `(-PI, PI]`.
#[inline]
#[must_use]
pub fn shortest_angle_delta(from: f32, to: f32) -> f32 {
    let delta = (to - from + PI).rem_euclid(TAU) - PI;
    if delta == -PI { PI } else { delta }
}
