/// Angle constants and wrapping for yaw/pitch bookkeeping.

use std::f32::consts::FRAC_PI_2;

/// Full turn in radians
pub const TAU: f32 = std::f32::consts::TAU;

/// Conversion factor from degrees to radians
pub const RADIANS_PER_DEGREE: f32 = std::f32::consts::PI / 180.0;

/// Pitch limit: one degree short of straight up/down.
///
/// At +-90 degrees the Y-X-Z Euler decomposition flips yaw by half a turn,
/// so the camera would snap around as the mouse keeps moving.
pub const MAX_PITCH: f32 = FRAC_PI_2 - RADIANS_PER_DEGREE;

/// Wrap an angle into `[0, TAU)`.
///
/// `rem_euclid` can round a tiny negative input up to exactly `TAU`; that
/// case folds back to zero. Non-finite input also maps to zero.
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    if !wrapped.is_finite() || wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
#[path = "angles_tests.rs"]
mod tests;
