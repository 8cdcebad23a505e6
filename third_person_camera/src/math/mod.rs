//! Scalar helpers shared by the orbit camera: clamping and angle wrapping.

mod angles;
mod clamp;

pub use angles::{MAX_PITCH, RADIANS_PER_DEGREE, TAU, wrap_angle};
pub use clamp::clamp;
