/// Orbit camera configuration
///
/// Plain tunables with the defaults of the stock third-person controller.
/// `validate()` is the single place orbit invariants are checked; both
/// `OrbitCamera::new` and the camera's setters go through it.

use glam::{Vec2, Vec3};
use crate::camera_bail;
use crate::error::Result;
use super::obstruction::ViewBlockingMask;

/// Default offset of the orbit pivot from the target origin (roughly head height)
pub const DEFAULT_OFFSET: Vec3 = Vec3::new(0.0, 1.5, 0.0);

/// Default distance change per mouse wheel notch
pub const DEFAULT_ZOOM_SENSITIVITY: f32 = 1.0;

/// Default shortest distance to the pivot
pub const DEFAULT_MIN_DISTANCE: f32 = 1.25;

/// Default longest distance to the pivot
pub const DEFAULT_MAX_DISTANCE: f32 = 10.0;

/// Default starting distance
pub const DEFAULT_DISTANCE: f32 = 3.0;

/// Default degrees of rotation per unit of mouse motion (x = yaw, y = pitch)
pub const DEFAULT_ROTATION_SENSITIVITY: Vec2 = Vec2::new(0.25, 0.25);

/// Orbit camera configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCameraConfig {
    /// Offset added to the target position to get the orbit pivot
    pub offset: Vec3,
    /// Distance change per wheel notch (> 0)
    pub zoom_sensitivity: f32,
    /// Shortest allowed distance (> 0, <= max_distance)
    pub min_distance: f32,
    /// Longest allowed distance (> 0)
    pub max_distance: f32,
    /// Starting distance. Clamped into the bounds with a warning if outside.
    pub distance: f32,
    /// Degrees per unit of mouse motion, x for yaw and y for pitch (each > 0)
    pub rotation_sensitivity: Vec2,
    /// Layers that block the camera's view (see `ViewObstructionResolver`)
    pub view_blocking_mask: ViewBlockingMask,
}

impl Default for OrbitCameraConfig {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            zoom_sensitivity: DEFAULT_ZOOM_SENSITIVITY,
            min_distance: DEFAULT_MIN_DISTANCE,
            max_distance: DEFAULT_MAX_DISTANCE,
            distance: DEFAULT_DISTANCE,
            rotation_sensitivity: DEFAULT_ROTATION_SENSITIVITY,
            view_blocking_mask: ViewBlockingMask::ALL,
        }
    }
}

impl OrbitCameraConfig {
    /// Check every orbit invariant except the starting distance.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if:
    /// - the offset is not finite
    /// - either distance bound is not finite or not positive
    /// - `min_distance > max_distance`
    /// - the zoom or rotation sensitivity is not finite or not positive
    /// - the starting distance is not finite
    pub fn validate(&self) -> Result<()> {
        if !self.offset.is_finite() {
            camera_bail!("tpcam::OrbitCameraConfig", "offset must be finite (got {})", self.offset);
        }
        validate_distance_bounds(self.min_distance, self.max_distance)?;
        validate_zoom_sensitivity(self.zoom_sensitivity)?;
        validate_rotation_sensitivity(self.rotation_sensitivity)?;
        if !self.distance.is_finite() {
            camera_bail!("tpcam::OrbitCameraConfig", "distance must be finite (got {})", self.distance);
        }
        Ok(())
    }
}

pub(crate) fn validate_distance_bounds(min_distance: f32, max_distance: f32) -> Result<()> {
    if !(min_distance.is_finite() && min_distance > 0.0) {
        camera_bail!("tpcam::OrbitCameraConfig",
            "min_distance must be finite and > 0 (got {})", min_distance);
    }
    if !(max_distance.is_finite() && max_distance > 0.0) {
        camera_bail!("tpcam::OrbitCameraConfig",
            "max_distance must be finite and > 0 (got {})", max_distance);
    }
    if min_distance > max_distance {
        camera_bail!("tpcam::OrbitCameraConfig",
            "min_distance ({}) must not exceed max_distance ({})", min_distance, max_distance);
    }
    Ok(())
}

pub(crate) fn validate_zoom_sensitivity(zoom_sensitivity: f32) -> Result<()> {
    if !(zoom_sensitivity.is_finite() && zoom_sensitivity > 0.0) {
        camera_bail!("tpcam::OrbitCameraConfig",
            "zoom_sensitivity must be finite and > 0 (got {})", zoom_sensitivity);
    }
    Ok(())
}

pub(crate) fn validate_rotation_sensitivity(rotation_sensitivity: Vec2) -> Result<()> {
    if !(rotation_sensitivity.is_finite()
        && rotation_sensitivity.x > 0.0
        && rotation_sensitivity.y > 0.0)
    {
        camera_bail!("tpcam::OrbitCameraConfig",
            "rotation_sensitivity must be finite and > 0 on both axes (got {})",
            rotation_sensitivity);
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
