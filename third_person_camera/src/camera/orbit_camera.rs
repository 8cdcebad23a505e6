/// Orbit camera - yaw/pitch/distance state around a moving target.
///
/// The camera is owned and driven by the caller (usually a
/// `ThirdPersonCameraController`). It keeps its own yaw and pitch instead of
/// reading them back from whatever node the pose ends up on, so code that
/// nudges the rendered camera between frames cannot feed back into the orbit.

use glam::{EulerRot, Quat, Vec2, Vec3};
use crate::error::Result;
use crate::math::{self, MAX_PITCH, RADIANS_PER_DEGREE};
use crate::{camera_debug, camera_warn};
use super::config::{
    OrbitCameraConfig,
    validate_distance_bounds, validate_rotation_sensitivity, validate_zoom_sensitivity,
};
use super::obstruction::{ViewBlockingMask, ViewObstructionResolver};
use super::pose::CameraPose;

/// How far in front of blocking geometry an obstructed camera is placed
pub const OBSTRUCTION_MARGIN: f32 = 0.1;

/// Third-person orbit camera state.
///
/// Invariants:
/// - `min_distance <= distance <= max_distance`
/// - `yaw` in `[0, TAU)`
/// - `pitch` in `[-MAX_PITCH, MAX_PITCH]`
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    offset: Vec3,
    zoom_sensitivity: f32,
    min_distance: f32,
    max_distance: f32,
    distance: f32,
    rotation_sensitivity: Vec2,
    view_blocking_mask: ViewBlockingMask,
    yaw: f32,
    pitch: f32,
}

impl OrbitCamera {
    /// Create an orbit camera facing down -Z (yaw = pitch = 0).
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the configuration fails
    /// [`OrbitCameraConfig::validate`]. A starting distance outside the
    /// bounds is clamped with a warning rather than rejected.
    pub fn new(config: OrbitCameraConfig) -> Result<Self> {
        config.validate()?;

        let distance = math::clamp(config.distance, config.min_distance, config.max_distance);
        if distance != config.distance {
            camera_warn!("tpcam::OrbitCamera",
                "Starting distance {} outside [{}, {}], clamped to {}",
                config.distance, config.min_distance, config.max_distance, distance);
        }

        camera_debug!("tpcam::OrbitCamera",
            "Created orbit camera (distance {} in [{}, {}], offset {})",
            distance, config.min_distance, config.max_distance, config.offset);

        Ok(Self {
            offset: config.offset,
            zoom_sensitivity: config.zoom_sensitivity,
            min_distance: config.min_distance,
            max_distance: config.max_distance,
            distance,
            rotation_sensitivity: config.rotation_sensitivity,
            view_blocking_mask: config.view_blocking_mask,
            yaw: 0.0,
            pitch: 0.0,
        })
    }

    // ===== INPUT =====

    /// Rotate the camera from a relative mouse motion.
    ///
    /// Each axis is scaled by `rotation_sensitivity` (degrees per unit) and
    /// subtracted: moving right turns yaw negative, moving down tilts the
    /// camera to look further down. Yaw wraps into `[0, TAU)`, pitch is
    /// clamped to `+-MAX_PITCH`. Deltas that are non-finite, or that
    /// overflow once scaled, are ignored.
    pub fn apply_mouse_motion(&mut self, delta: Vec2) {
        if !delta.is_finite() {
            camera_warn!("tpcam::OrbitCamera", "Ignoring non-finite mouse delta {}", delta);
            return;
        }

        let rotation = delta * self.rotation_sensitivity * RADIANS_PER_DEGREE;
        if !rotation.is_finite() {
            camera_warn!("tpcam::OrbitCamera", "Ignoring mouse delta {} (rotation overflows)", delta);
            return;
        }

        self.yaw = math::wrap_angle(self.yaw - rotation.x);
        self.pitch = math::clamp(self.pitch - rotation.y, -MAX_PITCH, MAX_PITCH);
    }

    /// Zoom by wheel notches: +1 moves one notch out, -1 one notch in.
    ///
    /// The result is clamped to `[min_distance, max_distance]`.
    /// Non-finite ticks are ignored.
    pub fn apply_zoom(&mut self, ticks: f32) {
        if !ticks.is_finite() {
            camera_warn!("tpcam::OrbitCamera", "Ignoring non-finite zoom ticks {}", ticks);
            return;
        }

        self.distance = math::clamp(
            self.distance + ticks * self.zoom_sensitivity,
            self.min_distance,
            self.max_distance,
        );
    }

    // ===== POSE =====

    /// Facing orientation: yaw about world up, then pitch about local right.
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// Orbit center for the given target position.
    pub fn pivot(&self, target_position: Vec3) -> Vec3 {
        target_position + self.offset
    }

    /// Place the camera `distance` behind the pivot, looking at it.
    ///
    /// The origin is the pivot moved by `(0, 0, distance)` in the
    /// orientation's local frame, i.e. backwards along the view direction.
    pub fn compute_transform(&self, target_position: Vec3) -> CameraPose {
        let orientation = self.orientation();
        let origin = self.pivot(target_position) + orientation * Vec3::new(0.0, 0.0, self.distance);

        CameraPose::new(origin, orientation)
    }

    /// Like [`compute_transform`](Self::compute_transform), but pulls the
    /// camera in front of geometry blocking the view of the pivot.
    ///
    /// The resolver is queried from pivot to desired origin with this
    /// camera's view-blocking mask. On a hit the camera moves to
    /// `OBSTRUCTION_MARGIN` before the hit point (never past the pivot).
    /// Orientation and the stored distance are left untouched.
    pub fn compute_unobstructed_transform(
        &self,
        target_position: Vec3,
        resolver: &dyn ViewObstructionResolver,
    ) -> CameraPose {
        let desired = self.compute_transform(target_position);
        if self.view_blocking_mask.is_empty() {
            return desired;
        }

        let pivot = self.pivot(target_position);
        let Some(hit) = resolver.cast_view_ray(pivot, desired.origin, self.view_blocking_mask) else {
            return desired;
        };

        let to_camera = desired.origin - pivot;
        let length = to_camera.length();
        if length <= f32::EPSILON {
            return desired;
        }
        let direction = to_camera / length;

        let hit_distance = math::clamp((hit.position - pivot).dot(direction), 0.0, length);
        let distance = (hit_distance - OBSTRUCTION_MARGIN).max(0.0);

        CameraPose::new(pivot + direction * distance, desired.orientation)
    }

    // ===== GETTERS =====

    /// Current yaw in radians, in `[0, TAU)`.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current pitch in radians, in `[-MAX_PITCH, MAX_PITCH]`.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Current orbit radius.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn min_distance(&self) -> f32 {
        self.min_distance
    }

    pub fn max_distance(&self) -> f32 {
        self.max_distance
    }

    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    pub fn zoom_sensitivity(&self) -> f32 {
        self.zoom_sensitivity
    }

    pub fn rotation_sensitivity(&self) -> Vec2 {
        self.rotation_sensitivity
    }

    pub fn view_blocking_mask(&self) -> ViewBlockingMask {
        self.view_blocking_mask
    }

    /// Snapshot of the current tunables as a config (distance included).
    pub fn config(&self) -> OrbitCameraConfig {
        OrbitCameraConfig {
            offset: self.offset,
            zoom_sensitivity: self.zoom_sensitivity,
            min_distance: self.min_distance,
            max_distance: self.max_distance,
            distance: self.distance,
            rotation_sensitivity: self.rotation_sensitivity,
            view_blocking_mask: self.view_blocking_mask,
        }
    }

    // ===== SETTERS =====

    /// Set yaw and pitch directly (radians). Yaw is wrapped, pitch clamped.
    /// Non-finite values are ignored.
    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        if !(yaw.is_finite() && pitch.is_finite()) {
            camera_warn!("tpcam::OrbitCamera", "Ignoring non-finite orientation ({}, {})", yaw, pitch);
            return;
        }
        self.yaw = math::wrap_angle(yaw);
        self.pitch = math::clamp(pitch, -MAX_PITCH, MAX_PITCH);
    }

    /// Set the orbit radius, clamped into the current bounds.
    /// Non-finite values are ignored.
    pub fn set_distance(&mut self, distance: f32) {
        if !distance.is_finite() {
            camera_warn!("tpcam::OrbitCamera", "Ignoring non-finite distance {}", distance);
            return;
        }
        self.distance = math::clamp(distance, self.min_distance, self.max_distance);
    }

    /// Replace the distance bounds and re-clamp the current distance.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if either bound is not positive and
    /// finite or if `min_distance > max_distance`. The camera is unchanged
    /// on error.
    pub fn set_distance_bounds(&mut self, min_distance: f32, max_distance: f32) -> Result<()> {
        validate_distance_bounds(min_distance, max_distance)?;
        self.min_distance = min_distance;
        self.max_distance = max_distance;
        self.distance = math::clamp(self.distance, min_distance, max_distance);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` unless `zoom_sensitivity` is finite and > 0.
    pub fn set_zoom_sensitivity(&mut self, zoom_sensitivity: f32) -> Result<()> {
        validate_zoom_sensitivity(zoom_sensitivity)?;
        self.zoom_sensitivity = zoom_sensitivity;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` unless both axes are finite and > 0.
    pub fn set_rotation_sensitivity(&mut self, rotation_sensitivity: Vec2) -> Result<()> {
        validate_rotation_sensitivity(rotation_sensitivity)?;
        self.rotation_sensitivity = rotation_sensitivity;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the offset is not finite.
    pub fn set_offset(&mut self, offset: Vec3) -> Result<()> {
        if !offset.is_finite() {
            crate::camera_bail!("tpcam::OrbitCamera", "offset must be finite (got {})", offset);
        }
        self.offset = offset;
        Ok(())
    }

    pub fn set_view_blocking_mask(&mut self, mask: ViewBlockingMask) {
        self.view_blocking_mask = mask;
    }
}

#[cfg(test)]
#[path = "orbit_camera_tests.rs"]
mod tests;
