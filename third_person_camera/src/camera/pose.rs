/// Camera pose - what the orbit camera hands back to its embedder.
///
/// Convention: right-handed, +Y up, a camera looks down its local -Z.

use glam::{Mat3, Mat4, Quat, Vec3};

/// World-space camera origin and orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Camera position in world space
    pub origin: Vec3,
    /// Camera facing orientation
    pub orientation: Quat,
}

impl CameraPose {
    /// Create a pose from origin and orientation.
    pub fn new(origin: Vec3, orientation: Quat) -> Self {
        Self { origin, orientation }
    }

    /// Rotation part as a 3x3 basis (columns: right, up, back).
    pub fn basis(&self) -> Mat3 {
        Mat3::from_quat(self.orientation)
    }

    /// Camera-to-world transform.
    pub fn transform(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.origin)
    }

    /// World-to-camera transform (inverse of `transform()`).
    pub fn view_matrix(&self) -> Mat4 {
        self.transform().inverse()
    }

    /// Direction the camera looks at.
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Camera's local right axis.
    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    /// Camera's local up axis.
    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }
}

#[cfg(test)]
#[path = "pose_tests.rs"]
mod tests;
