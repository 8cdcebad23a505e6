/// Third-person camera controller - input dispatch and per-frame update
///
/// Wraps an [`OrbitCamera`] with the lifecycle of a scene component:
/// attach (capture the mouse), react to input events, recompute the pose
/// every frame, detach (release the mouse). The target position is supplied
/// by the caller each time; without a target the camera only rotates.

use glam::Vec3;
use crate::camera::{CameraPose, OrbitCamera, OrbitCameraConfig, ViewObstructionResolver};
use crate::error::Result;
use crate::input::{CameraInput, InputSource, MouseMode};
use crate::{camera_error, camera_info};

/// Third-person camera controller
pub struct ThirdPersonCameraController<S: InputSource> {
    camera: OrbitCamera,
    input_source: S,
    obstruction_resolver: Option<Box<dyn ViewObstructionResolver>>,
    attached: bool,
    last_pose: Option<CameraPose>,
}

impl<S: InputSource> ThirdPersonCameraController<S> {
    /// Create a detached controller.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the configuration is invalid.
    pub fn new(config: OrbitCameraConfig, input_source: S) -> Result<Self> {
        Ok(Self {
            camera: OrbitCamera::new(config)?,
            input_source,
            obstruction_resolver: None,
            attached: false,
            last_pose: None,
        })
    }

    // ===== LIFECYCLE =====

    /// Start controlling the camera: capture the mouse.
    ///
    /// Calling this while attached is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `Error::InputUnavailable` if the input source refuses to
    /// capture the cursor. The controller stays detached in that case.
    pub fn attach(&mut self) -> Result<()> {
        if self.attached {
            return Ok(());
        }

        if let Err(e) = self.input_source.set_mouse_mode(MouseMode::Captured) {
            camera_error!("tpcam::Controller", "Could not capture the mouse cursor: {}", e);
            return Err(e);
        }

        self.attached = true;
        camera_info!("tpcam::Controller", "Attached, mouse cursor captured");
        Ok(())
    }

    /// Stop controlling the camera: release the mouse.
    ///
    /// The controller is detached even if releasing the cursor fails.
    ///
    /// # Errors
    ///
    /// Returns `Error::InputUnavailable` if the input source refuses to
    /// release the cursor.
    pub fn detach(&mut self) -> Result<()> {
        if !self.attached {
            return Ok(());
        }
        self.attached = false;

        if let Err(e) = self.input_source.set_mouse_mode(MouseMode::Visible) {
            camera_error!("tpcam::Controller", "Could not release the mouse cursor: {}", e);
            return Err(e);
        }

        camera_info!("tpcam::Controller", "Detached, mouse cursor released");
        Ok(())
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    // ===== UPDATE =====

    /// React to one input event.
    ///
    /// Mouse motion rotates the camera and, when a target is given, moves it
    /// to the new orbit position right away; the new pose is returned.
    /// Zoom only changes the distance and returns `None`: the next
    /// [`process`](Self::process) picks it up. Input is ignored while
    /// detached.
    pub fn handle_input(&mut self, input: CameraInput, target: Option<Vec3>) -> Option<CameraPose> {
        if !self.attached {
            return None;
        }

        match input {
            CameraInput::MouseMotion(delta) => {
                self.camera.apply_mouse_motion(delta);
                target.map(|position| self.update_pose(position))
            }
            CameraInput::Zoom(ticks) => {
                self.camera.apply_zoom(ticks);
                None
            }
        }
    }

    /// Per-frame update: move the camera to its orbit position.
    ///
    /// Returns `None` while detached or when there is no target; the
    /// camera then keeps its last pose and whatever orientation input gave it.
    pub fn process(&mut self, _delta_seconds: f32, target: Option<Vec3>) -> Option<CameraPose> {
        if !self.attached {
            return None;
        }
        target.map(|position| self.update_pose(position))
    }

    fn update_pose(&mut self, target: Vec3) -> CameraPose {
        let pose = match &self.obstruction_resolver {
            Some(resolver) => self.camera.compute_unobstructed_transform(target, resolver.as_ref()),
            None => self.camera.compute_transform(target),
        };
        self.last_pose = Some(pose);
        pose
    }

    // ===== ACCESSORS =====

    /// Route pose updates through a collision query.
    pub fn set_obstruction_resolver(&mut self, resolver: Box<dyn ViewObstructionResolver>) {
        self.obstruction_resolver = Some(resolver);
    }

    /// Go back to plain orbit placement.
    pub fn clear_obstruction_resolver(&mut self) {
        self.obstruction_resolver = None;
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    /// Most recently computed pose, if any frame had a target.
    pub fn last_pose(&self) -> Option<CameraPose> {
        self.last_pose
    }

    pub fn input_source(&self) -> &S {
        &self.input_source
    }

    pub fn input_source_mut(&mut self) -> &mut S {
        &mut self.input_source
    }
}

impl<S: InputSource> Drop for ThirdPersonCameraController<S> {
    fn drop(&mut self) {
        if self.attached {
            // Errors are already logged by detach
            let _ = self.detach();
        }
    }
}

#[cfg(test)]
#[path = "third_person_controller_tests.rs"]
mod tests;
