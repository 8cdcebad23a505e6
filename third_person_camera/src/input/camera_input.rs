/// Camera input events and their translation from winit.
///
/// The controller only understands two kinds of input: relative mouse
/// motion and zoom ticks. Everything else the windowing layer produces is
/// filtered out here.

use glam::Vec2;
use winit::event::{DeviceEvent, MouseScrollDelta, WindowEvent};

/// Input the third-person camera reacts to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraInput {
    /// Relative pointer motion in raw device units
    MouseMotion(Vec2),
    /// Signed zoom notches: +1 zooms out, -1 zooms in
    Zoom(f32),
}

impl CameraInput {
    /// One wheel notch up (away from the user): zoom in
    pub fn wheel_up() -> Self {
        CameraInput::Zoom(-1.0)
    }

    /// One wheel notch down (toward the user): zoom out
    pub fn wheel_down() -> Self {
        CameraInput::Zoom(1.0)
    }

    /// Raw mouse motion from a device event.
    ///
    /// Device motion is unaffected by cursor locking and acceleration,
    /// which makes it the right source while the cursor is captured.
    /// Wheel device events are ignored; take the wheel from
    /// [`from_window_event`](Self::from_window_event) instead so a notch is
    /// not counted twice.
    pub fn from_device_event(event: &DeviceEvent) -> Option<Self> {
        match event {
            DeviceEvent::MouseMotion { delta: (dx, dy) } => {
                Some(CameraInput::MouseMotion(Vec2::new(*dx as f32, *dy as f32)))
            }
            _ => None,
        }
    }

    /// Zoom ticks from a scroll delta.
    ///
    /// Line deltas map one line to one notch. Pixel deltas (touchpads)
    /// have no notion of notches, so each event counts as a single notch in
    /// the direction of the scroll. Purely horizontal scrolling yields `None`.
    pub fn from_scroll_delta(delta: &MouseScrollDelta) -> Option<Self> {
        let y = match delta {
            MouseScrollDelta::LineDelta(_, y) => *y,
            MouseScrollDelta::PixelDelta(position) if position.y != 0.0 => position.y.signum() as f32,
            MouseScrollDelta::PixelDelta(_) => 0.0,
        };

        if y == 0.0 || !y.is_finite() {
            return None;
        }
        // Positive y scrolls up, which zooms in
        Some(CameraInput::Zoom(-y))
    }

    /// Zoom ticks from a window event (mouse wheel only).
    pub fn from_window_event(event: &WindowEvent) -> Option<Self> {
        match event {
            WindowEvent::MouseWheel { delta, .. } => Self::from_scroll_delta(delta),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "camera_input_tests.rs"]
mod tests;
