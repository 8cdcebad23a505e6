/// Input source - the host-side input manager the controller talks to.
///
/// The controller never looks the input manager up itself; an
/// implementation of [`InputSource`] is handed to it at construction.

use std::sync::Arc;
use winit::window::{CursorGrabMode, Window};
use crate::error::{Error, Result};

/// Cursor behavior requested by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseMode {
    /// Cursor hidden and held in place; only relative motion is reported
    Captured,
    /// Regular visible, free-moving cursor
    Visible,
}

/// Input manager collaborator
pub trait InputSource {
    /// Switch the cursor mode.
    ///
    /// # Errors
    ///
    /// Returns `Error::InputUnavailable` if the platform refuses the request.
    fn set_mouse_mode(&mut self, mode: MouseMode) -> Result<()>;
}

/// [`InputSource`] backed by a winit window.
///
/// Capturing prefers a locked cursor and falls back to a confined one on
/// platforms without pointer locking.
pub struct WindowInputSource {
    window: Arc<Window>,
}

impl WindowInputSource {
    pub fn new(window: Arc<Window>) -> Self {
        Self { window }
    }

    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }
}

impl InputSource for WindowInputSource {
    fn set_mouse_mode(&mut self, mode: MouseMode) -> Result<()> {
        match mode {
            MouseMode::Captured => {
                self.window
                    .set_cursor_grab(CursorGrabMode::Locked)
                    .or_else(|_| self.window.set_cursor_grab(CursorGrabMode::Confined))
                    .map_err(|e| Error::InputUnavailable(format!("Cursor grab failed: {}", e)))?;
                self.window.set_cursor_visible(false);
            }
            MouseMode::Visible => {
                self.window
                    .set_cursor_grab(CursorGrabMode::None)
                    .map_err(|e| Error::InputUnavailable(format!("Cursor release failed: {}", e)))?;
                self.window.set_cursor_visible(true);
            }
        }
        Ok(())
    }
}
