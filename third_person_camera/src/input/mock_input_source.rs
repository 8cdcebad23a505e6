/// Mock input source for unit tests (no window required)
///
/// Records every requested mouse mode and can be told to refuse requests.

#[cfg(test)]
use crate::error::{Error, Result};
#[cfg(test)]
use super::input_source::{InputSource, MouseMode};

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockInputSource {
    /// Every mode requested, in order (including refused ones)
    pub requested_modes: Vec<MouseMode>,
    /// Mode currently in effect, `None` until a request succeeds
    pub current_mode: Option<MouseMode>,
    /// When set, every request fails with `Error::InputUnavailable`
    pub fail_requests: bool,
}

#[cfg(test)]
impl MockInputSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { fail_requests: true, ..Self::default() }
    }
}

#[cfg(test)]
impl InputSource for MockInputSource {
    fn set_mouse_mode(&mut self, mode: MouseMode) -> Result<()> {
        self.requested_modes.push(mode);
        if self.fail_requests {
            return Err(Error::InputUnavailable("mock input source refuses mouse mode changes".to_string()));
        }
        self.current_mode = Some(mode);
        Ok(())
    }
}
