//! Error types for the third-person camera
//!
//! Per-event camera operations are total and never fail. Errors only come
//! from configuration validation and from the input source collaborator.

use std::fmt;

/// Result type for camera operations
pub type Result<T> = std::result::Result<T, Error>;

/// Camera errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A configuration value violates an orbit invariant
    InvalidConfig(String),

    /// The input source could not service a request (cursor capture, etc.)
    InputUnavailable(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::InputUnavailable(msg) => write!(f, "Input unavailable: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
