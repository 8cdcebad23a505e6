//! Camera module - orbit state, configuration, pose and view obstruction.
//!
//! The crate does NOT own a scene. An `OrbitCamera` is fed input and a
//! target position and returns a `CameraPose`; applying that pose to
//! whatever the host renders with is the caller's job.

mod config;
mod obstruction;
mod orbit_camera;
mod pose;

pub use config::{
    OrbitCameraConfig,
    DEFAULT_OFFSET, DEFAULT_ZOOM_SENSITIVITY, DEFAULT_MIN_DISTANCE, DEFAULT_MAX_DISTANCE,
    DEFAULT_DISTANCE, DEFAULT_ROTATION_SENSITIVITY,
};
pub use obstruction::{ViewBlockingMask, ObstructionHit, ViewObstructionResolver, NoObstruction};
pub use orbit_camera::{OrbitCamera, OBSTRUCTION_MARGIN};
pub use pose::CameraPose;
