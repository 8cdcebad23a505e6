/*!
# Third Person Camera

Engine-independent third-person orbit camera.

The camera orbits a target at a configurable distance and offset. Mouse
motion rotates it, the mouse wheel zooms it, and pitch stays one degree
short of straight up/down so the view never flips.

## Architecture

- **OrbitCamera**: yaw/pitch/distance state and the orbit math
- **OrbitCameraConfig**: validated tunables with stock defaults
- **CameraPose**: origin + orientation handed back to the host
- **ViewObstructionResolver**: optional host collision query
- **InputSource**: host input manager (cursor capture)
- **ThirdPersonCameraController**: lifecycle, input dispatch, per-frame update

The host owns the loop: it forwards input as `CameraInput`, calls
`process()` every frame with the target position, and applies the returned
pose to its own camera.
*/

// Internal modules
mod error;
mod diagnostics;
pub mod log;
pub mod math;
pub mod camera;
pub mod input;
pub mod controller;

// Main tpcam namespace module
pub mod tpcam {
    // Error types
    pub use crate::error::{Error, Result};

    // Logger slot
    pub use crate::diagnostics::Diagnostics;

    // Logging sub-module (types only, macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Camera types
    pub use crate::camera::{
        OrbitCamera, OrbitCameraConfig, CameraPose,
        ViewBlockingMask, ObstructionHit, ViewObstructionResolver, NoObstruction,
        OBSTRUCTION_MARGIN,
    };

    // Input types
    pub use crate::input::{CameraInput, InputSource, MouseMode, WindowInputSource};

    // Controller
    pub use crate::controller::ThirdPersonCameraController;

    // Math sub-module
    pub mod math {
        pub use crate::math::*;
    }
}

// Re-export math library at crate root
pub use glam;
