//! Controller module - the component that embeds an orbit camera in a host
//! loop.

mod third_person_controller;

pub use third_person_controller::ThirdPersonCameraController;
