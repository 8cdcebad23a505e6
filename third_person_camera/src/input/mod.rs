/// Input module - camera input events and the input source collaborator

pub mod camera_input;
pub mod input_source;
pub mod mock_input_source;

pub use camera_input::*;
pub use input_source::*;
