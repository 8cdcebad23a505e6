//! Integration tests for the camera logging system
//!
//! These tests swap the global logger, so they run serially.
//!
//! Run with: cargo test --test logging_integration_tests

use third_person_camera::glam::{Vec2, Vec3};
use third_person_camera::tpcam::{
    CameraInput, Diagnostics, Error, InputSource, MouseMode, OrbitCamera, OrbitCameraConfig,
    ThirdPersonCameraController, Result,
};
use third_person_camera::tpcam::log::{Logger, LogEntry, LogSeverity};
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

struct RefusingInput;

impl InputSource for RefusingInput {
    fn set_mouse_mode(&mut self, _mode: MouseMode) -> Result<()> {
        Err(Error::InputUnavailable("no display".to_string()))
    }
}

struct AcceptingInput;

impl InputSource for AcceptingInput {
    fn set_mouse_mode(&mut self, _mode: MouseMode) -> Result<()> {
        Ok(())
    }
}

fn install_test_logger() -> Arc<Mutex<Vec<LogEntry>>> {
    let (logger, entries) = TestLogger::new();
    Diagnostics::set_logger(logger);
    entries
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_custom_logger_receives_entries() {
    let entries = install_test_logger();

    Diagnostics::log(LogSeverity::Info, "test::module", "Test info message".to_string());
    Diagnostics::log_detailed(LogSeverity::Error, "test::module", "Test error".to_string(), "x.rs", 9);

    {
        let logged = entries.lock().unwrap();
        assert_eq!(logged.len(), 2);
        assert_eq!(logged[0].severity, LogSeverity::Info);
        assert_eq!(logged[0].source, "test::module");
        assert!(logged[0].file.is_none());
        assert_eq!(logged[1].file, Some("x.rs"));
        assert_eq!(logged[1].line, Some(9));
    }

    Diagnostics::reset_logger();
}

#[test]
#[serial]
fn test_integration_macros_route_to_logger() {
    let entries = install_test_logger();

    third_person_camera::camera_warn!("test::macros", "warned {}", 1);
    third_person_camera::camera_error!("test::macros", "failed {}", 2);

    {
        let logged = entries.lock().unwrap();
        assert_eq!(logged.len(), 2);
        assert_eq!(logged[0].severity, LogSeverity::Warn);
        assert_eq!(logged[0].message, "warned 1");
        assert_eq!(logged[1].severity, LogSeverity::Error);
        assert!(logged[1].file.is_some());
        assert!(logged[1].line.is_some());
    }

    Diagnostics::reset_logger();
}

#[test]
#[serial]
fn test_integration_clamped_distance_is_warned() {
    let entries = install_test_logger();

    let camera = OrbitCamera::new(OrbitCameraConfig { distance: 42.0, ..Default::default() }).unwrap();
    assert_eq!(camera.distance(), 10.0);

    {
        let logged = entries.lock().unwrap();
        assert!(logged.iter().any(|e| e.severity == LogSeverity::Warn
            && e.source == "tpcam::OrbitCamera"
            && e.message.contains("clamped")));
    }

    Diagnostics::reset_logger();
}

#[test]
#[serial]
fn test_integration_invalid_config_is_logged_as_error() {
    let entries = install_test_logger();

    let result = OrbitCamera::new(OrbitCameraConfig {
        min_distance: 3.0,
        max_distance: 1.0,
        ..Default::default()
    });
    assert!(result.is_err());

    {
        let logged = entries.lock().unwrap();
        let error = logged
            .iter()
            .find(|e| e.severity == LogSeverity::Error)
            .expect("validation failure should be logged");
        assert_eq!(error.source, "tpcam::OrbitCameraConfig");
        assert!(error.file.is_some());
    }

    Diagnostics::reset_logger();
}

#[test]
#[serial]
fn test_integration_attach_failure_is_logged() {
    let entries = install_test_logger();

    let mut controller =
        ThirdPersonCameraController::new(OrbitCameraConfig::default(), RefusingInput).unwrap();
    assert!(controller.attach().is_err());

    {
        let logged = entries.lock().unwrap();
        assert!(logged.iter().any(|e| e.severity == LogSeverity::Error
            && e.source == "tpcam::Controller"
            && e.message.contains("no display")));
    }

    Diagnostics::reset_logger();
}

#[test]
#[serial]
fn test_integration_per_event_input_is_silent() {
    let mut controller =
        ThirdPersonCameraController::new(OrbitCameraConfig::default(), AcceptingInput).unwrap();
    controller.attach().unwrap();

    let entries = install_test_logger();

    for step in 0..100 {
        let delta = Vec2::new(step as f32, -(step as f32) * 0.5);
        controller.handle_input(CameraInput::MouseMotion(delta), Some(Vec3::ZERO));
        controller.handle_input(CameraInput::wheel_down(), Some(Vec3::ZERO));
        controller.process(0.016, Some(Vec3::ZERO));
    }

    assert!(entries.lock().unwrap().is_empty());

    Diagnostics::reset_logger();
}
