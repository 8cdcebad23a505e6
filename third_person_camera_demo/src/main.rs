//! Third-person camera demo
//!
//! Opens a window, captures the mouse and orbits a target that walks in a
//! circle. Move the mouse to rotate, scroll to zoom, Escape toggles the
//! mouse capture. The camera pose is logged once per second.

use std::sync::Arc;
use std::time::Instant;

use third_person_camera::glam::Vec3;
use third_person_camera::tpcam::{
    CameraInput, OrbitCameraConfig, ThirdPersonCameraController, WindowInputSource,
};
use third_person_camera::{camera_error, camera_info};
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

const TARGET_PATH_RADIUS: f32 = 5.0;
const TARGET_ANGULAR_SPEED: f32 = 0.5;
const POSE_LOG_INTERVAL: f32 = 1.0;

struct DemoApp {
    window: Option<Arc<Window>>,
    controller: Option<ThirdPersonCameraController<WindowInputSource>>,
    last_frame_time: Instant,
    elapsed: f32,
    since_last_log: f32,
}

impl DemoApp {
    fn new() -> Self {
        Self {
            window: None,
            controller: None,
            last_frame_time: Instant::now(),
            elapsed: 0.0,
            since_last_log: 0.0,
        }
    }

    fn target_position(&self) -> Vec3 {
        let angle = self.elapsed * TARGET_ANGULAR_SPEED;
        Vec3::new(angle.cos() * TARGET_PATH_RADIUS, 0.0, angle.sin() * TARGET_PATH_RADIUS)
    }

    fn toggle_capture(&mut self) {
        let Some(controller) = &mut self.controller else {
            return;
        };

        let result = if controller.is_attached() {
            controller.detach()
        } else {
            controller.attach()
        };
        if let Err(e) = result {
            camera_error!("demo", "Could not toggle mouse capture: {}", e);
        }
    }

    fn frame(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;
        self.elapsed += dt;
        self.since_last_log += dt;

        let target = self.target_position();
        let Some(controller) = &mut self.controller else {
            return;
        };
        let Some(pose) = controller.process(dt, Some(target)) else {
            return;
        };

        if self.since_last_log >= POSE_LOG_INTERVAL {
            self.since_last_log = 0.0;
            camera_info!("demo",
                "target {:.2} | camera {:.2} looking {:.2} | distance {:.2}",
                target, pose.origin, pose.forward(), controller.camera().distance());
        }
    }
}

impl ApplicationHandler for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Third Person Camera Demo")
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                camera_error!("demo", "Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let source = WindowInputSource::new(window.clone());
        let mut controller = match ThirdPersonCameraController::new(OrbitCameraConfig::default(), source) {
            Ok(c) => c,
            Err(e) => {
                camera_error!("demo", "Failed to create camera controller: {}", e);
                event_loop.exit();
                return;
            }
        };

        // Keep running without capture; Escape retries
        if let Err(e) = controller.attach() {
            camera_error!("demo", "Mouse capture unavailable: {}", e);
        }

        window.request_redraw();
        self.window = Some(window);
        self.controller = Some(controller);
        self.last_frame_time = Instant::now();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let Some(input) = CameraInput::from_window_event(&event) {
            let target = self.target_position();
            if let Some(controller) = &mut self.controller {
                controller.handle_input(input, Some(target));
            }
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                // Release the cursor before the window goes away
                self.controller = None;
                event_loop.exit();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && !event.repeat
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                {
                    self.toggle_capture();
                }
            }

            WindowEvent::RedrawRequested => {
                self.frame();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => (),
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _id: DeviceId, event: DeviceEvent) {
        let Some(input) = CameraInput::from_device_event(&event) else {
            return;
        };
        let target = self.target_position();
        if let Some(controller) = &mut self.controller {
            controller.handle_input(input, Some(target));
        }
    }
}

fn main() {
    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            camera_error!("demo", "Failed to create event loop: {}", e);
            return;
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = DemoApp::new();
    if let Err(e) = event_loop.run_app(&mut app) {
        camera_error!("demo", "Event loop error: {}", e);
    }
}
