use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{Window, WindowId};

use freelook::keymap::{input_event_from_winit, BindingTable, Dispatcher};
use freelook::Viewer;

pub struct App {
    viewer: Viewer,
    table: BindingTable<Viewer>,
    dispatcher: Dispatcher,
    window: Option<Window>,
    window_size: (u32, u32),
    last_tick: Instant,
}

impl App {
    pub fn new(
        viewer: Viewer,
        table: BindingTable<Viewer>,
        dispatcher: Dispatcher,
        window_size: (u32, u32),
    ) -> Self {
        Self {
            viewer,
            table,
            dispatcher,
            window: None,
            window_size,
            last_tick: Instant::now(),
        }
    }

    /// Queue or apply a window event; returns true when the app should exit
    fn handle_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CloseRequested => return true,
            WindowEvent::Resized(size) => {
                // Minimized windows report 0x0; keep the last real size
                if size.width > 0 && size.height > 0 {
                    self.viewer.camera.set_window_size(size.width, size.height);
                }
            }
            _ => {
                if let Some(input) = input_event_from_winit(event) {
                    self.dispatcher.push(input);
                }
            }
        }
        false
    }

    /// Run one frame of dispatch, then hand the camera to the renderer
    fn frame(&mut self, now: Instant) {
        let raw_dt = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;

        self.dispatcher
            .frame_update(&mut self.table, &mut self.viewer, raw_dt);

        let camera = &self.viewer.camera;
        tracing::trace!(
            eye = ?camera.eye(),
            forward = ?camera.forward(),
            "Camera after frame"
        );
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let (width, height) = self.window_size;
        let window_attributes = Window::default_attributes()
            .with_title("freelook")
            .with_inner_size(LogicalSize::new(width, height));

        match event_loop.create_window(window_attributes) {
            Ok(window) => {
                let size = window.inner_size();
                if size.width > 0 && size.height > 0 {
                    self.viewer.camera.set_window_size(size.width, size.height);
                }
                self.window = Some(window);
                self.last_tick = Instant::now();
            }
            Err(e) => {
                tracing::error!("Failed to create window: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(window) = &self.window else {
            return;
        };
        if window.id() != window_id {
            return;
        }

        if self.handle_event(&event) {
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Poll);

        self.frame(Instant::now());

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use freelook::controls::register_default_targets;
    use freelook::keymap::Keycode;
    use freelook::ViewerConfig;
    use winit::dpi::PhysicalSize;

    fn test_app() -> App {
        let config = ViewerConfig::default();
        let mut table = BindingTable::new();
        register_default_targets(&mut table, &config);
        table.bind(Keycode::SCROLL_UP, "vertical_scroll");
        App::new(
            Viewer::new(&config),
            table,
            Dispatcher::new(config.max_dt),
            (800, 600),
        )
    }

    #[test]
    fn test_resize_updates_camera() {
        let mut app = test_app();
        assert!(!app.handle_event(&WindowEvent::Resized(PhysicalSize::new(640, 480))));
        assert_eq!(app.viewer.camera.window_size(), (640, 480));

        app.handle_event(&WindowEvent::Resized(PhysicalSize::new(0, 0)));
        assert_eq!(app.viewer.camera.window_size(), (640, 480));
    }

    #[test]
    fn test_close_requested_exits() {
        let mut app = test_app();
        assert!(app.handle_event(&WindowEvent::CloseRequested));
    }

    #[test]
    fn test_events_wait_for_frame() {
        let mut app = test_app();
        let phi = app.viewer.camera.phi();
        app.dispatcher.push(freelook::InputEvent::Scroll { dx: 0.0, dy: 1.0 });
        assert_eq!(app.viewer.camera.phi(), phi);

        let now = app.last_tick + Duration::from_millis(16);
        app.frame(now);
        assert!(app.viewer.camera.phi() < phi);
        assert_eq!(app.last_tick, now);
    }
}
