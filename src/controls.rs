//! Stock fly-camera targets
//!
//! Registers the logical targets that keybind files refer to by name
//! (`forward`, `look_around`, `pop_old_camera`, ...). Every target operates
//! on a [`Viewer`] passed in by the dispatcher.

use crate::camera::Camera;
use crate::config::ViewerConfig;
use crate::history::CameraHistory;
use crate::keymap::{BindingTable, KeyArg, Target};

/// Mutable state the stock targets operate on
#[derive(Debug, Clone)]
pub struct Viewer {
    pub camera: Camera,
    pub history: CameraHistory,
    /// Movement speed in units per second
    pub speed: f32,
    /// Current speed multiplier, 1.0 unless sprinting
    pub sprint: f32,
}

impl Viewer {
    /// Out-of-range config values fall back to their defaults
    pub fn new(config: &ViewerConfig) -> Self {
        let config = config.sanitized();
        Self {
            camera: Camera::from_config(&config.camera),
            history: CameraHistory::new(config.history_capacity),
            speed: config.move_speed,
            sprint: 1.0,
        }
    }

    /// Distance covered in `dt` seconds at the current speed
    pub fn step(&self, dt: f32) -> f32 {
        dt * self.speed * self.sprint
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(&ViewerConfig::default())
    }
}

/// Names of every target [`register_default_targets`] installs
pub const DEFAULT_TARGETS: &[&str] = &[
    "forward",
    "backward",
    "leftward",
    "rightward",
    "upward",
    "downward",
    "sprint",
    "speed_up",
    "slow_down",
    "look_around",
    "vertical_scroll",
    "horizontal_scroll",
    "pop_old_camera",
    "pop_future_camera",
    "toggle_fog",
    "toggle_black_fog",
];

/// Save the pose before a fresh press; repeats are declined
fn record_pose(viewer: &mut Viewer, arg: KeyArg) -> bool {
    if arg.repeat {
        return false;
    }
    viewer.history.push(viewer.camera.pose());
    true
}

/// Move along the camera frame while held; `axis` is (right, up, forward)
fn movement(axis: [f32; 3]) -> Target<Viewer> {
    Target::new()
        .on_press(record_pose)
        .on_held(move |viewer: &mut Viewer, arg| {
            let step = viewer.step(arg.dt);
            viewer
                .camera
                .move_relative(axis[0] * step, axis[1] * step, axis[2] * step);
            true
        })
}

/// Register the stock targets on `table`
pub fn register_default_targets(table: &mut BindingTable<Viewer>, config: &ViewerConfig) {
    let config = config.sanitized();
    table.add_target("forward", movement([0.0, 0.0, 1.0]));
    table.add_target("backward", movement([0.0, 0.0, -1.0]));
    table.add_target("leftward", movement([-1.0, 0.0, 0.0]));
    table.add_target("rightward", movement([1.0, 0.0, 0.0]));
    table.add_target("upward", movement([0.0, 1.0, 0.0]));
    table.add_target("downward", movement([0.0, -1.0, 0.0]));

    let sprint_multiplier = config.sprint_multiplier;
    table.add_target(
        "sprint",
        Target::new()
            .on_press(move |viewer: &mut Viewer, _| {
                viewer.sprint = sprint_multiplier;
                true
            })
            .on_release(|viewer: &mut Viewer, _| {
                viewer.sprint = 1.0;
                true
            }),
    );

    table.add_target(
        "speed_up",
        Target::new().on_press(|viewer: &mut Viewer, arg| {
            if !arg.repeat {
                viewer.speed *= 2.0;
            }
            !arg.repeat
        }),
    );
    table.add_target(
        "slow_down",
        Target::new().on_press(|viewer: &mut Viewer, arg| {
            if !arg.repeat {
                viewer.speed *= 0.5;
            }
            !arg.repeat
        }),
    );

    let look = config.look_sensitivity;
    table.add_target(
        "look_around",
        Target::new()
            .on_press(record_pose)
            .on_held(move |viewer: &mut Viewer, arg| {
                viewer.camera.inc_theta(arg.mouse_rel_x * arg.dt * look);
                viewer.camera.inc_phi(arg.mouse_rel_y * arg.dt * look);
                true
            }),
    );

    let scroll = config.scroll_sensitivity;
    table.add_target(
        "vertical_scroll",
        Target::new().on_press(move |viewer: &mut Viewer, arg| {
            viewer.camera.inc_phi(arg.amount * -scroll);
            true
        }),
    );
    table.add_target(
        "horizontal_scroll",
        Target::new().on_press(move |viewer: &mut Viewer, arg| {
            viewer.camera.inc_theta(arg.amount * -scroll);
            true
        }),
    );

    table.add_target(
        "pop_old_camera",
        Target::new().on_press(|viewer: &mut Viewer, _| {
            let current = viewer.camera.pose();
            match viewer.history.undo(current) {
                Some(pose) => viewer.camera.set_pose(pose),
                None => tracing::debug!("No older camera pose"),
            }
            true
        }),
    );
    table.add_target(
        "pop_future_camera",
        Target::new().on_press(|viewer: &mut Viewer, _| {
            let current = viewer.camera.pose();
            match viewer.history.redo(current) {
                Some(pose) => viewer.camera.set_pose(pose),
                None => tracing::debug!("No newer camera pose"),
            }
            true
        }),
    );

    table.add_target(
        "toggle_fog",
        Target::new().on_press(|viewer: &mut Viewer, arg| {
            if !arg.repeat {
                let fog = !viewer.camera.fog_enabled();
                viewer.camera.set_fog(fog);
                tracing::info!("Fog {}", if fog { "enabled" } else { "disabled" });
            }
            true
        }),
    );
    table.add_target(
        "toggle_black_fog",
        Target::new().on_press(|viewer: &mut Viewer, arg| {
            if !arg.repeat {
                let black = !viewer.camera.black_fog();
                viewer.camera.set_black_fog(black);
            }
            true
        }),
    );
}
