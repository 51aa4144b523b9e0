//! freelook - keybind-driven fly camera core
//!
//! This crate provides the input binding and camera state of an
//! interactive viewer: keybind files map physical keys to named targets,
//! a per-frame dispatcher drives those targets, and the targets move a
//! camera whose matrices are recomputed only when read after a change.

pub mod camera;
pub mod cli;
pub mod config;
pub mod config_paths;
pub mod controls;
pub mod history;
pub mod keymap;
pub mod startup;
pub mod tracing;

// Re-export commonly used types
pub use camera::{Camera, CameraPose};
pub use config::ViewerConfig;
pub use controls::Viewer;
pub use history::CameraHistory;
pub use keymap::{BindingTable, Dispatcher, InputEvent, Keycode};
