//! Runtime module - winit/platform integration
//!
//! - `app` - ApplicationHandler driving the per-frame dispatch loop

pub mod app;

pub use app::App;
