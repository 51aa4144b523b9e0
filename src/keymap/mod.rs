//! Input binding system
//!
//! This module turns physical input into named logical actions:
//! - Resolves human-readable key names to keycodes
//! - Parses the plain-text keybind format into fallback chains
//! - Tracks which target claimed each held key
//! - Dispatches queued events once per frame with a capped time step
//!
//! # Architecture
//!
//! ```text
//! keybinds.txt → KeybindParser → BindingTable (fallback chains)
//! winit::WindowEvent → InputEvent → Dispatcher::frame_update() → KeyTarget callbacks
//! ```
//!
//! # Loading Keybinds
//!
//! ```ignore
//! let mut table: BindingTable<Viewer> = BindingTable::new();
//! controls::register_default_targets(&mut table, &config);
//! load_keybinds_file(Path::new("keybinds.txt"), &mut table)?;
//! ```

mod dispatch;
mod parser;
mod registry;
mod table;
mod target;
mod types;
pub mod winit_adapter;

pub use dispatch::{Dispatcher, InputEvent, DEFAULT_MAX_DT};
pub use parser::{
    load_keybinds_file, parse_keybinds, parse_keybinds_reader, parse_keybinds_str, Binder,
    KeybindError, KeybindParser,
};
pub use registry::keycode_from_name;
pub use table::{BindingTable, Claim};
pub use target::{KeyTarget, Target};
pub use types::{KeyArg, Keycode};
pub use winit_adapter::{input_event_from_winit, keycode_from_mouse_button, keycode_from_winit};
