//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use freelook::controls::register_default_targets;
use freelook::keymap::{BindingTable, Keycode};
use freelook::startup::bind_keys;
use freelook::{InputEvent, Viewer, ViewerConfig};

/// Write `text` to `dir/name` and return the path
pub fn write_file(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, text).unwrap();
    path
}

/// Stock controls bound from a default file and an optional user file
pub fn viewer_with_keybinds(
    dir: &Path,
    default_text: &str,
    user_text: Option<&str>,
) -> (BindingTable<Viewer>, Viewer) {
    let config = ViewerConfig::default();
    let mut table = BindingTable::new();
    register_default_targets(&mut table, &config);

    let default = write_file(dir, "default-keybinds.txt", default_text);
    let user = user_text.map(|text| write_file(dir, "keybinds.txt", text));
    bind_keys(&mut table, &default, user.as_deref()).unwrap();

    (table, Viewer::new(&config))
}

pub fn key_down(keycode: Keycode) -> InputEvent {
    InputEvent::KeyDown {
        keycode,
        repeat: false,
    }
}

pub fn key_up(keycode: Keycode) -> InputEvent {
    InputEvent::KeyUp { keycode }
}
