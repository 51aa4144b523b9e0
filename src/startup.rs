//! Keybind loading at startup
//!
//! Two files feed the same binding table, in order:
//! 1. The default keybinds file, which must exist and parse
//! 2. The user keybinds file, which may be absent but must parse if present

use std::path::Path;

use thiserror::Error;

use crate::keymap::{load_keybinds_file, Binder, BindingTable, KeybindError};

/// Default keybinds shipped with the viewer, embedded at compile time
pub const DEFAULT_KEYBINDS: &str = include_str!("../default-keybinds.txt");

/// A keybinds file that stops the viewer from starting
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("default keybinds: {0}")]
    DefaultKeybinds(KeybindError),

    #[error("user keybinds: {0}")]
    UserKeybinds(KeybindError),
}

impl StartupError {
    /// Process exit status for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            StartupError::DefaultKeybinds(_) => 2,
            StartupError::UserKeybinds(_) => 3,
        }
    }

    pub fn keybind_error(&self) -> &KeybindError {
        match self {
            StartupError::DefaultKeybinds(e) | StartupError::UserKeybinds(e) => e,
        }
    }
}

/// Bindings registered from each file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadedKeybinds {
    pub default_bindings: usize,
    /// `None` when the user file does not exist
    pub user_bindings: Option<usize>,
}

/// Load the default file, then the optional user file, into `binder`
pub fn bind_keys<B: Binder + ?Sized>(
    binder: &mut B,
    default_path: &Path,
    user_path: Option<&Path>,
) -> Result<LoadedKeybinds, StartupError> {
    let default_bindings = match load_keybinds_file(default_path, binder) {
        Ok(count) => {
            tracing::info!(
                "Loaded {} default keybinds from {}",
                count,
                default_path.display()
            );
            count
        }
        Err(e) => {
            tracing::error!("Failed to load default keybinds: {}", e);
            return Err(StartupError::DefaultKeybinds(e));
        }
    };

    let user_bindings = match user_path {
        None => None,
        Some(path) => match load_keybinds_file(path, binder) {
            Ok(count) => {
                tracing::info!("Loaded {} user keybinds from {}", count, path.display());
                Some(count)
            }
            Err(e) if e.is_not_found() => {
                tracing::warn!("Custom keybinds file {} not found", path.display());
                None
            }
            Err(e) => {
                tracing::error!("Failed to load user keybinds: {}", e);
                return Err(StartupError::UserKeybinds(e));
            }
        },
    };

    Ok(LoadedKeybinds {
        default_bindings,
        user_bindings,
    })
}

/// Write the embedded default keybinds to `path` unless a file is already there
///
/// Returns whether the file was written.
pub fn install_default_keybinds(path: &Path) -> std::io::Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, DEFAULT_KEYBINDS)?;
    tracing::info!("Installed default keybinds at {}", path.display());
    Ok(true)
}

/// Log every binding whose target name was never registered
///
/// Returns how many there are.
pub fn warn_dead_bindings<C>(table: &BindingTable<C>) -> usize {
    let dead = table.dead_bindings();
    for (keycode, name) in &dead {
        tracing::warn!("Keycode {} is bound to unknown target {}", keycode, name);
    }
    dead.len()
}
