//! Centralized configuration paths for freelook
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/freelook/`
//! - Windows: `%APPDATA%\freelook\`
//!
//! The shipped default keybinds live in the platform data directory
//! (`~/.local/share/freelook/` on Linux).

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "freelook";

/// Base config directory for freelook
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/freelook`
///   - Else: `~/.config/freelook`
///
/// Windows:
///   - `%APPDATA%\freelook`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// Platform data directory for freelook (`dirs::data_dir()/freelook`)
pub fn data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR))
}

/// `~/.config/freelook/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `<data dir>/freelook/default-keybinds.txt`
pub fn default_keybinds_file() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("default-keybinds.txt"))
}

/// `~/.config/freelook/keybinds.txt`
pub fn user_keybinds_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("keybinds.txt"))
}

/// `~/.config/freelook/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&logs)?;
    Ok(logs)
}
