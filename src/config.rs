//! Viewer configuration persistence
//!
//! Stores user preferences in `~/.config/freelook/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::keymap::DEFAULT_MAX_DT;

/// Errors from saving the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no config directory available")]
    NoConfigDir,

    #[error("failed to create config directory {path}: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_yaml::Error),

    #[error("failed to write config to {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Largest accepted `history_capacity`
pub const MAX_HISTORY_CAPACITY: usize = 65_536;

/// Reset `value` to `default` unless it is finite and positive
fn require_positive(field: &str, value: &mut f32, default: f32) {
    if !(value.is_finite() && *value > 0.0) {
        tracing::warn!("Invalid config {}: {}, using {}", field, value, default);
        *value = default;
    }
}

/// Projection and rendering hints applied to the camera at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fovy_radians: f32,
    pub near_plane: f32,
    pub far_plane: i32,
    pub raycast_threshold: i32,
    pub fog_enabled: bool,
    pub black_fog: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fovy_radians: 1.0,
            near_plane: 0.1,
            far_plane: 512,
            raycast_threshold: 120,
            fog_enabled: true,
            black_fog: false,
        }
    }
}

/// Viewer configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Ceiling on the per-frame time step, seconds
    pub max_dt: f32,
    /// Camera speed in units per second before sprinting
    pub move_speed: f32,
    /// Speed multiplier while `sprint` is held
    pub sprint_multiplier: f32,
    /// Radians per pixel-second of cursor displacement while looking around
    pub look_sensitivity: f32,
    /// Radians per scroll line
    pub scroll_sensitivity: f32,
    /// Entries kept by each camera history stack
    pub history_capacity: usize,
    pub camera: CameraConfig,
}

impl CameraConfig {
    /// Copy with out-of-range values replaced by their defaults
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let mut config = self.clone();

        require_positive(
            "camera.fovy_radians",
            &mut config.fovy_radians,
            defaults.fovy_radians,
        );
        require_positive(
            "camera.near_plane",
            &mut config.near_plane,
            defaults.near_plane,
        );
        if config.far_plane as f32 <= config.near_plane {
            tracing::warn!(
                "Invalid config camera.far_plane: {} is not beyond near plane {}, using {}",
                config.far_plane,
                config.near_plane,
                defaults.far_plane
            );
            config.far_plane = defaults.far_plane;
        }
        if config.far_plane as f32 <= config.near_plane {
            tracing::warn!(
                "Invalid config camera.near_plane: {} is beyond far plane {}, using {}",
                config.near_plane,
                config.far_plane,
                defaults.near_plane
            );
            config.near_plane = defaults.near_plane;
        }
        config
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            max_dt: DEFAULT_MAX_DT,
            move_speed: 8.0,
            sprint_multiplier: 7.0,
            look_sensitivity: 0.01,
            scroll_sensitivity: 0.05,
            history_capacity: 256,
            camera: CameraConfig::default(),
        }
    }
}

impl ViewerConfig {
    /// Copy with out-of-range values replaced by their defaults
    ///
    /// Every rejected field is logged at `warn`.
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let mut config = self.clone();

        require_positive("max_dt", &mut config.max_dt, defaults.max_dt);
        require_positive("move_speed", &mut config.move_speed, defaults.move_speed);
        require_positive(
            "sprint_multiplier",
            &mut config.sprint_multiplier,
            defaults.sprint_multiplier,
        );
        require_positive(
            "look_sensitivity",
            &mut config.look_sensitivity,
            defaults.look_sensitivity,
        );
        require_positive(
            "scroll_sensitivity",
            &mut config.scroll_sensitivity,
            defaults.scroll_sensitivity,
        );
        if !(1..=MAX_HISTORY_CAPACITY).contains(&config.history_capacity) {
            tracing::warn!(
                "Invalid config history_capacity: {} (allowed 1..={}), using {}",
                config.history_capacity,
                MAX_HISTORY_CAPACITY,
                defaults.history_capacity
            );
            config.history_capacity = defaults.history_capacity;
        }
        config.camera = config.camera.sanitized();
        config
    }

    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config.sanitized()
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = crate::config_paths::config_file().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
                path: parent.display().to_string(),
                source,
            })?;
        }

        let content = serde_yaml::to_string(self)?;

        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.display().to_string(),
            source,
        })?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: ViewerConfig = serde_yaml::from_str("move_speed: 2.5\n").unwrap();
        assert_eq!(config.move_speed, 2.5);
        assert_eq!(config.history_capacity, 256);
        assert_eq!(config.camera, CameraConfig::default());
    }

    #[test]
    fn test_nested_camera_section() {
        let yaml = "camera:\n  far_plane: 1024\n  black_fog: true\n";
        let config: ViewerConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.camera.far_plane, 1024);
        assert!(config.camera.black_fog);
        assert_eq!(config.camera.fovy_radians, 1.0);
        assert_eq!(config.max_dt, DEFAULT_MAX_DT);
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let config = ViewerConfig {
            move_speed: 16.0,
            ..ViewerConfig::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(ViewerConfig::load_from(&path), config);
    }

    #[test]
    fn test_sanitized_keeps_valid_values() {
        let config = ViewerConfig {
            move_speed: 0.5,
            history_capacity: MAX_HISTORY_CAPACITY,
            ..ViewerConfig::default()
        };
        assert_eq!(config.sanitized(), config);
    }

    #[test]
    fn test_sanitized_resets_each_bad_field() {
        let config = ViewerConfig {
            max_dt: -1.0,
            move_speed: f32::NAN,
            sprint_multiplier: 0.0,
            look_sensitivity: f32::INFINITY,
            scroll_sensitivity: -0.05,
            history_capacity: 0,
            camera: CameraConfig {
                fovy_radians: 0.0,
                near_plane: -0.1,
                ..CameraConfig::default()
            },
        };
        assert_eq!(config.sanitized(), ViewerConfig::default());
    }

    #[test]
    fn test_far_plane_not_beyond_near() {
        let camera = CameraConfig {
            near_plane: 10.0,
            far_plane: 10,
            ..CameraConfig::default()
        };
        let fixed = camera.sanitized();
        assert_eq!(fixed.far_plane, 512);
        assert_eq!(fixed.near_plane, 10.0);

        // Near plane past the default far plane gives up on both
        let camera = CameraConfig {
            near_plane: 600.0,
            far_plane: 0,
            ..CameraConfig::default()
        };
        assert_eq!(camera.sanitized(), CameraConfig::default());
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "move_speed: [not, a, number]\n").unwrap();
        assert_eq!(ViewerConfig::load_from(&path), ViewerConfig::default());
    }
}
