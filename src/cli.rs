//! Command-line argument parsing for the viewer
//!
//! Supports:
//! - Overriding the default and user keybind files
//! - Initial window size
//! - Check mode: load keybinds and exit without opening a window

use clap::Parser;
use std::path::PathBuf;

/// A free-flying camera viewer
#[derive(Parser, Debug)]
#[command(name = "freelook", version, about = "A free-flying camera viewer")]
pub struct CliArgs {
    /// Default keybinds file (must exist)
    #[arg(long, value_name = "PATH")]
    pub default_keybinds: Option<PathBuf>,

    /// User keybinds file (may be absent)
    #[arg(long, value_name = "PATH")]
    pub user_keybinds: Option<PathBuf>,

    /// Initial window width in logical pixels
    #[arg(long, value_name = "PX", default_value_t = 800)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, value_name = "PX", default_value_t = 600)]
    pub height: u32,

    /// Load the keybind files and exit
    #[arg(long)]
    pub check: bool,
}

/// Where the keybind files come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeybindPaths {
    pub default: PathBuf,
    /// `None` when no config directory is available
    pub user: Option<PathBuf>,
    /// The default path is the stock location, so the embedded defaults
    /// may be installed there
    pub default_is_stock: bool,
}

impl CliArgs {
    /// Resolve keybind file locations, preferring explicit arguments
    pub fn keybind_paths(&self) -> Result<KeybindPaths, String> {
        let (default, default_is_stock) = match &self.default_keybinds {
            Some(path) => (path.clone(), false),
            None => (
                crate::config_paths::default_keybinds_file()
                    .ok_or_else(|| "No data directory available for default keybinds".to_string())?,
                true,
            ),
        };
        let user = self
            .user_keybinds
            .clone()
            .or_else(crate::config_paths::user_keybinds_file);

        Ok(KeybindPaths {
            default,
            user,
            default_is_stock,
        })
    }

    /// Window size with zero dimensions raised to one pixel
    pub fn window_size(&self) -> (u32, u32) {
        (self.width.max(1), self.height.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("freelook").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = args(&[]);
        assert_eq!(args.window_size(), (800, 600));
        assert!(!args.check);
        assert!(args.default_keybinds.is_none());
    }

    #[test]
    fn test_explicit_keybind_paths() {
        let args = args(&[
            "--default-keybinds",
            "/tmp/defaults.txt",
            "--user-keybinds",
            "/tmp/mine.txt",
        ]);
        let paths = args.keybind_paths().unwrap();
        assert_eq!(paths.default, PathBuf::from("/tmp/defaults.txt"));
        assert_eq!(paths.user, Some(PathBuf::from("/tmp/mine.txt")));
        assert!(!paths.default_is_stock);
    }

    #[test]
    fn test_stock_default_path() {
        let args = args(&[]);
        if let Ok(paths) = args.keybind_paths() {
            assert!(paths.default_is_stock);
            assert!(paths.default.ends_with("default-keybinds.txt"));
        }
    }

    #[test]
    fn test_window_size_and_check() {
        let args = args(&["--width", "0", "--height", "300", "--check"]);
        assert_eq!(args.window_size(), (1, 300));
        assert!(args.check);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(CliArgs::try_parse_from(["freelook", "--bogus"]).is_err());
    }
}
