//! Logging setup
//!
//! Without RUST_LOG the console shows warnings from dependencies and
//! `info` from this crate, such as keybind files loaded.
//!
//! Configure console output via the RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs, including each binding registered
//! - `RUST_LOG=freelook::keymap=trace` - claims and releases per keycode
//! - `RUST_LOG=freelook::runtime=trace` - camera state every frame
//!
//! # Log Files
//!
//! Logs are written to `~/.config/freelook/logs/freelook.log` with daily rotation.
//! File logging uses debug level regardless of RUST_LOG, with winit held at info.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Console filter used when RUST_LOG is unset
const DEFAULT_CONSOLE_FILTER: &str = "warn,freelook=info";

/// File filter; winit is noisy at debug
const FILE_FILTER: &str = "debug,winit=info";

/// Initialize tracing subscriber with console and file logging
pub fn init() {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_CONSOLE_FILTER));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "freelook.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new(FILE_FILTER)),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
