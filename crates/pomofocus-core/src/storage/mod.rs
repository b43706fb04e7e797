mod config;

pub use config::{Config, LogConfig, NotificationsConfig, TasksConfig, UiConfig};

use std::path::PathBuf;

/// Returns the configuration directory, creating it if needed.
///
/// `POMOFOCUS_CONFIG_DIR` wins when set. Otherwise `~/.config/pomofocus[-dev]/`,
/// with the `-dev` suffix selected by `POMOFOCUS_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn config_dir() -> std::io::Result<PathBuf> {
    let dir = match std::env::var_os("POMOFOCUS_CONFIG_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("POMOFOCUS_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("pomofocus-dev")
            } else {
                base_dir.join("pomofocus")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
