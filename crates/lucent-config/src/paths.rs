//! Platform-specific configuration paths.
//!
//! # Directory Structure
//!
//! - **User config**: `~/.config/lucent/config.toml` (Linux), `~/Library/Application Support/lucent/config.toml` (macOS)
//! - **System config**: `/etc/lucent/config.toml` (Unix)
//!
//! The user file takes precedence over the system file.

use std::path::PathBuf;

/// Application name used for directory paths.
const APP_NAME: &str = "lucent";

/// File name of the configuration file.
pub const CONFIG_FILE: &str = "config.toml";

/// Returns the user-specific configuration directory.
///
/// Returns a fallback path if the config directory cannot be determined.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Returns the path of the user configuration file.
pub fn user_config_file() -> PathBuf {
    user_config_dir().join(CONFIG_FILE)
}

/// Returns the path of the system-wide configuration file.
pub fn system_config_file() -> PathBuf {
    #[cfg(unix)]
    {
        PathBuf::from("/etc").join(APP_NAME).join(CONFIG_FILE)
    }
    #[cfg(not(unix))]
    {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_NAME)
            .join(CONFIG_FILE)
    }
}

/// Find the configuration file to use, if any exists.
///
/// Searches the user file first, then the system file.
pub fn find_config() -> Option<PathBuf> {
    [user_config_file(), system_config_file()]
        .into_iter()
        .find(|path| path.is_file())
}

/// Ensure the user config directory exists.
///
/// Creates the directory and any parent directories if they don't exist.
pub fn ensure_user_config_dir() -> Result<PathBuf, crate::ConfigError> {
    let dir = user_config_dir();

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| crate::ConfigError::create_dir(&dir, e))?;
    }

    Ok(dir)
}
