//! Where vkeys keeps its files
//!
//! - Unix/macOS: `$XDG_CONFIG_HOME/vkeys/` or `~/.config/vkeys/`
//! - Windows: `%APPDATA%\vkeys\`

use std::{env, fs, path::PathBuf};

const APP_DIR: &str = "vkeys";

/// Name of the daily-rotated log file
pub const LOG_FILE_NAME: &str = "vkeys.log";

/// Base config directory, if the platform has one
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

/// The bindings file, `keys`
pub fn keys_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("keys"))
}

/// The settings file, `config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// Create the `logs/` directory and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = config_dir()
        .ok_or_else(|| "No config directory available".to_string())?
        .join("logs");
    fs::create_dir_all(&logs)
        .map_err(|e| format!("Failed to create directory {}: {}", logs.display(), e))?;
    Ok(logs)
}
