//! Application settings persistence
//!
//! Stores user preferences in `~/.config/vkeys/config.yaml`. The key bindings
//! themselves live in their own line-oriented file (see [`crate::keymap`]).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::legend::DEFAULT_COLUMNS;

/// Settings that persist across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Bindings file to use instead of `~/.config/vkeys/keys`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keys_file: Option<PathBuf>,

    /// Maximum number of entries per legend row
    #[serde(default = "default_legend_columns")]
    pub legend_columns: usize,
}

fn default_legend_columns() -> usize {
    DEFAULT_COLUMNS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            keys_file: None,
            legend_columns: default_legend_columns(),
        }
    }
}

impl Settings {
    /// Load settings from the config directory, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load settings from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<Settings>(&content) {
                Ok(settings) => {
                    tracing::info!("Loaded config from {}", path.display());
                    settings.sanitized()
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

    /// Save settings to `path`
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Bindings file to use: the configured override, else the default location
    pub fn keys_path(&self) -> Option<PathBuf> {
        self.keys_file
            .clone()
            .or_else(crate::config_paths::keys_file)
    }

    fn sanitized(mut self) -> Self {
        if self.legend_columns == 0 {
            tracing::warn!(
                "legend_columns must be at least 1, using {}",
                DEFAULT_COLUMNS
            );
            self.legend_columns = DEFAULT_COLUMNS;
        }
        self
    }
}
