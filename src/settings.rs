//! Persisted preferences.
//!
//! Stored as a small JSON record. Missing keys fall back to defaults and
//! unknown keys are ignored, so records written by older or newer builds
//! still load.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::constants::config;
use crate::controller::ChromeOptions;
use crate::state::DisplayMode;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse settings at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("no configuration directory available on this platform")]
    NoConfigDir,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub hide_status_bar: bool,
    pub mode_at_start: DisplayMode,
    pub collapse_docks: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hide_status_bar: true,
            mode_at_start: DisplayMode::Normal,
            collapse_docks: false,
        }
    }
}

impl Settings {
    pub fn chrome_options(&self) -> ChromeOptions {
        ChromeOptions {
            hide_status_bar: self.hide_status_bar,
            collapse_docks: self.collapse_docks,
        }
    }
}

/// Reads and writes [`Settings`] at a fixed path.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the platform configuration directory.
    pub fn default_location() -> Result<Self, SettingsError> {
        let mut path = dirs::config_dir().ok_or(SettingsError::NoConfigDir)?;
        path.push(config::APP_DIR);
        path.push(config::FILENAME);
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the record; a missing file yields defaults.
    pub fn load(&self) -> Result<Settings, SettingsError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "settings not found, using defaults");
                return Ok(Settings::default());
            }
            Err(source) => {
                return Err(SettingsError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        serde_json::from_str(&contents).map_err(|source| SettingsError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Like [`load`](Self::load), but logs failures and falls back to defaults.
    pub fn load_or_default(&self) -> Settings {
        self.load().unwrap_or_else(|err| {
            warn!(error = %err, "could not load settings, using defaults");
            Settings::default()
        })
    }

    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        let io_err = |source| SettingsError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(settings).map_err(|source| {
            SettingsError::Parse {
                path: self.path.clone(),
                source,
            }
        })?;
        fs::write(&self.path, json).map_err(io_err)?;
        info!(path = %self.path.display(), mode_at_start = %settings.mode_at_start, "settings saved");
        Ok(())
    }
}
