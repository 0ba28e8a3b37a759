//! Optional user settings.
//!
//! Settings live in `config.toml` under the platform configuration directory
//! (`~/.config/zipdir` on Linux and macOS). The file is never created by the
//! tool; if it is absent every setting falls back to its default.

use crate::constants::{CONFIG_NAME, PKG_NAME};
use crate::error::{Error, Result};
use crate::job::Level;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Defaults that apply when the command line leaves them unset.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Settings {
    /// Compression level used when `-level` is not given.
    pub level: Option<Level>,
}

impl Settings {
    /// Loads the settings file, or returns defaults if it does not exist.
    pub fn load() -> Result<Self> {
        match config_file() {
            Some(path) if path.exists() => Self::read(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Reads settings from the given TOML file.
    pub fn read(path: &Path) -> Result<Self> {
        let toml_str = fs::read_to_string(path).map_err(|source| Error::SettingsRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&toml_str).map_err(|source| Error::SettingsParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Returns the absolute path to the settings file, if a config directory is known.
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_NAME))
}

/// Returns the configuration directory for the application, platform-specific.
#[cfg(not(target_os = "macos"))]
fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(PKG_NAME))
}

/// Returns the configuration directory for the application, platform-specific.
#[cfg(target_os = "macos")]
fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join(PKG_NAME))
}
