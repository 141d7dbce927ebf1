//! Path management for Finsight
//!
//! ## Path Resolution Order
//!
//! 1. `FINSIGHT_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/finsight` or `~/.config/finsight`
//! 3. Windows: `%APPDATA%\finsight`

use std::path::{Path, PathBuf};

use crate::error::{FinsightError, FinsightResult};

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "FINSIGHT_DATA_DIR";

/// Manages all paths used by Finsight
#[derive(Debug, Clone)]
pub struct FinsightPaths {
    base_dir: PathBuf,
}

impl FinsightPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> FinsightResult<Self> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create FinsightPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Default location of the record snapshot
    pub fn snapshot_file(&self) -> PathBuf {
        self.base_dir.join("snapshot.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> FinsightResult<()> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            FinsightError::Io(format!(
                "Failed to create directory {}: {}",
                self.base_dir.display(),
                e
            ))
        })
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> FinsightResult<PathBuf> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                FinsightError::Config("Could not determine home directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("finsight"))
}

#[cfg(windows)]
fn resolve_default_path() -> FinsightResult<PathBuf> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| FinsightError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("finsight"))
}
