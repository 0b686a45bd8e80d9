//! Path management for FinLight
//!
//! Provides XDG-compliant path resolution for the settings and ledger files.
//!
//! ## Path Resolution Order
//!
//! 1. `FINLIGHT_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/finlight` or `~/.config/finlight`
//! 3. Windows: `%APPDATA%\finlight`

use std::path::PathBuf;

use crate::error::FinlightError;

/// Name of the persisted ledger file
pub const LEDGER_FILE_NAME: &str = "finlight_data.json";

/// Manages all paths used by FinLight
#[derive(Debug, Clone)]
pub struct FinlightPaths {
    /// Base directory for all FinLight data
    base_dir: PathBuf,
}

impl FinlightPaths {
    /// Create a new FinlightPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FinlightError> {
        let base_dir = if let Ok(custom) = std::env::var("FINLIGHT_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create FinlightPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/finlight/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the persisted ledger snapshot
    pub fn ledger_file(&self) -> PathBuf {
        self.base_dir.join(LEDGER_FILE_NAME)
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), FinlightError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinlightError::Io(format!("Failed to create base directory: {}", e)))
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, FinlightError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                FinlightError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("finlight"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, FinlightError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| FinlightError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("finlight"))
}
