//! Unified path management for Drishti configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/drishti/           # Config directory (or the override)
//! ├── config.toml              # Engine configuration
//! ├── secret.json              # Provider credential
//! └── transcripts/             # Saved chat transcripts
//! ```

use drishti_core::DrishtiError;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "drishti";

/// Resolves every file location from a single config directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrishtiPaths {
    config_dir: PathBuf,
}

impl DrishtiPaths {
    /// Uses `base` as the config directory, or the platform config directory
    /// (`~/.config/drishti` on Linux) when `None`.
    pub fn new(base: Option<&Path>) -> Result<Self, DrishtiError> {
        let config_dir = match base {
            Some(path) => path.to_path_buf(),
            None => dirs::config_dir()
                .ok_or_else(|| DrishtiError::config("Cannot find home directory"))?
                .join(APP_DIR),
        };
        Ok(Self { config_dir })
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Path to `config.toml`.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Path to `secret.json`.
    ///
    /// # Security Note
    ///
    /// Ensure this file has appropriate permissions (e.g., 600).
    pub fn secret_file(&self) -> PathBuf {
        self.config_dir.join("secret.json")
    }

    pub fn transcripts_dir(&self) -> PathBuf {
        self.config_dir.join("transcripts")
    }
}
