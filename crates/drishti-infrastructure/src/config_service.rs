//! Engine configuration stored in `config.toml`.

use crate::paths::DrishtiPaths;
use drishti_core::DrishtiError;
use drishti_core::config::EngineConfig;
use std::fs::{self, File};
use std::io::Write as IoWrite;
use std::path::PathBuf;

/// Loads and saves [`EngineConfig`].
///
/// A missing file yields the defaults; a present but invalid file is an
/// error rather than being silently replaced.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new(paths: &DrishtiPaths) -> Self {
        Self {
            path: paths.config_file(),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn load(&self) -> Result<EngineConfig, DrishtiError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(EngineConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        let config: EngineConfig = toml::from_str(&content)?;
        tracing::debug!(path = %self.path.display(), "engine config loaded");
        Ok(config)
    }

    /// Writes the config via a temporary file and an atomic rename.
    pub fn save(&self, config: &EngineConfig) -> Result<(), DrishtiError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(config)?;
        let tmp_path = self.path.with_extension("toml.tmp");
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(content.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service(dir: &TempDir) -> ConfigService {
        ConfigService::new(&DrishtiPaths::new(Some(dir.path())).unwrap())
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        assert_eq!(service(&dir).load().unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);
        let config = EngineConfig {
            history_window: Some(3),
            personality_probability: 0.0,
            ..EngineConfig::default()
        };

        service.save(&config).unwrap();

        assert_eq!(service.load().unwrap(), config);
        assert!(!dir.path().join("config.toml.tmp").exists());
    }

    #[test]
    fn test_invalid_file_is_serialization_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("config.toml"), "history_window = \"many\"").unwrap();

        let err = service(&dir).load().unwrap_err();
        assert!(err.is_serialization());
    }

    #[test]
    fn test_save_creates_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested").join("drishti");
        let service = ConfigService::new(&DrishtiPaths::new(Some(&nested)).unwrap());
        service.save(&EngineConfig::default()).unwrap();
        assert!(nested.join("config.toml").exists());
    }
}
