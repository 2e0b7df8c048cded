//! Secret service implementation.
//!
//! Reads the provider credential from `secret.json` and falls back to the
//! `GEMINI_API_KEY` / `GEMINI_MODEL` environment variables when the file has
//! no usable key. The result is cached, so the credential is read once.

use crate::paths::DrishtiPaths;
use drishti_core::config::{GeminiConfig, SecretConfig};
use drishti_core::secret::SecretService;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const MODEL_ENV: &str = "GEMINI_MODEL";

/// Service for loading secret configuration.
///
/// # Example
///
/// ```ignore
/// use drishti_infrastructure::SecretServiceImpl;
/// use drishti_core::secret::SecretService;
///
/// let service = SecretServiceImpl::new(&paths);
/// let secrets = service.load_secrets().await?;
/// ```
#[derive(Clone)]
pub struct SecretServiceImpl {
    path: PathBuf,
    /// Cached secret config.
    secrets: Arc<RwLock<Option<SecretConfig>>>,
    use_env: bool,
}

impl SecretServiceImpl {
    pub fn new(paths: &DrishtiPaths) -> Self {
        Self {
            path: paths.secret_file(),
            secrets: Arc::new(RwLock::new(None)),
            use_env: true,
        }
    }

    /// Ignores environment variables; only the file is consulted.
    pub fn without_env(mut self) -> Self {
        self.use_env = false;
        self
    }

    fn read_file(&self) -> Result<SecretConfig, String> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no secret file, using empty secrets");
            return Ok(SecretConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| format!("Failed to read {}: {}", self.path.display(), e))?;
        // serde_json errors carry line/column only, never the value
        serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse {}: {}", self.path.display(), e))
    }

    fn env_gemini() -> Option<GeminiConfig> {
        let api_key = std::env::var(API_KEY_ENV).ok()?;
        Some(GeminiConfig {
            api_key,
            model_name: std::env::var(MODEL_ENV).ok(),
        })
    }

    fn load_secrets_internal(&self) -> Result<SecretConfig, String> {
        {
            let cached = self
                .secrets
                .read()
                .map_err(|_| "secret cache lock poisoned".to_string())?;
            if let Some(ref config) = *cached {
                return Ok(config.clone());
            }
        }

        let mut loaded = self.read_file()?;
        if self.use_env && loaded.usable_gemini().is_none() {
            if let Some(gemini) = Self::env_gemini() {
                tracing::debug!("using {} from the environment", API_KEY_ENV);
                loaded.gemini = Some(gemini);
            }
        }

        tracing::info!(
            gemini_key = loaded.usable_gemini().is_some(),
            "secrets loaded"
        );

        let mut cache = self
            .secrets
            .write()
            .map_err(|_| "secret cache lock poisoned".to_string())?;
        *cache = Some(loaded.clone());
        Ok(loaded)
    }
}

#[async_trait::async_trait]
impl SecretService for SecretServiceImpl {
    async fn load_secrets(&self) -> Result<SecretConfig, String> {
        self.load_secrets_internal()
    }

    async fn secret_file_exists(&self) -> bool {
        self.path.exists()
    }
}
