//! Wires configuration, credentials and the response engine together.

use crate::chat_session::ChatSession;
use drishti_core::DrishtiError;
use drishti_core::config::{EngineConfig, SecretConfig};
use drishti_core::knowledge::KnowledgeBase;
use drishti_core::secret::SecretService;
use drishti_infrastructure::{ConfigService, DrishtiPaths, SecretServiceImpl};
use drishti_interaction::{
    GeminiApiProvider, PersonalityShaper, ProviderMode, ResponseCoordinator, TypingPacer,
};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// A ready-to-use engine: the shared coordinator plus session settings.
#[derive(Debug, Clone)]
pub struct EngineBootstrap {
    coordinator: Arc<ResponseCoordinator>,
    pacer: TypingPacer,
    config: EngineConfig,
}

impl EngineBootstrap {
    /// Builds the engine from already-loaded settings.
    ///
    /// A missing or placeholder Gemini key selects local-only mode.
    pub fn from_parts(secret: SecretConfig, config: EngineConfig) -> Result<Self, DrishtiError> {
        let probability = config.personality_probability;
        if !(0.0..=1.0).contains(&probability) {
            return Err(DrishtiError::config(format!(
                "personality_probability must be between 0 and 1, got {probability}"
            )));
        }

        let mode = match secret.usable_gemini() {
            Some(gemini) => {
                let provider = GeminiApiProvider::from_config(gemini)
                    .with_timeout(Duration::from_secs(config.request_timeout_secs));
                tracing::info!(model = provider.model(), "using Gemini provider");
                ProviderMode::Configured(Arc::new(provider))
            }
            None => {
                tracing::info!("no usable Gemini key, answering from the local knowledge base");
                ProviderMode::Unconfigured
            }
        };

        let coordinator = ResponseCoordinator::new(mode, KnowledgeBase::builtin())?
            .with_history_window(config.history_window)
            .with_generation(config.generation)
            .with_shaper(PersonalityShaper::random(config.personality_probability));

        Ok(Self {
            coordinator: Arc::new(coordinator),
            pacer: TypingPacer::new(config.pacing),
            config,
        })
    }

    /// Loads `config.toml` and `secret.json` from `base` (or the platform
    /// config directory). With `local_only` the credential is ignored.
    pub async fn load_default(base: Option<&Path>, local_only: bool) -> Result<Self, DrishtiError> {
        let paths = DrishtiPaths::new(base)?;
        let config = ConfigService::new(&paths).load()?;

        let secret = if local_only {
            SecretConfig::default()
        } else {
            SecretServiceImpl::new(&paths)
                .load_secrets()
                .await
                .map_err(DrishtiError::config)?
        };

        Self::from_parts(secret, config)
    }

    pub fn coordinator(&self) -> &Arc<ResponseCoordinator> {
        &self.coordinator
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn pacer(&self) -> TypingPacer {
        self.pacer
    }

    pub fn is_configured(&self) -> bool {
        self.coordinator.is_configured()
    }

    /// Starts a fresh session sharing this engine's coordinator.
    pub fn build_session(&self) -> ChatSession {
        ChatSession::new(self.coordinator.clone(), self.pacer)
    }
}
