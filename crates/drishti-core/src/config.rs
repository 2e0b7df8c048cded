//! Configuration types.
//!
//! `SecretConfig` holds the provider credential (`secret.json`), while
//! `EngineConfig` holds the tunable engine behaviour (`config.toml`). Every
//! engine field has a default so a missing or partial file is valid.

use crate::provider::GenerationConfig;
use serde::{Deserialize, Serialize};

/// The documented placeholder value shipped in example configuration.
///
/// A credential equal to this value means "not configured".
pub const PLACEHOLDER_API_KEY: &str = "your_gemini_api_key_here";

/// Returns true when `key` can be used to call the provider.
pub fn is_usable_api_key(key: &str) -> bool {
    let key = key.trim();
    !key.is_empty() && key != PLACEHOLDER_API_KEY
}

/// Root structure of `secret.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretConfig {
    #[serde(default)]
    pub gemini: Option<GeminiConfig>,
}

impl SecretConfig {
    /// The Gemini configuration, if its key is usable.
    pub fn usable_gemini(&self) -> Option<&GeminiConfig> {
        self.gemini
            .as_ref()
            .filter(|config| is_usable_api_key(&config.api_key))
    }
}

/// Gemini API configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeminiConfig {
    pub api_key: String,
    #[serde(default)]
    pub model_name: Option<String>,
}

/// Typing-indicator pacing applied before a reply is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    pub enabled: bool,
    pub base_ms: u64,
    pub per_char_ms: u64,
    /// Hard cap on the delay
    pub max_ms: u64,
}

impl PacingConfig {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_ms: 400,
            per_char_ms: 12,
            max_ms: 2000,
        }
    }
}

/// Root structure of `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of most recent exchanges forwarded to the provider.
    /// `None` forwards the whole session.
    pub history_window: Option<usize>,
    /// Probability of the personality touch-up on provider replies.
    pub personality_probability: f64,
    pub generation: GenerationConfig,
    pub pacing: PacingConfig,
    pub request_timeout_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_window: Some(10),
            personality_probability: 0.3,
            generation: GenerationConfig::default(),
            pacing: PacingConfig::default(),
            request_timeout_secs: 30,
        }
    }
}
