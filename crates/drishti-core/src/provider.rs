//! Contract for the external generative-answer provider.
//!
//! The engine treats the provider as unreliable: every failure is reported
//! through [`ProviderError`] and recovered by the caller.

use crate::chat::HistoryEntry;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Sampling and size bounds sent with every provider request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub max_output_tokens: u32,
    pub temperature: f32,
    /// Nucleus-sampling threshold
    pub top_p: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_output_tokens: 500,
            temperature: 0.7,
            top_p: 0.9,
        }
    }
}

/// Everything the provider needs for one completion.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRequest {
    pub system_instruction: String,
    /// Prior turns, oldest first
    pub history: Vec<HistoryEntry>,
    pub message: String,
    pub generation: GenerationConfig,
}

/// Failures raised by a provider call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// The request never produced an HTTP response (connect, timeout, TLS).
    #[error("request failed: {message}")]
    Request { message: String, is_retryable: bool },

    /// The provider answered with a non-success status.
    #[error("provider returned status {status_code}: {message}")]
    Http {
        status_code: u16,
        message: String,
        is_retryable: bool,
        retry_after: Option<Duration>,
    },

    /// The response contained no text.
    #[error("provider returned no text")]
    EmptyResponse,

    /// The response body could not be decoded.
    #[error("malformed provider response: {0}")]
    Malformed(String),
}

impl ProviderError {
    pub fn is_retryable(&self) -> bool {
        match self {
            ProviderError::Request { is_retryable, .. } => *is_retryable,
            ProviderError::Http { is_retryable, .. } => *is_retryable,
            ProviderError::EmptyResponse | ProviderError::Malformed(_) => false,
        }
    }
}

/// A generative model that turns a request into a single text completion.
#[async_trait]
pub trait ResponseProvider: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    async fn generate(&self, request: ProviderRequest) -> Result<String, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_defaults() {
        let config = GenerationConfig::default();
        assert_eq!(config.max_output_tokens, 500);
        assert!((config.temperature - 0.7).abs() < f32::EPSILON);
        assert!((config.top_p - 0.9).abs() < f32::EPSILON);
    }

    #[test]
    fn test_retryable_classification() {
        let throttled = ProviderError::Http {
            status_code: 429,
            message: "quota".into(),
            is_retryable: true,
            retry_after: Some(Duration::from_secs(3)),
        };
        assert!(throttled.is_retryable());
        assert!(!ProviderError::EmptyResponse.is_retryable());
        assert!(!ProviderError::Malformed("eof".into()).is_retryable());
    }

    #[test]
    fn test_error_messages() {
        let err = ProviderError::Request {
            message: "connection refused".into(),
            is_retryable: true,
        };
        assert_eq!(err.to_string(), "request failed: connection refused");
    }
}
