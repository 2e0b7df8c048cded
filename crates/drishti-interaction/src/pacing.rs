//! Typing-indicator pacing.
//!
//! Replies are held back for a short delay proportional to their length so
//! the typing indicator reads naturally. The delay is always capped.

use drishti_core::config::PacingConfig;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct TypingPacer {
    config: PacingConfig,
}

impl TypingPacer {
    pub fn new(config: PacingConfig) -> Self {
        Self { config }
    }

    /// A pacer that never waits.
    pub fn instant() -> Self {
        Self::new(PacingConfig::disabled())
    }

    pub fn delay_for(&self, reply: &str) -> Duration {
        if !self.config.enabled {
            return Duration::ZERO;
        }
        let chars = reply.chars().count() as u64;
        let millis = self
            .config
            .base_ms
            .saturating_add(self.config.per_char_ms.saturating_mul(chars))
            .min(self.config.max_ms);
        Duration::from_millis(millis)
    }

    pub async fn pause(&self, reply: &str) {
        let delay = self.delay_for(reply);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl From<PacingConfig> for TypingPacer {
    fn from(config: PacingConfig) -> Self {
        Self::new(config)
    }
}
