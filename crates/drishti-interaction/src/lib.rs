//! Response engine for the Drishti chat assistant.
//!
//! - [`classifier`]: ordered rule table mapping messages to intents
//! - [`resolver`]: keyword-scored FAQ matching
//! - [`coordinator`]: ties both to an optional generative provider
//! - [`gemini_api_provider`]: Gemini REST implementation of the provider
//! - [`personality`], [`prompt`], [`pacing`]: reply shaping, provider context
//!   and typing delay

pub mod classifier;
pub mod coordinator;
pub mod gemini_api_provider;
pub mod pacing;
pub mod personality;
pub mod prompt;
pub mod resolver;

pub use classifier::{IntentClassifier, IntentRule};
pub use coordinator::{ProviderMode, Resolution, ResponseCoordinator, ResponseSource};
pub use gemini_api_provider::GeminiApiProvider;
pub use pacing::TypingPacer;
pub use personality::{DecisionSource, FixedDecision, PersonalityShaper, RandomDecision};
pub use resolver::KnowledgeResolver;
