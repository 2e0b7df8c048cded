//! Delegated response coordinator.
//!
//! For every message the coordinator runs, in order:
//!
//! 1. the intent classifier, answering greetings, thanks, farewells and
//!    easter eggs with their fixed lines;
//! 2. the off-topic refusal, which is never forwarded to the provider;
//! 3. the generative provider for domain questions, when one is configured,
//!    falling back to the local knowledge resolver on any failure;
//! 4. the local knowledge resolver when no provider is configured or the
//!    message is blank.
//!
//! The caller owns the [`ConversationHistory`]; it is only appended to after a
//! successful provider reply.

use crate::classifier::{IntentClassifier, canned_reply};
use crate::personality::PersonalityShaper;
use crate::prompt::build_system_instruction;
use crate::resolver::KnowledgeResolver;
use drishti_core::DrishtiError;
use drishti_core::chat::ConversationHistory;
use drishti_core::intent::IntentLabel;
use drishti_core::knowledge::KnowledgeBase;
use drishti_core::provider::{GenerationConfig, ProviderRequest, ResponseProvider};
use std::sync::Arc;

pub const PROVIDER_WELCOME: &str = "Hi there! 👋 I'm Drishti's AI assistant. Ask me anything about AI-powered road monitoring, pothole detection, pricing or how to get a demo.";

pub const LOCAL_WELCOME: &str = "Hi there! 👋 I'm Drishti's assistant. I can answer common questions about YNM Drishti, our pothole detection, pricing and demos. Pick a question from the FAQ or type your own!";

/// Shown alongside a fallback answer when the provider call failed.
pub const FALLBACK_NOTICE: &str =
    "The AI assistant is briefly unavailable, so this answer comes from our FAQ.";

/// Whether a generative provider is available for this session.
#[derive(Clone)]
pub enum ProviderMode {
    Configured(Arc<dyn ResponseProvider>),
    Unconfigured,
}

impl ProviderMode {
    pub fn is_configured(&self) -> bool {
        matches!(self, ProviderMode::Configured(_))
    }
}

impl std::fmt::Debug for ProviderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderMode::Configured(provider) => {
                f.debug_tuple("Configured").field(&provider.name()).finish()
            }
            ProviderMode::Unconfigured => f.write_str("Unconfigured"),
        }
    }
}

/// Where a reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseSource {
    /// Fixed line chosen by the classifier.
    ShortCircuit(IntentLabel),
    /// Generated by the provider.
    Provider,
    /// Knowledge base answer in local-only mode.
    LocalKnowledge,
    /// Knowledge base answer after a provider failure.
    LocalFallback,
}

/// The outcome of one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub reply: String,
    pub source: ResponseSource,
    /// Transient, dismissible notice for the UI
    pub notice: Option<String>,
}

impl Resolution {
    fn new(reply: impl Into<String>, source: ResponseSource) -> Self {
        Self {
            reply: reply.into(),
            source,
            notice: None,
        }
    }
}

#[derive(Debug)]
pub struct ResponseCoordinator {
    mode: ProviderMode,
    classifier: IntentClassifier,
    resolver: KnowledgeResolver,
    shaper: PersonalityShaper,
    system_instruction: String,
    history_window: Option<usize>,
    generation: GenerationConfig,
}

impl ResponseCoordinator {
    /// Creates a coordinator over `knowledge`, rendering the provider's
    /// system instruction once.
    pub fn new(mode: ProviderMode, knowledge: KnowledgeBase) -> Result<Self, DrishtiError> {
        let system_instruction = build_system_instruction(&knowledge)?;
        tracing::info!(
            configured = mode.is_configured(),
            entries = knowledge.len(),
            "response coordinator ready"
        );
        Ok(Self {
            mode,
            classifier: IntentClassifier::new(),
            resolver: KnowledgeResolver::new(knowledge),
            shaper: PersonalityShaper::default(),
            system_instruction,
            history_window: None,
            generation: GenerationConfig::default(),
        })
    }

    pub fn with_classifier(mut self, classifier: IntentClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_shaper(mut self, shaper: PersonalityShaper) -> Self {
        self.shaper = shaper;
        self
    }

    /// Limits the history forwarded to the provider to the last
    /// `max_exchanges` exchanges. `None` forwards everything.
    pub fn with_history_window(mut self, max_exchanges: Option<usize>) -> Self {
        self.history_window = max_exchanges;
        self
    }

    pub fn with_generation(mut self, generation: GenerationConfig) -> Self {
        self.generation = generation;
        self
    }

    pub fn is_configured(&self) -> bool {
        self.mode.is_configured()
    }

    pub fn classifier(&self) -> &IntentClassifier {
        &self.classifier
    }

    pub fn resolver(&self) -> &KnowledgeResolver {
        &self.resolver
    }

    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    /// The first assistant message of a session; differs by mode.
    pub fn welcome_message(&self) -> &'static str {
        if self.is_configured() {
            PROVIDER_WELCOME
        } else {
            LOCAL_WELCOME
        }
    }

    /// Resolves a message to a reply string.
    pub async fn get_response(&self, message: &str, history: &mut ConversationHistory) -> String {
        self.respond(message, history).await.reply
    }

    /// Resolves a message, reporting where the reply came from.
    ///
    /// Never fails: provider errors are logged and answered locally.
    pub async fn respond(&self, message: &str, history: &mut ConversationHistory) -> Resolution {
        let intent = self.classifier.classify(message);

        if let Some(line) = canned_reply(&intent) {
            tracing::debug!(label = %intent.label, "short-circuit reply");
            return Resolution::new(line, ResponseSource::ShortCircuit(intent.label));
        }

        let provider = match &self.mode {
            ProviderMode::Configured(provider) if !message.trim().is_empty() => provider,
            _ => {
                return Resolution::new(
                    self.resolver.resolve(message),
                    ResponseSource::LocalKnowledge,
                );
            }
        };

        let request = ProviderRequest {
            system_instruction: self.system_instruction.clone(),
            history: history.window(self.history_window).to_vec(),
            message: message.to_string(),
            generation: self.generation,
        };

        match provider.generate(request).await {
            Ok(reply) => {
                let shaped = self.shaper.shape(&reply);
                history.push_exchange(message, shaped.clone());
                tracing::debug!(
                    provider = provider.name(),
                    exchanges = history.exchanges(),
                    "provider reply accepted"
                );
                Resolution::new(shaped, ResponseSource::Provider)
            }
            Err(err) => {
                tracing::warn!(
                    provider = provider.name(),
                    retryable = err.is_retryable(),
                    "provider call failed, answering locally: {}",
                    err
                );
                Resolution {
                    reply: self.resolver.resolve(message),
                    source: ResponseSource::LocalFallback,
                    notice: Some(FALLBACK_NOTICE.to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{GREETING_REPLY, OFF_TOPIC_REFUSAL};
    use crate::resolver::GENERIC_REDIRECT;
    use crate::personality::FixedDecision;
    use async_trait::async_trait;
    use drishti_core::provider::ProviderError;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Records every request and answers with a fixed reply.
    #[derive(Default)]
    struct RecordingProvider {
        calls: AtomicUsize,
        requests: Mutex<Vec<ProviderRequest>>,
    }

    #[async_trait]
    impl ResponseProvider for RecordingProvider {
        fn name(&self) -> &str {
            "recording"
        }

        async fn generate(&self, request: ProviderRequest) -> Result<String, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.requests.lock().unwrap().push(request);
            Ok("Our detection runs on every frame. Ask me more".to_string())
        }
    }

    fn coordinator(provider: Arc<RecordingProvider>) -> ResponseCoordinator {
        ResponseCoordinator::new(ProviderMode::Configured(provider), KnowledgeBase::builtin())
            .unwrap()
            .with_shaper(PersonalityShaper::disabled())
    }

    #[tokio::test]
    async fn test_greeting_never_reaches_provider() {
        let provider = Arc::new(RecordingProvider::default());
        let coordinator = coordinator(provider.clone());
        let mut history = ConversationHistory::new();

        let resolution = coordinator.respond("hello", &mut history).await;

        assert_eq!(resolution.reply, GREETING_REPLY);
        assert_eq!(
            resolution.source,
            ResponseSource::ShortCircuit(IntentLabel::Greeting)
        );
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn test_off_topic_is_refused_locally() {
        let provider = Arc::new(RecordingProvider::default());
        let coordinator = coordinator(provider.clone());
        let mut history = ConversationHistory::new();

        assert_eq!(
            coordinator.get_response("2+2", &mut history).await,
            OFF_TOPIC_REFUSAL
        );
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_domain_question_uses_provider_and_records_history() {
        let provider = Arc::new(RecordingProvider::default());
        let coordinator = coordinator(provider.clone());
        let mut history = ConversationHistory::new();

        let resolution = coordinator
            .respond("How does detection work at night?", &mut history)
            .await;

        assert_eq!(resolution.source, ResponseSource::Provider);
        assert!(resolution.notice.is_none());
        assert_eq!(history.len(), 2);

        let requests = provider.requests.lock().unwrap();
        assert_eq!(requests[0].message, "How does detection work at night?");
        assert!(requests[0].history.is_empty());
        assert_eq!(requests[0].system_instruction, coordinator.system_instruction());
    }

    #[tokio::test]
    async fn test_history_window_limits_forwarded_turns() {
        let provider = Arc::new(RecordingProvider::default());
        let coordinator = coordinator(provider.clone()).with_history_window(Some(1));
        let mut history = ConversationHistory::new();

        for question in ["pricing plans?", "api docs?", "detection speed?"] {
            coordinator.respond(question, &mut history).await;
        }

        assert_eq!(history.len(), 6);
        let requests = provider.requests.lock().unwrap();
        assert_eq!(requests[2].history.len(), 2);
        assert_eq!(requests[2].history[0].content, "api docs?");
    }

    #[tokio::test]
    async fn test_personality_applies_to_provider_reply() {
        let provider = Arc::new(RecordingProvider::default());
        let coordinator = coordinator(provider)
            .with_shaper(PersonalityShaper::new(1.0, Box::new(FixedDecision(true))));
        let mut history = ConversationHistory::new();

        let reply = coordinator.get_response("detection at night?", &mut history).await;

        assert_eq!(reply, "Our detection runs on every frame! 🎯 Ask me more");
        assert_eq!(history.entries()[1].content, reply);
    }

    #[tokio::test]
    async fn test_empty_message_never_reaches_provider() {
        let provider = Arc::new(RecordingProvider::default());
        let coordinator = coordinator(provider.clone());
        let mut history = ConversationHistory::new();

        for message in ["", "   "] {
            let resolution = coordinator.respond(message, &mut history).await;
            assert_eq!(resolution.reply, GENERIC_REDIRECT);
            assert_eq!(resolution.source, ResponseSource::LocalKnowledge);
        }
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn test_unconfigured_mode_answers_locally() {
        let coordinator =
            ResponseCoordinator::new(ProviderMode::Unconfigured, KnowledgeBase::builtin()).unwrap();
        let mut history = ConversationHistory::new();

        let resolution = coordinator.respond("What is YNM Drishti?", &mut history).await;

        assert_eq!(resolution.source, ResponseSource::LocalKnowledge);
        assert_eq!(resolution.reply, KnowledgeBase::builtin().get(1).unwrap().answer);
        assert!(history.is_empty());
        assert_eq!(coordinator.welcome_message(), LOCAL_WELCOME);
    }

    #[test]
    fn test_provider_mode_debug_hides_provider_internals() {
        let mode = ProviderMode::Configured(Arc::new(RecordingProvider::default()));
        assert_eq!(format!("{mode:?}"), "Configured(\"recording\")");
        assert_eq!(format!("{:?}", ProviderMode::Unconfigured), "Unconfigured");
    }
}
