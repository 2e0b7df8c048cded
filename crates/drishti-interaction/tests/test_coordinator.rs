use async_trait::async_trait;
use drishti_core::chat::{ConversationHistory, HistoryRole};
use drishti_core::intent::IntentLabel;
use drishti_core::knowledge::KnowledgeBase;
use drishti_core::provider::{ProviderError, ProviderRequest, ResponseProvider};
use drishti_interaction::coordinator::{FALLBACK_NOTICE, LOCAL_WELCOME, PROVIDER_WELCOME};
use drishti_interaction::{
    KnowledgeResolver, PersonalityShaper, ProviderMode, ResponseCoordinator, ResponseSource,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Provider that echoes the question and counts calls.
#[derive(Default)]
struct EchoProvider {
    calls: AtomicUsize,
}

#[async_trait]
impl ResponseProvider for EchoProvider {
    fn name(&self) -> &str {
        "echo"
    }

    async fn generate(&self, request: ProviderRequest) -> Result<String, ProviderError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("Answer {n} to: {}", request.message))
    }
}

/// Provider that always fails.
#[derive(Default)]
struct FailingProvider {
    calls: AtomicUsize,
}

#[async_trait]
impl ResponseProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    async fn generate(&self, _request: ProviderRequest) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ProviderError::Http {
            status_code: 503,
            message: "UNAVAILABLE: overloaded".to_string(),
            is_retryable: true,
            retry_after: None,
        })
    }
}

fn configured(provider: Arc<dyn ResponseProvider>) -> ResponseCoordinator {
    ResponseCoordinator::new(ProviderMode::Configured(provider), KnowledgeBase::builtin())
        .expect("coordinator should build")
        .with_shaper(PersonalityShaper::disabled())
}

#[tokio::test]
async fn test_short_circuit_labels_never_call_provider() {
    let provider = Arc::new(EchoProvider::default());
    let coordinator = configured(provider.clone());
    let mut history = ConversationHistory::new();

    let cases = [
        ("hi", IntentLabel::Greeting),
        ("Good evening!", IntentLabel::Greeting),
        ("thanks a lot", IntentLabel::Thanks),
        ("bye", IntentLabel::Farewell),
        ("you are so smart", IntentLabel::EasterEgg),
        ("what is the capital of peru", IntentLabel::OffTopic),
    ];

    for (message, label) in cases {
        let resolution = coordinator.respond(message, &mut history).await;
        assert_eq!(resolution.source, ResponseSource::ShortCircuit(label), "{message}");
    }

    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    assert!(history.is_empty());
}

#[tokio::test]
async fn test_history_has_two_entries_per_provider_turn() {
    let provider = Arc::new(EchoProvider::default());
    let coordinator = configured(provider.clone());
    let mut history = ConversationHistory::new();

    let questions = [
        "What is YNM Drishti?",
        "How accurate is the detection?",
        "Which cities do you cover?",
        "Do you integrate with GIS tools?",
    ];
    for question in questions {
        coordinator.respond(question, &mut history).await;
    }

    assert_eq!(history.len(), 2 * questions.len());
    assert!(history.is_well_formed());
    for (i, question) in questions.iter().enumerate() {
        let user = &history.entries()[2 * i];
        let model = &history.entries()[2 * i + 1];
        assert_eq!(user.role, HistoryRole::User);
        assert_eq!(&user.content, question);
        assert_eq!(model.role, HistoryRole::Model);
        assert_eq!(model.content, format!("Answer {i} to: {question}"));
    }
}

#[tokio::test]
async fn test_failing_provider_matches_local_resolver() {
    let provider = Arc::new(FailingProvider::default());
    let coordinator = configured(provider.clone());
    let resolver = KnowledgeResolver::default();
    let mut history = ConversationHistory::new();

    let questions = [
        "What is YNM Drishti?",
        "How accurate is the detection?",
        "Can I book a demo?",
        "Tell me about the weather on roads",
        "something completely unrelated",
    ];

    for question in questions {
        let resolution = coordinator.respond(question, &mut history).await;
        assert_eq!(resolution.source, ResponseSource::LocalFallback);
        assert_eq!(resolution.reply, resolver.resolve(question), "{question}");
        assert_eq!(resolution.notice.as_deref(), Some(FALLBACK_NOTICE));
    }

    assert_eq!(provider.calls.load(Ordering::SeqCst), questions.len());
    assert!(history.is_empty());
}

#[tokio::test]
async fn test_local_only_mode_scenario() {
    let coordinator =
        ResponseCoordinator::new(ProviderMode::Unconfigured, KnowledgeBase::builtin()).unwrap();
    let mut history = ConversationHistory::new();

    assert_eq!(coordinator.welcome_message(), LOCAL_WELCOME);
    assert!(!coordinator.is_configured());

    let reply = coordinator
        .get_response("How accurate is the detection?", &mut history)
        .await;
    assert_eq!(reply, KnowledgeBase::builtin().get(2).unwrap().answer);
}

#[tokio::test]
async fn test_configured_mode_welcome() {
    let coordinator = configured(Arc::new(EchoProvider::default()));
    assert_eq!(coordinator.welcome_message(), PROVIDER_WELCOME);
}
