//! Chat session use case.
//!
//! A `ChatSession` owns the visible turn list and the provider history for
//! one conversation. Only one message may be in flight at a time, and a
//! reply that arrives after the session was reset is dropped.

use drishti_core::chat::{ConversationHistory, ConversationTurn};
use drishti_interaction::{ResponseCoordinator, ResponseSource, TypingPacer};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("Message is empty")]
    EmptyMessage,

    #[error("A reply is still being prepared")]
    Busy,
}

/// Result of a successful [`ChatSession::send`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Replied {
        reply: ConversationTurn,
        source: ResponseSource,
        notice: Option<String>,
    },
    /// The session was reset while the reply was in flight.
    Discarded,
}

struct SessionState {
    turns: Vec<ConversationTurn>,
    history: ConversationHistory,
    /// Bumped on every reset
    epoch: u64,
}

impl SessionState {
    fn seeded(welcome: &str, epoch: u64) -> Self {
        Self {
            turns: vec![ConversationTurn::assistant(welcome)],
            history: ConversationHistory::new(),
            epoch,
        }
    }
}

/// Clears the busy flag when dropped, including when the `send` future is
/// cancelled mid-flight.
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

pub struct ChatSession {
    coordinator: Arc<ResponseCoordinator>,
    pacer: TypingPacer,
    state: Mutex<SessionState>,
    busy: AtomicBool,
}

impl ChatSession {
    /// Starts a session whose first turn is the mode-dependent welcome.
    pub fn new(coordinator: Arc<ResponseCoordinator>, pacer: TypingPacer) -> Self {
        let state = SessionState::seeded(coordinator.welcome_message(), 0);
        Self {
            coordinator,
            pacer,
            state: Mutex::new(state),
            busy: AtomicBool::new(false),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.coordinator.is_configured()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn coordinator(&self) -> &Arc<ResponseCoordinator> {
        &self.coordinator
    }

    pub async fn turns(&self) -> Vec<ConversationTurn> {
        self.state.lock().await.turns.clone()
    }

    pub async fn history(&self) -> ConversationHistory {
        self.state.lock().await.history.clone()
    }

    /// Sends a user message and waits for the assistant's reply.
    ///
    /// The state lock is not held while the reply is resolved, so `turns()`
    /// and `reset()` stay responsive during a provider call.
    pub async fn send(&self, text: &str) -> Result<SendOutcome, SessionError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SessionError::EmptyMessage);
        }

        let _guard = BusyGuard::acquire(&self.busy).ok_or(SessionError::Busy)?;

        let (epoch, mut history) = {
            let mut state = self.state.lock().await;
            state.turns.push(ConversationTurn::user(text));
            (state.epoch, state.history.clone())
        };

        let resolution = self.coordinator.respond(text, &mut history).await;
        self.pacer.pause(&resolution.reply).await;

        let mut state = self.state.lock().await;
        if state.epoch != epoch {
            tracing::debug!(epoch, current = state.epoch, "discarding reply for a reset session");
            return Ok(SendOutcome::Discarded);
        }

        state.history = history;
        let reply = ConversationTurn::assistant(resolution.reply);
        state.turns.push(reply.clone());

        Ok(SendOutcome::Replied {
            reply,
            source: resolution.source,
            notice: resolution.notice,
        })
    }

    /// Starts a new chat: clears turns and history and re-seeds the welcome.
    pub async fn reset(&self) {
        let mut state = self.state.lock().await;
        let epoch = state.epoch.wrapping_add(1);
        *state = SessionState::seeded(self.coordinator.welcome_message(), epoch);
        tracing::info!(epoch, "chat session reset");
    }
}

impl std::fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("coordinator", &self.coordinator)
            .field("busy", &self.is_busy())
            .finish_non_exhaustive()
    }
}
