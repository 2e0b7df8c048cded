//! Provider-facing conversation history.
//!
//! `ConversationHistory` mirrors the accepted exchanges of a session in the
//! shape the generative provider expects (`user` / `model` roles). Entries are
//! only ever appended in pairs, so outside an in-flight request the length is
//! even and the first entry is always a user entry.

use serde::{Deserialize, Serialize};

/// Role of a history entry, using the provider's wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryRole {
    User,
    Model,
}

impl HistoryRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryRole::User => "user",
            HistoryRole::Model => "model",
        }
    }
}

/// One `{ role, content }` pair forwarded to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: HistoryRole,
    pub content: String,
}

impl HistoryEntry {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: HistoryRole::User,
            content: content.into(),
        }
    }

    pub fn model(content: impl Into<String>) -> Self {
        Self {
            role: HistoryRole::Model,
            content: content.into(),
        }
    }
}

/// Append-only list of user/model exchanges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationHistory {
    entries: Vec<HistoryEntry>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a completed exchange.
    pub fn push_exchange(&mut self, user: impl Into<String>, model: impl Into<String>) {
        self.entries.push(HistoryEntry::user(user));
        self.entries.push(HistoryEntry::model(model));
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of completed user/model exchanges.
    pub fn exchanges(&self) -> usize {
        self.entries.len() / 2
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the tail of the history that fits in `max_exchanges` whole
    /// exchanges, or everything when no limit is set.
    ///
    /// The returned slice always starts on a user entry.
    pub fn window(&self, max_exchanges: Option<usize>) -> &[HistoryEntry] {
        let Some(max) = max_exchanges else {
            return &self.entries;
        };
        let len = self.entries.len();
        let mut start = len - max.saturating_mul(2).min(len);
        // Align to an exchange boundary
        if start % 2 == 1 {
            start += 1;
        }
        &self.entries[start.min(len)..]
    }

    /// True when the history has even length and strictly alternates
    /// user/model starting with user.
    pub fn is_well_formed(&self) -> bool {
        self.entries.len() % 2 == 0
            && self.entries.iter().enumerate().all(|(i, entry)| {
                let expected = if i % 2 == 0 {
                    HistoryRole::User
                } else {
                    HistoryRole::Model
                };
                entry.role == expected
            })
    }
}
