//! Knowledge base domain model.

use serde::Serialize;

/// One static FAQ record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KnowledgeEntry {
    /// Stable identifier; boost rules refer to entries by this id
    pub id: u32,
    pub question: &'static str,
    pub answer: &'static str,
    /// Display hint for the FAQ view (an emoji)
    pub topic_icon: &'static str,
}

/// A knowledge entry paired with its score for one message.
///
/// Only lives for the duration of a single resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMatch<'a> {
    pub entry: &'a KnowledgeEntry,
    pub score: u32,
}

/// Ordered, read-only set of knowledge entries.
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeBase {
    entries: &'static [KnowledgeEntry],
    company_facts: &'static str,
}

impl KnowledgeBase {
    /// Creates a knowledge base over a static table.
    pub const fn new(entries: &'static [KnowledgeEntry], company_facts: &'static str) -> Self {
        Self {
            entries,
            company_facts,
        }
    }

    /// The built-in YNM Drishti FAQ.
    pub const fn builtin() -> Self {
        Self::new(super::data::FAQ_ENTRIES, super::data::COMPANY_FACTS)
    }

    pub fn entries(&self) -> &'static [KnowledgeEntry] {
        self.entries
    }

    pub fn get(&self, id: u32) -> Option<&'static KnowledgeEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Structured company facts forwarded verbatim to the provider.
    pub fn company_facts(&self) -> &'static str {
        self.company_facts
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}
