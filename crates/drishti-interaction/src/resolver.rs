//! Local knowledge resolver.
//!
//! Scores every knowledge entry against the message and answers with the
//! best entry when it clears [`MATCH_THRESHOLD`]. The resolver never fails:
//! anything below the threshold gets [`GENERIC_REDIRECT`].

use drishti_core::knowledge::{KnowledgeBase, KnowledgeEntry, ScoredMatch};

/// Score per message token found in an entry's question.
pub const QUESTION_TOKEN_WEIGHT: u32 = 2;
/// Score per message token found in an entry's answer.
pub const ANSWER_TOKEN_WEIGHT: u32 = 1;
/// Score added when an entry's boost rule fires.
pub const BOOST_WEIGHT: u32 = 5;
/// Minimum score for a confident match.
pub const MATCH_THRESHOLD: u32 = 3;
/// Tokens of this many characters or fewer are ignored.
pub const MIN_TOKEN_CHARS: usize = 2;

pub const GENERIC_REDIRECT: &str = "I'm not sure I have the exact answer to that one, but I'd love to help! 🤔 You can ask me about:\n\
• What YNM Drishti is\n\
• Detection accuracy and speed\n\
• How the workflow works\n\
• API and integrations\n\
• Pricing, ROI and benefits\n\
• Booking a free demo or contacting our team";

/// A keyword group that boosts one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoostRule {
    pub entry_id: u32,
    /// Fires when any trigger starts a word of the lower-cased message
    pub triggers: &'static [&'static str],
}

impl BoostRule {
    fn fires(&self, message: &str) -> bool {
        self.triggers
            .iter()
            .any(|trigger| starts_word(message, trigger))
    }
}

/// True when `needle` occurs in `haystack` at the start of a word, so "api"
/// matches "api" and "apis" but not "rapid".
fn starts_word(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(idx, _)| {
        haystack[..idx]
            .chars()
            .next_back()
            .is_none_or(|prev| !prev.is_alphanumeric())
    })
}

pub const BOOST_RULES: &[BoostRule] = &[
    BoostRule {
        entry_id: 1,
        triggers: &["what is"],
    },
    BoostRule {
        entry_id: 2,
        triggers: &["accuracy", "accurate"],
    },
    BoostRule {
        entry_id: 3,
        triggers: &["demo", "trial", "try it"],
    },
    BoostRule {
        entry_id: 4,
        triggers: &["speed", "fast", "quick", "real-time", "how long"],
    },
    BoostRule {
        entry_id: 5,
        triggers: &["workflow", "how does it work", "process"],
    },
    BoostRule {
        entry_id: 6,
        triggers: &["api", "integrat"],
    },
    BoostRule {
        entry_id: 7,
        triggers: &["industr", "who uses", "sector"],
    },
    BoostRule {
        entry_id: 8,
        triggers: &["roi", "benefit", "save", "cost saving"],
    },
    BoostRule {
        entry_id: 9,
        triggers: &["technology", "tech stack", "model"],
    },
    BoostRule {
        entry_id: 10,
        triggers: &["support", "help desk", "training"],
    },
    BoostRule {
        entry_id: 11,
        triggers: &["contact", "reach", "email", "phone"],
    },
    BoostRule {
        entry_id: 12,
        triggers: &["price", "pricing", "cost", "plan"],
    },
];

/// Keyword-scoring resolver over a [`KnowledgeBase`].
#[derive(Debug, Clone)]
pub struct KnowledgeResolver {
    knowledge: KnowledgeBase,
    boosts: &'static [BoostRule],
}

impl KnowledgeResolver {
    pub fn new(knowledge: KnowledgeBase) -> Self {
        Self {
            knowledge,
            boosts: BOOST_RULES,
        }
    }

    /// Replaces the boost table.
    pub fn with_boosts(mut self, boosts: &'static [BoostRule]) -> Self {
        self.boosts = boosts;
        self
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Answers a message from the knowledge base. Always returns a non-empty
    /// reply.
    pub fn resolve(&self, raw: &str) -> String {
        match self.best_match(raw) {
            Some(found) => {
                tracing::debug!(entry = found.entry.id, score = found.score, "knowledge match");
                found.entry.answer.to_string()
            }
            None => {
                tracing::debug!("no confident knowledge match, using generic redirect");
                GENERIC_REDIRECT.to_string()
            }
        }
    }

    /// The highest-scoring entry if it clears the threshold.
    ///
    /// Ties keep the earliest entry.
    pub fn best_match(&self, raw: &str) -> Option<ScoredMatch<'static>> {
        let mut best: Option<ScoredMatch<'static>> = None;
        for scored in self.score_all(raw) {
            if best.is_none_or(|current| scored.score > current.score) {
                best = Some(scored);
            }
        }
        best.filter(|found| found.score >= MATCH_THRESHOLD)
    }

    /// Scores every entry, in knowledge-base order.
    pub fn score_all(&self, raw: &str) -> Vec<ScoredMatch<'static>> {
        let message = raw.to_lowercase();
        let tokens = tokenize(&message);
        self.knowledge
            .entries()
            .iter()
            .map(|entry| ScoredMatch {
                entry,
                score: self.score_entry(entry, &message, &tokens),
            })
            .collect()
    }

    fn score_entry(&self, entry: &KnowledgeEntry, message: &str, tokens: &[&str]) -> u32 {
        let question = entry.question.to_lowercase();
        let answer = entry.answer.to_lowercase();

        let token_score: u32 = tokens
            .iter()
            .map(|token| {
                let mut score = 0;
                if question.contains(token) {
                    score += QUESTION_TOKEN_WEIGHT;
                }
                if answer.contains(token) {
                    score += ANSWER_TOKEN_WEIGHT;
                }
                score
            })
            .sum();

        // At most one rule exists per entry, so at most one boost applies
        let boost = self
            .boosts
            .iter()
            .find(|rule| rule.entry_id == entry.id)
            .filter(|rule| rule.fires(message))
            .map_or(0, |_| BOOST_WEIGHT);

        token_score + boost
    }
}

impl Default for KnowledgeResolver {
    fn default() -> Self {
        Self::new(KnowledgeBase::builtin())
    }
}

/// Whitespace tokens longer than [`MIN_TOKEN_CHARS`] characters.
fn tokenize(message: &str) -> Vec<&str> {
    message
        .split_whitespace()
        .filter(|token| token.chars().count() > MIN_TOKEN_CHARS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> KnowledgeResolver {
        KnowledgeResolver::default()
    }

    fn answer(id: u32) -> String {
        KnowledgeBase::builtin().get(id).unwrap().answer.to_string()
    }

    #[test]
    fn test_what_is_drishti_returns_first_entry() {
        assert_eq!(resolver().resolve("What is YNM Drishti?"), answer(1));
    }

    #[test]
    fn test_accuracy_question_returns_second_entry() {
        assert_eq!(resolver().resolve("How accurate is the detection?"), answer(2));
    }

    #[test]
    fn test_topic_questions() {
        let resolver = resolver();
        assert_eq!(resolver.resolve("Can I book a demo?"), answer(3));
        assert_eq!(resolver.resolve("Do you have an API for integration?"), answer(6));
        assert_eq!(resolver.resolve("how much does it cost"), answer(12));
        assert_eq!(resolver.resolve("how do I contact your team"), answer(11));
    }

    #[test]
    fn test_unrelated_message_gets_redirect() {
        assert_eq!(resolver().resolve("zzzz qqqq"), GENERIC_REDIRECT);
        assert_eq!(resolver().resolve(""), GENERIC_REDIRECT);
    }

    #[test]
    fn test_short_tokens_only_without_boost_gets_redirect() {
        assert_eq!(resolver().resolve("ok"), GENERIC_REDIRECT);
        assert!(tokenize("ok is it").is_empty());
    }

    #[test]
    fn test_boost_alone_clears_threshold() {
        let scores = resolver().score_all("an api");
        let api = scores.iter().find(|s| s.entry.id == 6).unwrap();
        assert!(api.score >= BOOST_WEIGHT);

        let boost_only = KnowledgeResolver::default().with_boosts(&[BoostRule {
            entry_id: 4,
            triggers: &["qq"],
        }]);
        let found = boost_only.best_match("qq").unwrap();
        assert_eq!(found.entry.id, 4);
        assert_eq!(found.score, BOOST_WEIGHT);
    }

    #[test]
    fn test_ties_keep_earliest_entry() {
        let no_boosts = KnowledgeResolver::default().with_boosts(&[]);
        // entries 1 and 11 both score 3 for "ynm"
        let found = no_boosts.best_match("ynm").unwrap();
        assert_eq!(found.entry.id, 1);
    }

    #[test]
    fn test_score_weights() {
        let no_boosts = KnowledgeResolver::default().with_boosts(&[]);
        let scores = no_boosts.score_all("pothole");
        let second = scores.iter().find(|s| s.entry.id == 2).unwrap();
        // question and answer both contain "pothole"
        assert_eq!(second.score, QUESTION_TOKEN_WEIGHT + ANSWER_TOKEN_WEIGHT);
    }

    #[test]
    fn test_resolve_is_never_empty() {
        for message in ["", "?", "what", "accuracy", "a b c", "🚗🚗🚗"] {
            assert!(!resolver().resolve(message).is_empty());
        }
    }

    #[test]
    fn test_boost_table_triggers() {
        let expected: &[(u32, &[&str])] = &[
            (1, &["what is"]),
            (2, &["accuracy", "accurate"]),
            (3, &["demo", "trial", "try it"]),
            (4, &["speed", "fast", "quick", "real-time", "how long"]),
            (5, &["workflow", "how does it work", "process"]),
            (6, &["api", "integrat"]),
            (7, &["industr", "who uses", "sector"]),
            (8, &["roi", "benefit", "save", "cost saving"]),
            (9, &["technology", "tech stack", "model"]),
            (10, &["support", "help desk", "training"]),
            (11, &["contact", "reach", "email", "phone"]),
            (12, &["price", "pricing", "cost", "plan"]),
        ];
        assert_eq!(BOOST_RULES.len(), expected.len());
        for (rule, (id, triggers)) in BOOST_RULES.iter().zip(expected) {
            assert_eq!(rule.entry_id, *id);
            assert_eq!(rule.triggers, *triggers);
        }
    }

    #[test]
    fn test_boost_triggers_match_word_starts() {
        let rule = |id: u32| BOOST_RULES.iter().find(|r| r.entry_id == id).unwrap();
        assert!(rule(6).fires("is there an api?"));
        assert!(rule(6).fires("do you integrate with gis"));
        assert!(!rule(6).fires("rapid response"));
        assert!(!rule(8).fires("works on android"));
        assert!(!rule(12).fires("explain the results"));
        assert!(rule(12).fires("which plans do you offer"));
        assert!(rule(4).fires("is it real-time"));
    }

    #[test]
    fn test_score_all_covers_every_entry() {
        let resolver = resolver();
        assert_eq!(resolver.score_all("demo").len(), resolver.knowledge().len());
    }
}
