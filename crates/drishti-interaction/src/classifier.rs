//! Intent classifier.
//!
//! Classification is an ordered table of [`IntentRule`]s evaluated against the
//! normalised message; the first rule whose predicate matches decides the
//! label. Small-talk rules sit before the off-topic rule so that a friendly
//! message mentioning a general-knowledge keyword gets the friendly reply.

use drishti_core::intent::{Intent, IntentLabel};
use once_cell::sync::Lazy;
use regex::Regex;

pub const GREETING_REPLY: &str = "Hello! 👋 I'm Drishti's virtual assistant. Ask me anything about AI-powered road monitoring, pothole detection, pricing or booking a demo!";

pub const THANKS_REPLY: &str =
    "You're welcome! 😊 Is there anything else you'd like to know about YNM Drishti?";

pub const FAREWELL_REPLY: &str =
    "Goodbye! 👋 Drive safe, and come back anytime you want to talk about safer roads.";

pub const OFF_TOPIC_REFUSAL: &str = "I'm here to help with questions about YNM Drishti and AI-powered road infrastructure monitoring. 🛣️ I can't help with that topic, but feel free to ask about pothole detection, our technology, pricing or booking a demo!";

/// Used for easter-egg rules declared without their own line.
pub const EASTER_EGG_REPLY: &str = "Ha, love the energy! 😄 Ask me anything about YNM Drishti, pothole detection or booking a demo.";

const GREETINGS: &[&str] = &[
    "hi",
    "hii",
    "hello",
    "hello there",
    "hey",
    "hey there",
    "hola",
    "namaste",
    "yo",
    "greetings",
    "good morning",
    "good afternoon",
    "good evening",
    "good day",
];

const FAREWELLS: &[&str] = &[
    "bye",
    "bye bye",
    "goodbye",
    "see you",
    "see ya",
    "see you later",
    "take care",
    "cya",
    "good night",
];

/// Compared after trailing punctuation is stripped, so "wow!" and "omg!" match.
const EXCLAMATIONS: &[&str] = &["wow", "omg", "whoa", "woah", "lol"];

const GENERAL_KNOWLEDGE_KEYWORDS: &[&str] = &[
    "capital",
    "president",
    "prime minister",
    "weather",
    "joke",
    "sports",
    "cricket",
    "football",
    "movie",
    "song",
    "recipe",
    "math",
    "geography",
    "history",
    "politics",
    "celebrity",
    "bitcoin",
    "horoscope",
    "poem",
];

const DOMAIN_ANCHORS: &[&str] = &[
    "drishti", "road", "pothole", "detect", "api", "demo", "price", "ai",
];

static ARITHMETIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d+\s*[-+*/x×÷^%]\s*\d+").expect("arithmetic pattern is valid")
});

static THANKS_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:thank|thx|appreciate|ty\b)").expect("thanks pattern is valid")
});

/// A single classification rule.
#[derive(Clone, Copy)]
pub struct IntentRule {
    /// Short identifier used in logs and tests
    pub name: &'static str,
    pub label: IntentLabel,
    /// Scripted reply for easter-egg rules
    pub canned: Option<&'static str>,
    /// Receives the trimmed, lower-cased message
    pub matches: fn(&str) -> bool,
}

impl std::fmt::Debug for IntentRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntentRule")
            .field("name", &self.name)
            .field("label", &self.label)
            .finish()
    }
}

/// Strips trailing punctuation and collapses inner whitespace so that
/// "Hello!!" and "good   morning." compare equal to their phrase.
fn phrase(message: &str) -> String {
    message
        .trim_end_matches(|c: char| matches!(c, '!' | '.' | '?' | ',') || c.is_whitespace())
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn contains_any(message: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| message.contains(needle))
}

fn is_greeting(message: &str) -> bool {
    GREETINGS.contains(&phrase(message).as_str())
}

fn is_thanks(message: &str) -> bool {
    THANKS_PREFIX.is_match(message)
}

fn is_farewell(message: &str) -> bool {
    FAREWELLS.contains(&phrase(message).as_str())
}

fn is_love(message: &str) -> bool {
    message.contains("love") && (message.contains("you") || message.contains("drishti"))
}

fn is_praise(message: &str) -> bool {
    contains_any(message, &["awesome", "amazing", "great"])
}

fn is_cool(message: &str) -> bool {
    contains_any(message, &["cool", "nice"])
}

fn is_exclamation(message: &str) -> bool {
    EXCLAMATIONS.contains(&phrase(message).as_str())
}

fn is_smart(message: &str) -> bool {
    contains_any(message, &["smart", "intelligent"])
}

fn is_robot(message: &str) -> bool {
    contains_any(message, &["robot", "human"])
}

fn is_help(message: &str) -> bool {
    message.contains("help")
}

/// Anchors match at the start of a word, so "detection" carries the
/// "detect" anchor while "capital" does not carry "api".
fn has_domain_anchor(message: &str) -> bool {
    message
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| DOMAIN_ANCHORS.iter().any(|anchor| word.starts_with(anchor)))
}

fn is_off_topic(message: &str) -> bool {
    ARITHMETIC.is_match(message)
        || (contains_any(message, GENERAL_KNOWLEDGE_KEYWORDS) && !has_domain_anchor(message))
}

/// The default rule table, in evaluation order.
pub fn default_rules() -> Vec<IntentRule> {
    vec![
        IntentRule {
            name: "greeting",
            label: IntentLabel::Greeting,
            canned: None,
            matches: is_greeting,
        },
        IntentRule {
            name: "thanks",
            label: IntentLabel::Thanks,
            canned: None,
            matches: is_thanks,
        },
        IntentRule {
            name: "farewell",
            label: IntentLabel::Farewell,
            canned: None,
            matches: is_farewell,
        },
        IntentRule {
            name: "love",
            label: IntentLabel::EasterEgg,
            canned: Some(
                "Aww, we love you too! 💙 Now, how can I help you keep your roads pothole-free?",
            ),
            matches: is_love,
        },
        IntentRule {
            name: "praise",
            label: IntentLabel::EasterEgg,
            canned: Some(
                "Thank you! 🌟 We think smooth, safe roads are pretty awesome too. Want to see what Drishti can do for your network?",
            ),
            matches: is_praise,
        },
        IntentRule {
            name: "cool",
            label: IntentLabel::EasterEgg,
            canned: Some(
                "Glad you think so! 😎 Ask me about our detection accuracy, the workflow or a free demo.",
            ),
            matches: is_cool,
        },
        IntentRule {
            name: "exclamation",
            label: IntentLabel::EasterEgg,
            canned: Some(
                "Right?! 🤩 Wait until you see Drishti map every pothole in a city after a single drive.",
            ),
            matches: is_exclamation,
        },
        IntentRule {
            name: "smart",
            label: IntentLabel::EasterEgg,
            canned: Some(
                "I try my best! 🧠 My real talent is spotting potholes, though. What would you like to know about YNM Drishti?",
            ),
            matches: is_smart,
        },
        IntentRule {
            name: "robot",
            label: IntentLabel::EasterEgg,
            canned: Some(
                "I'm Drishti's virtual assistant, an AI built to answer questions about road monitoring. 🤖 The humans on our team are one email away at info@ynmdrishti.com!",
            ),
            matches: is_robot,
        },
        IntentRule {
            name: "help",
            label: IntentLabel::EasterEgg,
            canned: Some(
                "Of course! 🙌 I can tell you what YNM Drishti is, how accurate our detection is, how the workflow runs, pricing, integrations or how to book a demo. What would you like to know?",
            ),
            matches: is_help,
        },
        IntentRule {
            name: "off_topic",
            label: IntentLabel::OffTopic,
            canned: None,
            matches: is_off_topic,
        },
    ]
}

/// Pure, total message classifier.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    rules: Vec<IntentRule>,
}

impl IntentClassifier {
    pub fn new() -> Self {
        Self::with_rules(default_rules())
    }

    /// Creates a classifier over a custom rule table.
    pub fn with_rules(rules: Vec<IntentRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }

    /// Classifies a raw message. Empty input is a domain question.
    pub fn classify(&self, raw: &str) -> Intent {
        let message = raw.trim().to_lowercase();
        if message.is_empty() {
            return Intent::new(IntentLabel::DomainQuestion);
        }

        self.rules
            .iter()
            .find(|rule| (rule.matches)(&message))
            .map(|rule| {
                tracing::debug!(rule = rule.name, label = %rule.label, "intent rule matched");
                Intent {
                    label: rule.label,
                    canned: rule.canned,
                }
            })
            .unwrap_or_else(|| Intent::new(IntentLabel::DomainQuestion))
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// The fixed reply for a short-circuiting intent, or `None` for domain
/// questions.
pub fn canned_reply(intent: &Intent) -> Option<&'static str> {
    match intent.label {
        IntentLabel::Greeting => Some(GREETING_REPLY),
        IntentLabel::Thanks => Some(THANKS_REPLY),
        IntentLabel::Farewell => Some(FAREWELL_REPLY),
        IntentLabel::EasterEgg => Some(intent.canned.unwrap_or(EASTER_EGG_REPLY)),
        IntentLabel::OffTopic => Some(OFF_TOPIC_REFUSAL),
        IntentLabel::DomainQuestion => None,
    }
}
