//! Personality touch-ups for provider replies.
//!
//! With a configurable probability, a reply that mentions a themed keyword
//! and has no exclamation mark gets its first sentence-ending period
//! replaced by an exclamation and a matching emoji. Periods inside emails,
//! decimals and URLs are never touched.
//!
//! The random draw comes from an injected [`DecisionSource`] so both
//! branches can be forced in tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Default probability of applying a touch-up.
pub const DEFAULT_PERSONALITY_PROBABILITY: f64 = 0.3;

/// Keyword groups checked in order; the first group present picks the emoji.
const THEMES: &[(&[&str], &str)] = &[
    (&["detect", "accura"], "🎯"),
    (&["demo", "try"], "🚀"),
    (&["contact", "reach"], "📞"),
];

/// Source of yes/no decisions.
pub trait DecisionSource: Send {
    /// Returns true with the given probability.
    fn chance(&mut self, probability: f64) -> bool;
}

/// Decisions drawn from a seedable RNG.
pub struct RandomDecision {
    rng: StdRng,
}

impl RandomDecision {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl DecisionSource for RandomDecision {
    fn chance(&mut self, probability: f64) -> bool {
        // gen_bool panics on NaN
        if !probability.is_finite() {
            return false;
        }
        self.rng.gen_bool(probability.clamp(0.0, 1.0))
    }
}

/// Always answers the same way.
#[derive(Debug, Clone, Copy)]
pub struct FixedDecision(pub bool);

impl DecisionSource for FixedDecision {
    fn chance(&mut self, _probability: f64) -> bool {
        self.0
    }
}

pub struct PersonalityShaper {
    probability: f64,
    source: Mutex<Box<dyn DecisionSource>>,
}

impl PersonalityShaper {
    pub fn new(probability: f64, source: Box<dyn DecisionSource>) -> Self {
        Self {
            probability,
            source: Mutex::new(source),
        }
    }

    /// Shaper using an entropy-seeded RNG.
    pub fn random(probability: f64) -> Self {
        Self::new(probability, Box::new(RandomDecision::from_entropy()))
    }

    /// Shaper that never touches replies.
    pub fn disabled() -> Self {
        Self::new(0.0, Box::new(FixedDecision(false)))
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn shape(&self, reply: &str) -> String {
        if reply.contains('!') {
            return reply.to_string();
        }
        let Some(period) = sentence_end(reply) else {
            return reply.to_string();
        };

        let lower = reply.to_lowercase();
        let Some(emoji) = THEMES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|keyword| lower.contains(keyword)))
            .map(|(_, emoji)| *emoji)
        else {
            return reply.to_string();
        };

        let apply = match self.source.lock() {
            Ok(mut source) => source.chance(self.probability),
            // A poisoned source only loses the touch-up
            Err(_) => false,
        };

        if apply {
            format!("{}! {emoji}{}", &reply[..period], &reply[period + 1..])
        } else {
            reply.to_string()
        }
    }
}

/// Byte offset of the first `.` followed by whitespace or the end of the
/// reply.
fn sentence_end(reply: &str) -> Option<usize> {
    let mut chars = reply.char_indices().peekable();
    while let Some((idx, c)) = chars.next() {
        if c == '.' && chars.peek().is_none_or(|&(_, next)| next.is_whitespace()) {
            return Some(idx);
        }
    }
    None
}

impl Default for PersonalityShaper {
    fn default() -> Self {
        Self::random(DEFAULT_PERSONALITY_PROBABILITY)
    }
}

impl std::fmt::Debug for PersonalityShaper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersonalityShaper")
            .field("probability", &self.probability)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn always() -> PersonalityShaper {
        PersonalityShaper::new(1.0, Box::new(FixedDecision(true)))
    }

    #[test]
    fn test_forced_touch_up_replaces_first_period() {
        let reply = "Our detection is very precise. It works day and night.";
        assert_eq!(
            always().shape(reply),
            "Our detection is very precise! 🎯 It works day and night."
        );
    }

    #[test]
    fn test_theme_order() {
        assert_eq!(always().shape("Book a demo. Or contact us."), "Book a demo! 🚀 Or contact us.");
        assert_eq!(always().shape("Reach our team today."), "Reach our team today! 📞");
    }

    #[test]
    fn test_declined_draw_leaves_reply_unchanged() {
        let shaper = PersonalityShaper::new(0.3, Box::new(FixedDecision(false)));
        let reply = "Our detection is very precise.";
        assert_eq!(shaper.shape(reply), reply);
    }

    #[test]
    fn test_existing_exclamation_is_left_alone() {
        let reply = "Detection is great! It is accurate.";
        assert_eq!(always().shape(reply), reply);
    }

    #[test]
    fn test_no_theme_keyword_is_left_alone() {
        let reply = "We cover highways and city streets.";
        assert_eq!(always().shape(reply), reply);
    }

    #[test]
    fn test_no_period_is_left_alone() {
        let reply = "Happy to arrange a demo";
        assert_eq!(always().shape(reply), reply);
    }

    #[test]
    fn test_email_and_decimal_periods_are_kept() {
        assert_eq!(
            always().shape("You can contact info@ynmdrishti.com for details."),
            "You can contact info@ynmdrishti.com for details! 📞"
        );
        assert_eq!(
            always().shape("Detection accuracy is 95.5% on highways. Ask us more."),
            "Detection accuracy is 95.5% on highways! 🎯 Ask us more."
        );
    }

    #[test]
    fn test_no_sentence_end_is_left_alone() {
        let reply = "Email contact@ynmdrishti.com";
        assert_eq!(always().shape(reply), reply);
        assert_eq!(sentence_end("v1.2 and www.ynmdrishti.com"), None);
        assert_eq!(sentence_end("Done.\nNext"), Some(4));
    }

    #[test]
    fn test_disabled_shaper() {
        let reply = "Try the demo.";
        assert_eq!(PersonalityShaper::disabled().shape(reply), reply);
    }

    #[test]
    fn test_seeded_source_is_deterministic() {
        let mut first = RandomDecision::seeded(7);
        let mut second = RandomDecision::seeded(7);
        let a: Vec<bool> = (0..16).map(|_| first.chance(0.3)).collect();
        let b: Vec<bool> = (0..16).map(|_| second.chance(0.3)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_probability_bounds() {
        let mut source = RandomDecision::seeded(1);
        assert!(!source.chance(0.0));
        assert!(source.chance(1.0));
        assert!(source.chance(5.0));
    }

    #[test]
    fn test_non_finite_probability_never_applies() {
        let mut source = RandomDecision::seeded(1);
        assert!(!source.chance(f64::NAN));
        assert!(!source.chance(f64::INFINITY));

        let shaper = PersonalityShaper::random(f64::NAN);
        let reply = "Our detection is precise.";
        assert_eq!(shaper.shape(reply), reply);
        assert_eq!(shaper.shape(reply), reply);
    }
}
