//! Intent labels produced by the classifier.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Category of an inbound chat message.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IntentLabel {
    Greeting,
    Thanks,
    Farewell,
    /// Small talk answered with a scripted line.
    EasterEgg,
    /// General knowledge outside the product domain.
    OffTopic,
    /// Everything else: answered from the knowledge base or the provider.
    DomainQuestion,
}

impl IntentLabel {
    /// Whether a message with this label is answered without consulting the
    /// knowledge base or the provider.
    pub fn short_circuits(&self) -> bool {
        !matches!(self, IntentLabel::DomainQuestion)
    }
}

/// Result of classifying one message.
///
/// `canned` carries the scripted line for easter eggs; it is `None` for every
/// other label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intent {
    pub label: IntentLabel,
    pub canned: Option<&'static str>,
}

impl Intent {
    pub fn new(label: IntentLabel) -> Self {
        Self {
            label,
            canned: None,
        }
    }
}
