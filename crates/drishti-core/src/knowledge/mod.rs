//! Knowledge base module.
//!
//! The knowledge base is static data loaded once and never mutated. It is the
//! search space of the local resolver and part of the provider's context.

mod data;
mod model;

pub use model::{KnowledgeBase, KnowledgeEntry, ScoredMatch};
