//! Chat domain module.
//!
//! This module contains the conversation types shared by the engine and the
//! session layer.
//!
//! # Module Structure
//!
//! - `turn`: Rendered conversation turns (`ConversationTurn`, `Speaker`)
//! - `history`: Provider-facing history (`ConversationHistory`, `HistoryEntry`, `HistoryRole`)
//!
//! # Usage
//!
//! ```ignore
//! use drishti_core::chat::{ConversationTurn, Speaker};
//! use drishti_core::chat::{ConversationHistory, HistoryEntry, HistoryRole};
//! ```

mod history;
mod turn;

// Re-export public API
pub use history::{ConversationHistory, HistoryEntry, HistoryRole};
pub use turn::{ConversationTurn, Speaker};
