//! Application layer for Drishti.
//!
//! Use cases built on the response engine: chat sessions, transcript export
//! and engine bootstrap from on-disk configuration.

pub mod bootstrap;
pub mod chat_session;
pub mod transcript;

pub use bootstrap::EngineBootstrap;
pub use chat_session::{ChatSession, SendOutcome, SessionError};
pub use transcript::{render_transcript, transcript_file_name};
