pub mod chat;
pub mod config;
pub mod error;
pub mod intent;
pub mod knowledge;
pub mod provider;
pub mod secret;

// Re-export common error type
pub use error::DrishtiError;
