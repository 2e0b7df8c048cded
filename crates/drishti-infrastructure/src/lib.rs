pub mod config_service;
pub mod paths;
pub mod secret_service;
pub mod transcript_store;

pub use config_service::ConfigService;
pub use paths::DrishtiPaths;
pub use secret_service::SecretServiceImpl;
pub use transcript_store::TranscriptStore;
