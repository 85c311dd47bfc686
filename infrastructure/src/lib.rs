//! Infrastructure layer for blogsmith
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod huggingface;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, DEFAULT_API_TOKEN_ENV, FileConfig, FileGenerationConfig,
    FileLoggingConfig, FileModelConfig, FileServerConfig,
};
pub use huggingface::{HuggingFaceError, HuggingFaceGateway, HuggingFaceOptions};
pub use logging::JsonlGenerationLogger;
