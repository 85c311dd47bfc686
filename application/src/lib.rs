//! Application layer for blogsmith
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ExecutionParams;
pub use ports::{
    generation_logger::{GenerationEvent, GenerationLogger, NoGenerationLogger},
    llm_gateway::{GatewayError, LlmGateway},
};
pub use use_cases::generate_post::{GeneratePostInput, GeneratePostUseCase};
pub use use_cases::shared::GenerationError;
pub use use_cases::suggest_titles::SuggestTitlesUseCase;
