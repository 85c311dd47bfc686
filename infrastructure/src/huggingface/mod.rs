//! Hugging Face inference adapter
//!
//! Implements the [`LlmGateway`](blogsmith_application::LlmGateway) port
//! against the hosted text-generation API: one POST per prompt, bearer
//! token auth, failures mapped onto [`GatewayError`](blogsmith_application::GatewayError).

pub mod error;
pub mod gateway;
pub mod types;

pub use error::HuggingFaceError;
pub use gateway::{HuggingFaceGateway, HuggingFaceOptions};
