//! LLM Gateway port
//!
//! Defines the interface for communicating with the hosted model.

use async_trait::async_trait;
use blogsmith_domain::Model;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout")]
    Timeout,

    #[error("Empty response from model")]
    EmptyResponse,
}

impl GatewayError {
    /// Whether retrying the same call may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            GatewayError::ConnectionError(_)
                | GatewayError::ServiceUnavailable(_)
                | GatewayError::Timeout
        )
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to the hosted model.
/// Implementations (adapters) live in the infrastructure layer and carry
/// the model id, temperature and auth token they were built with.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// The model this gateway sends prompts to
    fn model(&self) -> &Model;

    /// Send a fully rendered prompt and return the completion text
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError>;
}
