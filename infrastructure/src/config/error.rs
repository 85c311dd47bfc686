//! Configuration errors

use blogsmith_domain::DomainError;
use thiserror::Error;

/// Errors that stop the process before it serves anything
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("No API token found: set the {env} environment variable or model.api_token")]
    MissingApiToken { env: String },

    #[error("Invalid model configuration: {0}")]
    InvalidModel(#[from] DomainError),
}
