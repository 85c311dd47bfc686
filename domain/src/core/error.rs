//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("Temperature must be between 0.0 and 1.0, got {0}")]
    InvalidTemperature(f32),

    #[error("API token is empty")]
    EmptyApiToken,

    #[error("Word count {value} is not one of {min}..={max} in steps of {step}")]
    InvalidWordCount {
        value: u32,
        min: u32,
        max: u32,
        step: u32,
    },
}
