//! Configuration value objects for the domain layer
//!
//! These are domain concepts related to configuration that are
//! used across multiple layers.

pub mod model_config;
pub mod validation;

pub use model_config::{ApiToken, DEFAULT_TEMPERATURE, ModelConfig};
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
