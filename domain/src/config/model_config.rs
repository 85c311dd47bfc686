//! Model configuration.
//!
//! [`ModelConfig`] is built once at startup from the loaded configuration
//! and handed to the gateway constructor. It never changes afterwards.

use crate::core::error::DomainError;
use crate::core::model::Model;

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.6;

/// Bearer token for the hosted inference endpoint.
///
/// `Debug` output is redacted so the token never reaches logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Wrap a token, rejecting blank input.
    pub fn new(token: impl Into<String>) -> Result<Self, DomainError> {
        let token = token.into().trim().to_string();
        if token.is_empty() {
            return Err(DomainError::EmptyApiToken);
        }
        Ok(Self(token))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiToken(***)")
    }
}

/// Model selection and sampling settings for the hosted endpoint.
///
/// # Example
///
/// ```
/// use blogsmith_domain::{ApiToken, Model, ModelConfig};
///
/// let config = ModelConfig::new(ApiToken::new("hf_test").unwrap())
///     .with_temperature(0.2)
///     .unwrap();
///
/// assert_eq!(config.model, Model::default());
/// assert_eq!(config.temperature, 0.2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    /// Hub repository id of the model.
    pub model: Model,
    /// Sampling temperature in `0.0..=1.0`.
    pub temperature: f32,
    /// Auth token sent with every request.
    pub api_token: ApiToken,
}

impl ModelConfig {
    /// Default model and temperature with the given token.
    pub fn new(api_token: ApiToken) -> Self {
        Self {
            model: Model::default(),
            temperature: DEFAULT_TEMPERATURE,
            api_token,
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Result<Self, DomainError> {
        if !(0.0..=1.0).contains(&temperature) {
            return Err(DomainError::InvalidTemperature(temperature));
        }
        self.temperature = temperature;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> ApiToken {
        ApiToken::new("hf_secret").unwrap()
    }

    #[test]
    fn test_default() {
        let config = ModelConfig::new(token());
        assert_eq!(config.model, Model::Llama3_8bInstruct);
        assert_eq!(config.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(config.api_token.expose(), "hf_secret");
    }

    #[test]
    fn test_builder() {
        let config = ModelConfig::new(token())
            .with_model(Model::from("mistralai/Mistral-7B-Instruct-v0.3"))
            .with_temperature(1.0)
            .unwrap();

        assert_eq!(config.model.as_str(), "mistralai/Mistral-7B-Instruct-v0.3");
        assert_eq!(config.temperature, 1.0);
    }

    #[test]
    fn test_temperature_out_of_range() {
        assert_eq!(
            ModelConfig::new(token()).with_temperature(1.1),
            Err(DomainError::InvalidTemperature(1.1))
        );
        assert!(ModelConfig::new(token()).with_temperature(-0.1).is_err());
    }

    #[test]
    fn test_blank_token_rejected() {
        assert_eq!(ApiToken::new("   "), Err(DomainError::EmptyApiToken));
    }

    #[test]
    fn test_token_debug_is_redacted() {
        let rendered = format!("{:?}", ModelConfig::new(token()));
        assert!(!rendered.contains("hf_secret"));
        assert!(rendered.contains("ApiToken(***)"));
    }
}
