//! Model endpoint configuration from TOML (`[model]` section)

use crate::config::ConfigError;
use blogsmith_domain::{
    ApiToken, ConfigIssue, ConfigIssueCode, DEFAULT_TEMPERATURE, Model, ModelConfig, Severity,
};
use serde::{Deserialize, Serialize};

/// Default environment variable carrying the auth token.
pub const DEFAULT_API_TOKEN_ENV: &str = "HUGGINGFACEHUB_API_TOKEN";

/// Raw model configuration from TOML
///
/// # Example
///
/// ```toml
/// [model]
/// id = "meta-llama/Meta-Llama-3-8B-Instruct"
/// temperature = 0.6
/// api_token_env = "HUGGINGFACEHUB_API_TOKEN"
/// base_url = "https://api-inference.huggingface.co"
/// max_new_tokens = 512
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    /// Hub repository id of the model
    pub id: String,
    /// Sampling temperature (0.0–1.0)
    pub temperature: f32,
    /// Environment variable name for the API token
    pub api_token_env: String,
    /// Direct API token (not recommended; prefer the env var)
    pub api_token: Option<String>,
    /// Base URL of the inference API
    pub base_url: String,
    /// Upper bound on generated tokens per call
    pub max_new_tokens: u32,
}

impl Default for FileModelConfig {
    fn default() -> Self {
        Self {
            id: Model::default().to_string(),
            temperature: DEFAULT_TEMPERATURE,
            api_token_env: DEFAULT_API_TOKEN_ENV.to_string(),
            api_token: None,
            base_url: "https://api-inference.huggingface.co".to_string(),
            max_new_tokens: 512,
        }
    }
}

impl FileModelConfig {
    pub(crate) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.id.trim().is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::EmptyField {
                    field: "model.id".to_string(),
                },
                message: "model.id: model name cannot be empty".to_string(),
            });
        }

        if !(0.0..=1.0).contains(&self.temperature) {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::OutOfRange {
                    field: "model.temperature".to_string(),
                    value: self.temperature.to_string(),
                },
                message: format!(
                    "model.temperature: {} is outside 0.0..=1.0",
                    self.temperature
                ),
            });
        }

        if self.max_new_tokens == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::OutOfRange {
                    field: "model.max_new_tokens".to_string(),
                    value: "0".to_string(),
                },
                message: "model.max_new_tokens: must be at least 1".to_string(),
            });
        }

        issues
    }

    /// Build the runtime [`ModelConfig`], reading the token from the process
    /// environment.
    pub fn to_model_config(&self) -> Result<ModelConfig, ConfigError> {
        self.to_model_config_with(|name| std::env::var(name).ok())
    }

    /// Same as [`to_model_config`](Self::to_model_config) with an injectable
    /// environment lookup.
    ///
    /// The environment variable wins over `api_token` when both are set.
    pub fn to_model_config_with<F>(&self, lookup: F) -> Result<ModelConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(&self.api_token_env)
            .filter(|t| !t.trim().is_empty())
            .or_else(|| self.api_token.clone())
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingApiToken {
                env: self.api_token_env.clone(),
            })?;

        let config = ModelConfig::new(ApiToken::new(raw)?)
            .with_model(Model::from(self.id.trim()))
            .with_temperature(self.temperature)?;

        Ok(config)
    }
}
