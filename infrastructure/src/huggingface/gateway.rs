//! Hugging Face LLM Gateway implementation

use super::error::{HuggingFaceError, Result};
use super::types::{
    GenerationParameters, RequestOptions, TextGenerationRequest, error_message, extract_text,
};
use async_trait::async_trait;
use blogsmith_application::{GatewayError, LlmGateway};
use blogsmith_domain::{Model, ModelConfig};
use std::time::Duration;
use tracing::{debug, info};

/// Connection settings for [`HuggingFaceGateway`].
#[derive(Debug, Clone)]
pub struct HuggingFaceOptions {
    /// Base URL of the inference API.
    pub base_url: String,
    /// Upper bound on generated tokens per call.
    pub max_new_tokens: u32,
    /// HTTP-level timeout for one request.
    pub request_timeout: Duration,
}

impl Default for HuggingFaceOptions {
    fn default() -> Self {
        Self {
            base_url: "https://api-inference.huggingface.co".to_string(),
            max_new_tokens: 512,
            request_timeout: Duration::from_secs(60),
        }
    }
}

/// LLM Gateway implementation for the hosted Hugging Face inference API
pub struct HuggingFaceGateway {
    client: reqwest::Client,
    endpoint: String,
    model: Model,
    temperature: f32,
    api_token: String,
    max_new_tokens: u32,
}

impl HuggingFaceGateway {
    /// Create a gateway for the model, temperature and token in `config`.
    pub fn new(config: &ModelConfig, options: HuggingFaceOptions) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(options.request_timeout)
            .user_agent(concat!("blogsmith/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(HuggingFaceError::ClientBuild)?;

        let endpoint = format!(
            "{}/models/{}",
            options.base_url.trim_end_matches('/'),
            config.model
        );

        info!(model = %config.model, temperature = config.temperature, "HuggingFaceGateway initialized");

        Ok(Self {
            client,
            endpoint,
            model: config.model.clone(),
            temperature: config.temperature,
            api_token: config.api_token.expose().to_string(),
            max_new_tokens: options.max_new_tokens,
        })
    }

    /// Get the full URL prompts are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post(&self, prompt: &str) -> Result<String> {
        let request = TextGenerationRequest {
            inputs: prompt,
            parameters: GenerationParameters::new(self.temperature, self.max_new_tokens),
            options: RequestOptions::default(),
        };

        debug!(endpoint = %self.endpoint, bytes = prompt.len(), "Calling text-generation endpoint");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_token)
            .json(&request)
            .send()
            .await
            .map_err(HuggingFaceError::from_transport)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(HuggingFaceError::from_transport)?;

        if !status.is_success() {
            return Err(HuggingFaceError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let text = extract_text(&body)?;
        debug!(bytes = text.len(), "Received completion");
        Ok(text)
    }
}

#[async_trait]
impl LlmGateway for HuggingFaceGateway {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> std::result::Result<String, GatewayError> {
        self.post(prompt).await.map_err(GatewayError::from)
    }
}
