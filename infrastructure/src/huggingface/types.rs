//! Wire types for the text-generation endpoint
//!
//! Request:
//! `{"inputs": "...", "parameters": {...}, "options": {"wait_for_model": true}}`
//!
//! Response is either a list `[{"generated_text": "..."}]`, a single
//! object `{"generated_text": "..."}`, or an error `{"error": "..."}`.

use super::error::{HuggingFaceError, Result};
use blogsmith_domain::util::preview;
use serde::{Deserialize, Serialize};

/// Request body for the text-generation task.
#[derive(Debug, Serialize)]
pub struct TextGenerationRequest<'a> {
    pub inputs: &'a str,
    pub parameters: GenerationParameters,
    pub options: RequestOptions,
}

/// Sampling parameters.
///
/// The endpoint rejects a temperature of exactly zero, so zero is sent as
/// greedy decoding (`do_sample: false`, no temperature).
#[derive(Debug, Serialize)]
pub struct GenerationParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    pub do_sample: bool,
    pub max_new_tokens: u32,
    pub return_full_text: bool,
}

impl GenerationParameters {
    pub fn new(temperature: f32, max_new_tokens: u32) -> Self {
        let sample = temperature > 0.0;
        Self {
            temperature: sample.then_some(temperature),
            do_sample: sample,
            max_new_tokens,
            return_full_text: false,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RequestOptions {
    /// Block while a cold model loads instead of failing with 503.
    pub wait_for_model: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            wait_for_model: true,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GeneratedText {
    pub generated_text: String,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: serde_json::Value,
}

impl ApiErrorBody {
    pub fn message(&self) -> String {
        match &self.error {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TextGenerationResponse {
    Batch(Vec<GeneratedText>),
    Single(GeneratedText),
    Error(ApiErrorBody),
}

/// Pull the completion text out of a successful (2xx) response body.
pub fn extract_text(body: &str) -> Result<String> {
    let response: TextGenerationResponse =
        serde_json::from_str(body).map_err(|e| HuggingFaceError::ParseError {
            error: e.to_string(),
            raw: preview(body, 200),
        })?;

    let text = match response {
        TextGenerationResponse::Batch(items) => items
            .into_iter()
            .next()
            .map(|item| item.generated_text)
            .unwrap_or_default(),
        TextGenerationResponse::Single(item) => item.generated_text,
        TextGenerationResponse::Error(err) => {
            return Err(HuggingFaceError::Status {
                status: 200,
                message: err.message(),
            });
        }
    };

    if text.trim().is_empty() {
        return Err(HuggingFaceError::EmptyCompletion);
    }
    Ok(text)
}

/// Best-effort error message from a non-2xx body.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|e| e.message())
        .unwrap_or_else(|_| preview(body, 200))
}
