//! Shared pieces of the generation use cases.
//!
//! Holds the error taxonomy both use cases report and the bounded model
//! call (timeout, transient retry, blank check, transcript logging).

use crate::config::ExecutionParams;
use crate::ports::generation_logger::{GenerationEvent, GenerationLogger};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use blogsmith_domain::util::preview;
use blogsmith_domain::{GenerationResult, TemplateError};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that end a single generation action.
///
/// None of them touch session state; the caller shows the message and the
/// session carries on.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] TemplateError),

    #[error("Model unavailable: {0}")]
    ModelUnavailable(GatewayError),

    #[error("No content generated")]
    EmptyGeneration,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<GatewayError> for GenerationError {
    fn from(error: GatewayError) -> Self {
        match error {
            GatewayError::EmptyResponse => GenerationError::EmptyGeneration,
            other => GenerationError::ModelUnavailable(other),
        }
    }
}

/// Send `prompt` through `gateway` within the limits of `params`.
///
/// Each attempt is bounded by `request_timeout`; an expired attempt counts
/// as [`GatewayError::Timeout`]. Transient failures are retried up to
/// `max_retries` times. A blank completion is reported as
/// [`GenerationError::EmptyGeneration`] and never retried.
pub(crate) async fn complete(
    gateway: &dyn LlmGateway,
    logger: &dyn GenerationLogger,
    params: &ExecutionParams,
    template: &str,
    prompt: &str,
) -> Result<GenerationResult, GenerationError> {
    let started = Instant::now();
    let mut attempt = 0u32;

    let outcome = loop {
        attempt += 1;
        debug!(
            template,
            attempt,
            model = %gateway.model(),
            "Sending prompt: {}",
            preview(prompt, 80)
        );

        let result = match tokio::time::timeout(params.request_timeout, gateway.generate(prompt)).await
        {
            Ok(result) => result,
            Err(_) => Err(GatewayError::Timeout),
        };

        match result {
            Err(e) if e.is_transient() && attempt <= params.max_retries => {
                warn!(
                    template,
                    attempt,
                    "Transient model failure, retrying in {:?}: {}",
                    params.retry_backoff,
                    e
                );
                tokio::time::sleep(params.retry_backoff).await;
            }
            other => break other,
        }
    };

    let elapsed_ms = started.elapsed().as_millis() as u64;

    let result = outcome.map_err(GenerationError::from).and_then(|text| {
        let result = GenerationResult::new(text);
        if result.is_blank() {
            Err(GenerationError::EmptyGeneration)
        } else {
            Ok(result)
        }
    });

    match &result {
        Ok(generated) => logger.log(GenerationEvent::new(
            "generation_completed",
            serde_json::json!({
                "template": template,
                "model": gateway.model().to_string(),
                "prompt": prompt,
                "completion": generated.text(),
                "attempts": attempt,
                "elapsed_ms": elapsed_ms,
            }),
        )),
        Err(e) => logger.log(GenerationEvent::new(
            "generation_failed",
            serde_json::json!({
                "template": template,
                "model": gateway.model().to_string(),
                "prompt": prompt,
                "error": e.to_string(),
                "attempts": attempt,
                "elapsed_ms": elapsed_ms,
            }),
        )),
    }

    result
}
