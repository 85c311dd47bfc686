//! Test doubles for the gateway and logger ports.

use crate::ports::generation_logger::{GenerationEvent, GenerationLogger};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use async_trait::async_trait;
use blogsmith_domain::Model;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays queued results and records every prompt it receives.
pub(crate) struct ScriptedGateway {
    model: Model,
    responses: Mutex<VecDeque<Result<String, GatewayError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGateway {
    pub(crate) fn new(responses: Vec<Result<String, GatewayError>>) -> Self {
        Self {
            model: Model::default(),
            responses: Mutex::new(VecDeque::from(responses)),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::RequestFailed("No more responses".to_string())))
    }
}

/// Never answers.
#[derive(Default)]
pub(crate) struct StalledGateway {
    model: Model,
}

#[async_trait]
impl LlmGateway for StalledGateway {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn generate(&self, _prompt: &str) -> Result<String, GatewayError> {
        std::future::pending().await
    }
}

/// Keeps every logged event as `(event_type, payload)`.
#[derive(Default)]
pub(crate) struct RecordingLogger {
    events: Mutex<Vec<(&'static str, serde_json::Value)>>,
}

impl RecordingLogger {
    pub(crate) fn events(&self) -> Vec<(&'static str, serde_json::Value)> {
        self.events.lock().unwrap().clone()
    }
}

impl GenerationLogger for RecordingLogger {
    fn log(&self, event: GenerationEvent) {
        self.events
            .lock()
            .unwrap()
            .push((event.event_type, event.payload));
    }
}
