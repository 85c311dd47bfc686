//! Suggest Titles use case
//!
//! Renders the title-suggestion template for a topic, asks the model for
//! titles, and returns the non-blank lines of the completion.

use crate::config::ExecutionParams;
use crate::ports::generation_logger::{GenerationLogger, NoGenerationLogger};
use crate::ports::llm_gateway::LlmGateway;
use crate::use_cases::shared::{GenerationError, complete};
use blogsmith_domain::util::preview;
use blogsmith_domain::{GenerationRequest, PromptLibrary, TITLE_SUGGESTION};
use std::sync::Arc;
use tracing::info;

/// Use case for suggesting blog titles from a topic.
///
/// The prompt asks for ten numbered titles, but whatever lines come back
/// are returned as-is: no count or format check is made.
#[derive(Clone)]
pub struct SuggestTitlesUseCase {
    gateway: Arc<dyn LlmGateway>,
    library: Arc<PromptLibrary>,
    execution: ExecutionParams,
    generation_logger: Arc<dyn GenerationLogger>,
}

impl SuggestTitlesUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, library: Arc<PromptLibrary>) -> Self {
        Self {
            gateway,
            library,
            execution: ExecutionParams::default(),
            generation_logger: Arc::new(NoGenerationLogger),
        }
    }

    pub fn with_execution_params(mut self, execution: ExecutionParams) -> Self {
        self.execution = execution;
        self
    }

    /// Create with a generation logger.
    pub fn with_generation_logger(mut self, logger: Arc<dyn GenerationLogger>) -> Self {
        self.generation_logger = logger;
        self
    }

    /// Suggest titles for `topic`.
    ///
    /// Returns the completion split into lines, each trimmed, blank lines
    /// dropped, original order kept.
    pub async fn execute(&self, topic: &str) -> Result<Vec<String>, GenerationError> {
        if topic.trim().is_empty() {
            return Err(GenerationError::InvalidInput(
                "enter a topic; a blank or whitespace-only topic is not sent to the model".to_string(),
            ));
        }

        info!("Suggesting titles for topic: {}", preview(topic, 60));

        let template = self.library.get(TITLE_SUGGESTION)?;
        let prompt = GenerationRequest::new(template)
            .with("topic", topic)
            .render()?;

        let result = complete(
            self.gateway.as_ref(),
            self.generation_logger.as_ref(),
            &self.execution,
            TITLE_SUGGESTION,
            &prompt,
        )
        .await?;

        let titles = result.lines();
        info!("Model suggested {} title lines", titles.len());
        Ok(titles)
    }
}
