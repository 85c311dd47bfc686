//! Generate Post use case
//!
//! Renders the blog-content template for a chosen title, keyword list and
//! word count, and returns the model's draft unchanged.

use crate::config::ExecutionParams;
use crate::ports::generation_logger::{GenerationLogger, NoGenerationLogger};
use crate::ports::llm_gateway::LlmGateway;
use crate::use_cases::shared::{GenerationError, complete};
use blogsmith_domain::util::preview;
use blogsmith_domain::{BLOG_CONTENT, GenerationRequest, PromptLibrary, WordCount, format_keywords};
use std::sync::Arc;
use tracing::info;

/// Input for the [`GeneratePostUseCase`].
#[derive(Debug, Clone)]
pub struct GeneratePostInput {
    /// Post title, used verbatim in the prompt.
    pub title: String,
    /// Session keywords in insertion order, untrimmed.
    pub keywords: Vec<String>,
    /// Target length, forwarded as `blog_length`.
    pub word_count: WordCount,
}

impl GeneratePostInput {
    pub fn new(title: impl Into<String>, keywords: Vec<String>, word_count: WordCount) -> Self {
        Self {
            title: title.into(),
            keywords,
            word_count,
        }
    }
}

/// Use case for drafting a full blog post.
#[derive(Clone)]
pub struct GeneratePostUseCase {
    gateway: Arc<dyn LlmGateway>,
    library: Arc<PromptLibrary>,
    execution: ExecutionParams,
    generation_logger: Arc<dyn GenerationLogger>,
}

impl GeneratePostUseCase {
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

    /// Draft a post and return the raw completion text.
    pub async fn execute(&self, input: GeneratePostInput) -> Result<String, GenerationError> {
        if input.title.trim().is_empty() {
            return Err(GenerationError::InvalidInput(
                "enter a title; a blank or whitespace-only title is not sent to the model".to_string(),
            ));
        }

        let keywords = format_keywords(&input.keywords);
        info!(
            word_count = input.word_count.get(),
            "Generating post '{}' with keywords [{}]",
            preview(&input.title, 60),
            keywords
        );

        let template = self.library.get(BLOG_CONTENT)?;
        let prompt = GenerationRequest::new(template)
            .with("title", input.title.as_str())
            .with("keywords", keywords)
            .with("blog_length", input.word_count.get())
            .render()?;

        let result = complete(
            self.gateway.as_ref(),
            self.generation_logger.as_ref(),
            &self.execution,
            BLOG_CONTENT,
            &prompt,
        )
        .await?;

        Ok(result.into_text())
    }
}
