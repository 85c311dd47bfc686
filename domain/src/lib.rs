//! Domain layer for blogsmith
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Prompt templates**: named prompts with `{placeholder}` substitution
//!   points whose declared names always match the text
//! - **Session keywords**: an append-only list of keywords a user gathers
//!   before drafting a post
//! - **Word count**: the slider value, constrained to `100..=2000` in
//!   steps of 50

pub mod blog;
pub mod config;
pub mod core;
pub mod generation;
pub mod prompt;
pub mod session;
pub mod util;

// Re-export commonly used types
pub use blog::{MAX_WORD_COUNT, MIN_WORD_COUNT, WORD_COUNT_STEP, WordCount};
pub use config::{ApiToken, ConfigIssue, ConfigIssueCode, DEFAULT_TEMPERATURE, ModelConfig, Severity};
pub use core::{error::DomainError, model::Model};
pub use generation::{GenerationRequest, GenerationResult};
pub use prompt::{
    BLOG_CONTENT, PromptLibrary, PromptTemplate, TITLE_SUGGESTION, TemplateError, TemplateValue,
};
pub use session::{KeywordState, SessionKeywordList, format_keywords};
