//! Prompt domain
//!
//! Named templates with `{placeholder}` substitution, and the built-in
//! library holding the title-suggestion and blog-content prompts.

pub mod library;
mod template;
mod value;

pub use library::{BLOG_CONTENT, PromptLibrary, TITLE_SUGGESTION};
pub use template::{PromptTemplate, TemplateError};
pub use value::TemplateValue;
