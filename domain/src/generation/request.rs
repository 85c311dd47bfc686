//! Generation request value object

use crate::prompt::{PromptTemplate, TemplateError, TemplateValue};
use std::collections::BTreeMap;

/// A template plus the values for one rendering.
///
/// Created per user action and dropped once the response is shown.
#[derive(Debug, Clone)]
pub struct GenerationRequest<'a> {
    template: &'a PromptTemplate,
    values: BTreeMap<String, TemplateValue>,
}

impl<'a> GenerationRequest<'a> {
    pub fn new(template: &'a PromptTemplate) -> Self {
        Self {
            template,
            values: BTreeMap::new(),
        }
    }

    /// Set a placeholder value, replacing any earlier one.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<TemplateValue>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Render the template with the collected values.
    pub fn render(&self) -> Result<String, TemplateError> {
        self.template.render(&self.values)
    }
}
