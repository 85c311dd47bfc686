//! Parameterized prompt templates
//!
//! Placeholders use `{name}` syntax where `name` is an identifier
//! (`[A-Za-z_][A-Za-z0-9_]*`). Any other brace is literal text.

use super::value::TemplateValue;
use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::sync::LazyLock;
use thiserror::Error;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern is valid")
});

/// Errors raised when building or rendering a template
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Template '{template}' references undeclared placeholder '{placeholder}'")]
    UndeclaredPlaceholder {
        template: String,
        placeholder: String,
    },

    #[error("Template '{template}' declares '{placeholder}' but never uses it")]
    UnusedPlaceholder {
        template: String,
        placeholder: String,
    },

    #[error("Template '{template}' declares '{placeholder}' more than once")]
    DuplicatePlaceholder {
        template: String,
        placeholder: String,
    },

    #[error("No value supplied for placeholder '{placeholder}' of template '{template}'")]
    MissingValue {
        template: String,
        placeholder: String,
    },

    #[error("Template '{template}' has no placeholder named '{name}'")]
    UnexpectedValue { template: String, name: String },

    #[error("Unknown template: {0}")]
    UnknownTemplate(String),
}

/// A named prompt with `{placeholder}` substitution points (Value Object)
///
/// The declared placeholder list and the placeholders actually present in
/// the text always match; [`PromptTemplate::new`] refuses anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    name: String,
    text: String,
    placeholders: Vec<String>,
}

impl PromptTemplate {
    /// Build a template, checking the declared placeholders against the text.
    pub fn new<I, S>(
        name: impl Into<String>,
        text: impl Into<String>,
        placeholders: I,
    ) -> Result<Self, TemplateError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let text = text.into();

        let mut declared: Vec<String> = Vec::new();
        for placeholder in placeholders {
            let placeholder = placeholder.into();
            if declared.contains(&placeholder) {
                return Err(TemplateError::DuplicatePlaceholder {
                    template: name,
                    placeholder,
                });
            }
            declared.push(placeholder);
        }

        let referenced = Self::scan(&text);

        if let Some(undeclared) = referenced.iter().find(|p| !declared.contains(p)) {
            return Err(TemplateError::UndeclaredPlaceholder {
                template: name,
                placeholder: undeclared.clone(),
            });
        }

        if let Some(unused) = declared.iter().find(|p| !referenced.contains(p)) {
            return Err(TemplateError::UnusedPlaceholder {
                template: name,
                placeholder: unused.clone(),
            });
        }

        Ok(Self {
            name,
            text,
            placeholders: declared,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Required placeholder names, in declaration order.
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    /// Substitute every placeholder with its value.
    ///
    /// Values are inserted verbatim and never re-scanned, so a value that
    /// itself looks like `{name}` stays literal.
    pub fn render(&self, values: &BTreeMap<String, TemplateValue>) -> Result<String, TemplateError> {
        if let Some(missing) = self.placeholders.iter().find(|p| !values.contains_key(*p)) {
            return Err(TemplateError::MissingValue {
                template: self.name.clone(),
                placeholder: missing.clone(),
            });
        }

        if let Some(extra) = values.keys().find(|k| !self.placeholders.contains(k)) {
            return Err(TemplateError::UnexpectedValue {
                template: self.name.clone(),
                name: extra.clone(),
            });
        }

        let rendered = PLACEHOLDER.replace_all(&self.text, |caps: &Captures<'_>| {
            // Every capture is declared, and every declared name has a value.
            values
                .get(&caps[1])
                .map(ToString::to_string)
                .unwrap_or_default()
        });

        Ok(rendered.into_owned())
    }

    /// Distinct placeholder names in order of first appearance.
    fn scan(text: &str) -> Vec<String> {
        let mut found: Vec<String> = Vec::new();
        for caps in PLACEHOLDER.captures_iter(text) {
            let name = &caps[1];
            if !found.iter().any(|f| f == name) {
                found.push(name.to_string());
            }
        }
        found
    }
}
