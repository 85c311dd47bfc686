//! Generation result value object

use serde::{Deserialize, Serialize};

/// Raw completion text returned by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    text: String,
}

impl GenerationResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// True when the completion has no visible characters.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Trimmed, non-blank lines in their original order.
    pub fn lines(&self) -> Vec<String> {
        self.text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }
}
