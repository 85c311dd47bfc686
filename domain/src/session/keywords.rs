//! Session keyword list
//!
//! The keywords a user has added during one session. The list only grows:
//! there is no removal, reset or deduplication.

use serde::{Deserialize, Serialize};

/// Derived state of a [`SessionKeywordList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordState {
    /// No keyword added yet.
    Empty,
    /// At least one keyword.
    HasKeywords,
}

/// Ordered, append-only keyword list scoped to one session (Entity)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionKeywordList {
    keywords: Vec<String>,
}

impl SessionKeywordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a keyword as typed.
    ///
    /// Input that is empty after trimming is ignored. Returns whether the
    /// list grew.
    pub fn add_keyword(&mut self, keyword: impl Into<String>) -> bool {
        let keyword = keyword.into();
        if keyword.trim().is_empty() {
            return false;
        }
        self.keywords.push(keyword);
        true
    }

    pub fn state(&self) -> KeywordState {
        if self.keywords.is_empty() {
            KeywordState::Empty
        } else {
            KeywordState::HasKeywords
        }
    }

    /// Keywords exactly as added, in insertion order.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

/// Trim each keyword, drop empties, and join with `", "`.
pub fn format_keywords<S: AsRef<str>>(keywords: &[S]) -> String {
    keywords
        .iter()
        .map(|k| k.as_ref().trim())
        .filter(|k| !k.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
