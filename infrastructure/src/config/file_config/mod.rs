//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to runtime types on demand.

mod generation;
mod logging;
mod model;
mod server;

pub use generation::FileGenerationConfig;
pub use logging::FileLoggingConfig;
pub use model::{DEFAULT_API_TOKEN_ENV, FileModelConfig};
pub use server::FileServerConfig;

use crate::huggingface::HuggingFaceOptions;
use blogsmith_domain::ConfigIssue;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Hosted model settings
    pub model: FileModelConfig,
    /// Web server settings
    pub server: FileServerConfig,
    /// Model call limits
    pub generation: FileGenerationConfig,
    /// Log outputs
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.model.validate());
        issues.extend(self.generation.validate());
        issues
    }

    /// Connection settings for the inference gateway.
    pub fn huggingface_options(&self) -> HuggingFaceOptions {
        HuggingFaceOptions {
            base_url: self.model.base_url.clone(),
            max_new_tokens: self.model.max_new_tokens,
            request_timeout: Duration::from_secs(self.generation.timeout_seconds),
        }
    }
}
