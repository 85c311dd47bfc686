//! Model call limits from TOML (`[generation]` section)

use blogsmith_application::ExecutionParams;
use blogsmith_domain::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw generation settings from TOML
///
/// # Example
///
/// ```toml
/// [generation]
/// timeout_seconds = 60
/// max_retries = 1
/// retry_backoff_ms = 2000
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Timeout in seconds for one model call
    pub timeout_seconds: u64,
    /// Retries after a transient failure
    pub max_retries: u32,
    /// Pause before a retry, in milliseconds
    pub retry_backoff_ms: u64,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        let defaults = ExecutionParams::default();
        Self {
            timeout_seconds: defaults.request_timeout.as_secs(),
            max_retries: defaults.max_retries,
            retry_backoff_ms: defaults.retry_backoff.as_millis() as u64,
        }
    }
}

impl FileGenerationConfig {
    pub(crate) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.timeout_seconds == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::OutOfRange {
                    field: "generation.timeout_seconds".to_string(),
                    value: "0".to_string(),
                },
                message: "generation.timeout_seconds: timeout cannot be 0".to_string(),
            });
        }
        if self.max_retries > 3 {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::OutOfRange {
                    field: "generation.max_retries".to_string(),
                    value: self.max_retries.to_string(),
                },
                message: format!(
                    "generation.max_retries: {} retries can hold a request for minutes",
                    self.max_retries
                ),
            });
        }
        issues
    }

    pub fn to_execution_params(&self) -> ExecutionParams {
        ExecutionParams::default()
            .with_request_timeout(Duration::from_secs(self.timeout_seconds))
            .with_max_retries(self.max_retries)
            .with_retry_backoff(Duration::from_millis(self.retry_backoff_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_execution_params() {
        assert_eq!(
            FileGenerationConfig::default().to_execution_params(),
            ExecutionParams::default()
        );
    }

    #[test]
    fn test_zero_timeout_is_error() {
        let config = FileGenerationConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
    }

    #[test]
    fn test_many_retries_warns() {
        let config = FileGenerationConfig {
            max_retries: 5,
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
    }
}
