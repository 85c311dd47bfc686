//! Log output configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

/// Raw logging configuration from TOML
///
/// Both outputs are off unless a path is given.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for daily-rotated diagnostic log files
    pub dir: Option<String>,
    /// JSONL file receiving every prompt and completion
    pub generation_log: Option<String>,
}
