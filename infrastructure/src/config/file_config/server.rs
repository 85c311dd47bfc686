//! Web server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw server configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Minutes a browser session may sit idle before its keywords are dropped
    pub session_idle_minutes: u64,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8501,
            session_idle_minutes: 60,
        }
    }
}

impl FileServerConfig {
    pub fn session_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.session_idle_minutes.saturating_mul(60))
    }
}
