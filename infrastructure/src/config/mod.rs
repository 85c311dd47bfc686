//! Configuration file loading for blogsmith
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `BLOGSMITH_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./blogsmith.toml` or `./.blogsmith.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/blogsmith/config.toml`
//! 5. Default values

mod error;
mod file_config;
mod loader;

pub use error::ConfigError;
pub use file_config::{
    DEFAULT_API_TOKEN_ENV, FileConfig, FileGenerationConfig, FileLoggingConfig, FileModelConfig,
    FileServerConfig,
};
pub use loader::ConfigLoader;
