//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for blogsmith
#[derive(Parser, Debug)]
#[command(name = "blogsmith")]
#[command(author, version, about = "AI blog generator - title suggestions and full drafts from one page")]
#[command(long_about = r#"
Blogsmith serves a single web page for drafting blog posts with a hosted LLM.

1. Title Generation: enter a topic and get ten title suggestions
2. Blog Generation: pick a title, add keywords, choose a word count
   and generate the full post

The Hugging Face API token is read from HUGGINGFACEHUB_API_TOKEN
(or the variable named by model.api_token_env).

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./blogsmith.toml    Project-level config (or ./.blogsmith.toml)
3. ~/.config/blogsmith/config.toml   Global config

Environment variables prefixed with BLOGSMITH_ override file values,
e.g. BLOGSMITH_SERVER__PORT=8080.

Example:
  blogsmith
  blogsmith --port 8080 --temperature 0.3
  blogsmith -vv --model mistralai/Mistral-7B-Instruct-v0.3
"#)]
pub struct Cli {
    /// Address to bind the web server to
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Model repository id on the inference API
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Sampling temperature (0.0 - 1.0)
    #[arg(short, long, value_name = "TEMP")]
    pub temperature: Option<f32>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["blogsmith"]);
        assert_eq!(cli.host, None);
        assert_eq!(cli.port, None);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.no_config);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "blogsmith",
            "--host",
            "0.0.0.0",
            "-p",
            "9000",
            "--temperature",
            "0.2",
            "-vv",
            "--config",
            "site.toml",
        ]);
        assert_eq!(cli.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(cli.port, Some(9000));
        assert_eq!(cli.temperature, Some(0.2));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("site.toml")));
    }
}
