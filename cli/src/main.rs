//! CLI entrypoint for blogsmith
//!
//! This is the main binary that wires together all layers using
//! dependency injection and serves the web UI.

use anyhow::{Context, Result, bail};
use blogsmith_application::{
    GeneratePostUseCase, GenerationLogger, NoGenerationLogger, SuggestTitlesUseCase,
};
use blogsmith_domain::PromptLibrary;
use blogsmith_infrastructure::{
    ConfigLoader, FileConfig, HuggingFaceGateway, JsonlGenerationLogger,
};
use blogsmith_presentation::{AppState, Cli, SessionStore, create_router};
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        for line in ConfigLoader::describe_sources() {
            println!("{}", line);
        }
        return Ok(());
    }

    // Load configuration
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())?
    };
    apply_overrides(&mut config, &cli);

    let _log_guard = init_logging(cli.verbose, config.logging.dir.as_deref());

    info!("Starting blogsmith");

    let issues = config.validate();
    for issue in &issues {
        if issue.is_error() {
            error!("Config: {}", issue.message);
        } else {
            warn!("Config: {}", issue.message);
        }
    }
    if issues.iter().any(|i| i.is_error()) {
        bail!("Invalid configuration, see errors above");
    }

    let model_config = config.model.to_model_config()?;

    // === Dependency Injection ===
    // Create infrastructure adapter (Hugging Face gateway)
    let gateway = Arc::new(HuggingFaceGateway::new(
        &model_config,
        config.huggingface_options(),
    )?);
    let library = Arc::new(PromptLibrary::builtin()?);
    let execution = config.generation.to_execution_params();
    let generation_logger = generation_logger(&config);

    let suggest_titles = SuggestTitlesUseCase::new(gateway.clone(), library.clone())
        .with_execution_params(execution.clone())
        .with_generation_logger(generation_logger.clone());
    let generate_post = GeneratePostUseCase::new(gateway, library)
        .with_execution_params(execution)
        .with_generation_logger(generation_logger);

    let sessions = SessionStore::new().with_idle_timeout(config.server.session_idle_timeout());
    let app = create_router(AppState::new(suggest_titles, generate_post).with_sessions(sessions));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(model = %model_config.model, "Serving on {}", addr);
    println!("blogsmith is running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Apply command-line overrides on top of the merged config.
fn apply_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(model) = &cli.model {
        config.model.id = model.clone();
    }
    if let Some(temperature) = cli.temperature {
        config.model.temperature = temperature;
    }
}

/// Initialize logging based on verbosity level, plus a daily log file
/// under `log_dir` when configured.
fn init_logging(verbose: u8, log_dir: Option<&str>) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "blogsmith.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(fmt::layer().with_target(false))
        .with(file_layer)
        .init();

    guard
}

fn generation_logger(config: &FileConfig) -> Arc<dyn GenerationLogger> {
    let Some(path) = config.logging.generation_log.as_deref() else {
        return Arc::new(NoGenerationLogger);
    };

    match JsonlGenerationLogger::new(path) {
        Some(logger) => {
            info!("Writing generation transcript to {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoGenerationLogger),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Could not listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
