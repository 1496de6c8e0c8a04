//! Input panel server.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use runtime::logging::init_logging_from_config;
use runtime::signal::shutdown_signal;
use tts_core::AppConfig;
use tts_ui::{create_router, InputFiles, UiState};

/// TTS input panel
#[derive(Debug, Parser)]
#[command(name = "tts-ui")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// HTTP address to serve the panel on
    #[arg(long, env = "TTS_UI_ADDR")]
    http_addr: Option<SocketAddr>,

    /// Directory of selectable .txt input files
    #[arg(long, env = "TTS_INPUTS_DIR")]
    inputs_dir: Option<PathBuf>,

    /// Log level
    #[arg(short, long)]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long)]
    json_logs: bool,

    /// Configuration file path
    #[arg(short, long, env = "TTS_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AppConfig::default(),
    };
    if let Some(addr) = args.http_addr {
        config.ui.http_addr = addr;
    }
    if let Some(dir) = args.inputs_dir {
        config.ui.inputs_dir = dir;
    }
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }

    if args.json_logs {
        config.logging.format = "json".to_string();
    }
    init_logging_from_config(&config.logging);

    let files = InputFiles::new(&config.ui.inputs_dir);
    files
        .ensure_dir()
        .with_context(|| format!("Failed to create {}", config.ui.inputs_dir.display()))?;
    let count = files.list_input_files().context("Failed to list input files")?.len();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        addr = %config.ui.http_addr,
        inputs_dir = %config.ui.inputs_dir.display(),
        input_files = count,
        "Starting input panel"
    );

    let app = create_router(UiState::new(files));
    let listener = tokio::net::TcpListener::bind(config.ui.http_addr)
        .await
        .context("Failed to bind panel address")?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Panel server failed")?;

    info!("Input panel stopped");
    Ok(())
}
