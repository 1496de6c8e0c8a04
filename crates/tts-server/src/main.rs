//! TTS API server.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use runtime::logging::init_logging_from_config;
use runtime::LocalModel;
use tts_core::AppConfig;
use tts_server::TtsServer;

/// TTS API server
#[derive(Debug, Parser)]
#[command(name = "tts-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// HTTP server address
    #[arg(long, env = "TTS_HTTP_ADDR")]
    http_addr: Option<SocketAddr>,

    /// Directory containing voice packs
    #[arg(long, env = "TTS_VOICES_DIR")]
    voices_dir: Option<PathBuf>,

    /// Device preference (auto, cpu, cuda, metal)
    #[arg(long, env = "TTS_DEVICE")]
    device: Option<String>,

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

impl Args {
    fn into_config(self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => AppConfig::default(),
        };

        if let Some(addr) = self.http_addr {
            config.server.http_addr = addr;
        }
        if let Some(dir) = self.voices_dir {
            config.model.voices_dir = dir;
        }
        if let Some(device) = self.device {
            config.model.device = device;
        }
        if let Some(level) = self.log_level {
            config.logging.level = level;
        }
        if self.json_logs {
            config.logging.format = "json".to_string();
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Args::parse().into_config()?;

    init_logging_from_config(&config.logging);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        http_addr = %config.server.http_addr,
        voices_dir = %config.model.voices_dir.display(),
        "Starting TTS server"
    );

    let model = LocalModel::from_config(&config.model).context("Failed to create model")?;
    let server = TtsServer::new(config.server, Arc::new(model));

    server.run().await.context("Server failed")?;

    info!("Server shutdown complete");
    Ok(())
}
