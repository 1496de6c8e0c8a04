//! Configuration structures for the TTS service shell.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{TtsError, TtsResult};

/// Top-level configuration file layout.
///
/// Every section is optional in the file; missing sections take defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// API server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Model settings.
    #[serde(default)]
    pub model: ModelConfig,

    /// Input UI settings.
    #[serde(default)]
    pub ui: UiConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> TtsResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            TtsError::config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> TtsResult<Self> {
        toml::from_str(content).map_err(|e| TtsError::Serialization(e.to_string()))
    }
}

/// API server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP bind address.
    #[serde(default = "default_server_addr")]
    pub http_addr: SocketAddr,
    /// Graceful shutdown timeout in seconds.
    #[serde(default = "default_shutdown_timeout_secs")]
    pub shutdown_timeout_secs: u64,
}

fn default_server_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8880))
}

fn default_shutdown_timeout_secs() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_addr: default_server_addr(),
            shutdown_timeout_secs: default_shutdown_timeout_secs(),
        }
    }
}

/// Model configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Directory containing voice pack files.
    #[serde(default = "default_voices_dir")]
    pub voices_dir: PathBuf,
    /// File extension identifying a voice pack.
    #[serde(default = "default_voice_extension")]
    pub voice_extension: String,
    /// Device preference (`auto`, `cpu`, `cuda`, `metal`).
    #[serde(default = "default_device")]
    pub device: String,
}

fn default_voices_dir() -> PathBuf {
    PathBuf::from("voices")
}

fn default_voice_extension() -> String {
    "pt".to_string()
}

fn default_device() -> String {
    "auto".to_string()
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            voices_dir: default_voices_dir(),
            voice_extension: default_voice_extension(),
            device: default_device(),
        }
    }
}

/// Input UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// HTTP bind address for the panel.
    #[serde(default = "default_ui_addr")]
    pub http_addr: SocketAddr,
    /// Directory holding selectable `.txt` input files.
    #[serde(default = "default_inputs_dir")]
    pub inputs_dir: PathBuf,
}

fn default_ui_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 7860))
}

fn default_inputs_dir() -> PathBuf {
    PathBuf::from("inputs")
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            http_addr: default_ui_addr(),
            inputs_dir: default_inputs_dir(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Output format (json or text).
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
