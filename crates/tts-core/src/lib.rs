//! # tts-core
//!
//! Core types, traits, and error definitions for the TTS service shell.
//!
//! This crate provides the foundational abstractions shared by the API
//! server and the input UI:
//!
//! - The `TtsModel` capability trait the lifecycle drives
//! - The shared `ModelHandle` and its `ModelState`
//! - Unified error handling via `TtsError`
//! - Configuration structures

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use config::{AppConfig, LoggingConfig, ModelConfig, ServerConfig, UiConfig};
pub use error::{TtsError, TtsResult};
pub use traits::TtsModel;
pub use types::{ModelHandle, ModelState, WarmupReport};
