//! # runtime
//!
//! Runtime orchestration for the TTS service shell.
//!
//! This crate provides:
//! - The model warmup/teardown lifecycle
//! - Device selection (CPU/GPU)
//! - Voice pack discovery and a local model adapter
//! - Structured logging setup
//! - Shutdown signal handling shared by the binaries

pub mod device;
pub mod lifecycle;
pub mod logging;
pub mod model;
pub mod signal;
pub mod voices;

pub use device::{select_device, DevicePreference};
pub use lifecycle::{Lifecycle, LifecycleGuard};
pub use model::LocalModel;
pub use voices::{count_voice_packs, list_voice_packs};
