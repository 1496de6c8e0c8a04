//! # tts-ui
//!
//! Input panel for supplying text to the TTS service.
//!
//! The panel itself ([`panel`]) only declares its layout and hands back
//! references to its parts; [`app`] is the assembly that wires events
//! (file selection, upload, typing) to [`state::InputState`] and serves it
//! over HTTP.

pub mod app;
pub mod error;
pub mod files;
pub mod panel;
pub mod render;
pub mod state;

pub use app::{create_router, UiState};
pub use error::{UiError, UiResult};
pub use files::InputFiles;
pub use panel::{create_input_column, Column, Component, ComponentId, InputComponents};
pub use state::{FileSource, InputMode, InputState};
