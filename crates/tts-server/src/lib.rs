//! # tts-server
//!
//! HTTP API process for the TTS model.
//!
//! Provides:
//! - Model warmup before the listener opens, release after it closes
//! - Health check endpoint, independent of model state

pub mod routes;
pub mod server;
pub mod state;

pub use routes::create_router;
pub use server::TtsServer;
pub use state::AppContext;
