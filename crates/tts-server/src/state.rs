use tts_core::ModelHandle;

/// Application context shared by request handlers.
///
/// Built once by the server and handed to the router; replaces any
/// process-global model state.
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Model state written by the lifecycle, read by handlers.
    pub model: ModelHandle,
}

impl AppContext {
    pub fn new(model: ModelHandle) -> Self {
        Self { model }
    }
}
