//! Shared model state types.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Result of a successful warmup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarmupReport {
    /// Device identifier, exactly as reported by the model.
    pub device: String,
    /// Number of voice packs loaded.
    pub voice_count: usize,
}

/// Lifecycle state of the process-wide model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ModelState {
    /// Startup has not completed (or shutdown already ran).
    #[default]
    NotInitialized,
    /// Warmup succeeded.
    Ready(WarmupReport),
    /// Warmup failed with the given reason.
    Failed { reason: String },
}

impl ModelState {
    /// Whether the model finished warming up.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

impl fmt::Display for ModelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "not initialized"),
            Self::Ready(report) => write!(
                f,
                "ready on {} ({} voice packs)",
                report.device, report.voice_count
            ),
            Self::Failed { reason } => write!(f, "failed: {reason}"),
        }
    }
}

/// Shared handle to the model state.
///
/// Cloning is cheap; all clones observe the same state. Only the lifecycle
/// writes to it.
#[derive(Debug, Clone, Default)]
pub struct ModelHandle {
    inner: Arc<RwLock<ModelState>>,
}

impl ModelHandle {
    /// Create a handle in the `NotInitialized` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ModelState {
        self.inner.read().clone()
    }

    /// Replace the current state.
    pub fn set(&self, state: ModelState) {
        *self.inner.write() = state;
    }

    /// Device of a ready model.
    pub fn device(&self) -> Option<String> {
        match &*self.inner.read() {
            ModelState::Ready(report) => Some(report.device.clone()),
            _ => None,
        }
    }

    /// Voice pack count of a ready model.
    pub fn voice_count(&self) -> Option<usize> {
        match &*self.inner.read() {
            ModelState::Ready(report) => Some(report.voice_count),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_default_not_initialized() {
        let handle = ModelHandle::new();
        assert_eq!(handle.state(), ModelState::NotInitialized);
        assert!(handle.device().is_none());
        assert!(handle.voice_count().is_none());
    }

    #[test]
    fn test_handle_clones_share_state() {
        let handle = ModelHandle::new();
        let reader = handle.clone();

        handle.set(ModelState::Ready(WarmupReport {
            device: "cuda".to_string(),
            voice_count: 3,
        }));

        assert!(reader.state().is_ready());
        assert_eq!(reader.device().as_deref(), Some("cuda"));
        assert_eq!(reader.voice_count(), Some(3));
    }

    #[test]
    fn test_state_display() {
        let failed = ModelState::Failed {
            reason: "boom".to_string(),
        };
        assert_eq!(failed.to_string(), "failed: boom");
        assert_eq!(ModelState::NotInitialized.to_string(), "not initialized");
    }
}
