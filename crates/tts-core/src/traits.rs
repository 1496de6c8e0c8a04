//! Capability trait implemented by concrete TTS models.

use std::path::Path;

use crate::error::TtsResult;

/// A TTS model as seen by the service lifecycle.
///
/// Inference itself is not part of this trait; the lifecycle only needs to
/// warm the model up, learn where it runs, and release it again.
pub trait TtsModel: Send + Sync {
    /// Load weights and voice packs.
    ///
    /// Blocking. Returns the number of voice packs that were loaded.
    fn setup(&self) -> TtsResult<usize>;

    /// Device identifier the model resolved for itself (e.g. `"cuda"`, `"cpu"`).
    fn device(&self) -> String;

    /// Directory the model reads its voice packs from.
    fn voices_dir(&self) -> &Path;

    /// Release resources acquired by [`TtsModel::setup`].
    ///
    /// Called on shutdown even if `setup` failed, so implementations must
    /// tolerate partially initialized state.
    fn release(&self) {}
}
