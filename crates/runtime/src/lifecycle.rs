//! Model warmup and teardown.
//!
//! [`Lifecycle`] is driven by the hosting process at its boundaries: `start`
//! once before serving, `stop` once after. Every start attempt is paired
//! with exactly one release of the model, whether or not setup succeeded.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{error, info};

use tts_core::{ModelHandle, ModelState, TtsError, TtsModel, TtsResult, WarmupReport};

/// Two-phase lifecycle around a [`TtsModel`].
pub struct Lifecycle {
    model: Arc<dyn TtsModel>,
    handle: ModelHandle,
    release_pending: AtomicBool,
}

impl Lifecycle {
    /// Create a lifecycle with a fresh model handle.
    pub fn new(model: Arc<dyn TtsModel>) -> Self {
        Self::with_handle(model, ModelHandle::new())
    }

    /// Create a lifecycle that publishes into an existing handle.
    pub fn with_handle(model: Arc<dyn TtsModel>, handle: ModelHandle) -> Self {
        Self {
            model,
            handle,
            release_pending: AtomicBool::new(false),
        }
    }

    /// Handle observing the model state.
    pub fn handle(&self) -> &ModelHandle {
        &self.handle
    }

    /// Warm the model up.
    ///
    /// Setup errors are returned unchanged and leave the handle in
    /// `Failed`. A release is scheduled before setup runs, so [`stop`]
    /// must still be called after a failure.
    ///
    /// [`stop`]: Lifecycle::stop
    pub async fn start(&self) -> TtsResult<WarmupReport> {
        info!("Loading TTS model and voice packs...");
        self.release_pending.store(true, Ordering::SeqCst);

        let model = Arc::clone(&self.model);
        let outcome = tokio::task::spawn_blocking(move || model.setup())
            .await
            .map_err(|e| TtsError::internal(format!("model setup task failed: {e}")))
            .and_then(|result| result);

        match outcome {
            Ok(voice_count) => {
                let device = self.model.device();
                info!(device = %device, "Model loaded and warmed up on {device}");
                info!(voice_count, "{voice_count} voice packs loaded successfully");

                let report = WarmupReport {
                    device,
                    voice_count,
                };
                self.handle.set(ModelState::Ready(report.clone()));
                Ok(report)
            }
            Err(e) => {
                self.handle.set(ModelState::Failed {
                    reason: e.to_string(),
                });
                Err(e)
            }
        }
    }

    /// Release the model.
    ///
    /// Runs the model's release hook at most once per [`start`] call.
    /// Returns whether the hook ran.
    ///
    /// [`start`]: Lifecycle::start
    pub fn stop(&self) -> bool {
        if !self.release_pending.swap(false, Ordering::SeqCst) {
            return false;
        }
        info!("Releasing TTS model");
        self.model.release();
        self.handle.set(ModelState::NotInitialized);
        true
    }

    /// Guard that calls [`stop`](Lifecycle::stop) when dropped.
    pub fn guard(&self) -> LifecycleGuard<'_> {
        LifecycleGuard { lifecycle: self }
    }

    /// Start, run `serve` with the warmup report, then stop.
    ///
    /// `serve` is not called if warmup fails; the warmup error is returned
    /// after the model was released.
    pub async fn run_scoped<F, Fut, T>(&self, serve: F) -> TtsResult<T>
    where
        F: FnOnce(WarmupReport) -> Fut,
        Fut: Future<Output = TtsResult<T>>,
    {
        let _guard = self.guard();
        let report = match self.start().await {
            Ok(report) => report,
            Err(e) => {
                error!(error = %e, "Model warmup failed");
                return Err(e);
            }
        };
        serve(report).await
    }
}

impl std::fmt::Debug for Lifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lifecycle")
            .field("state", &self.handle.state())
            .field("release_pending", &self.release_pending.load(Ordering::SeqCst))
            .finish()
    }
}

/// Scoped release of a [`Lifecycle`].
#[must_use = "the model is released as soon as the guard is dropped"]
pub struct LifecycleGuard<'a> {
    lifecycle: &'a Lifecycle,
}

impl Drop for LifecycleGuard<'_> {
    fn drop(&mut self) {
        self.lifecycle.stop();
    }
}
