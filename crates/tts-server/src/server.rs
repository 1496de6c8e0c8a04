//! TTS API server: warmup, serve, release.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use runtime::signal::shutdown_signal;
use runtime::Lifecycle;
use tts_core::{ServerConfig, TtsError, TtsModel, TtsResult};

use crate::routes::create_router;
use crate::state::AppContext;

/// The API server.
///
/// The listener is only bound after the model warmed up; the model is
/// released after the listener stopped, or right away if warmup failed.
pub struct TtsServer {
    config: ServerConfig,
    lifecycle: Lifecycle,
}

impl TtsServer {
    pub fn new(config: ServerConfig, model: Arc<dyn TtsModel>) -> Self {
        Self {
            config,
            lifecycle: Lifecycle::new(model),
        }
    }

    /// Context handed to request handlers.
    pub fn context(&self) -> AppContext {
        AppContext::new(self.lifecycle.handle().clone())
    }

    /// Run until SIGINT/SIGTERM.
    pub async fn run(self) -> TtsResult<()> {
        self.run_until(shutdown_signal()).await
    }

    /// Run until `shutdown` resolves.
    pub async fn run_until<F>(self, shutdown: F) -> TtsResult<()>
    where
        F: Future<Output = ()> + Send,
    {
        let app = create_router(self.context());
        let addr = self.config.http_addr;
        let timeout = Duration::from_secs(self.config.shutdown_timeout_secs);

        self.lifecycle
            .run_scoped(|report| async move {
                let listener = TcpListener::bind(addr).await?;
                info!(
                    addr = %listener.local_addr()?,
                    device = %report.device,
                    voice_count = report.voice_count,
                    "TTS server started"
                );
                serve(listener, app, shutdown, timeout).await
            })
            .await
    }
}

async fn serve<F>(
    listener: TcpListener,
    app: Router,
    shutdown: F,
    timeout: Duration,
) -> TtsResult<()>
where
    F: Future<Output = ()> + Send,
{
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    let mut handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown_rx.changed().await.ok();
            })
            .await
    });

    tokio::select! {
        _ = shutdown => {
            info!("Shutdown signal received, stopping server...");
        }
        finished = &mut handle => {
            return match finished {
                Ok(result) => result.map_err(TtsError::from),
                Err(e) => Err(TtsError::internal(format!("server task failed: {e}"))),
            };
        }
    }

    let _ = shutdown_tx.send(true);
    drain(handle, timeout).await.map(|_| ())
}

/// Wait up to `timeout` for the server task to finish, then abort it.
///
/// Returns `true` if the task had to be aborted. The task is gone either
/// way when this returns.
async fn drain(
    mut handle: JoinHandle<std::io::Result<()>>,
    timeout: Duration,
) -> TtsResult<bool> {
    match tokio::time::timeout(timeout, &mut handle).await {
        Ok(Ok(result)) => {
            result?;
            info!("Server stopped gracefully");
            Ok(false)
        }
        Ok(Err(e)) => Err(TtsError::internal(format!("server task failed: {e}"))),
        Err(_) => {
            warn!("Shutdown timeout, aborting server task");
            handle.abort();
            let _ = handle.await;
            Ok(true)
        }
    }
}
