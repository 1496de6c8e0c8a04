//! Router tests for the liveness probe.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt; // for oneshot

use tts_core::{ModelHandle, ModelState, WarmupReport};
use tts_server::{create_router, AppContext};

async fn get_health(handle: ModelHandle) -> (StatusCode, Value) {
    let app = create_router(AppContext::new(handle));
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health_before_startup() {
    let (status, body) = get_health(ModelHandle::new()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy"}));
}

#[tokio::test]
async fn test_health_when_ready() {
    let handle = ModelHandle::new();
    handle.set(ModelState::Ready(WarmupReport {
        device: "cuda".to_string(),
        voice_count: 3,
    }));

    let (status, body) = get_health(handle).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy"}));
}

#[tokio::test]
async fn test_health_after_failed_warmup() {
    let handle = ModelHandle::new();
    handle.set(ModelState::Failed {
        reason: "Failed to initialize model".to_string(),
    });

    let (status, body) = get_health(handle).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy"}));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = create_router(AppContext::new(ModelHandle::new()));
    let response = app
        .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_server_serves_health_over_tcp() {
    use std::path::{Path, PathBuf};
    use std::sync::Arc;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tts_core::{ServerConfig, TtsModel, TtsResult};
    use tts_server::TtsServer;

    struct Ready(PathBuf);
    impl TtsModel for Ready {
        fn setup(&self) -> TtsResult<usize> {
            Ok(1)
        }
        fn device(&self) -> String {
            "cpu".to_string()
        }
        fn voices_dir(&self) -> &Path {
            &self.0
        }
    }

    // Reserve a free port, then hand it to the server.
    let probe = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = probe.local_addr().unwrap();
    drop(probe);

    let server = TtsServer::new(
        ServerConfig {
            http_addr: addr,
            shutdown_timeout_secs: 5,
        },
        Arc::new(Ready(PathBuf::from("/voices"))),
    );
    let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();
    let task = tokio::spawn(server.run_until(async {
        stop_rx.await.ok();
    }));

    let mut stream = None;
    for _ in 0..50 {
        match tokio::net::TcpStream::connect(addr).await {
            Ok(s) => {
                stream = Some(s);
                break;
            }
            Err(_) => tokio::time::sleep(std::time::Duration::from_millis(20)).await,
        }
    }
    let mut stream = stream.expect("server did not start listening");
    stream
        .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();

    assert!(response.starts_with("HTTP/1.1 200"), "{response}");
    assert!(response.ends_with(r#"{"status":"healthy"}"#), "{response}");

    stop_tx.send(()).unwrap();
    task.await.unwrap().unwrap();
}
