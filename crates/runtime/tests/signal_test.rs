//! Shutdown signal handling.

#![cfg(unix)]

use std::process::Command;
use std::time::Duration;

use runtime::signal::shutdown_signal;

#[tokio::test]
async fn test_sigterm_resolves_shutdown_signal() {
    let waiter = tokio::spawn(shutdown_signal());

    // Let the task install its handlers before the signal is sent.
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(!waiter.is_finished());

    let status = Command::new("kill")
        .args(["-TERM", &std::process::id().to_string()])
        .status()
        .unwrap();
    assert!(status.success());

    tokio::time::timeout(Duration::from_secs(5), waiter)
        .await
        .expect("SIGTERM did not end the wait")
        .unwrap();
}
