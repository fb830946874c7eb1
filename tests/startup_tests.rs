// Startup gate tests: wait_for_file succeeds on content, times out otherwise

use std::time::Duration;

use speedview::startup::{StartupError, wait_for_file};

const POLL: Duration = Duration::from_millis(10);

#[tokio::test]
async fn test_existing_non_empty_file_returns_immediately() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("log.csv");
    std::fs::write(&path, "header\n").unwrap();
    wait_for_file(&path, POLL, Duration::from_secs(5))
        .await
        .expect("file is ready");
}

#[tokio::test]
async fn test_missing_file_times_out() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("never.csv");
    let err = wait_for_file(&path, POLL, Duration::from_millis(100))
        .await
        .unwrap_err();
    let StartupError::TimedOut { path: p, .. } = err;
    assert!(p.contains("never.csv"));
}

#[tokio::test]
async fn test_empty_file_times_out() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("empty.csv");
    std::fs::write(&path, "").unwrap();
    let result = wait_for_file(&path, POLL, Duration::from_millis(100)).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_file_written_while_waiting_is_picked_up() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("later.csv");
    let writer_path = path.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        std::fs::write(&writer_path, "header\nrow\n").unwrap();
    });
    wait_for_file(&path, POLL, Duration::from_secs(5))
        .await
        .expect("file appears before timeout");
}
