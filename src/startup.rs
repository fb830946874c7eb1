// Startup gate: hold off serving until the speedtest log exists and has content.

use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

use thiserror::Error;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("timed out after {timeout:?} waiting for file '{path}'")]
    TimedOut { path: String, timeout: Duration },
}

/// Polls `path` every `poll_interval` until it is a non-empty file, or fails after `timeout`.
/// The first check happens immediately.
pub async fn wait_for_file(
    path: &Path,
    poll_interval: Duration,
    timeout: Duration,
) -> Result<(), StartupError> {
    let mut tick = tokio::time::interval(poll_interval);
    tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let deadline = tokio::time::sleep(timeout);
    tokio::pin!(deadline);

    loop {
        tokio::select! {
            _ = tick.tick() => {
                match tokio::fs::metadata(path).await {
                    Ok(meta) if meta.len() > 0 => {
                        info!(path = %path.display(), "log file found and has content");
                        return Ok(());
                    }
                    Ok(_) => info!(path = %path.display(), "log file is empty, waiting"),
                    Err(e) if e.kind() == ErrorKind::NotFound => {
                        info!(path = %path.display(), "waiting for log file")
                    }
                    Err(e) => warn!(path = %path.display(), error = %e, "error checking log file"),
                }
            }
            _ = &mut deadline => {
                return Err(StartupError::TimedOut {
                    path: path.display().to_string(),
                    timeout,
                });
            }
        }
    }
}
