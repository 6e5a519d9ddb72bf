//! Polling watcher that reloads the file list when it changes on disk.

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::files::load_files;
use crate::state::RemoteFile;

/// Message from the watcher to the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceUpdate {
    /// A freshly loaded, complete file list.
    Files(Vec<RemoteFile>),
    /// Reloading failed; the previous list stays in place.
    Failed(String),
}

/// Modification time and size of a watched file; `None` when it cannot be read.
pub type FileStamp = Option<(SystemTime, u64)>;

/// What: Take the current [`FileStamp`] of `path`.
///
/// Details:
/// - Take it before loading the list the watcher should compare against, so an
///   edit between that load and the watcher start is still reported.
#[must_use]
pub fn file_stamp(path: &Path) -> FileStamp {
    let meta = std::fs::metadata(path).ok()?;
    Some((meta.modified().ok()?, meta.len()))
}

/// What: Spawn a task that polls `path` and sends reloaded lists over `tx`.
///
/// Inputs:
/// - `path`: JSON file list to watch
/// - `interval`: Poll period
/// - `baseline`: Stamp taken right before the caller loaded the current list
/// - `tx`: Channel to the runtime
///
/// Output:
/// - Handle of the spawned task; it ends when the receiver is dropped.
///
/// Details:
/// - The first poll already compares against `baseline`, so changes made after
///   the caller's load are delivered even if they predate the task.
/// - Loading runs on the blocking pool.
pub fn spawn_file_watcher(
    path: PathBuf,
    interval: Duration,
    baseline: FileStamp,
    tx: mpsc::UnboundedSender<SourceUpdate>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut last = baseline;
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        ticker.tick().await;
        tracing::info!(path = %path.display(), interval_ms = interval.as_millis(), "watching file list");
        loop {
            ticker.tick().await;
            if tx.is_closed() {
                break;
            }
            let current = file_stamp(&path);
            if current == last {
                continue;
            }
            last = current;
            let load_path = path.clone();
            let update = match tokio::task::spawn_blocking(move || load_files(&load_path)).await {
                Ok(Ok(files)) => {
                    tracing::info!(path = %path.display(), count = files.len(), "file list changed");
                    SourceUpdate::Files(files)
                }
                Ok(Err(e)) => {
                    tracing::warn!(error = %e, "file list reload failed; keeping previous list");
                    SourceUpdate::Failed(e.to_string())
                }
                Err(e) => {
                    tracing::error!(error = ?e, "file list reload task panicked");
                    SourceUpdate::Failed(format!("reload task failed: {e}"))
                }
            };
            if tx.send(update).is_err() {
                break;
            }
        }
        tracing::debug!("file list watcher exiting (channel closed)");
    })
}
