use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::sources::{FileStamp, SourceUpdate, spawn_file_watcher};

/// What: Spawn the OS thread that reads terminal events.
///
/// Inputs:
/// - `headless`: Skip the thread entirely when `true`
/// - `event_tx`: Channel to the runtime loop
/// - `cancelled`: Exit flag checked between polls
///
/// Details:
/// - Polls with a 50ms timeout so the flag is honoured promptly.
/// - Stops when the receiver is dropped.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        loop {
            if cancelled.load(Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, "transient terminal read error");
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "terminal poll failed; stopping event thread");
                    break;
                }
            }
        }
        tracing::debug!("event thread exited");
    });
}

/// What: Start the file list watcher when a watch interval is configured.
///
/// Inputs:
/// - `path`: JSON file list, if one was given
/// - `interval`: Poll period, `None` when watching is disabled
/// - `baseline`: Stamp taken before the initial load
/// - `source_tx`: Channel to the runtime loop
///
/// Output:
/// - Handle of the watcher task, or `None` when nothing is watched.
pub fn spawn_source_watcher(
    path: Option<PathBuf>,
    interval: Option<Duration>,
    baseline: FileStamp,
    source_tx: mpsc::UnboundedSender<SourceUpdate>,
) -> Option<JoinHandle<()>> {
    let (path, interval) = path.zip(interval)?;
    Some(spawn_file_watcher(path, interval, baseline, source_tx))
}
