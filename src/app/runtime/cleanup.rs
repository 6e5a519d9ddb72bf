use std::sync::atomic::Ordering;

use tokio::task::JoinHandle;

use crate::state::AppState;

use super::channels::Channels;

/// What: Stop background work once the loop has exited.
///
/// Inputs:
/// - `app`: Application state (for the exit summary)
/// - `channels`: Runtime channels
/// - `watcher`: File watcher task, if one was started
pub fn cleanup_on_exit(app: &AppState, channels: &Channels, watcher: Option<JoinHandle<()>>) {
    channels.event_thread_cancelled.store(true, Ordering::Relaxed);
    if let Some(handle) = watcher {
        handle.abort();
    }
    tracing::debug!(
        syncs = app.sync_count,
        selected = app.selection.selected_count(),
        "[Runtime] main loop exited"
    );
}
