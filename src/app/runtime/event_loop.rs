use ratatui::Terminal;
use tokio::select;

use crate::sources::SourceUpdate;
use crate::state::AppState;
use crate::ui::ui;

use super::channels::Channels;

/// What: Apply a message from the file watcher.
///
/// Inputs:
/// - `app`: Application state
/// - `update`: Reloaded list or reload failure
///
/// Details:
/// - A new list is reconciled into the selection; a failure only records the
///   error so the previous list stays usable.
pub fn handle_source_update(app: &mut AppState, update: SourceUpdate) {
    match update {
        SourceUpdate::Files(files) => {
            tracing::info!(count = files.len(), "[Runtime] file list changed");
            app.apply_files(files);
        }
        SourceUpdate::Failed(msg) => {
            tracing::warn!(error = %msg, "[Runtime] file list reload failed");
            app.source_error = Some(msg);
        }
    }
}

/// What: Wait for and process one message from any channel.
///
/// Output:
/// - `true` when the loop should exit.
async fn process_channel_messages(app: &mut AppState, channels: &mut Channels) -> bool {
    select! {
        Some(ev) = channels.event_rx.recv() => {
            crate::events::handle_event(&ev, app)
        }
        Some(update) = channels.source_rx.recv() => {
            handle_source_update(app, update);
            false
        }
        else => true
    }
}

/// What: Run the main loop: render, then handle the next message, until exit is requested.
///
/// Inputs:
/// - `terminal`: Terminal to draw on (`None` in headless mode)
/// - `app`: Application state
/// - `channels`: Runtime channels
pub async fn run_event_loop(
    terminal: &mut Option<Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>>,
    app: &mut AppState,
    channels: &mut Channels,
) {
    loop {
        if let Some(t) = terminal.as_mut()
            && let Err(e) = t.draw(|f| ui(f, app))
        {
            tracing::warn!(error = %e, "[Runtime] draw failed");
        }

        if process_channel_messages(app, channels).await {
            break;
        }
    }
}
