use ratatui::{Terminal, backend::CrosstermBackend};

use crate::args::Args;

use super::terminal::{restore_terminal, setup_terminal};

mod background;
mod channels;
mod cleanup;
mod event_loop;
mod init;

use background::{spawn_event_thread, spawn_source_watcher};
use channels::Channels;
use cleanup::cleanup_on_exit;
use event_loop::run_event_loop;
use init::{initialize_app_state, watch_interval};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the file-downloader TUI end-to-end.
///
/// Inputs:
/// - `args`: Parsed command line (file list source, watch and report options)
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on terminal setup/restore failures.
///
/// Details:
/// - Loads `settings.conf`, the initial file list, and starts the watcher when a
///   file is given and watching is enabled.
/// - `FILE_DOWNLOADER_TEST_HEADLESS=1` skips terminal setup and the event thread.
pub async fn run(args: &Args) -> Result<()> {
    let headless = std::env::var("FILE_DOWNLOADER_TEST_HEADLESS").ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let settings = crate::theme::settings();
    let (mut app, baseline) = initialize_app_state(args, &settings);
    let mut channels = Channels::new();

    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );
    let watcher = spawn_source_watcher(
        args.files.clone(),
        watch_interval(args, &settings),
        baseline,
        channels.source_tx.clone(),
    );

    run_event_loop(&mut terminal, &mut app, &mut channels).await;

    cleanup_on_exit(&app, &channels, watcher);

    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
