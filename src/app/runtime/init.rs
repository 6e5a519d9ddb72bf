use std::time::Duration;

use crate::args::Args;
use crate::sources::{FileStamp, file_stamp};
use crate::state::{AppState, Modal};
use crate::theme::Settings;

/// What: Build the initial [`AppState`] from settings and command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command line
/// - `settings`: Loaded `settings.conf`
///
/// Output:
/// - Ready-to-render state. A file list that cannot be loaded leaves the table
///   empty and opens an alert describing the failure.
/// - Stamp of `--files` taken right before the load, the watcher's baseline.
pub fn initialize_app_state(args: &Args, settings: &Settings) -> (AppState, FileStamp) {
    let mut app = AppState {
        keymap: settings.keymap.clone(),
        show_keybinds_footer: settings.show_keybinds_footer,
        source_label: args.source_label(),
        report_path: args.report.clone(),
        ..AppState::default()
    };

    let baseline = args.files.as_deref().and_then(file_stamp);
    match args.initial_files() {
        Ok(files) => {
            tracing::info!(count = files.len(), source = %app.source_label, "loaded file list");
            app.apply_files(files);
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to load file list");
            app.source_error = Some(e.to_string());
            app.modal = Modal::Alert {
                title: "Cannot load file list".to_string(),
                message: e.to_string(),
            };
        }
    }
    (app, baseline)
}

/// Effective watcher poll period, `None` when watching is off.
pub fn watch_interval(args: &Args, settings: &Settings) -> Option<Duration> {
    args.watch_interval(settings.watch_interval_ms)
}
