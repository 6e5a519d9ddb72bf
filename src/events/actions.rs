//! User actions shared by the keyboard and mouse handlers.

use crate::logic::{append_report, download_report};
use crate::state::{AppState, Modal};

/// What: Toggle the file under the cursor.
///
/// Output:
/// - `true` when a row was focused; `false` on an empty list.
pub fn toggle_focused(app: &mut AppState) -> bool {
    let Some(id) = app.focused().map(|f| f.id.clone()) else {
        return false;
    };
    app.selection.toggle(&id);
    tracing::debug!(id = %id, selected = app.selection.selected_count(), "toggled file");
    true
}

/// Apply the select-all control.
pub fn toggle_all(app: &mut AppState) {
    let state = app.selection.toggle_all();
    tracing::debug!(?state, selected = app.selection.selected_count(), "toggled all files");
}

/// What: Run the download action for the current selection.
///
/// Inputs:
/// - `app`: Application state; the report is shown in an alert modal
///
/// Output:
/// - `true` if a report was produced; `false` when the control is disabled (nothing selected).
///
/// Details:
/// - The report is logged and, when `report_path` is set, appended to that file.
/// - A failed append is surfaced in the alert instead of dropping the report.
pub fn download(app: &mut AppState) -> bool {
    let Some(report) = download_report(&app.selection) else {
        tracing::debug!("download requested with nothing selected; ignoring");
        return false;
    };
    let count = app.selection.selected_count();
    tracing::info!(count, report = %report, "download requested");

    let mut message = report;
    if let Some(path) = app.report_path.as_deref() {
        match append_report(path, &message) {
            Ok(()) => tracing::debug!(path = %path.display(), "appended download report"),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to append download report");
                message.push_str(&format!("\n\n(could not write {}: {e})", path.display()));
            }
        }
    }
    app.modal = Modal::Alert {
        title: format!("Download {count} file{}", if count == 1 { "" } else { "s" }),
        message,
    };
    true
}
