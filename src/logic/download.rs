//! Download action: report the identifying information of selected files.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use super::FileSelection;

/// What: Build the download report for the current selection.
///
/// Inputs:
/// - `selection`: Current selection state
///
/// Output:
/// - `Some(report)` with one `device: <device>, path: <path>` line per selected file,
///   joined by newlines; `None` when nothing is selected.
#[must_use]
pub fn download_report(selection: &FileSelection) -> Option<String> {
    if !selection.can_download() {
        return None;
    }
    let lines: Vec<String> = selection
        .selected_files()
        .map(|f| format!("device: {}, path: {}", f.file.device, f.file.path))
        .collect();
    Some(lines.join("\n"))
}

/// What: Append a download report to a file.
///
/// Inputs:
/// - `path`: Report file; created when missing
/// - `report`: Text produced by [`download_report`]
///
/// Output:
/// - `Ok(())` on success; the I/O error otherwise.
///
/// Details:
/// - Each report is terminated by a blank line so consecutive downloads stay separable.
pub fn append_report(path: &Path, report: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{report}")?;
    writeln!(file)?;
    Ok(())
}
