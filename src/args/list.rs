//! Command-line listing of the file list.

use unicode_width::UnicodeWidthStr;

use crate::logic::FileSelection;
use crate::ui::status_label;

/// What: Format the file list as a plain-text table.
///
/// Inputs:
/// - `selection`: Records to print
///
/// Output:
/// - One line per file: status, name, and id, columns padded to the widest entry.
#[must_use]
pub fn format_list(selection: &FileSelection) -> String {
    let name_w = selection
        .files()
        .iter()
        .map(|f| f.file.name.width())
        .max()
        .unwrap_or(0);
    selection
        .files()
        .iter()
        .map(|f| {
            let pad = name_w.saturating_sub(f.file.name.width());
            format!(
                "{:<9}  {}{}  {}",
                status_label(f.file.status),
                f.file.name,
                " ".repeat(pad),
                f.id
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// What: Handle `--list` by printing the file list and exiting.
///
/// Inputs:
/// - `args`: Parsed arguments (uses `--files`)
///
/// Output:
/// - Exits the process: status 0 after printing, 1 when the list cannot be loaded.
pub fn handle_list(args: &crate::args::Args) -> ! {
    tracing::info!(source = %args.source_label(), "List files requested from CLI");
    match args.initial_files() {
        Ok(files) => {
            let selection = FileSelection::from_files(files);
            println!("{}", format_list(&selection));
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("{e}");
            tracing::error!(error = %e, "failed to load file list");
            std::process::exit(1);
        }
    }
}
