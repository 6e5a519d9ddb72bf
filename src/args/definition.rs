//! Command-line argument definition and processing.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::sources::{LoadError, demo_files, load_files};
use crate::state::RemoteFile;
use crate::theme::MIN_WATCH_INTERVAL_MS;

/// file-downloader - pick available remote files and report them for download
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "file-downloader")]
#[command(version)]
#[command(about = "Pick available remote files and report them for download", long_about = None)]
pub struct Args {
    /// JSON file with the file list (array of {name, device, path, status}); built-in sample when omitted
    #[arg(short, long)]
    pub files: Option<PathBuf>,

    /// Do not reload the file list when it changes on disk
    #[arg(long)]
    pub no_watch: bool,

    /// Poll interval for file list changes in milliseconds, at least 100 (overrides settings.conf)
    #[arg(long)]
    pub watch_interval_ms: Option<u64>,

    /// Append every download report to this file
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the file list with ids and exit without starting the TUI
    #[arg(short, long)]
    pub list: bool,
}

impl Args {
    /// What: Resolve the effective watch interval.
    ///
    /// Inputs:
    /// - `configured_ms`: Value from `settings.conf`
    ///
    /// Output:
    /// - `None` when watching is disabled or there is no file to watch.
    ///
    /// Details:
    /// - The result is never shorter than [`MIN_WATCH_INTERVAL_MS`].
    #[must_use]
    pub fn watch_interval(&self, configured_ms: u64) -> Option<Duration> {
        if self.no_watch || self.files.is_none() {
            return None;
        }
        Some(Duration::from_millis(
            self.watch_interval_ms.unwrap_or(configured_ms).max(MIN_WATCH_INTERVAL_MS),
        ))
    }

    /// Short description of where the file list comes from, shown in the UI.
    #[must_use]
    pub fn source_label(&self) -> String {
        self.files.as_ref().map_or_else(
            || "built-in sample".to_string(),
            |p| p.display().to_string(),
        )
    }

    /// What: Load the initial file list.
    ///
    /// Output:
    /// - Files from `--files`, or the built-in sample when no path was given.
    pub fn initial_files(&self) -> Result<Vec<RemoteFile>, LoadError> {
        self.files
            .as_deref()
            .map_or_else(|| Ok(demo_files()), load_files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Flags parse and derive the watch interval.
    ///
    /// Inputs:
    /// - `--files`, `--watch-interval-ms`, and `--no-watch` combinations.
    ///
    /// Output:
    /// - Interval only when a file is watched; CLI value beats config and is floored.
    fn args_parse_and_resolve_watch_interval() {
        let args = Args::parse_from(["file-downloader", "--files", "x.json"]);
        assert_eq!(args.watch_interval(500), Some(Duration::from_millis(500)));
        assert_eq!(args.source_label(), "x.json");

        let args = Args::parse_from([
            "file-downloader",
            "-f",
            "x.json",
            "--watch-interval-ms",
            "250",
        ]);
        assert_eq!(args.watch_interval(500), Some(Duration::from_millis(250)));

        let args = Args::parse_from(["file-downloader", "-f", "x.json", "--watch-interval-ms", "1"]);
        assert_eq!(
            args.watch_interval(500),
            Some(Duration::from_millis(MIN_WATCH_INTERVAL_MS))
        );

        let args = Args::parse_from(["file-downloader", "-f", "x.json", "--no-watch"]);
        assert_eq!(args.watch_interval(500), None);

        let args = Args::parse_from(["file-downloader"]);
        assert_eq!(args.watch_interval(500), None);
        assert_eq!(args.source_label(), "built-in sample");
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn initial_files_defaults_to_sample() {
        let args = Args::parse_from(["file-downloader"]);
        assert_eq!(args.initial_files().expect("sample"), demo_files());

        let args = Args::parse_from(["file-downloader", "-f", "/definitely/missing.json"]);
        assert!(args.initial_files().is_err());
    }
}
