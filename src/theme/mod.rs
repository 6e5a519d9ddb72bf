//! Theme and settings for file-downloader.
//!
//! Split into submodules for maintainability. Public re-exports keep the
//! `crate::theme::*` API stable.

/// Configuration parsing utilities.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings access and parsing.
mod settings;
/// Theme store and caching.
mod store;
/// Theme type definitions.
mod types;

pub use paths::{config_dir, logs_dir};
pub use settings::{MIN_WATCH_INTERVAL_MS, parse_settings, settings};
pub use store::{parse_theme, theme};
pub use types::{KeyChord, KeyMap, Settings, Theme};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize environment-mutating tests.
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
