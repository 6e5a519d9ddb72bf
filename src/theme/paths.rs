use std::env;
use std::path::{Path, PathBuf};

/// Directory name used under the XDG/HOME config base.
const APP_DIR: &str = "file-downloader";

/// What: Locate a config file by name, searching HOME first and then `XDG_CONFIG_HOME`.
///
/// Inputs:
/// - `file_name`: File to look for, e.g. `settings.conf`.
///
/// Output:
/// - First existing candidate; `None` when no candidate is a regular file.
fn resolve_config_file(file_name: &str) -> Option<PathBuf> {
    let home = env::var("HOME").ok();
    let xdg_config = env::var("XDG_CONFIG_HOME").ok();
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(h) = home.as_deref() {
        candidates.push(Path::new(h).join(".config").join(APP_DIR).join(file_name));
    }
    if let Some(xdg) = xdg_config.as_deref() {
        candidates.push(Path::new(xdg).join(APP_DIR).join(file_name));
    }
    candidates.into_iter().find(|p| p.is_file())
}

/// Determine the configuration file path for the color THEME (`theme.conf`).
pub(crate) fn resolve_theme_config_path() -> Option<PathBuf> {
    resolve_config_file("theme.conf")
}

/// Determine the configuration file path for SETTINGS and key bindings (`settings.conf`).
pub(crate) fn resolve_settings_config_path() -> Option<PathBuf> {
    resolve_config_file("settings.conf")
}

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Config directory for file-downloader (ensured to exist).
///
/// Prefers `$HOME/.config/file-downloader`, falling back to `$XDG_CONFIG_HOME/file-downloader`.
pub fn config_dir() -> PathBuf {
    if let Ok(home) = env::var("HOME") {
        let dir = Path::new(&home).join(".config").join(APP_DIR);
        if std::fs::create_dir_all(&dir).is_ok() {
            return dir;
        }
    }
    let dir = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join(APP_DIR);
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: `$HOME/.config/file-downloader/logs` (ensured to exist).
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}
