use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock, PoisonError};
use std::time::SystemTime;

use tracing::{debug, warn};

use super::parsing::{parse_bool, parse_key_chords, split_config_line};
use super::paths::resolve_settings_config_path;
use super::types::Settings;

/// Lower bound for the watch interval, applied to config and command-line values.
pub const MIN_WATCH_INTERVAL_MS: u64 = 100;

struct SettingsCache {
    settings: Settings,
    path: Option<PathBuf>,
    mtime: Option<SystemTime>,
    initialized: bool,
}

static SETTINGS_CACHE: OnceLock<Mutex<SettingsCache>> = OnceLock::new();

/// What: Load user settings and key bindings from `settings.conf` under HOME/XDG.
///
/// Inputs:
/// - None (reads `settings.conf` if present)
///
/// Output:
/// - A `Settings` value; falls back to `Settings::default()` when missing or unreadable.
///
/// Details:
/// - Re-parses only when the resolved path or its modification time changed.
#[must_use]
pub fn settings() -> Settings {
    let mut cache = SETTINGS_CACHE
        .get_or_init(|| {
            Mutex::new(SettingsCache {
                settings: Settings::default(),
                path: None,
                mtime: None,
                initialized: false,
            })
        })
        .lock()
        .unwrap_or_else(PoisonError::into_inner);

    let path = resolve_settings_config_path();
    let mtime = path
        .as_ref()
        .and_then(|p| fs::metadata(p).and_then(|m| m.modified()).ok());
    if cache.initialized && cache.path == path && cache.mtime == mtime {
        return cache.settings.clone();
    }

    let mut out = Settings::default();
    match path.as_ref().map(|p| (p, fs::read_to_string(p))) {
        Some((p, Ok(content))) => {
            debug!(path = %p.display(), bytes = content.len(), "[Config] Loaded settings.conf");
            parse_settings(&content, &mut out);
        }
        Some((p, Err(e))) => {
            warn!(path = %p.display(), error = %e, "[Config] settings.conf unreadable, using defaults");
        }
        None => debug!("[Config] no settings.conf found, using defaults"),
    }

    cache.settings = out.clone();
    cache.path = path;
    cache.mtime = mtime;
    cache.initialized = true;
    out
}

/// What: Parse settings and `keybind_*` entries from `settings.conf` content.
///
/// Inputs:
/// - `content`: File content.
/// - `settings`: Settings to update in place.
///
/// Output:
/// - None (modifies `settings`).
///
/// Details:
/// - Unknown keys are logged and ignored; invalid values keep the previous value.
/// - A `keybind_*` entry replaces every default chord of that action.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        let Some((key, val)) = split_config_line(line) else {
            continue;
        };
        match key.as_str() {
            "watch_interval_ms" | "poll_interval_ms" => match val.parse::<u64>() {
                Ok(v) => settings.watch_interval_ms = v.max(MIN_WATCH_INTERVAL_MS),
                Err(_) => warn!(value = val, "[Config] invalid watch_interval_ms"),
            },
            "show_keybinds_footer" | "keybinds_visible" => {
                settings.show_keybinds_footer = parse_bool(val);
            }
            k if k.starts_with("keybind_") => apply_keybind(k, val, settings),
            other => debug!(key = other, "[Config] unknown settings key ignored"),
        }
    }
}

/// Apply one `keybind_<action> = chord[, chord...]` entry.
fn apply_keybind(key: &str, val: &str, settings: &mut Settings) {
    let chords = parse_key_chords(val);
    if chords.is_empty() {
        warn!(key, value = val, "[Config] keybind has no valid chord");
        return;
    }
    let km = &mut settings.keymap;
    let slot = match key {
        "keybind_toggle" | "keybind_select" => &mut km.toggle,
        "keybind_toggle_all" | "keybind_select_all" => &mut km.toggle_all,
        "keybind_download" => &mut km.download,
        "keybind_up" => &mut km.up,
        "keybind_down" => &mut km.down,
        "keybind_top" => &mut km.top,
        "keybind_bottom" => &mut km.bottom,
        "keybind_help" => &mut km.help,
        "keybind_exit" | "keybind_quit" => &mut km.exit,
        _ => {
            debug!(key, "[Config] unknown keybind ignored");
            return;
        }
    };
    *slot = chords;
}
