use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use ratatui::style::Color;

use super::parsing::{canonical_for_key, parse_color_value, split_config_line};
use super::paths::resolve_theme_config_path;
use super::types::Theme;

/// Theme loaded once per process.
static THEME_STORE: OnceLock<Theme> = OnceLock::new();

/// What: Apply `theme.conf` overrides on top of the default palette.
///
/// Inputs:
/// - `content`: Theme file content (`key = color` lines)
///
/// Output:
/// - The resulting theme and one diagnostic per rejected line.
///
/// Details:
/// - Missing keys keep their default color; a broken line never aborts loading.
pub fn parse_theme(content: &str) -> (Theme, Vec<String>) {
    let mut theme = Theme::default();
    let mut errors = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let Some((key, value)) = split_config_line(line) else {
            continue;
        };
        let Some(canon) = canonical_for_key(&key) else {
            errors.push(format!("unknown key '{key}' on line {line_no}"));
            continue;
        };
        let Some(color) = parse_color_value(value) else {
            errors.push(format!(
                "invalid color for '{key}' on line {line_no} (use #RRGGBB or R,G,B)"
            ));
            continue;
        };
        *slot_for(&mut theme, canon) = color;
    }
    (theme, errors)
}

/// Palette slot addressed by a canonical key from [`canonical_for_key`].
fn slot_for<'a>(theme: &'a mut Theme, canon: &str) -> &'a mut Color {
    match canon {
        "base" => &mut theme.base,
        "surface1" => &mut theme.surface1,
        "surface2" => &mut theme.surface2,
        "overlay1" => &mut theme.overlay1,
        "subtext0" => &mut theme.subtext0,
        "sapphire" => &mut theme.sapphire,
        "mauve" => &mut theme.mauve,
        "green" => &mut theme.green,
        "yellow" => &mut theme.yellow,
        "red" => &mut theme.red,
        _ => &mut theme.text,
    }
}

/// Load a theme file, logging diagnostics; unreadable files yield the default palette.
fn load_theme_from_file(path: &Path) -> Theme {
    match fs::read_to_string(path) {
        Ok(content) => {
            let (theme, errors) = parse_theme(&content);
            for e in &errors {
                tracing::warn!(path = %path.display(), "theme configuration: {e}");
            }
            tracing::info!(path = %path.display(), "loaded theme configuration");
            theme
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "theme configuration unreadable");
            Theme::default()
        }
    }
}

fn load_initial_theme() -> Theme {
    resolve_theme_config_path().map_or_else(Theme::default, |p| load_theme_from_file(&p))
}

/// Return the application's theme palette, loading `theme.conf` on first use.
///
/// The file is searched in `$HOME/.config/file-downloader/theme.conf` and then
/// `$XDG_CONFIG_HOME/file-downloader/theme.conf`.
///
/// Format: `key = value`, one per line; values are colors as `#RRGGBB` or `R,G,B`.
pub fn theme() -> Theme {
    *THEME_STORE.get_or_init(load_initial_theme)
}
