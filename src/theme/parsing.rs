use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::style::Color;

use super::types::KeyChord;

/// What: Parse a single key identifier (e.g., "F5", "Esc", "Space", "a") into a [`KeyCode`].
///
/// Inputs:
/// - `s`: Raw key token from a configuration string.
///
/// Output:
/// - `Some(KeyCode)` on success; `None` when the input token is unsupported.
///
/// Details:
/// - Character keys keep their case so `G` and `g` stay distinct bindings.
pub(crate) fn parse_key_identifier(s: &str) -> Option<KeyCode> {
    let t = s.trim();
    if let Some(num) = t
        .strip_prefix(['F', 'f'])
        .and_then(|x| x.parse::<u8>().ok())
    {
        return Some(KeyCode::F(num));
    }
    match t.to_ascii_uppercase().as_str() {
        "ESC" | "ESCAPE" => Some(KeyCode::Esc),
        "ENTER" | "RETURN" => Some(KeyCode::Enter),
        "TAB" => Some(KeyCode::Tab),
        "BACKTAB" => Some(KeyCode::BackTab),
        "BACKSPACE" => Some(KeyCode::Backspace),
        "DELETE" | "DEL" => Some(KeyCode::Delete),
        "INSERT" | "INS" => Some(KeyCode::Insert),
        "HOME" => Some(KeyCode::Home),
        "END" => Some(KeyCode::End),
        "PAGEUP" | "PGUP" => Some(KeyCode::PageUp),
        "PAGEDOWN" | "PGDN" => Some(KeyCode::PageDown),
        "UP" => Some(KeyCode::Up),
        "DOWN" => Some(KeyCode::Down),
        "LEFT" => Some(KeyCode::Left),
        "RIGHT" => Some(KeyCode::Right),
        "SPACE" => Some(KeyCode::Char(' ')),
        _ => {
            let mut chars = t.chars();
            if let (Some(ch), None) = (chars.next(), chars.next()) {
                Some(KeyCode::Char(ch))
            } else {
                None
            }
        }
    }
}

/// What: Parse a key chord such as "Ctrl+C" or "Shift+Tab" into a [`KeyChord`].
///
/// Inputs:
/// - `chord`: Optional modifiers joined with `+` and a trailing key token.
///
/// Output:
/// - `Some(KeyChord)` when parsing succeeds; `None` for an unknown key.
///
/// Details:
/// - `Shift+Tab` becomes the dedicated `BackTab` key with modifiers cleared.
/// - Letters are stored uppercase with `Shift` and lowercase with `Ctrl`/`Alt`/`Super`
///   alone, which is how terminals report them.
pub(crate) fn parse_key_chord(chord: &str) -> Option<KeyChord> {
    let mut mods = KeyModifiers::empty();
    let mut key_part: Option<String> = None;
    for part in chord.split('+') {
        let p = part.trim();
        if p.is_empty() {
            continue;
        }
        match p.to_ascii_uppercase().as_str() {
            "CTRL" | "CONTROL" => mods |= KeyModifiers::CONTROL,
            "ALT" => mods |= KeyModifiers::ALT,
            "SHIFT" => mods |= KeyModifiers::SHIFT,
            "SUPER" | "META" | "WIN" => mods |= KeyModifiers::SUPER,
            _ => key_part = Some(p.to_string()),
        }
    }
    if key_part
        .as_deref()
        .is_some_and(|k| k.eq_ignore_ascii_case("tab"))
        && mods.contains(KeyModifiers::SHIFT)
    {
        return Some(KeyChord {
            code: KeyCode::BackTab,
            mods: KeyModifiers::empty(),
        });
    }
    let code = match parse_key_identifier(key_part.as_deref().unwrap_or(""))? {
        KeyCode::Char(ch) if mods.contains(KeyModifiers::SHIFT) => {
            KeyCode::Char(ch.to_ascii_uppercase())
        }
        KeyCode::Char(ch) if !mods.is_empty() => KeyCode::Char(ch.to_ascii_lowercase()),
        other => other,
    };
    Some(KeyChord { code, mods })
}

/// What: Parse a comma separated list of chords, e.g. `"q, Ctrl+C"`.
///
/// Output:
/// - Every chord that parsed; invalid entries are skipped.
pub(crate) fn parse_key_chords(list: &str) -> Vec<KeyChord> {
    list.split(',').filter_map(parse_key_chord).collect()
}

/// What: Parse a color literal from configuration text into a [`Color`].
///
/// Inputs:
/// - `s`: Color specification, already stripped of inline comments.
///
/// Output:
/// - `Some(Color)` for `#RRGGBB`, `RRGGBB` or `R,G,B`; `None` otherwise.
pub(crate) fn parse_color_value(s: &str) -> Option<Color> {
    let t = s.trim();
    if t.is_empty() {
        return None;
    }
    let h = t.strip_prefix('#').unwrap_or(t);
    if h.len() == 6 && h.chars().all(|c| c.is_ascii_hexdigit()) {
        let r = u8::from_str_radix(&h[0..2], 16).ok()?;
        let g = u8::from_str_radix(&h[2..4], 16).ok()?;
        let b = u8::from_str_radix(&h[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    let parts: Vec<&str> = t.split(',').collect();
    if let [r, g, b] = parts.as_slice() {
        let r = r.trim().parse::<u8>().ok()?;
        let g = g.trim().parse::<u8>().ok()?;
        let b = b.trim().parse::<u8>().ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    None
}

/// What: Parse a boolean setting value.
///
/// Output:
/// - `true` for `true`, `1`, `yes`, `on` (any case); `false` for anything else.
pub(crate) fn parse_bool(s: &str) -> bool {
    matches!(
        s.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

/// What: Split a `key = value` configuration line.
///
/// Output:
/// - `Some((normalized_key, value))` with the key lowercased and `.`/`-`/space mapped to `_`
///   and inline comments removed from the value; `None` for blank, comment, or malformed lines.
pub(crate) fn split_config_line(line: &str) -> Option<(String, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
        return None;
    }
    let (raw_key, raw_val) = trimmed.split_once('=')?;
    let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
    Some((key, strip_inline_comment(raw_val.trim())))
}

/// What: Remove inline comments from a configuration value while preserving leading hex markers.
///
/// Inputs:
/// - `s`: Raw configuration value that may include inline comments.
///
/// Output:
/// - Comment-free and trimmed substring of the input.
///
/// Details:
/// - Strips trailing `//` sections and secondary `#` characters without harming `#RRGGBB`.
pub(crate) fn strip_inline_comment(mut s: &str) -> &str {
    if let Some(i) = s.find("//") {
        s = &s[..i];
    }
    if let Some(i_rel) = if let Some(stripped) = s.strip_prefix('#') {
        stripped.find('#').map(|j| j + 1)
    } else {
        s.find('#')
    } {
        s = &s[..i_rel];
    }
    s.trim()
}

/// What: Map a normalized theme key to the palette slot it configures.
///
/// Details:
/// - Accepts both palette names (`green`) and role names (`semantic_success`).
pub(crate) fn canonical_for_key(norm: &str) -> Option<&'static str> {
    match norm {
        "base" | "background" | "background_base" => Some("base"),
        "surface1" | "surface_level1" => Some("surface1"),
        "surface2" | "surface_level2" | "cursor" => Some("surface2"),
        "overlay1" | "overlay_primary" | "border_primary" => Some("overlay1"),
        "text" | "text_primary" => Some("text"),
        "subtext0" | "text_secondary" | "text_disabled" => Some("subtext0"),
        "sapphire" | "accent_interactive" => Some("sapphire"),
        "mauve" | "accent_heading" => Some("mauve"),
        "green" | "semantic_success" | "status_available" => Some("green"),
        "yellow" | "semantic_warning" | "status_scheduled" => Some("yellow"),
        "red" | "semantic_error" => Some("red"),
        _ => None,
    }
}
