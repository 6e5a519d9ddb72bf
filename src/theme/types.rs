use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

/// Application theme palette used by rendering code.
///
/// All colors are [`ratatui::style::Color`] values suitable for direct use in styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Subtle surface color for the header row and buttons.
    pub surface1: Color,
    /// Cursor row background.
    pub surface2: Color,
    /// Border and low-emphasis line color.
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Dimmed text for disabled rows and controls.
    pub subtext0: Color,
    /// Accent for interactive highlights (checked boxes, enabled button).
    pub sapphire: Color,
    /// Accent for titles.
    pub mauve: Color,
    /// Available status and success color.
    pub green: Color,
    /// Scheduled status and warning color.
    pub yellow: Color,
    /// Error color.
    pub red: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
            surface1: Color::Rgb(0x45, 0x47, 0x5a),
            surface2: Color::Rgb(0x58, 0x5b, 0x70),
            overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
            sapphire: Color::Rgb(0x74, 0xc7, 0xec),
            mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
            green: Color::Rgb(0x94, 0xce, 0x50),
            yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
            red: Color::Rgb(0xf3, 0x8b, 0xa8),
        }
    }
}

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// How often the file list is checked for changes, in milliseconds.
    pub watch_interval_ms: u64,
    /// Whether the key hint footer is drawn.
    pub show_keybinds_footer: bool,
    /// Configurable key bindings.
    pub keymap: KeyMap,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            watch_interval_ms: 1000,
            show_keybinds_footer: true,
            keymap: KeyMap::default(),
        }
    }
}

/// A single keyboard chord (modifiers + key).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyChord {
    /// Key that must be pressed.
    pub code: KeyCode,
    /// Modifiers held with the key.
    pub mods: KeyModifiers,
}

impl KeyChord {
    /// Chord without modifiers.
    #[must_use]
    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }

    /// What: Check whether a terminal key event triggers this chord.
    ///
    /// Details:
    /// - Modifiers other than Shift must match exactly.
    /// - A `Shift+<letter>` chord matches the letter in either case when the event
    ///   carries Shift, and the uppercase letter when it does not.
    /// - Other char chords ignore a Shift modifier the terminal adds to uppercase letters.
    #[must_use]
    pub fn matches(&self, ke: &KeyEvent) -> bool {
        if (self.code, self.mods) == (ke.code, ke.modifiers) {
            return true;
        }
        let (KeyCode::Char(cfg_ch), KeyCode::Char(ev_ch)) = (self.code, ke.code) else {
            return false;
        };
        if self.mods.difference(KeyModifiers::SHIFT) != ke.modifiers.difference(KeyModifiers::SHIFT) {
            return false;
        }
        let ev_shift = ke.modifiers.contains(KeyModifiers::SHIFT);
        if self.mods.contains(KeyModifiers::SHIFT) {
            ev_ch.eq_ignore_ascii_case(&cfg_ch) && (ev_shift || ev_ch.is_ascii_uppercase())
        } else {
            ev_ch == cfg_ch
        }
    }

    /// Return a short display label such as "Ctrl+C", "Space", "F1".
    #[must_use]
    pub fn label(&self) -> String {
        let mut parts: Vec<&'static str> = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl");
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt");
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            parts.push("Shift");
        }
        if self.mods.contains(KeyModifiers::SUPER) {
            parts.push("Super");
        }
        let key = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(ch) => ch.to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::Delete => "Del".to_string(),
            KeyCode::Insert => "Ins".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::PageUp => "PgUp".to_string(),
            KeyCode::PageDown => "PgDn".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::F(n) => format!("F{n}"),
            _ => "?".to_string(),
        };
        if parts.is_empty() || matches!(self.code, KeyCode::BackTab) {
            key
        } else {
            format!("{}+{}", parts.join("+"), key)
        }
    }
}

/// Application key bindings.
/// Each action can have multiple chords.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyMap {
    /// Toggle the file under the cursor.
    pub toggle: Vec<KeyChord>,
    /// Apply the select-all control.
    pub toggle_all: Vec<KeyChord>,
    /// Report the selected files.
    pub download: Vec<KeyChord>,
    /// Move the cursor up one row.
    pub up: Vec<KeyChord>,
    /// Move the cursor down one row.
    pub down: Vec<KeyChord>,
    /// Jump to the first row.
    pub top: Vec<KeyChord>,
    /// Jump to the last row.
    pub bottom: Vec<KeyChord>,
    /// Show the key binding overview.
    pub help: Vec<KeyChord>,
    /// Quit the application.
    pub exit: Vec<KeyChord>,
}

impl KeyMap {
    /// Whether any chord in `list` matches `ke`.
    #[must_use]
    pub fn any(list: &[KeyChord], ke: &KeyEvent) -> bool {
        list.iter().any(|c| c.matches(ke))
    }

    /// First chord label for an action, used in hints.
    #[must_use]
    pub fn first_label(list: &[KeyChord]) -> String {
        list.first().map(KeyChord::label).unwrap_or_default()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        use KeyCode::{Char, Down, End, F, Home, Up};
        Self {
            toggle: vec![KeyChord::plain(Char(' '))],
            toggle_all: vec![KeyChord::plain(Char('a'))],
            download: vec![KeyChord::plain(Char('d'))],
            up: vec![KeyChord::plain(Up), KeyChord::plain(Char('k'))],
            down: vec![KeyChord::plain(Down), KeyChord::plain(Char('j'))],
            top: vec![KeyChord::plain(Home), KeyChord::plain(Char('g'))],
            bottom: vec![KeyChord::plain(End), KeyChord::plain(Char('G'))],
            help: vec![KeyChord::plain(Char('?')), KeyChord::plain(F(1))],
            exit: vec![
                KeyChord::plain(Char('q')),
                KeyChord {
                    code: Char('c'),
                    mods: KeyModifiers::CONTROL,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, mods: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, mods)
    }

    #[test]
    /// What: Chord matching tolerates the Shift modifier terminals report for uppercase chars.
    ///
    /// Inputs:
    /// - Default `bottom` binding (`G`) and `Shift+g` style chords.
    ///
    /// Output:
    /// - Both `G` and `Shift+G` events match; `g` does not match `G`.
    fn chord_matching_handles_shifted_chars() {
        let km = KeyMap::default();
        assert!(KeyMap::any(&km.bottom, &key(KeyCode::Char('G'), KeyModifiers::SHIFT)));
        assert!(KeyMap::any(&km.bottom, &key(KeyCode::Char('G'), KeyModifiers::NONE)));
        assert!(!KeyMap::any(&km.bottom, &key(KeyCode::Char('x'), KeyModifiers::NONE)));

        let shifted = KeyChord {
            code: KeyCode::Char('d'),
            mods: KeyModifiers::SHIFT,
        };
        assert!(shifted.matches(&key(KeyCode::Char('D'), KeyModifiers::NONE)));
        assert!(!shifted.matches(&key(KeyCode::Char('d'), KeyModifiers::NONE)));
        assert!(!KeyMap::any(&km.top, &key(KeyCode::Char('G'), KeyModifiers::SHIFT)));
    }

    #[test]
    /// What: Shift chords and uppercase letters from `settings.conf` fire on real key events.
    ///
    /// Inputs:
    /// - `keybind_download = Shift+D` and `keybind_bottom = G`.
    ///
    /// Output:
    /// - `Shift+'D'` triggers download, `Shift+'G'` triggers bottom and not top.
    fn configured_shift_chords_match_terminal_events() {
        let mut settings = Settings::default();
        crate::theme::parse_settings("keybind_download = Shift+D\nkeybind_bottom = G\n", &mut settings);
        let km = &settings.keymap;
        assert!(KeyMap::any(&km.download, &key(KeyCode::Char('D'), KeyModifiers::SHIFT)));
        assert!(KeyMap::any(&km.download, &key(KeyCode::Char('D'), KeyModifiers::NONE)));
        assert!(!KeyMap::any(&km.download, &key(KeyCode::Char('d'), KeyModifiers::NONE)));
        assert!(KeyMap::any(&km.bottom, &key(KeyCode::Char('G'), KeyModifiers::SHIFT)));
        assert!(!KeyMap::any(&km.top, &key(KeyCode::Char('G'), KeyModifiers::SHIFT)));
        assert!(KeyMap::any(&km.top, &key(KeyCode::Char('g'), KeyModifiers::NONE)));
    }

    #[test]
    fn chord_labels() {
        assert_eq!(KeyChord::plain(KeyCode::Char(' ')).label(), "Space");
        assert_eq!(
            KeyChord {
                code: KeyCode::Char('c'),
                mods: KeyModifiers::CONTROL
            }
            .label(),
            "Ctrl+c"
        );
        assert_eq!(KeyMap::first_label(&KeyMap::default().toggle_all), "a");
    }
}
