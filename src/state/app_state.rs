//! Central `AppState` container.

use ratatui::widgets::TableState;
use std::path::PathBuf;

use crate::logic::FileSelection;
use crate::state::modal::Modal;
use crate::state::types::{ExtendedFile, RemoteFile};
use crate::theme::KeyMap;

/// Global application state shared by the event, source, and UI layers.
///
/// The file list itself lives in [`FileSelection`]; everything else here is
/// cursor position, overlays, and hit-test rectangles captured while rendering.
#[derive(Debug)]
pub struct AppState {
    /// Derived file records and the user's selection.
    pub selection: FileSelection,
    /// Cursor over the table rows.
    pub table_state: TableState,
    /// Active modal dialog, if any.
    pub modal: Modal,
    /// Configured key bindings.
    pub keymap: KeyMap,
    /// Whether the key hint footer is drawn.
    pub show_keybinds_footer: bool,
    /// Human readable origin of the file list (path or built-in sample).
    pub source_label: String,
    /// File every download report is appended to, if configured.
    pub report_path: Option<PathBuf>,
    /// Number of times the external list was synced since startup.
    pub sync_count: u64,
    /// Last reload failure from the source, cleared by the next successful sync.
    pub source_error: Option<String>,

    // Mouse hit-testing rectangles (x, y, width, height), refreshed each frame
    /// Select-all checkbox and its label.
    pub select_all_rect: Option<(u16, u16, u16, u16)>,
    /// "Download Selected" button.
    pub download_rect: Option<(u16, u16, u16, u16)>,
    /// Table body (rows only, header excluded).
    pub table_body_rect: Option<(u16, u16, u16, u16)>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            selection: FileSelection::default(),
            table_state: TableState::default(),
            modal: Modal::None,
            keymap: KeyMap::default(),
            show_keybinds_footer: true,
            source_label: String::new(),
            report_path: None,
            sync_count: 0,
            source_error: None,
            select_all_rect: None,
            download_rect: None,
            table_body_rect: None,
        }
    }
}

impl AppState {
    /// What: Feed a new external file list into the selection.
    ///
    /// Inputs:
    /// - `files`: Complete list from the source
    ///
    /// Output:
    /// - None (updates `selection` and clamps the cursor).
    ///
    /// Details:
    /// - Keeps the cursor on the same file id when it still exists, otherwise
    ///   clamps it to the new list length.
    pub fn apply_files(&mut self, files: Vec<RemoteFile>) {
        let focused_id = self.focused().map(|f| f.id.clone());
        self.selection.sync(files);
        self.sync_count += 1;
        self.source_error = None;

        let len = self.selection.len();
        let next = focused_id
            .and_then(|id| self.selection.files().iter().position(|f| f.id == id))
            .or_else(|| {
                self.table_state
                    .selected()
                    .map(|i| i.min(len.saturating_sub(1)))
            })
            .or(Some(0));
        self.table_state
            .select(if len == 0 { None } else { next });
    }

    /// Record under the cursor.
    #[must_use]
    pub fn focused(&self) -> Option<&ExtendedFile> {
        self.table_state
            .selected()
            .and_then(|i| self.selection.get(i))
    }

    /// What: Move the cursor by `delta` rows, clamped to the list.
    ///
    /// Inputs:
    /// - `delta`: Signed row offset (negative moves up)
    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.selection.len();
        if len == 0 {
            self.table_state.select(None);
            return;
        }
        let cur = self.table_state.selected().unwrap_or(0);
        let next = cur.saturating_add_signed(delta).min(len - 1);
        self.table_state.select(Some(next));
    }

    /// Place the cursor on row `idx` if it exists.
    pub fn set_cursor(&mut self, idx: usize) {
        if idx < self.selection.len() {
            self.table_state.select(Some(idx));
        }
    }
}
