use crossterm::event::{KeyCode, KeyEvent};

use super::actions;
use crate::state::{AppState, Modal};
use crate::theme::KeyMap;

/// What: Handle a key press while a modal is open.
///
/// Output:
/// - Always `false`; modals never request exit.
///
/// Details:
/// - `Enter` and `Esc` close the modal; every other key is swallowed.
fn handle_modal_key(ke: &KeyEvent, app: &mut AppState) -> bool {
    if matches!(ke.code, KeyCode::Enter | KeyCode::Esc) {
        app.modal = Modal::None;
    }
    false
}

/// What: Handle a key press on the main view.
///
/// Inputs:
/// - `ke`: Key event (press only)
/// - `app`: Mutable application state
///
/// Output:
/// - `true` to request application exit; `false` to continue.
///
/// Details:
/// - Actions are matched against the configured [`KeyMap`] in a fixed order, so an
///   exit chord wins over any other binding of the same key.
/// - `PageUp`/`PageDown` move by ten rows regardless of configuration.
pub fn handle_key(ke: &KeyEvent, app: &mut AppState) -> bool {
    if app.modal.is_open() {
        return handle_modal_key(ke, app);
    }
    let km = app.keymap.clone();
    if KeyMap::any(&km.exit, ke) {
        tracing::info!("exit requested");
        return true;
    }
    if KeyMap::any(&km.help, ke) {
        app.modal = Modal::Help;
    } else if KeyMap::any(&km.toggle, ke) {
        actions::toggle_focused(app);
    } else if KeyMap::any(&km.toggle_all, ke) {
        actions::toggle_all(app);
    } else if KeyMap::any(&km.download, ke) {
        actions::download(app);
    } else if KeyMap::any(&km.up, ke) {
        app.move_cursor(-1);
    } else if KeyMap::any(&km.down, ke) {
        app.move_cursor(1);
    } else if KeyMap::any(&km.top, ke) {
        app.set_cursor(0);
    } else if KeyMap::any(&km.bottom, ke) {
        app.set_cursor(app.selection.len().saturating_sub(1));
    } else {
        match ke.code {
            KeyCode::PageUp => app.move_cursor(-10),
            KeyCode::PageDown => app.move_cursor(10),
            _ => {}
        }
    }
    false
}
