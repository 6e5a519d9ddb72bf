//! Event handling layer: keyboard and mouse input mapped onto selection actions.

use crossterm::event::{Event as CEvent, KeyEventKind};

mod actions;
mod keys;
mod mouse;

pub use actions::{download, toggle_all, toggle_focused};

use crate::state::AppState;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(ev: &CEvent, app: &mut AppState) -> bool {
    match ev {
        CEvent::Key(ke) if ke.kind == KeyEventKind::Press => keys::handle_key(ke, app),
        CEvent::Mouse(m) => mouse::handle_mouse(m, app),
        _ => false,
    }
}
