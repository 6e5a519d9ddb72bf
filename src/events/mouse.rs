use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::actions;
use crate::state::AppState;

/// What: Check if mouse coordinates are within a rectangle.
///
/// Inputs:
/// - `mx`, `my`: Mouse coordinates
/// - `rect`: Optional rectangle tuple (x, y, width, height)
///
/// Output:
/// - `true` if the point is inside; `false` otherwise or when `rect` is `None`.
const fn is_in_rect(mx: u16, my: u16, rect: Option<(u16, u16, u16, u16)>) -> bool {
    let Some((x, y, w, h)) = rect else {
        return false;
    };
    mx >= x && mx < x + w && my >= y && my < y + h
}

/// What: Handle mouse input on the main view.
///
/// Inputs:
/// - `m`: Mouse event
/// - `app`: Mutable application state (uses rects recorded during the last render)
///
/// Output:
/// - Always `false`; the mouse never requests exit.
///
/// Details:
/// - Left click on the select-all control applies it; on the enabled download button downloads.
/// - Left click anywhere on a table row moves the cursor there and toggles the row.
/// - Wheel scrolls the cursor. Clicks are ignored while a modal is open.
pub fn handle_mouse(m: &MouseEvent, app: &mut AppState) -> bool {
    if app.modal.is_open() {
        return false;
    }
    let (mx, my) = (m.column, m.row);
    match m.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if is_in_rect(mx, my, app.select_all_rect) {
                actions::toggle_all(app);
            } else if is_in_rect(mx, my, app.download_rect) {
                actions::download(app);
            } else if is_in_rect(mx, my, app.table_body_rect)
                && let Some((_, y, _, _)) = app.table_body_rect
            {
                let idx = app.table_state.offset() + usize::from(my - y);
                if idx < app.selection.len() {
                    app.set_cursor(idx);
                    actions::toggle_focused(app);
                }
            }
        }
        MouseEventKind::ScrollUp => app.move_cursor(-1),
        MouseEventKind::ScrollDown => app.move_cursor(1),
        _ => {}
    }
    false
}
