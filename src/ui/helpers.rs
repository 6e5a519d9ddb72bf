//! Small layout and glyph helpers shared by the renderers.

use ratatui::prelude::Rect;

use crate::state::SelectAllState;

/// Checkbox glyph for a selected row.
pub const CHECKED: &str = "[x]";
/// Checkbox glyph for an unselected row.
pub const UNCHECKED: &str = "[ ]";
/// Checkbox glyph for a row that cannot be selected.
pub const DISABLED: &str = "[·]";
/// Checkbox glyph for a partially applied select-all.
pub const INDETERMINATE: &str = "[-]";

/// Glyph of the tri-state select-all checkbox.
#[must_use]
pub const fn select_all_glyph(state: SelectAllState) -> &'static str {
    match state {
        SelectAllState::Unchecked => UNCHECKED,
        SelectAllState::Checked => CHECKED,
        SelectAllState::Indeterminate => INDETERMINATE,
    }
}

/// What: Center a `width` x `height` rectangle inside `area`, shrinking it to fit.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

/// Convert a rect into the `(x, y, w, h)` tuple stored for hit-testing.
#[must_use]
pub const fn rect_tuple(r: Rect) -> (u16, u16, u16, u16) {
    (r.x, r.y, r.width, r.height)
}
