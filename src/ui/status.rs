//! Status-to-presentation mapping.

use ratatui::{style::Style, text::Span};

use crate::state::Status;
use crate::theme::Theme;

/// Text shown in the Status column.
#[must_use]
pub const fn status_label(status: Status) -> &'static str {
    match status {
        Status::Available => "Available",
        Status::Scheduled => "Scheduled",
    }
}

/// What: Icon shown in the unlabelled column before the status text.
///
/// Inputs:
/// - `status`: File status
/// - `th`: Active theme
///
/// Output:
/// - A green dot for available files; `None` (empty cell) for scheduled ones.
#[must_use]
pub fn status_icon(status: Status, th: &Theme) -> Option<Span<'static>> {
    match status {
        Status::Available => Some(Span::styled("●", Style::default().fg(th.green))),
        Status::Scheduled => None,
    }
}
