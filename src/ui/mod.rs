//! TUI rendering: action bar, file table, footer, and modal overlays.

mod action_bar;
pub mod helpers;
mod modals;
pub mod status;
mod table;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

pub use action_bar::DOWNLOAD_LABEL;
pub use status::{status_icon, status_label};

use crate::state::AppState;
use crate::theme::{KeyMap, theme};

/// What: Render the whole screen for the current application state.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Mutable application state; hit-test rectangles are refreshed here
///
/// Output:
/// - None (draws into `f`).
///
/// Details:
/// - Layout top to bottom: action bar (3 rows), file table, optional key hint footer (1 row).
/// - Modals are drawn last, over everything else.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let footer_h = u16::from(app.show_keybinds_footer);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(footer_h),
        ])
        .split(area);

    action_bar::render_action_bar(f, app, chunks[0]);
    table::render_table(f, app, chunks[1]);
    if app.show_keybinds_footer {
        render_footer(f, app, chunks[2]);
    }
    modals::render_modal(f, app, area);
}

/// Render key hints, or the last source reload error when there is one.
fn render_footer(f: &mut Frame, app: &AppState, area: ratatui::prelude::Rect) {
    let th = theme();
    let line = if let Some(err) = &app.source_error {
        Line::from(Span::styled(
            format!(" reload failed: {err}"),
            Style::default().fg(th.red),
        ))
    } else {
        let km = &app.keymap;
        let hints = [
            (KeyMap::first_label(&km.toggle), "toggle"),
            (KeyMap::first_label(&km.toggle_all), "select all"),
            (KeyMap::first_label(&km.download), "download"),
            (KeyMap::first_label(&km.help), "help"),
            (KeyMap::first_label(&km.exit), "quit"),
        ];
        let mut spans = vec![Span::raw(" ")];
        for (key, action) in hints {
            spans.push(Span::styled(key, Style::default().fg(th.sapphire)));
            spans.push(Span::styled(
                format!(" {action}  "),
                Style::default().fg(th.subtext0),
            ));
        }
        Line::from(spans)
    };
    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(th.base)),
        area,
    );
}
