use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::helpers::{rect_tuple, select_all_glyph};
use crate::state::{AppState, SelectAllState};
use crate::theme::theme;

/// Caption of the download button, including its padding.
pub const DOWNLOAD_LABEL: &str = " ⭳ Download Selected ";

/// What: Render the action bar: tri-state select-all control and the download button.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (selection counts; hit-test rects are recorded here)
/// - `area`: Target rectangle (three rows including the border)
///
/// Output:
/// - Draws the bar and stores `select_all_rect` and `download_rect` for mouse handling.
///
/// Details:
/// - The button is dimmed and records no rect while nothing is selected.
pub fn render_action_bar(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.overlay1))
        .style(Style::default().bg(th.base));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let state = app.selection.select_all_state();
    let glyph = select_all_glyph(state);
    let label = app.selection.select_all_label();
    let checkbox_style = match state {
        SelectAllState::Unchecked => Style::default().fg(th.text),
        SelectAllState::Checked | SelectAllState::Indeterminate => Style::default()
            .fg(th.sapphire)
            .add_modifier(Modifier::BOLD),
    };
    let select_line = Line::from(vec![
        Span::styled(glyph, checkbox_style),
        Span::raw(" "),
        Span::styled(label, Style::default().fg(th.text)),
    ]);

    let button_w = u16::try_from(DOWNLOAD_LABEL.width())
        .unwrap_or(u16::MAX)
        .min(inner.width);
    let select_w = u16::try_from(select_line.width())
        .unwrap_or(u16::MAX)
        .min(inner.width.saturating_sub(button_w));
    let select_rect = Rect {
        x: inner.x,
        y: inner.y,
        width: select_w,
        height: inner.height.min(1),
    };
    let button_rect = Rect {
        x: inner.x + inner.width.saturating_sub(button_w),
        y: inner.y,
        width: button_w,
        height: inner.height.min(1),
    };

    f.render_widget(Paragraph::new(select_line), select_rect);
    app.select_all_rect = Some(rect_tuple(select_rect));

    let enabled = app.selection.can_download();
    let button_style = if enabled {
        Style::default()
            .fg(th.base)
            .bg(th.sapphire)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(th.subtext0)
            .bg(th.surface1)
            .add_modifier(Modifier::DIM)
    };
    f.render_widget(
        Paragraph::new(Span::styled(DOWNLOAD_LABEL, button_style)),
        button_rect,
    );
    app.download_rect = enabled.then(|| rect_tuple(button_rect));
}
