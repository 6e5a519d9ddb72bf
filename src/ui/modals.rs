use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::helpers::centered_rect;
use crate::state::{AppState, Modal};
use crate::theme::{KeyMap, theme};

/// Hint shown at the bottom of every modal.
const CLOSE_HINT: &str = "Press Enter or Esc to close";

/// What: Render the active modal, if any, on top of the main view.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (modal and key map)
/// - `area`: Full frame area
pub fn render_modal(f: &mut Frame, app: &AppState, area: Rect) {
    match &app.modal {
        Modal::None => {}
        Modal::Alert { title, message } => render_alert(f, area, title, message),
        Modal::Help => render_help(f, app, area),
    }
}

/// What: Draw a bordered popup with the given lines, sized to its content.
///
/// Details:
/// - Width follows the widest line plus padding, capped by the frame.
/// - Long lines wrap when the frame is too narrow.
fn render_popup(f: &mut Frame, area: Rect, title: &str, mut lines: Vec<Line<'static>>) {
    let th = theme();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        CLOSE_HINT,
        Style::default().fg(th.overlay1),
    )));
    let content_w = lines.iter().map(Line::width).max().unwrap_or(0);
    let w = u16::try_from(content_w + 4)
        .unwrap_or(u16::MAX)
        .max(u16::try_from(title.width() + 6).unwrap_or(u16::MAX))
        .min(area.width.saturating_sub(4));
    let h = u16::try_from(lines.len() + 2)
        .unwrap_or(u16::MAX)
        .min(area.height.saturating_sub(2));
    let rect = centered_rect(w, h, area);
    f.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.mauve))
        .title(Line::from(Span::styled(
            format!(" {title} "),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        )))
        .style(Style::default().bg(th.base));
    let para = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.base))
        .wrap(Wrap { trim: false })
        .block(block);
    f.render_widget(para, rect);
}

/// Render an informational alert; each message line becomes one popup line.
pub fn render_alert(f: &mut Frame, area: Rect, title: &str, message: &str) {
    let th = theme();
    let lines = message
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(th.text))))
        .collect();
    render_popup(f, area, title, lines);
}

/// Render the key binding overview from the active key map.
fn render_help(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let km = &app.keymap;
    let entries: [(&str, &[crate::theme::KeyChord]); 9] = [
        ("Toggle file", &km.toggle),
        ("Select all / none", &km.toggle_all),
        ("Download selected", &km.download),
        ("Move up", &km.up),
        ("Move down", &km.down),
        ("First file", &km.top),
        ("Last file", &km.bottom),
        ("Help", &km.help),
        ("Quit", &km.exit),
    ];
    let mut lines: Vec<Line<'static>> = entries
        .iter()
        .map(|(action, chords)| {
            let keys = chords
                .iter()
                .map(crate::theme::KeyChord::label)
                .collect::<Vec<_>>()
                .join(", ");
            Line::from(vec![
                Span::styled(
                    format!("{action:<20}"),
                    Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
                ),
                Span::styled(keys, Style::default().fg(th.text)),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Mouse: click a row to toggle it, the checkbox to select all,",
        Style::default().fg(th.subtext0),
    )));
    lines.push(Line::from(Span::styled(
        format!(
            "the button (or {}) to download.",
            KeyMap::first_label(&km.download)
        ),
        Style::default().fg(th.subtext0),
    )));
    render_popup(f, area, "Help", lines);
}
