use ratatui::{
    Frame,
    layout::Constraint,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Row, Table},
};

use super::helpers::{CHECKED, DISABLED, UNCHECKED, rect_tuple};
use super::status::{status_icon, status_label};
use crate::state::{AppState, ExtendedFile};
use crate::theme::{Theme, theme};

/// Column headers; the icon column is intentionally unlabelled.
const HEADERS: [&str; 6] = ["", "Name", "Device", "Path", "", "Status"];

/// What: Build one table row for a file record.
///
/// Inputs:
/// - `file`: Record to render
/// - `th`: Active theme
///
/// Output:
/// - Row with checkbox, name, device, path, status icon, and status label cells.
///
/// Details:
/// - Unavailable files get a disabled checkbox and dimmed text.
fn build_row<'a>(file: &'a ExtendedFile, th: &Theme) -> Row<'a> {
    let disabled = file.is_disabled();
    let (checkbox, checkbox_style) = if disabled {
        (DISABLED, Style::default().fg(th.subtext0))
    } else if file.selected {
        (
            CHECKED,
            Style::default()
                .fg(th.sapphire)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (UNCHECKED, Style::default().fg(th.text))
    };
    let text_style = if disabled {
        Style::default().fg(th.subtext0)
    } else {
        Style::default().fg(th.text)
    };
    let icon = status_icon(file.file.status, th).map_or_else(Line::default, Line::from);
    let status_style = if disabled {
        Style::default().fg(th.yellow)
    } else {
        Style::default().fg(th.green)
    };
    Row::new(vec![
        Cell::from(Span::styled(checkbox, checkbox_style)),
        Cell::from(Span::styled(file.file.name.as_str(), text_style)),
        Cell::from(Span::styled(file.file.device.as_str(), text_style)),
        Cell::from(Span::styled(file.file.path.as_str(), text_style)),
        Cell::from(icon),
        Cell::from(Span::styled(status_label(file.file.status), status_style)),
    ])
}

/// What: Render the file table with a cursor row.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (records, cursor; body rect is recorded here)
/// - `area`: Target rectangle
///
/// Output:
/// - Draws the table and stores `table_body_rect` for mouse hit-testing.
pub fn render_table(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let header = Row::new(HEADERS.iter().map(|h| Cell::from(*h))).style(
        Style::default()
            .fg(th.mauve)
            .bg(th.surface1)
            .add_modifier(Modifier::BOLD),
    );
    let rows: Vec<Row> = app
        .selection
        .files()
        .iter()
        .map(|file| build_row(file, &th))
        .collect();

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.overlay1))
        .title(Line::from(Span::styled(
            format!(" Files ({}) ", app.selection.len()),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        )));
    if !app.source_label.is_empty() {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {} ", app.source_label),
            Style::default().fg(th.overlay1),
        )));
    }
    let inner = block.inner(area);

    let widths = [
        Constraint::Length(3),
        Constraint::Fill(2),
        Constraint::Fill(2),
        Constraint::Fill(5),
        Constraint::Length(1),
        Constraint::Length(9),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .style(Style::default().fg(th.text).bg(th.base))
        .row_highlight_style(Style::default().bg(th.surface2))
        .column_spacing(1);
    f.render_stateful_widget(table, area, &mut app.table_state);

    let body = Rect {
        x: inner.x,
        y: inner.y.saturating_add(1),
        width: inner.width,
        height: inner.height.saturating_sub(1),
    };
    app.table_body_rect = Some(rect_tuple(body));
}
