//! Integration tests for UI rendering using ratatui's `TestBackend`.
//!
//! These tests render the full screen for a few selection states and check the
//! visible text plus the hit-test rectangles recorded for mouse handling.

use crossterm::event::{Event as CEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend};

use file_downloader::events::handle_event;
use file_downloader::sources::demo_files;
use file_downloader::state::{AppState, Modal, SelectAllState};
use file_downloader::ui;

/// Create a `TestBackend` terminal of the given size.
fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("failed to create test terminal")
}

/// App loaded with the built-in sample list.
fn sample_app() -> AppState {
    let mut app = AppState {
        source_label: "built-in sample".to_string(),
        ..AppState::default()
    };
    app.apply_files(demo_files());
    app
}

/// Render once and return the buffer as one string per row.
fn render(terminal: &mut Terminal<TestBackend>, app: &mut AppState) -> Vec<String> {
    terminal
        .draw(|f| ui::ui(f, app))
        .expect("failed to draw frame");
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

fn contains(rows: &[String], needle: &str) -> bool {
    rows.iter().any(|r| r.contains(needle))
}

fn left_click(x: u16, y: u16) -> CEvent {
    CEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
/// What: Initial render shows the empty selection and a disabled download button.
///
/// Inputs:
/// - Sample list, nothing selected, 120x20 terminal.
///
/// Output:
/// - "None Selected" with an unchecked box, header and status labels visible,
///   no download hit-rect, select-all and table rects recorded.
fn renders_initial_state() {
    let mut terminal = create_test_terminal(120, 20);
    let mut app = sample_app();
    let rows = render(&mut terminal, &mut app);

    assert!(contains(&rows, "[ ] None Selected"));
    assert!(contains(&rows, "Download Selected"));
    assert!(contains(&rows, "Files (6)"));
    assert!(contains(&rows, "Name"));
    assert!(contains(&rows, "Device"));
    assert!(contains(&rows, "Targaryen"));
    assert!(contains(&rows, "Available"));
    assert!(contains(&rows, "Scheduled"));
    assert!(contains(&rows, "built-in sample"));

    assert!(app.select_all_rect.is_some());
    assert!(app.table_body_rect.is_some());
    assert!(app.download_rect.is_none(), "button must be inert when disabled");
}

#[test]
/// What: Select-all state drives the checkbox glyph and label.
///
/// Inputs:
/// - One available file toggled, then select-all applied.
///
/// Output:
/// - Indeterminate "[-] Selected 1", then "[x] Selected 2" with an active button.
fn renders_tri_state_select_all() {
    let mut terminal = create_test_terminal(120, 20);
    let mut app = sample_app();

    let id = app.selection.files()[1].id.clone();
    app.selection.toggle(&id);
    let rows = render(&mut terminal, &mut app);
    assert!(contains(&rows, "[-] Selected 1"));

    assert_eq!(app.selection.toggle_all(), SelectAllState::Checked);
    let rows = render(&mut terminal, &mut app);
    assert!(contains(&rows, "[x] Selected 2"));
    assert!(app.download_rect.is_some());
}

#[test]
/// What: Clicking the recorded rectangles drives the whole flow.
///
/// Inputs:
/// - Click on the select-all control, re-render, click on the download button.
///
/// Output:
/// - Both available files selected and an alert listing their device and path.
fn mouse_flow_through_rendered_rects() {
    let mut terminal = create_test_terminal(120, 20);
    let mut app = sample_app();
    render(&mut terminal, &mut app);

    let (x, y, _, _) = app.select_all_rect.expect("select-all rect");
    handle_event(&left_click(x, y), &mut app);
    assert_eq!(app.selection.select_all_state(), SelectAllState::Checked);

    render(&mut terminal, &mut app);
    let (x, y, _, _) = app.download_rect.expect("download rect");
    handle_event(&left_click(x + 1, y), &mut app);
    let Modal::Alert { title, message } = &app.modal else {
        panic!("expected download alert");
    };
    assert_eq!(title, "Download 2 files");
    assert_eq!(
        message,
        "device: Targaryen, path: \\Device\\HarddiskVolume2\\Windows\\System32\\netsh.exe\n\
         device: Lannister, path: \\Device\\HarddiskVolume1\\Windows\\System32\\uxtheme.dll"
    );

    let rows = render(&mut terminal, &mut app);
    assert!(contains(&rows, "Download 2 files"));
    assert!(contains(&rows, "device: Targaryen"));
    assert!(contains(&rows, "Press Enter or Esc to close"));
}

#[test]
/// What: Clicking a table row toggles it; a disabled row stays unselected.
///
/// Inputs:
/// - Click on the first body row (scheduled) and on the second (available).
///
/// Output:
/// - Only the second row is selected; cursor follows the click.
fn row_click_toggles_selectable_rows_only() {
    let mut terminal = create_test_terminal(120, 20);
    let mut app = sample_app();
    render(&mut terminal, &mut app);

    let (x, y, _, _) = app.table_body_rect.expect("table body rect");
    handle_event(&left_click(x + 5, y), &mut app);
    assert!(!app.selection.files()[0].selected);

    handle_event(&left_click(x + 5, y + 1), &mut app);
    assert!(app.selection.files()[1].selected);
    assert_eq!(app.table_state.selected(), Some(1));

    let rows = render(&mut terminal, &mut app);
    assert!(contains(&rows, "[x]"));
    assert!(contains(&rows, "[·]"));
}

#[test]
fn renders_help_and_reload_error() {
    let mut terminal = create_test_terminal(100, 30);
    let mut app = sample_app();
    app.modal = Modal::Help;
    let rows = render(&mut terminal, &mut app);
    assert!(contains(&rows, "Press Enter or Esc to close"));

    app.modal = Modal::None;
    app.source_error = Some("invalid file list".to_string());
    let rows = render(&mut terminal, &mut app);
    assert!(contains(&rows, "reload failed: invalid file list"));
}

#[test]
fn renders_empty_list_without_panicking() {
    let mut terminal = create_test_terminal(40, 8);
    let mut app = AppState::default();
    let rows = render(&mut terminal, &mut app);
    assert!(contains(&rows, "None Selected"));
    assert!(app.download_rect.is_none());
}
