//! End-to-end selection reconciliation through the public API: JSON file on disk,
//! watcher updates, and the `AppState` the runtime keeps.

use std::time::Duration;

use tokio::sync::mpsc;

use file_downloader::logic::{FileSelection, download_report, file_id};
use file_downloader::sources::{
    SourceUpdate, file_stamp, load_files, parse_files, spawn_file_watcher,
};
use file_downloader::state::{AppState, SelectAllState, Status};

const INITIAL: &str = r#"[
    {"name": "smss.exe", "device": "Stark", "path": "\\Device\\HarddiskVolume2\\Windows\\System32\\smss.exe", "status": "available"},
    {"name": "netsh.exe", "device": "Targaryen", "path": "\\Device\\HarddiskVolume2\\Windows\\System32\\netsh.exe", "status": "Available"},
    {"name": "7za.exe", "device": "Baratheon", "path": "\\Device\\HarddiskVolume1\\temp\\7za.exe", "status": "scheduled"}
]"#;

/// Same files reordered, Stark renamed, Targaryen now scheduled, one new file.
const UPDATED: &str = r#"[
    {"name": "cryptbase.dll", "device": "Martell", "path": "\\Device\\HarddiskVolume1\\Windows\\System32\\cryptbase.dll", "status": "available"},
    {"name": "targaryen-netsh.exe", "device": "Targaryen", "path": "\\Device\\HarddiskVolume2\\Windows\\System32\\netsh.exe", "status": "scheduled"},
    {"name": "smss (renamed).exe", "device": "Stark", "path": "\\Device\\HarddiskVolume2\\Windows\\System32\\smss.exe", "status": "available"}
]"#;

#[test]
/// What: Selection is carried by id across a reordered, partially changed list.
///
/// Inputs:
/// - Both available files selected, then the updated list applied.
///
/// Output:
/// - Stark stays selected under its new name and position, Targaryen is cleared
///   (now scheduled), the new Martell file is unselected.
fn selection_survives_reorder_and_clears_on_status_change() {
    let mut sel = FileSelection::from_files(parse_files(INITIAL).expect("initial list"));
    assert_eq!(sel.toggle_all(), SelectAllState::Checked);
    assert_eq!(sel.select_all_label(), "Selected 2");

    sel.sync(parse_files(UPDATED).expect("updated list"));
    let stark = file_id("Stark", r"\Device\HarddiskVolume2\Windows\System32\smss.exe");
    let selected: Vec<&str> = sel.selected_files().map(|f| f.id.as_str()).collect();
    assert_eq!(selected, vec![stark.as_str()]);
    assert_eq!(sel.files()[2].file.name, "smss (renamed).exe");
    assert_eq!(sel.select_all_state(), SelectAllState::Indeterminate);
    assert_eq!(
        download_report(&sel).as_deref(),
        Some(r"device: Stark, path: \Device\HarddiskVolume2\Windows\System32\smss.exe")
    );
}

#[test]
fn unknown_status_is_rejected() {
    let err = parse_files(r#"[{"name": "a", "device": "d", "path": "p", "status": "deleted"}]"#)
        .expect_err("unknown status");
    assert!(err.to_string().contains("deleted"));
}

#[test]
fn load_files_reads_from_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("files.json");
    std::fs::write(&path, INITIAL).expect("write list");
    let files = load_files(&path).expect("load list");
    assert_eq!(files.len(), 3);
    assert_eq!(files[1].status, Status::Available);

    std::fs::write(&path, "{}").expect("write object");
    let err = load_files(&path).expect_err("object is not a list");
    assert!(err.to_string().contains("files.json"));
}

#[tokio::test]
/// What: A watched file drives `AppState::apply_files` like the runtime does.
///
/// Inputs:
/// - Initial list loaded and fully selected; file rewritten with the updated list.
///
/// Output:
/// - The watcher delivers the new list; after applying it the cursor stays on Stark
///   and only Stark remains selected.
async fn watcher_update_reconciles_app_state() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("files.json");
    std::fs::write(&path, INITIAL).expect("write list");

    let baseline = file_stamp(&path);
    let mut app = AppState::default();
    app.apply_files(load_files(&path).expect("load list"));
    app.selection.toggle_all();
    assert_eq!(app.focused().map(|f| f.file.device.as_str()), Some("Stark"));

    let (tx, mut rx) = mpsc::unbounded_channel();
    let handle = spawn_file_watcher(path.clone(), Duration::from_millis(20), baseline, tx);
    tokio::time::sleep(Duration::from_millis(60)).await;
    std::fs::write(&path, UPDATED).expect("rewrite list");

    let update = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("update in time")
        .expect("channel open");
    let SourceUpdate::Files(files) = update else {
        panic!("expected a reloaded list");
    };
    app.apply_files(files);

    assert_eq!(app.table_state.selected(), Some(2));
    assert_eq!(app.focused().map(|f| f.file.device.as_str()), Some("Stark"));
    assert_eq!(app.selection.selected_count(), 1);
    handle.abort();
}
