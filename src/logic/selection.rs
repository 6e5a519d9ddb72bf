//! Selection state kept in sync with an externally supplied file list.

use std::collections::HashMap;

use crate::state::{ExtendedFile, RemoteFile, SelectAllState};

/// Derived list of [`ExtendedFile`] records plus the user's selection.
///
/// The list is rebuilt in full on every [`FileSelection::sync`]; selection is
/// carried over by id, never by position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileSelection {
    /// Records in the order of the last synced external list.
    files: Vec<ExtendedFile>,
}

impl FileSelection {
    /// Build a selection from an initial file list with nothing selected.
    #[must_use]
    pub fn from_files(files: Vec<RemoteFile>) -> Self {
        let mut selection = Self::default();
        selection.sync(files);
        selection
    }

    /// What: Reconcile the records with a new external file list.
    ///
    /// Inputs:
    /// - `incoming`: Complete new file list from the source, in display order.
    ///
    /// Output:
    /// - None (replaces the records in place).
    ///
    /// Details:
    /// - One record per incoming file; files missing from `incoming` are dropped.
    /// - A file stays selected only when its id was selected before and it is still available.
    /// - New ids start unselected.
    pub fn sync(&mut self, incoming: Vec<RemoteFile>) {
        let previous: HashMap<&str, bool> = self
            .files
            .iter()
            .map(|f| (f.id.as_str(), f.selected))
            .collect();

        let files: Vec<ExtendedFile> = incoming
            .into_iter()
            .map(|file| {
                let id = file.id();
                let selected = file.status.is_available()
                    && previous.get(id.as_str()).copied().unwrap_or(false);
                ExtendedFile { file, id, selected }
            })
            .collect();

        tracing::debug!(
            before = self.files.len(),
            after = files.len(),
            carried = files.iter().filter(|f| f.selected).count(),
            "reconciled file list"
        );
        self.files = files;
    }

    /// All records in display order.
    #[must_use]
    pub fn files(&self) -> &[ExtendedFile] {
        &self.files
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether there are no records at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Record at display index `idx`.
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&ExtendedFile> {
        self.files.get(idx)
    }

    /// Number of files that can be selected.
    #[must_use]
    pub fn selectable_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.file.status.is_available())
            .count()
    }

    /// Number of available files that are selected.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected_files().count()
    }

    /// What: Compute the tri-state value of the select-all control.
    ///
    /// Output:
    /// - `Unchecked` when nothing is selected, `Checked` when every available file is,
    ///   `Indeterminate` otherwise.
    #[must_use]
    pub fn select_all_state(&self) -> SelectAllState {
        let selected = self.selected_count();
        if selected == 0 {
            SelectAllState::Unchecked
        } else if selected == self.selectable_count() {
            SelectAllState::Checked
        } else {
            SelectAllState::Indeterminate
        }
    }

    /// Label next to the select-all control.
    #[must_use]
    pub fn select_all_label(&self) -> String {
        match self.selected_count() {
            0 => "None Selected".to_string(),
            n => format!("Selected {n}"),
        }
    }

    /// What: Apply the select-all control.
    ///
    /// Output:
    /// - The new [`SelectAllState`].
    ///
    /// Details:
    /// - When every available file is selected, clears the selection.
    /// - Otherwise (none or some selected) selects every available file.
    pub fn toggle_all(&mut self) -> SelectAllState {
        let select = self.select_all_state() != SelectAllState::Checked;
        for f in &mut self.files {
            f.selected = f.file.status.is_available() && select;
        }
        self.select_all_state()
    }

    /// What: Flip the selection of the file(s) with the given id.
    ///
    /// Inputs:
    /// - `id`: Identifier as produced by [`crate::logic::file_id`].
    ///
    /// Output:
    /// - `true` if at least one record matched; `false` for unknown ids.
    ///
    /// Details:
    /// - Unavailable files are forced to unselected instead of flipping.
    pub fn toggle(&mut self, id: &str) -> bool {
        let mut matched = false;
        for f in self.files.iter_mut().filter(|f| f.id == id) {
            f.selected = f.file.status.is_available() && !f.selected;
            matched = true;
        }
        matched
    }

    /// Available files that are selected, in display order.
    pub fn selected_files(&self) -> impl Iterator<Item = &ExtendedFile> {
        self.files
            .iter()
            .filter(|f| f.file.status.is_available() && f.selected)
    }

    /// Whether the download control is enabled.
    #[must_use]
    pub fn can_download(&self) -> bool {
        self.selected_files().next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Status;

    fn file(name: &str, device: &str, path: &str, status: Status) -> RemoteFile {
        RemoteFile {
            name: name.into(),
            device: device.into(),
            path: path.into(),
            status,
        }
    }

    /// What: Two available files and one scheduled file on different devices.
    fn sample() -> Vec<RemoteFile> {
        vec![
            file("smss.exe", "Stark", r"\Windows\System32\smss.exe", Status::Scheduled),
            file("netsh.exe", "Targaryen", r"\Windows\System32\netsh.exe", Status::Available),
            file("uxtheme.dll", "Lannister", r"\Windows\System32\uxtheme.dll", Status::Available),
        ]
    }

    #[test]
    /// What: A fresh selection has nothing selected and a disabled download.
    ///
    /// Inputs:
    /// - Sample list with two available files.
    ///
    /// Output:
    /// - Unchecked select-all, "None Selected" label, two selectable files.
    fn fresh_selection_is_empty() {
        let sel = FileSelection::from_files(sample());
        assert_eq!(sel.len(), 3);
        assert_eq!(sel.selectable_count(), 2);
        assert_eq!(sel.selected_count(), 0);
        assert_eq!(sel.select_all_state(), SelectAllState::Unchecked);
        assert_eq!(sel.select_all_label(), "None Selected");
        assert!(!sel.can_download());
    }

    #[test]
    /// What: Select-all cycles between all available files and none.
    ///
    /// Inputs:
    /// - Sample list; `toggle_all` applied twice.
    ///
    /// Output:
    /// - First call checks both available files, second clears everything.
    fn toggle_all_selects_available_then_clears() {
        let mut sel = FileSelection::from_files(sample());
        assert_eq!(sel.toggle_all(), SelectAllState::Checked);
        assert_eq!(sel.select_all_label(), "Selected 2");
        assert!(!sel.files()[0].selected, "scheduled file stays unselected");

        assert_eq!(sel.toggle_all(), SelectAllState::Unchecked);
        assert!(sel.files().iter().all(|f| !f.selected));
    }

    #[test]
    /// What: Partial selection shows indeterminate and select-all completes it.
    ///
    /// Inputs:
    /// - One available file toggled, then `toggle_all`.
    ///
    /// Output:
    /// - Indeterminate after the row toggle, checked after select-all.
    fn toggle_row_then_select_all() {
        let mut sel = FileSelection::from_files(sample());
        let id = sel.files()[1].id.clone();
        assert!(sel.toggle(&id));
        assert_eq!(sel.select_all_state(), SelectAllState::Indeterminate);
        assert_eq!(sel.select_all_label(), "Selected 1");

        assert_eq!(sel.toggle_all(), SelectAllState::Checked);
        assert_eq!(sel.selected_count(), 2);
    }

    #[test]
    fn toggle_unavailable_row_is_noop_for_selection() {
        let mut sel = FileSelection::from_files(sample());
        let id = sel.files()[0].id.clone();
        assert!(sel.toggle(&id));
        assert!(!sel.files()[0].selected);
        assert!(!sel.toggle("nope|nothing"));
    }

    #[test]
    /// What: Selection survives a reorder because it is carried by id.
    ///
    /// Inputs:
    /// - Second file selected, then the list is reversed and re-synced.
    ///
    /// Output:
    /// - Same file is still selected at its new position.
    fn sync_carries_selection_by_id_not_position() {
        let mut sel = FileSelection::from_files(sample());
        let id = sel.files()[1].id.clone();
        sel.toggle(&id);

        let mut reversed = sample();
        reversed.reverse();
        sel.sync(reversed);

        assert_eq!(sel.files()[1].id, id);
        assert!(sel.files()[1].selected);
        assert!(!sel.files()[0].selected);
        assert!(!sel.files()[2].selected);
    }

    #[test]
    /// What: A selected file that becomes scheduled loses its selection.
    ///
    /// Inputs:
    /// - All available files selected; one flips to `Scheduled`, then back to `Available`.
    ///
    /// Output:
    /// - Selection cleared on the first sync and not restored on the second.
    fn sync_clears_selection_when_status_changes() {
        let mut sel = FileSelection::from_files(sample());
        sel.toggle_all();

        let mut updated = sample();
        updated[1].status = Status::Scheduled;
        sel.sync(updated);
        assert!(!sel.files()[1].selected);
        assert!(sel.files()[2].selected);
        assert_eq!(sel.select_all_state(), SelectAllState::Checked);

        sel.sync(sample());
        assert!(!sel.files()[1].selected);
        assert_eq!(sel.select_all_state(), SelectAllState::Indeterminate);
    }

    #[test]
    fn sync_drops_removed_and_adds_new_unselected() {
        let mut sel = FileSelection::from_files(sample());
        sel.toggle_all();

        let mut updated = sample();
        updated.remove(2);
        updated.push(file("new.bin", "Stark", r"\tmp\new.bin", Status::Available));
        sel.sync(updated);

        assert_eq!(sel.len(), 3);
        assert!(sel.files()[1].selected);
        assert!(!sel.files()[2].selected);
        assert_eq!(sel.select_all_state(), SelectAllState::Indeterminate);
    }

    #[test]
    /// What: Name changes do not affect identity.
    ///
    /// Inputs:
    /// - Selected file renamed in the next list.
    ///
    /// Output:
    /// - Still selected, new name visible.
    fn sync_ignores_name_for_identity() {
        let mut sel = FileSelection::from_files(sample());
        let id = sel.files()[2].id.clone();
        sel.toggle(&id);

        let mut updated = sample();
        updated[2].name = "renamed.dll".into();
        sel.sync(updated);

        assert!(sel.files()[2].selected);
        assert_eq!(sel.files()[2].file.name, "renamed.dll");
    }

    #[test]
    fn sync_to_empty_list_resets_everything() {
        let mut sel = FileSelection::from_files(sample());
        sel.toggle_all();
        sel.sync(Vec::new());
        assert!(sel.is_empty());
        assert_eq!(sel.select_all_state(), SelectAllState::Unchecked);
        assert_eq!(sel.toggle_all(), SelectAllState::Unchecked);
    }

    #[test]
    fn all_scheduled_list_cannot_be_selected() {
        let mut sel = FileSelection::from_files(vec![file(
            "a",
            "d",
            "p",
            Status::Scheduled,
        )]);
        assert_eq!(sel.toggle_all(), SelectAllState::Unchecked);
        assert!(!sel.can_download());
    }

    #[test]
    /// What: Files whose ids collide after delimiter stripping behave as one.
    ///
    /// Inputs:
    /// - Devices `a|b` and `ab` on the same path; one toggle, then a reversed sync.
    ///
    /// Output:
    /// - Both records selected after the toggle and still both after the sync.
    fn colliding_ids_toggle_and_sync_together() {
        let mut sel = FileSelection::from_files(vec![
            file("one", "a|b", "/shared", Status::Available),
            file("two", "ab", "/shared", Status::Available),
        ]);
        assert_eq!(sel.files()[0].id, sel.files()[1].id);

        assert!(sel.toggle("ab|/shared"));
        assert_eq!(
            sel.files().iter().map(|f| f.selected).collect::<Vec<_>>(),
            [true, true]
        );
        assert_eq!(sel.selected_count(), 2);

        sel.sync(vec![
            file("two", "ab", "/shared", Status::Available),
            file("one", "a|b", "/shared", Status::Available),
        ]);
        assert_eq!(
            sel.files().iter().map(|f| f.selected).collect::<Vec<_>>(),
            [true, true]
        );
        assert_eq!(sel.select_all_state(), SelectAllState::Checked);
    }
}
