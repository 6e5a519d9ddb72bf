//! Core value types used by file-downloader state.

use serde::{Deserialize, Deserializer, Serialize};

/// Availability of a remote file.
///
/// Only [`Status::Available`] files can be selected for download.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// File can be downloaded right now.
    Available,
    /// File is known but its transfer is scheduled for later.
    Scheduled,
}

impl Status {
    /// What: Map a textual status (as found in file lists and config) to a [`Status`].
    ///
    /// Inputs:
    /// - `s`: Raw status token, matched case-insensitively.
    ///
    /// Output:
    /// - `Some(Status)` for known tokens; `None` otherwise.
    #[must_use]
    pub fn from_key(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "available" => Some(Self::Available),
            "scheduled" => Some(Self::Scheduled),
            _ => None,
        }
    }

    /// Whether files in this status may be selected.
    #[must_use]
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::from_key(&raw).ok_or_else(|| {
            serde::de::Error::unknown_variant(&raw, &["available", "scheduled"])
        })
    }
}

/// A file as reported by the external source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteFile {
    /// Display name (not part of the identity).
    pub name: String,
    /// Device the file lives on.
    pub device: String,
    /// Path of the file on its device.
    pub path: String,
    /// Current availability.
    pub status: Status,
}

impl RemoteFile {
    /// Identifier derived from device and path, see [`crate::logic::file_id`].
    #[must_use]
    pub fn id(&self) -> String {
        crate::logic::file_id(&self.device, &self.path)
    }
}

/// A [`RemoteFile`] enriched with its derived id and the user's selection.
///
/// `selected` is never `true` for a file whose status is not
/// [`Status::Available`]; [`crate::logic::FileSelection`] keeps it that way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtendedFile {
    /// The file as last reported by the source.
    pub file: RemoteFile,
    /// Identifier derived from `(device, path)`.
    pub id: String,
    /// Whether the user picked this file.
    pub selected: bool,
}

impl ExtendedFile {
    /// Rows for non-available files are rendered disabled.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        !self.file.status.is_available()
    }
}

/// Visual state of the select-all checkbox.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectAllState {
    /// Nothing is selected.
    Unchecked,
    /// Every available file is selected.
    Checked,
    /// Some, but not all, available files are selected.
    Indeterminate,
}
