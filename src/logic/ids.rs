//! Stable identifiers for remote files.

/// Separator placed between the device and path parts of an id.
pub const ID_DELIMITER: char = '|';

/// What: Derive the reconciliation id of a file from its device and path.
///
/// Inputs:
/// - `device`: Device the file lives on
/// - `path`: Path of the file on that device
///
/// Output:
/// - `"<device>|<path>"` with every `|` stripped from both parts first.
///
/// Details:
/// - Name and status never take part in the id, so a renamed or rescheduled file keeps it.
/// - Stripping the delimiter keeps the split point unambiguous.
#[must_use]
pub fn file_id(device: &str, path: &str) -> String {
    let mut id = String::with_capacity(device.len() + path.len() + 1);
    id.extend(device.chars().filter(|&c| c != ID_DELIMITER));
    id.push(ID_DELIMITER);
    id.extend(path.chars().filter(|&c| c != ID_DELIMITER));
    id
}
