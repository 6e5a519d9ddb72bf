//! Built-in sample file list used when no `--files` path is given.

use crate::state::{RemoteFile, Status};

/// Sample entries as `(name, device, path, status)`.
const DEMO_FILES: &[(&str, &str, &str, Status)] = &[
    (
        "smss.exe",
        "Stark",
        r"\Device\HarddiskVolume2\Windows\System32\smss.exe",
        Status::Scheduled,
    ),
    (
        "netsh.exe",
        "Targaryen",
        r"\Device\HarddiskVolume2\Windows\System32\netsh.exe",
        Status::Available,
    ),
    (
        "uxtheme.dll",
        "Lannister",
        r"\Device\HarddiskVolume1\Windows\System32\uxtheme.dll",
        Status::Available,
    ),
    (
        "aries.sys",
        "Greyjoy",
        r"\Device\HarddiskVolume1\Windows\System32\aries.sys",
        Status::Scheduled,
    ),
    (
        "cryptbase.dll",
        "Martell",
        r"\Device\HarddiskVolume1\Windows\System32\cryptbase.dll",
        Status::Scheduled,
    ),
    (
        "7za.exe",
        "Baratheon",
        r"\Device\HarddiskVolume1\temp\7za.exe",
        Status::Scheduled,
    ),
];

/// What: Return the built-in sample list.
///
/// Output:
/// - Six files, two of them available.
#[must_use]
pub fn demo_files() -> Vec<RemoteFile> {
    DEMO_FILES
        .iter()
        .map(|&(name, device, path, status)| RemoteFile {
            name: name.to_string(),
            device: device.to_string(),
            path: path.to_string(),
            status,
        })
        .collect()
}
