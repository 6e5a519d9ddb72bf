//! Loading the external file list from JSON.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::state::RemoteFile;

/// Why a file list could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not a JSON array of files.
    #[error("invalid file list in {}: {source}", path.display())]
    Parse {
        /// File whose content was rejected.
        path: PathBuf,
        /// JSON decoding error.
        #[source]
        source: serde_json::Error,
    },
}

/// What: Parse a JSON array of files.
///
/// Inputs:
/// - `json`: Text such as `[{"name": "...", "device": "...", "path": "...", "status": "available"}]`
///
/// Output:
/// - Files in document order, or the `serde_json` error.
///
/// Details:
/// - Status matching is case-insensitive; unknown statuses are rejected.
pub fn parse_files(json: &str) -> Result<Vec<RemoteFile>, serde_json::Error> {
    serde_json::from_str(json)
}

/// What: Read and parse the file list at `path`.
///
/// Inputs:
/// - `path`: JSON file on disk
///
/// Output:
/// - The parsed list; [`LoadError::Io`] or [`LoadError::Parse`] naming the path on failure.
pub fn load_files(path: &Path) -> Result<Vec<RemoteFile>, LoadError> {
    let body = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let files = parse_files(&body).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), count = files.len(), "loaded file list");
    Ok(files)
}
