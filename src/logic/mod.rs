//! Selection logic independent of rendering and input handling.

/// Download report construction.
pub mod download;
/// Identifier derivation for remote files.
pub mod ids;
/// Reconciliation of the external file list with the user's selection.
pub mod selection;

pub use download::{append_report, download_report};
pub use ids::{ID_DELIMITER, file_id};
pub use selection::FileSelection;
