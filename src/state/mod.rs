//! Application state: value types, the central `AppState`, and modal overlays.

pub mod app_state;
pub mod modal;
pub mod types;

pub use app_state::AppState;
pub use modal::Modal;
pub use types::{ExtendedFile, RemoteFile, SelectAllState, Status};
