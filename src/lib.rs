//! Library entry for file-downloader exposing the selection core, UI, and runtime.

pub mod app;
pub mod args;
pub mod events;
pub mod logic;
pub mod sources;
pub mod state;
pub mod theme;
pub mod ui;
