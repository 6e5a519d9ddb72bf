//! Where the external file list comes from: a JSON file (optionally watched) or the built-in sample.

mod demo;
mod files;
mod watch;

pub use demo::demo_files;
pub use files::{LoadError, load_files, parse_files};
pub use watch::{FileStamp, SourceUpdate, file_stamp, spawn_file_watcher};
