//! Application runtime: terminal lifecycle, event thread, and the main loop.

/// Runtime event loop and background tasks.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

pub use runtime::run;
