use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::sources::SourceUpdate;

/// Channels between the runtime loop, the terminal event thread, and the file watcher.
pub struct Channels {
    /// Terminal events from the event thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiving end of terminal events.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on exit so the event thread stops polling.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// File list updates from the watcher.
    pub source_tx: mpsc::UnboundedSender<SourceUpdate>,
    /// Receiving end of file list updates.
    pub source_rx: mpsc::UnboundedReceiver<SourceUpdate>,
}

impl Channels {
    /// Create a fresh set of unbounded channels.
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let (source_tx, source_rx) = mpsc::unbounded_channel::<SourceUpdate>();
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            source_tx,
            source_rx,
        }
    }
}
