//! Channels linking the event loop, input thread, and fetch worker.

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::state::{FetchOutcome, FetchRequest};

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Contains the senders and receivers used between the main event loop,
///   the terminal input thread, and the fetch worker
pub struct Channels {
    /// Terminal events from the input thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiving end drained by the event loop.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Tells the input thread to stop.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Requests handed to the fetch worker.
    pub fetch_req_tx: mpsc::UnboundedSender<FetchRequest>,
    /// Receiving end owned by the fetch worker until it is spawned.
    pub fetch_req_rx: Option<mpsc::UnboundedReceiver<FetchRequest>>,
    /// Completions reported by the fetch worker.
    pub fetch_res_tx: mpsc::UnboundedSender<FetchOutcome>,
    /// Receiving end drained by the event loop.
    pub fetch_res_rx: mpsc::UnboundedReceiver<FetchOutcome>,
}

impl Channels {
    /// Create every channel pair with the input thread marked as running.
    #[must_use]
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (fetch_req_tx, fetch_req_rx) = mpsc::unbounded_channel();
        let (fetch_res_tx, fetch_res_rx) = mpsc::unbounded_channel();
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            fetch_req_tx,
            fetch_req_rx: Some(fetch_req_rx),
            fetch_res_tx,
            fetch_res_rx,
        }
    }
}

impl Default for Channels {
    fn default() -> Self {
        Self::new()
    }
}
