//! Background fetch worker and terminal input thread.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::logic::locator::Locator;
use crate::sources;
use crate::state::{FetchOutcome, FetchRequest, StoriesPage};

/// What: Spawn the background worker that executes fetch requests.
///
/// Inputs:
/// - `req_rx`: Channel receiver for fetch requests
/// - `res_tx`: Channel sender for completions
/// - `fetch`: Async function performing one request (the HTTP source in production)
///
/// Output:
/// - Handle of the dispatcher task; it ends when `req_rx` closes.
///
/// Details:
/// - Each request runs on its own task, so a slow request never delays a newer one.
/// - Nothing is cancelled; staleness is decided by the receiver via the echoed id.
/// - Errors are flattened to strings before crossing the channel.
pub fn spawn_fetch_worker<F, Fut>(
    mut req_rx: mpsc::UnboundedReceiver<FetchRequest>,
    res_tx: mpsc::UnboundedSender<FetchOutcome>,
    fetch: F,
) -> JoinHandle<()>
where
    F: Fn(Locator) -> Fut + Send + 'static,
    Fut: Future<Output = sources::Result<StoriesPage>> + Send + 'static,
{
    tokio::spawn(async move {
        while let Some(FetchRequest { id, locator }) = req_rx.recv().await {
            let pending = fetch(locator.clone());
            let tx = res_tx.clone();
            tokio::spawn(async move {
                let result = pending.await.map_err(|e| e.to_string());
                if tx.send(FetchOutcome { id, locator, result }).is_err() {
                    tracing::debug!(id, "[Fetch] Runtime gone; dropping completion");
                }
            });
        }
        tracing::debug!("[Fetch] Request channel closed; worker exiting");
    })
}

/// What: Spawn the thread that forwards terminal input to the event loop.
///
/// Inputs:
/// - `headless`: When `true`, no thread is started
/// - `event_tx`: Channel sender for terminal events
/// - `cancelled`: Flag checked between polls to stop the thread
///
/// Details:
/// - Polls with a 50ms timeout so the cancellation flag is observed promptly
/// - Exits when the receiver is dropped
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => {
                    if let Ok(ev) = crossterm::event::read() {
                        if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                }
                Ok(false) | Err(_) => {}
            }
        }
    });
}
