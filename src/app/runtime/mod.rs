//! Event loop driving `AppState` from input and fetch completions.

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::config::{PreferenceStore, Settings};
use crate::logic::{apply_fetch_outcome, dispatch_latest};
use crate::sources;
use crate::state::AppState;
use crate::ui::ui;

use super::terminal::{restore_terminal, setup_terminal};

pub mod channels;
pub mod workers;

use channels::Channels;
use workers::{spawn_event_thread, spawn_fetch_worker};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Environment variable that skips terminal setup and input (tests, CI).
pub const HEADLESS_ENV: &str = "HACKERSTORIES_TEST_HEADLESS";

/// What: Run the TUI end-to-end: initialize terminal and state, spawn the fetch worker
/// and input thread, drive the event loop, and restore the terminal on exit.
///
/// Inputs:
/// - `settings`: Loaded settings (API root, default term, recent count, initial sort).
/// - `store`: Preference store holding the last search term.
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal errors.
///
/// Details:
/// - The seed locator is fetched immediately, mirroring a search for the persisted term.
/// - Event loop: renders a frame, then handles one terminal event or one fetch completion.
/// - Headless mode (`HACKERSTORIES_TEST_HEADLESS=1`) skips raw mode and input.
pub async fn run(settings: Settings, store: Box<dyn PreferenceStore>) -> Result<()> {
    let headless = std::env::var(HEADLESS_ENV).ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = AppState::new(&settings, store);
    let mut channels = Channels::new();

    if let Some(req_rx) = channels.fetch_req_rx.take() {
        let api_base = app.api_base.clone();
        spawn_fetch_worker(req_rx, channels.fetch_res_tx.clone(), move |locator| {
            sources::fetch_stories(api_base.clone(), locator)
        });
    }
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    dispatch_latest(&mut app, &channels.fetch_req_tx);

    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, &app));
        }

        select! {
            Some(ev) = channels.event_rx.recv() => {
                if crate::events::handle_event(&ev, &mut app, &channels.fetch_req_tx) {
                    break;
                }
            }
            Some(outcome) = channels.fetch_res_rx.recv() => {
                apply_fetch_outcome(&mut app, outcome);
            }
            else => break,
        }
    }

    tracing::debug!("[Runtime] Main loop exited");
    channels
        .event_thread_cancelled
        .store(true, std::sync::atomic::Ordering::Relaxed);

    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
