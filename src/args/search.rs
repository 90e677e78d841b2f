//! Command-line search: prints stories without starting the TUI.

use std::future::Future;

use tokio::sync::mpsc;

use crate::app::runtime::workers::spawn_fetch_worker;
use crate::args::Args;
use crate::config::{MemoryPreferenceStore, SEARCH_KEY, Settings};
use crate::logic::locator::Locator;
use crate::logic::{apply_fetch_outcome, dispatch_latest, request_more};
use crate::sources;
use crate::state::{AppState, StoriesPage};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Fetch `pages` pages of the seeded search into `app`.
///
/// Inputs:
/// - `app`: State whose history is seeded with the term to fetch
/// - `pages`: Number of pages to fetch (page 0 first, then "more")
/// - `fetch`: Async fetch function handed to the worker
///
/// Output:
/// - `Ok(())` once every page is applied or the server runs out of stories.
/// - `Err` with the failure reason when a fetch fails.
///
/// Details:
/// - Goes through the same worker, single-flight check, and reducer as the TUI.
pub async fn collect_pages<F, Fut>(app: &mut AppState, pages: u32, fetch: F) -> Result<()>
where
    F: Fn(Locator) -> Fut + Send + 'static,
    Fut: Future<Output = sources::Result<StoriesPage>> + Send + 'static,
{
    let (req_tx, req_rx) = mpsc::unbounded_channel();
    let (res_tx, mut res_rx) = mpsc::unbounded_channel();
    spawn_fetch_worker(req_rx, res_tx, fetch);

    for n in 0..pages {
        let before = app.stories.data.len();
        if n == 0 {
            dispatch_latest(app, &req_tx);
        } else {
            request_more(app, &req_tx);
        }
        loop {
            let outcome = res_rx
                .recv()
                .await
                .ok_or_else(|| "fetch worker stopped".to_string())?;
            let failure = outcome.result.as_ref().err().cloned();
            if apply_fetch_outcome(app, outcome) {
                if let Some(e) = failure {
                    return Err(format!("fetching page {n} failed: {e}").into());
                }
                break;
            }
        }
        if n > 0 && app.stories.data.len() == before {
            tracing::debug!(page = app.stories.page, "[Search] No more stories");
            break;
        }
    }
    Ok(())
}

/// What: Format the sorted view as printable lines.
///
/// Output:
/// - One line per story: points, comments, title, author, and link when present.
#[must_use]
pub fn format_stories(app: &AppState) -> Vec<String> {
    app.sorted_view()
        .iter()
        .map(|s| {
            let mut line = format!(
                "{:>6} pts {:>5} comments  {}  ({})",
                s.points, s.num_comments, s.title, s.author
            );
            if !s.url.is_empty() {
                line.push_str("  ");
                line.push_str(&s.url);
            }
            line
        })
        .collect()
}

/// What: Handle command-line search mode.
///
/// Inputs:
/// - `args`: Parsed arguments (`--search`, `--pages`, `--reverse`)
/// - `settings`: Settings with CLI overrides applied
///
/// Output:
/// - Prints one line per story (or a JSON array with `--json`) to stdout;
///   `Err` when the term is blank or a fetch fails.
///
/// Details:
/// - The term is held in an in-memory store, so print mode never changes the persisted draft.
pub async fn handle_search(args: &Args, settings: &Settings) -> Result<()> {
    let term = args.search.as_deref().map(str::trim).unwrap_or_default();
    if term.is_empty() {
        return Err("search term must not be empty".into());
    }
    tracing::info!(query = %term, pages = args.pages, "Search mode requested from CLI");

    let store = MemoryPreferenceStore::with(SEARCH_KEY, term);
    let mut app = AppState::new(settings, Box::new(store));
    app.sort.is_reverse = args.reverse;

    let api_base = settings.api_base.clone();
    collect_pages(&mut app, args.pages, move |locator| {
        sources::fetch_stories(api_base.clone(), locator)
    })
    .await?;

    if args.json {
        let out = serde_json::to_string_pretty(&app.sorted_view())
            .map_err(|e| format!("Failed to encode stories: {e}"))?;
        println!("{out}");
    } else {
        for line in format_stories(&app) {
            println!("{line}");
        }
    }
    Ok(())
}
