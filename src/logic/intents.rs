//! User intents emitted by the presentation layer.

use tokio::sync::mpsc;

use crate::config::SEARCH_KEY;
use crate::logic::fetch::search;
use crate::logic::locator::Locator;
use crate::state::{AppState, FetchRequest, SortKey, StoriesAction};

/// What: Persist and store a new search-term draft.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `text`: Full draft text after the edit
///
/// Output:
/// - Updates `app.draft` and writes it through to the preference store.
///
/// Details:
/// - Write failures are logged and otherwise ignored; the session continues with the in-memory draft.
pub fn change_search_draft(app: &mut AppState, text: impl Into<String>) {
    app.draft = text.into();
    if let Err(e) = app.store.set(SEARCH_KEY, &app.draft) {
        tracing::warn!(error = %e, "[Persist] Failed to save search term");
    }
}

/// What: Search for the current draft from page 0.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `fetch_tx`: Channel to the fetch worker
///
/// Output:
/// - `Some(id)` of the issued fetch; `None` when the draft is empty.
pub fn submit_search(
    app: &mut AppState,
    fetch_tx: &mpsc::UnboundedSender<FetchRequest>,
) -> Option<u64> {
    if app.draft.is_empty() {
        return None;
    }
    let locator = Locator::new(app.draft.clone(), 0);
    app.selected = 0;
    Some(search(app, locator, fetch_tx))
}

/// What: Fetch the page after the last applied one for the active search.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `fetch_tx`: Channel to the fetch worker
///
/// Output:
/// - `Some(id)` of the issued fetch; `None` when no search has been issued.
///
/// Details:
/// - The term comes from the latest locator, not the draft, so editing the
///   input without submitting keeps paging the active search.
/// - The page is derived from `stories.page`, the last *applied* page.
pub fn request_more(
    app: &mut AppState,
    fetch_tx: &mpsc::UnboundedSender<FetchRequest>,
) -> Option<u64> {
    let next = app.history.latest()?.next_page(app.stories.page);
    Some(search(app, next, fetch_tx))
}

/// What: Re-run a suggested recent search.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `term`: Term picked from the recent-search list
/// - `fetch_tx`: Channel to the fetch worker
///
/// Output:
/// - Identifier of the issued fetch.
///
/// Details:
/// - Also replaces (and persists) the draft so the input shows the picked term.
pub fn select_recent_search(
    app: &mut AppState,
    term: &str,
    fetch_tx: &mpsc::UnboundedSender<FetchRequest>,
) -> u64 {
    change_search_draft(app, term);
    app.selected = 0;
    search(app, Locator::new(term, 0), fetch_tx)
}

/// Drop a story from the collection; allowed while a fetch is in flight.
pub fn dismiss(app: &mut AppState, object_id: &str) {
    app.stories.apply(StoriesAction::Remove {
        object_id: object_id.to_string(),
    });
    app.clamp_selection();
}

/// Apply a column-header click to the sort selection.
pub fn change_sort(app: &mut AppState, key: SortKey) {
    app.sort = app.sort.toggle(key);
}
