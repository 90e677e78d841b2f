//! Single-flight fetch issuance and completion.

use tokio::sync::mpsc;

use crate::logic::locator::Locator;
use crate::state::{AppState, FetchOutcome, FetchRequest, StoriesAction};

/// What: Record `locator` in the history and fetch it.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `locator`: Search and page to fetch
/// - `fetch_tx`: Channel to the fetch worker
///
/// Output:
/// - Identifier assigned to the issued fetch.
pub fn search(
    app: &mut AppState,
    locator: Locator,
    fetch_tx: &mpsc::UnboundedSender<FetchRequest>,
) -> u64 {
    app.history.append(locator);
    dispatch_latest(app, fetch_tx)
}

/// What: Issue a fetch for the most recently appended locator.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `fetch_tx`: Channel to the fetch worker
///
/// Output:
/// - Identifier assigned to the issued fetch (0 when the history is empty and nothing was sent).
///
/// Details:
/// - Applies `Init` before handing the request off, so loading is visible immediately.
/// - Bumps `latest_fetch_id`; completions of older ids are ignored from here on.
/// - A closed worker channel resolves the fetch as `Failure` right away.
pub fn dispatch_latest(app: &mut AppState, fetch_tx: &mpsc::UnboundedSender<FetchRequest>) -> u64 {
    let Some(locator) = app.history.latest().cloned() else {
        return 0;
    };
    let id = app.next_fetch_id;
    app.next_fetch_id += 1;
    app.latest_fetch_id = id;
    app.stories.apply(StoriesAction::Init);
    tracing::debug!(id, term = %locator.term(), page = locator.page(), "[Fetch] Issued");
    if fetch_tx.send(FetchRequest { id, locator }).is_err() {
        tracing::warn!(id, "[Fetch] Worker channel closed; failing request");
        app.stories.apply(StoriesAction::Failure);
    }
    id
}

/// What: Apply a worker completion if it answers the active search.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `outcome`: Completion reported by the worker
///
/// Output:
/// - `true` when the outcome was applied; `false` when it was stale.
///
/// Details:
/// - A completion is current when it carries the latest id, or when its locator equals
///   the latest locator at the time it arrives (an earlier request for a resubmitted search).
/// - The first current completion settles the fetch; later ones for the same search are
///   dropped, so a failing duplicate cannot discard a page that already arrived.
/// - Success applies the server-reported page; any error applies `Failure`.
/// - Stale completions are dropped without touching state.
pub fn apply_fetch_outcome(app: &mut AppState, outcome: FetchOutcome) -> bool {
    let is_current = outcome.id == app.latest_fetch_id
        || app.history.latest() == Some(&outcome.locator);
    if !is_current || !app.stories.is_loading {
        tracing::debug!(
            id = outcome.id,
            latest = app.latest_fetch_id,
            settled = !app.stories.is_loading,
            "[Fetch] Dropping stale completion"
        );
        return false;
    }
    match outcome.result {
        Ok(page) => {
            tracing::info!(
                term = %outcome.locator.term(),
                page = page.page,
                hits = page.hits.len(),
                "[Fetch] Stories received"
            );
            app.stories.apply(StoriesAction::Success {
                list: page.hits,
                page: page.page,
            });
        }
        Err(e) => {
            tracing::warn!(
                term = %outcome.locator.term(),
                page = outcome.locator.page(),
                error = %e,
                "[Fetch] Request failed"
            );
            app.stories.apply(StoriesAction::Failure);
        }
    }
    app.clamp_selection();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{StoriesPage, Story};

    fn story(id: &str) -> Story {
        Story {
            object_id: id.to_string(),
            title: format!("title {id}"),
            url: String::new(),
            author: "a".into(),
            num_comments: 0,
            points: 0,
        }
    }

    fn ok(id: u64, locator: Locator, ids: &[&str]) -> FetchOutcome {
        FetchOutcome {
            id,
            result: Ok(StoriesPage {
                hits: ids.iter().map(|i| story(i)).collect(),
                page: locator.page(),
            }),
            locator,
        }
    }

    #[test]
    /// What: Dispatch applies Init synchronously and sends the latest locator.
    ///
    /// Inputs:
    /// - Default state seeded with `React`.
    ///
    /// Output:
    /// - `is_loading` set, id 1 recorded and sent with the seed locator.
    fn dispatch_sets_loading_and_sends_latest() {
        let mut app = AppState::default();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let id = dispatch_latest(&mut app, &tx);
        assert_eq!(id, 1);
        assert_eq!(app.latest_fetch_id, 1);
        assert!(app.stories.is_loading);
        let req = rx.try_recv().expect("request sent");
        assert_eq!(req.id, 1);
        assert_eq!(req.locator, Locator::new("React", 0));
    }

    #[test]
    /// What: Only the latest fetch's completion is applied.
    ///
    /// Inputs:
    /// - Two searches issued back to back; completions arrive newest first, then the stale one.
    ///
    /// Output:
    /// - Newest data applied; the stale completion is rejected and leaves state untouched.
    fn stale_completion_is_dropped() {
        let mut app = AppState::default();
        let (tx, _rx) = mpsc::unbounded_channel();
        let first = search(&mut app, Locator::new("Vue", 0), &tx);
        let second = search(&mut app, Locator::new("Svelte", 0), &tx);

        assert!(apply_fetch_outcome(
            &mut app,
            ok(second, Locator::new("Svelte", 0), &["s1"])
        ));
        let after_latest = app.stories.clone();
        assert!(!apply_fetch_outcome(
            &mut app,
            ok(first, Locator::new("Vue", 0), &["v1", "v2"])
        ));
        assert_eq!(app.stories, after_latest);
        assert_eq!(app.stories.data[0].object_id, "s1");
    }

    #[test]
    /// What: Resubmitting the same search keeps the first answer instead of waiting on the duplicate.
    ///
    /// Inputs:
    /// - `Vue@0` searched twice; the first request completes, then the duplicate fails.
    ///
    /// Output:
    /// - First completion applied and loading cleared; the failing duplicate is dropped and
    ///   the stories from the first answer remain without an error flag.
    fn same_locator_resubmit_applies_first_completion() {
        let mut app = AppState::default();
        let (tx, _rx) = mpsc::unbounded_channel();
        let first = search(&mut app, Locator::new("Vue", 0), &tx);
        let second = search(&mut app, Locator::new("Vue", 0), &tx);
        assert_ne!(first, second);

        assert!(apply_fetch_outcome(
            &mut app,
            ok(first, Locator::new("Vue", 0), &["v1", "v2"])
        ));
        assert!(!app.stories.is_loading);
        assert_eq!(app.stories.data.len(), 2);

        assert!(!apply_fetch_outcome(
            &mut app,
            FetchOutcome {
                id: second,
                locator: Locator::new("Vue", 0),
                result: Err("Network error: offline".into()),
            }
        ));
        assert!(!app.stories.is_error);
        assert_eq!(app.stories.data.len(), 2);
    }

    #[test]
    /// What: An older request for a different search stays stale even while loading.
    fn older_other_locator_is_dropped_while_loading() {
        let mut app = AppState::default();
        let (tx, _rx) = mpsc::unbounded_channel();
        let first = search(&mut app, Locator::new("Vue", 0), &tx);
        search(&mut app, Locator::new("Svelte", 0), &tx);
        assert!(!apply_fetch_outcome(
            &mut app,
            ok(first, Locator::new("Vue", 0), &["v1"])
        ));
        assert!(app.stories.is_loading);
        assert!(app.stories.data.is_empty());
    }

    #[test]
    /// What: A failed latest fetch flags the error and keeps the previous stories.
    fn failed_completion_sets_error() {
        let mut app = AppState::default();
        let (tx, _rx) = mpsc::unbounded_channel();
        let id = dispatch_latest(&mut app, &tx);
        apply_fetch_outcome(&mut app, ok(id, Locator::new("React", 0), &["a", "b"]));

        let id = search(&mut app, Locator::new("React", 1), &tx);
        assert!(apply_fetch_outcome(
            &mut app,
            FetchOutcome {
                id,
                locator: Locator::new("React", 1),
                result: Err("Network error: offline".into()),
            }
        ));
        assert!(app.stories.is_error);
        assert!(!app.stories.is_loading);
        assert_eq!(app.stories.data.len(), 2);
        assert_eq!(app.stories.page, 0);
    }

    #[test]
    /// What: A closed worker channel fails the fetch immediately instead of loading forever.
    fn closed_channel_fails_fetch() {
        let mut app = AppState::default();
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        dispatch_latest(&mut app, &tx);
        assert!(!app.stories.is_loading);
        assert!(app.stories.is_error);
    }
}
