//! Core non-UI logic: locators, history, sorting, fetch orchestration, and intents.

/// Single-flight fetch issuance and completion.
pub mod fetch;
/// Search history and recent searches.
pub mod history;
/// User intents.
pub mod intents;
/// Search term plus page, and its URL form.
pub mod locator;
/// Story ordering.
pub mod sort;

pub use fetch::{apply_fetch_outcome, dispatch_latest, search};
pub use history::{DEFAULT_RECENT_COUNT, SearchHistory};
pub use intents::{
    change_search_draft, change_sort, dismiss, request_more, select_recent_search, submit_search,
};
pub use locator::Locator;
pub use sort::sort_stories;
