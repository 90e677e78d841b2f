//! Central `AppState` container owned by the runtime loop.

use crate::config::{MemoryPreferenceStore, PreferenceStore, Settings, load_search_term};
use crate::logic::history::SearchHistory;
use crate::logic::locator::Locator;
use crate::logic::sort::sort_stories;
use crate::state::stories::StoriesState;
use crate::state::types::{SortSelection, Story};

/// Global application state shared by the event, networking, and UI layers.
///
/// Only the runtime loop mutates it. The search-term draft is mirrored into
/// the preference store on every change; nothing else is persisted.
#[derive(Debug)]
pub struct AppState {
    /// Current search input text.
    pub draft: String,
    /// Every locator issued this session.
    pub history: SearchHistory,
    /// Accumulated stories and fetch flags.
    pub stories: StoriesState,
    /// Active sort column and direction.
    pub sort: SortSelection,
    /// Index into the sorted view that is currently highlighted.
    pub selected: usize,
    /// Identifier handed to the next fetch.
    pub next_fetch_id: u64,
    /// Identifier of the most recently issued fetch; only its completion is applied.
    pub latest_fetch_id: u64,
    /// Number of recent searches offered.
    pub recent_count: usize,
    /// API root requests are sent to.
    pub api_base: String,
    /// Where the search-term draft is persisted.
    pub store: Box<dyn PreferenceStore>,
}

impl AppState {
    /// What: Build the startup state.
    ///
    /// Inputs:
    /// - `settings`: Loaded settings (default term, recent count, sort, API root).
    /// - `store`: Preference store holding the last search term.
    ///
    /// Output:
    /// - State with empty stories on page 0 and history seeded with `(term, 0)`.
    ///
    /// Details:
    /// - The term is read once here; `settings.default_search` applies when none is stored.
    #[must_use]
    pub fn new(settings: &Settings, store: Box<dyn PreferenceStore>) -> Self {
        let term = load_search_term(store.as_ref(), &settings.default_search);
        Self {
            history: SearchHistory::seeded(Locator::new(term.clone(), 0)),
            draft: term,
            stories: StoriesState::default(),
            sort: SortSelection {
                key: settings.sort,
                is_reverse: false,
            },
            selected: 0,
            next_fetch_id: 1,
            latest_fetch_id: 0,
            recent_count: settings.recent_searches,
            api_base: settings.api_base.clone(),
            store,
        }
    }

    /// Recent-search suggestions, oldest first, excluding the active search.
    #[must_use]
    pub fn recent_search_terms(&self) -> Vec<String> {
        self.history.recent_search_terms(self.recent_count)
    }

    /// Stories ordered for display.
    #[must_use]
    pub fn sorted_view(&self) -> Vec<Story> {
        sort_stories(&self.stories.data, self.sort)
    }

    /// Story under the cursor in the sorted view.
    #[must_use]
    pub fn selected_story(&self) -> Option<Story> {
        self.sorted_view().into_iter().nth(self.selected)
    }

    /// Keep `selected` inside the current list.
    pub fn clamp_selection(&mut self) {
        let len = self.stories.data.len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            &Settings::default(),
            Box::new(MemoryPreferenceStore::default()),
        )
    }
}
