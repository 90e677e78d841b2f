//! Story collection state and the transitions that mutate it.

use crate::state::types::Story;

/// Accumulated result set plus fetch status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoriesState {
    /// Stories in arrival order (page 0 first, later pages appended).
    pub data: Vec<Story>,
    /// Most recently applied page index.
    pub page: u32,
    /// A fetch is in flight.
    pub is_loading: bool,
    /// The last fetch failed.
    pub is_error: bool,
}

/// The only ways [`StoriesState`] may change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoriesAction {
    /// A fetch was just issued.
    Init,
    /// The current fetch delivered a page.
    Success {
        /// Stories on the delivered page.
        list: Vec<Story>,
        /// Page index reported by the server.
        page: u32,
    },
    /// The current fetch failed (transport or decoding).
    Failure,
    /// The user dismissed a story.
    Remove {
        /// Identity of the story to drop.
        object_id: String,
    },
}

impl StoriesState {
    /// What: Apply one transition in place.
    ///
    /// Inputs:
    /// - `action`: Transition to apply.
    ///
    /// Output:
    /// - Mutates `self`.
    ///
    /// Details:
    /// - `Init` raises `is_loading` and clears `is_error`, leaving `data`/`page` alone.
    /// - `Success` with page 0 replaces `data`; any other page appends.
    /// - `Failure` keeps `data`/`page` and raises `is_error`.
    /// - `Remove` only filters `data` and may run mid-fetch.
    /// - `Success`/`Failure` without an outstanding `Init` is a caller bug.
    pub fn apply(&mut self, action: StoriesAction) {
        match action {
            StoriesAction::Init => {
                self.is_loading = true;
                self.is_error = false;
            }
            StoriesAction::Success { list, page } => {
                debug_assert!(self.is_loading, "Success applied without a pending Init");
                self.is_loading = false;
                self.is_error = false;
                if page == 0 {
                    self.data = list;
                } else {
                    self.data.extend(list);
                }
                self.page = page;
            }
            StoriesAction::Failure => {
                debug_assert!(self.is_loading, "Failure applied without a pending Init");
                self.is_loading = false;
                self.is_error = true;
            }
            StoriesAction::Remove { object_id } => {
                self.data.retain(|story| story.object_id != object_id);
            }
        }
    }

    /// Pure form of [`StoriesState::apply`].
    #[must_use]
    pub fn reduce(mut self, action: StoriesAction) -> Self {
        self.apply(action);
        self
    }
}
