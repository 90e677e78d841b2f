//! Application state: story collection, value types, and the `AppState` container.

pub mod app_state;
pub mod stories;
pub mod types;

pub use app_state::AppState;
pub use stories::{StoriesAction, StoriesState};
pub use types::{FetchOutcome, FetchRequest, SortKey, SortSelection, StoriesPage, Story};
