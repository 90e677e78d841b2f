//! Core value types shared by the state engine, fetch worker, and UI.

use crate::logic::locator::Locator;

/// A single story record returned by the search index.
///
/// Identity is `object_id`; the record is never mutated after it is fetched.
/// Serializes with the index's field names, which is what `--json` prints.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Story {
    /// Unique identifier (`objectID` on the wire).
    #[serde(rename = "objectID")]
    pub object_id: String,
    /// Story headline.
    pub title: String,
    /// Link target; empty for text-only posts.
    pub url: String,
    /// Submitter handle.
    pub author: String,
    /// Number of comments.
    pub num_comments: u64,
    /// Score.
    pub points: i64,
}

/// One decoded page of search results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoriesPage {
    /// Stories in server order.
    pub hits: Vec<Story>,
    /// Page index echoed by the server.
    pub page: u32,
}

/// Fetch request sent to the background worker.
#[derive(Clone, Debug)]
pub struct FetchRequest {
    /// Monotonic identifier used to correlate responses.
    pub id: u64,
    /// What to fetch.
    pub locator: Locator,
}

/// Completion reported by the background worker for a prior [`FetchRequest`].
#[derive(Clone, Debug)]
pub struct FetchOutcome {
    /// Echoed identifier from the originating request.
    pub id: u64,
    /// Echoed locator from the originating request.
    pub locator: Locator,
    /// Decoded page, or a description of the transport/decoding failure.
    pub result: Result<StoriesPage, String>,
}

/// Column used to order the story list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Server order.
    #[default]
    None,
    /// Title, ascending.
    Title,
    /// Author, ascending.
    Author,
    /// Comment count, descending.
    Comments,
    /// Points, descending.
    Points,
}

impl SortKey {
    /// Every key in header order.
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::Title,
        Self::Author,
        Self::Comments,
        Self::Points,
    ];

    /// Return the string key used in settings files and on the command line.
    ///
    /// Inputs: none
    ///
    /// Output: Static config key string.
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Title => "title",
            Self::Author => "author",
            Self::Comments => "comments",
            Self::Points => "points",
        }
    }

    /// Parse a sort key from its settings key or aliases.
    ///
    /// Inputs: `s` config string (case-insensitive).
    ///
    /// Output: `Some(SortKey)` on recognized value; `None` otherwise.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" | "server" | "default" => Some(Self::None),
            "title" => Some(Self::Title),
            "author" | "by" => Some(Self::Author),
            "comments" | "num_comments" => Some(Self::Comments),
            "points" | "score" => Some(Self::Points),
            _ => None,
        }
    }

    /// Column header label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "Default",
            Self::Title => "Title",
            Self::Author => "Author",
            Self::Comments => "Comments",
            Self::Points => "Points",
        }
    }
}

/// Active sort key plus direction flag. View-local, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSelection {
    /// Selected column.
    pub key: SortKey,
    /// Reverse the key's default direction.
    pub is_reverse: bool,
}

impl SortSelection {
    /// What: Apply a header click to the current selection.
    ///
    /// Inputs:
    /// - `key`: Column the user picked.
    ///
    /// Output:
    /// - Selection after the click.
    ///
    /// Details:
    /// - Picking the active key flips `is_reverse`.
    /// - Picking another key adopts it in its default direction.
    #[must_use]
    pub fn toggle(self, key: SortKey) -> Self {
        let is_reverse = self.key == key && !self.is_reverse;
        Self { key, is_reverse }
    }
}
