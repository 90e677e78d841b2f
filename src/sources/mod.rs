//! Network data retrieval for the story search index.

use std::sync::LazyLock;

mod search;

/// Result type alias for network operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Default API root of the Hacker News search index.
pub const DEFAULT_API_BASE: &str = "https://hn.algolia.com/api/v1";

/// Shared HTTP client; connection pooling is enabled by default in `reqwest::Client`.
///
/// No request timeout is configured: a hung request simply stays in flight
/// until a newer request supersedes it.
static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    reqwest::Client::builder()
        .user_agent(concat!("hackerstories/", env!("CARGO_PKG_VERSION")))
        .default_headers(headers)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
});

pub use search::{fetch_stories, parse_stories_page};
