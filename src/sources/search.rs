//! Story search against the index's `/search` endpoint.

use serde_json::Value;

use crate::logic::locator::Locator;
use crate::state::{StoriesPage, Story};
use crate::util::{i64_of, id_of, s, u64_of};

type Result<T> = super::Result<T>;

/// What: Fetch one page of stories for `locator`.
///
/// Inputs:
/// - `api_base`: API root (e.g. [`super::DEFAULT_API_BASE`]).
/// - `locator`: Search term and page to request.
///
/// Output:
/// - `Ok(StoriesPage)` on a 2xx response with a well-formed body; `Err` otherwise.
///
/// # Errors
/// - Returns `Err` when the request cannot be sent or the body cannot be read
/// - Returns `Err` on a non-success HTTP status
/// - Returns `Err` when the body is not JSON or lacks `hits`/`page`
///
/// Details:
/// - Single GET with no retry; the caller decides what a failure means.
pub async fn fetch_stories(api_base: String, locator: Locator) -> Result<StoriesPage> {
    let url = locator.to_url(&api_base);
    tracing::debug!(url = %url, "[Fetch] GET");

    let response = super::HTTP_CLIENT
        .get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    let status = response.status();
    if !status.is_success() {
        return Err(format!("Search request failed with HTTP {status}").into());
    }
    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {e}"))?;
    tracing::trace!(bytes = body.len(), "[Fetch] Response body received");
    parse_stories_page(&body)
}

/// What: Decode a search response body.
///
/// Inputs:
/// - `body`: Raw JSON text.
///
/// Output:
/// - `Ok(StoriesPage)` with hits in server order; `Err` when the body is malformed.
///
/// # Errors
/// - Returns `Err` when the body is not JSON
/// - Returns `Err` when `hits` is missing or not an array
/// - Returns `Err` when `page` is missing or not a non-negative integer
///
/// Details:
/// - Individual hits are decoded leniently: `null` text fields become empty strings and
///   `null` counts become zero, matching what the live index returns for sparse records.
/// - Hits without a usable `objectID` are skipped since they cannot be dismissed.
pub fn parse_stories_page(body: &str) -> Result<StoriesPage> {
    let v: Value =
        serde_json::from_str(body).map_err(|e| format!("Malformed search response: {e}"))?;
    let hits = v
        .get("hits")
        .and_then(Value::as_array)
        .ok_or("Malformed search response: missing `hits` array")?;
    let page = v
        .get("page")
        .and_then(Value::as_u64)
        .and_then(|p| u32::try_from(p).ok())
        .ok_or("Malformed search response: missing integer `page`")?;

    let mut stories = Vec::with_capacity(hits.len());
    for hit in hits {
        let Some(object_id) = id_of(hit, "objectID") else {
            tracing::debug!("[Fetch] Skipping hit without objectID");
            continue;
        };
        stories.push(Story {
            object_id,
            title: s(hit, "title"),
            url: s(hit, "url"),
            author: s(hit, "author"),
            num_comments: u64_of(hit, &["num_comments"]).unwrap_or(0),
            points: i64_of(hit, &["points"]).unwrap_or(0),
        });
    }
    Ok(StoriesPage {
        hits: stories,
        page,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: A well-formed body decodes every field in server order.
    ///
    /// Inputs:
    /// - Body with two hits on page 1, one with a numeric `objectID`.
    ///
    /// Output:
    /// - Two stories with all fields mapped and `page == 1`.
    fn parses_hits_and_page() {
        let body = r#"{
            "hits": [
                {"objectID": "0", "title": "React", "url": "https://reactjs.org/",
                 "author": "Jordan Walke", "num_comments": 3, "points": 4},
                {"objectID": 1, "title": "Redux", "url": "https://redux.js.org/",
                 "author": "Dan Abramov, Andrew Clark", "num_comments": 2, "points": 5}
            ],
            "page": 1,
            "nbPages": 50
        }"#;
        let page = parse_stories_page(body).expect("valid body");
        assert_eq!(page.page, 1);
        assert_eq!(page.hits.len(), 2);
        assert_eq!(page.hits[0].title, "React");
        assert_eq!(page.hits[0].author, "Jordan Walke");
        assert_eq!(page.hits[1].object_id, "1");
        assert_eq!(page.hits[1].num_comments, 2);
        assert_eq!(page.hits[1].points, 5);
    }

    #[test]
    /// What: Sparse hits decode with defaults and id-less hits are dropped.
    ///
    /// Inputs:
    /// - Hit with null url/title/num_comments; hit without objectID.
    ///
    /// Output:
    /// - Single story with empty strings and zero counts.
    fn sparse_hits_use_defaults() {
        let body = r#"{"hits": [
            {"objectID": "42", "title": null, "url": null, "author": "pg",
             "num_comments": null, "points": null},
            {"title": "orphan"}
        ], "page": 0}"#;
        let page = parse_stories_page(body).expect("valid body");
        assert_eq!(page.hits.len(), 1);
        let story = &page.hits[0];
        assert_eq!(story.object_id, "42");
        assert!(story.title.is_empty());
        assert!(story.url.is_empty());
        assert_eq!(story.num_comments, 0);
        assert_eq!(story.points, 0);
    }

    #[test]
    /// What: Missing or mistyped `hits`/`page` and non-JSON bodies are errors.
    fn malformed_bodies_are_errors() {
        for body in [
            "not json",
            r#"{"page": 0}"#,
            r#"{"hits": {}, "page": 0}"#,
            r#"{"hits": []}"#,
            r#"{"hits": [], "page": "0"}"#,
            r#"{"hits": [], "page": -1}"#,
        ] {
            assert!(parse_stories_page(body).is_err(), "accepted: {body}");
        }
    }
}
