//! Request locators: the (search term, page) pair behind every fetch.

use crate::util::{percent_decode, percent_encode};

/// Path of the search endpoint below the API base.
const SEARCH_PATH: &str = "/search";

/// Structured reference to one page of one search.
///
/// Locators are compared by value; the wire form only exists at the network boundary.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Locator {
    /// Search term exactly as submitted.
    term: String,
    /// Zero-based page index.
    page: u32,
}

impl Locator {
    /// Build a locator for `term` at `page`.
    #[must_use]
    pub fn new(term: impl Into<String>, page: u32) -> Self {
        Self {
            term: term.into(),
            page,
        }
    }

    /// Search term this locator was built from.
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Page index this locator was built from.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Locator for the page after `current_page` of the same search.
    #[must_use]
    pub fn next_page(&self, current_page: u32) -> Self {
        Self::new(self.term.clone(), current_page.saturating_add(1))
    }

    /// What: Serialize the locator into a request URL.
    ///
    /// Inputs:
    /// - `api_base`: API root such as `https://hn.algolia.com/api/v1` (trailing `/` tolerated).
    ///
    /// Output:
    /// - `{api_base}/search?query={term}&page={page}` with the term percent-encoded.
    ///
    /// Details:
    /// - Every byte outside the RFC 3986 unreserved set is escaped, so `&`, `=`,
    ///   `%`, and `query=` inside a term cannot collide with the query syntax.
    #[must_use]
    pub fn to_url(&self, api_base: &str) -> String {
        format!(
            "{}{SEARCH_PATH}?query={}&page={}",
            api_base.trim_end_matches('/'),
            percent_encode(&self.term),
            self.page
        )
    }

    /// What: Recover a locator from a URL produced by [`Locator::to_url`].
    ///
    /// Inputs:
    /// - `url`: Full request URL.
    ///
    /// Output:
    /// - `Some(Locator)` when both `query` and a numeric `page` parameter are present; `None` otherwise.
    ///
    /// Details:
    /// - Parameters are split on `&` before decoding, so escaped delimiters inside
    ///   the term survive intact.
    /// - A missing `page` parameter defaults to 0.
    #[must_use]
    pub fn from_url(url: &str) -> Option<Self> {
        let (_, query) = url.split_once('?')?;
        let mut term = None;
        let mut page = 0;
        for pair in query.split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "query" => term = Some(percent_decode(value)?),
                "page" => page = value.parse().ok()?,
                _ => {}
            }
        }
        term.map(|term| Self { term, page })
    }
}

#[cfg(test)]
mod tests {
    use super::Locator;

    const BASE: &str = "https://hn.algolia.com/api/v1";

    #[test]
    /// What: Default locator serializes to the documented endpoint shape.
    fn to_url_matches_endpoint_shape() {
        let loc = Locator::new("React", 0);
        assert_eq!(
            loc.to_url(BASE),
            "https://hn.algolia.com/api/v1/search?query=React&page=0"
        );
        assert_eq!(
            Locator::new("React", 2).to_url("http://localhost:8080/"),
            "http://localhost:8080/search?query=React&page=2"
        );
    }

    #[test]
    /// What: Terms containing query delimiters survive a URL roundtrip.
    ///
    /// Inputs:
    /// - Terms with `&`, `query=`, `%`, spaces, `+`, and non-ASCII text.
    ///
    /// Output:
    /// - `from_url(to_url(loc)) == loc` for every term and page.
    ///
    /// Details:
    /// - Guards against substring-based extraction regressing.
    fn delimiter_terms_roundtrip() {
        let terms = [
            "rust & go",
            "query=foo",
            "a&page=9",
            "100% safe",
            "c++",
            "naïve café",
            "",
        ];
        for (i, term) in terms.iter().enumerate() {
            let loc = Locator::new(*term, u32::try_from(i).unwrap_or(0));
            let url = loc.to_url(BASE);
            assert_eq!(Locator::from_url(&url), Some(loc), "url: {url}");
        }
    }

    #[test]
    /// What: Unparseable URLs yield `None` instead of a corrupt locator.
    fn from_url_rejects_garbage() {
        assert_eq!(Locator::from_url("https://example.com/search"), None);
        assert_eq!(Locator::from_url("https://example.com/search?page=1"), None);
        assert_eq!(
            Locator::from_url("https://example.com/search?query=x&page=two"),
            None
        );
        assert_eq!(Locator::from_url("https://example.com/search?query=%G1"), None);
    }

    #[test]
    /// What: Next page keeps the term and advances from the applied page.
    fn next_page_advances_from_current_page() {
        let loc = Locator::new("Svelte", 0);
        let next = loc.next_page(3);
        assert_eq!(next.term(), "Svelte");
        assert_eq!(next.page(), 4);
    }
}
