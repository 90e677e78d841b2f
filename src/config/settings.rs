//! `settings.conf` parsing and first-run skeleton.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::logic::history::DEFAULT_RECENT_COUNT;
use crate::sources::DEFAULT_API_BASE;
use crate::state::SortKey;

/// Search term used when nothing has been persisted yet.
pub const DEFAULT_SEARCH_TERM: &str = "React";

/// User-tunable settings loaded from `settings.conf`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// API root of the search index.
    pub api_base: String,
    /// Term used at startup when no term has been persisted.
    pub default_search: String,
    /// Number of recent searches offered.
    pub recent_searches: usize,
    /// Sort key selected at startup.
    pub sort: SortKey,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            default_search: DEFAULT_SEARCH_TERM.to_string(),
            recent_searches: DEFAULT_RECENT_COUNT,
            sort: SortKey::None,
        }
    }
}

/// Skeleton written when no settings file exists yet.
const SETTINGS_SKELETON: &str = "\
# hackerstories settings
#
# Lines are `key = value`; `#` starts a comment.

# API root of the story search index
api_base = https://hn.algolia.com/api/v1

# Search term used on first start (later starts reuse the last term typed)
default_search = React

# Number of recent searches shown
recent_searches = 5

# Initial sort: none | title | author | comments | points
sort = none
";

/// What: Strip a trailing `# comment` from a settings value.
///
/// Inputs:
/// - `val`: Raw value text after `=`.
///
/// Output:
/// - Value without the inline comment, trimmed.
///
/// Details:
/// - Only a `#` preceded by whitespace starts a comment, so URLs with fragments survive.
fn strip_inline_comment(val: &str) -> &str {
    let bytes = val.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'#' && i > 0 && bytes[i - 1].is_ascii_whitespace() {
            return val[..i].trim();
        }
    }
    val.trim()
}

/// What: Parse settings from `settings.conf` content.
///
/// Inputs:
/// - `content`: Content of the settings file as a string.
/// - `settings`: Mutable reference to `Settings` to populate.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - Keys are case-insensitive; `.`, `-`, and spaces normalize to `_`.
/// - Invalid values keep the previous value; unknown keys are ignored.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, val_raw)) = trimmed.split_once('=') else {
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(val_raw);
        match key.as_str() {
            "api_base" | "api_url" => {
                if !val.is_empty() {
                    settings.api_base = val.trim_end_matches('/').to_string();
                }
            }
            "default_search" | "default_term" => {
                if !val.is_empty() {
                    settings.default_search = val.to_string();
                }
            }
            "recent_searches" | "recent_count" => {
                if let Ok(v) = val.parse::<usize>() {
                    settings.recent_searches = v;
                }
            }
            "sort" | "sort_mode" => {
                if let Some(k) = SortKey::from_config_key(val) {
                    settings.sort = k;
                }
            }
            _ => {
                debug!(key = %key, "[Config] Ignoring unknown settings key");
            }
        }
    }
}

/// What: Load settings from `path`, writing a commented skeleton when the file is missing.
///
/// Inputs:
/// - `path`: Location of `settings.conf`.
///
/// Output:
/// - Parsed `Settings`; defaults when the file is missing or unreadable.
pub fn load_settings(path: &Path) -> Settings {
    let mut settings = Settings::default();
    match fs::read_to_string(path) {
        Ok(content) => {
            parse_settings(&content, &mut settings);
            debug!(path = %path.display(), "[Config] Settings loaded");
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            if let Err(e) = fs::write(path, SETTINGS_SKELETON) {
                warn!(path = %path.display(), error = %e, "[Config] Failed to write settings skeleton");
            } else {
                debug!(path = %path.display(), "[Config] Wrote settings skeleton");
            }
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "[Config] Failed to read settings; using defaults");
        }
    }
    settings
}
