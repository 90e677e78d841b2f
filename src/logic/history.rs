//! Session search history and the "recent searches" view derived from it.

use std::collections::HashSet;

use crate::logic::locator::Locator;

/// Number of recent searches offered when settings do not override it.
pub const DEFAULT_RECENT_COUNT: usize = 5;

/// Append-only log of every locator issued this session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchHistory {
    /// Locators in issue order, duplicates included.
    entries: Vec<Locator>,
}

impl SearchHistory {
    /// History seeded with the startup locator.
    #[must_use]
    pub fn seeded(seed: Locator) -> Self {
        Self {
            entries: vec![seed],
        }
    }

    /// Record a newly issued locator.
    pub fn append(&mut self, locator: Locator) {
        self.entries.push(locator);
    }

    /// Most recently issued locator, i.e. the active search.
    #[must_use]
    pub fn latest(&self) -> Option<&Locator> {
        self.entries.last()
    }

    /// Number of raw entries, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` before anything was issued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// What: Derive the recent-search suggestions.
    ///
    /// Inputs:
    /// - `max_count`: Upper bound on returned terms.
    ///
    /// Output:
    /// - Terms in chronological order, excluding the active search.
    ///
    /// Details:
    /// - Deduplicates whole locators keeping first-seen order.
    /// - Keeps the last `max_count + 1` unique entries and drops the final one.
    /// - Fewer entries than that: everything but the final one.
    /// - Uniqueness is per locator, not per term: after paging, `React@0` and
    ///   `React@1` both survive and the term is listed twice.
    #[must_use]
    pub fn recent_search_terms(&self, max_count: usize) -> Vec<String> {
        let mut seen = HashSet::new();
        let unique: Vec<&Locator> = self
            .entries
            .iter()
            .filter(|loc| seen.insert(*loc))
            .collect();
        let Some((_, earlier)) = unique.split_last() else {
            return Vec::new();
        };
        let start = earlier.len().saturating_sub(max_count);
        earlier[start..]
            .iter()
            .map(|loc| loc.term().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_of(terms: &[&str]) -> SearchHistory {
        let mut history = SearchHistory::default();
        for term in terms {
            history.append(Locator::new(*term, 0));
        }
        history
    }

    #[test]
    /// What: Duplicates collapse to their first occurrence and the active search is excluded.
    ///
    /// Inputs:
    /// - React, React, Redux, Angular, Vue, Svelte, Ember appended in order.
    ///
    /// Output:
    /// - React, Redux, Angular, Vue, Svelte.
    fn recent_terms_dedup_and_exclude_latest() {
        let history = history_of(&[
            "React", "React", "Redux", "Angular", "Vue", "Svelte", "Ember",
        ]);
        assert_eq!(
            history.recent_search_terms(DEFAULT_RECENT_COUNT),
            vec!["React", "Redux", "Angular", "Vue", "Svelte"]
        );
    }

    #[test]
    /// What: Only the newest `max_count` suggestions survive a long history.
    ///
    /// Inputs:
    /// - Eight distinct terms t0..t7.
    ///
    /// Output:
    /// - t2..t6: five entries, unique, chronological, without t7.
    fn recent_terms_capped_at_max_count() {
        let terms: Vec<String> = (0..8).map(|i| format!("t{i}")).collect();
        let refs: Vec<&str> = terms.iter().map(String::as_str).collect();
        let recent = history_of(&refs).recent_search_terms(DEFAULT_RECENT_COUNT);
        assert_eq!(recent, vec!["t2", "t3", "t4", "t5", "t6"]);
        assert!(!recent.contains(&"t7".to_string()));
    }

    #[test]
    /// What: Short histories return everything except the active search.
    fn short_history_returns_all_but_last() {
        assert!(SearchHistory::default().recent_search_terms(5).is_empty());
        assert!(history_of(&["React"]).recent_search_terms(5).is_empty());
        assert_eq!(
            history_of(&["React", "Vue"]).recent_search_terms(5),
            vec!["React"]
        );
    }

    #[test]
    /// What: A re-submitted earlier term keeps its first slot; the latest unique entry is dropped.
    ///
    /// Inputs:
    /// - React, Vue, React (third append equals the first).
    ///
    /// Output:
    /// - Only React remains: unique order is React, Vue and Vue is last.
    ///
    /// Details:
    /// - Mirrors the dedup-by-first-occurrence rule rather than move-to-front.
    fn resubmitted_term_keeps_first_position() {
        let history = history_of(&["React", "Vue", "React"]);
        assert_eq!(history.recent_search_terms(5), vec!["React"]);
        assert_eq!(history.latest().map(Locator::term), Some("React"));
    }

    #[test]
    /// What: Page requests are distinct locators and can surface the same term twice.
    fn paged_locators_are_distinct_entries() {
        let mut history = SearchHistory::seeded(Locator::new("React", 0));
        history.append(Locator::new("React", 1));
        history.append(Locator::new("Vue", 0));
        assert_eq!(history.len(), 3);
        assert_eq!(history.recent_search_terms(5), vec!["React", "React"]);
    }
}
