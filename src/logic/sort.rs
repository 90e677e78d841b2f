//! Pure sorting of the story collection for display.

use std::cmp::Reverse;

use crate::state::{SortKey, SortSelection, Story};

/// What: Produce the ordered view of `list` for the current sort selection.
///
/// Inputs:
/// - `list`: Stories in arrival order (left untouched)
/// - `selection`: Key and direction
///
/// Output:
/// - New vector ordered by the key's default direction, reversed when `is_reverse` is set.
///
/// Details:
/// - Title/Author ascend lexicographically; Comments/Points descend numerically.
/// - The sort is stable, so ties keep arrival order and repeated renders agree.
#[must_use]
pub fn sort_stories(list: &[Story], selection: SortSelection) -> Vec<Story> {
    let mut out = list.to_vec();
    match selection.key {
        SortKey::None => {}
        SortKey::Title => out.sort_by(|a, b| a.title.cmp(&b.title)),
        SortKey::Author => out.sort_by(|a, b| a.author.cmp(&b.author)),
        SortKey::Comments => out.sort_by_key(|s| Reverse(s.num_comments)),
        SortKey::Points => out.sort_by_key(|s| Reverse(s.points)),
    }
    if selection.is_reverse {
        out.reverse();
    }
    out
}
