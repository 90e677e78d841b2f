//! Event handling layer: maps terminal input onto user intents.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::intents::{
    change_search_draft, change_sort, dismiss, request_more, select_recent_search, submit_search,
};
use crate::state::{AppState, FetchRequest, SortKey};

/// What: Map an F-key to the sort column it selects.
///
/// Inputs:
/// - `n`: Function key number.
///
/// Output:
/// - `Some(SortKey)` for F1-F5; `None` otherwise.
const fn sort_key_for_f(n: u8) -> Option<SortKey> {
    match n {
        1 => Some(SortKey::None),
        2 => Some(SortKey::Title),
        3 => Some(SortKey::Author),
        4 => Some(SortKey::Comments),
        5 => Some(SortKey::Points),
        _ => None,
    }
}

/// What: Handle one key press.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Mutable application state
/// - `fetch_tx`: Channel to the fetch worker
///
/// Output:
/// - `true` to request application exit; `false` otherwise.
///
/// Details:
/// - Printable characters and Backspace edit the draft (persisted on every change).
/// - Enter submits; Ctrl+N requests the next page unless a fetch is in flight.
/// - Alt+1..9 picks a recent search; F1-F5 pick the sort column.
/// - Delete/Ctrl+D dismisses the highlighted story; Ctrl+O opens its link.
fn handle_key(
    ke: KeyEvent,
    app: &mut AppState,
    fetch_tx: &mpsc::UnboundedSender<FetchRequest>,
) -> bool {
    let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);
    let alt = ke.modifiers.contains(KeyModifiers::ALT);
    match ke.code {
        KeyCode::Esc => return true,
        KeyCode::Char('c') if ctrl => return true,
        KeyCode::Char('n') if ctrl => {
            if !app.stories.is_loading {
                request_more(app, fetch_tx);
            }
        }
        KeyCode::Char('d') if ctrl => dismiss_selected(app),
        KeyCode::Char('o') if ctrl => {
            if let Some(story) = app.selected_story()
                && !story.url.is_empty()
            {
                crate::util::open_url(&story.url);
            }
        }
        KeyCode::Char(c) if alt && c.is_ascii_digit() => {
            let idx = c.to_digit(10).and_then(|d| d.checked_sub(1));
            if let Some(term) = idx.and_then(|i| app.recent_search_terms().get(i as usize).cloned())
            {
                select_recent_search(app, &term, fetch_tx);
            }
        }
        KeyCode::Char(c) if !ctrl && !alt => {
            let mut draft = app.draft.clone();
            draft.push(c);
            change_search_draft(app, draft);
        }
        KeyCode::Backspace => {
            let mut draft = app.draft.clone();
            if draft.pop().is_some() {
                change_search_draft(app, draft);
            }
        }
        KeyCode::Enter => {
            submit_search(app, fetch_tx);
        }
        KeyCode::Delete => dismiss_selected(app),
        KeyCode::Up => app.selected = app.selected.saturating_sub(1),
        KeyCode::Down => {
            if app.selected + 1 < app.stories.data.len() {
                app.selected += 1;
            }
        }
        KeyCode::Home => app.selected = 0,
        KeyCode::End => app.selected = app.stories.data.len().saturating_sub(1),
        KeyCode::F(n) => {
            if let Some(key) = sort_key_for_f(n) {
                change_sort(app, key);
            }
        }
        _ => {}
    }
    false
}

/// Dismiss the story under the cursor in the sorted view.
fn dismiss_selected(app: &mut AppState) {
    if let Some(story) = app.selected_story() {
        dismiss(app, &story.object_id);
    }
}

/// What: Dispatch a single terminal event.
///
/// Inputs:
/// - `ev`: Terminal event
/// - `app`: Mutable application state
/// - `fetch_tx`: Channel to the fetch worker
///
/// Output:
/// - `true` to request application exit; `false` otherwise.
///
/// Details:
/// - Only key presses are handled; releases, repeats, mouse, and resize events are ignored
///   (the next frame picks up a new size on its own).
pub fn handle_event(
    ev: &CEvent,
    app: &mut AppState,
    fetch_tx: &mpsc::UnboundedSender<FetchRequest>,
) -> bool {
    match ev {
        CEvent::Key(ke) if ke.kind == KeyEventKind::Press => handle_key(*ke, app, fetch_tx),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SEARCH_KEY;
    use crate::logic::locator::Locator;
    use crate::state::Story;

    fn key(code: KeyCode) -> CEvent {
        CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn key_mod(code: KeyCode, m: KeyModifiers) -> CEvent {
        CEvent::Key(KeyEvent::new(code, m))
    }

    fn story(id: &str, points: i64) -> Story {
        Story {
            object_id: id.to_string(),
            title: id.to_string(),
            url: format!("https://example.com/{id}"),
            author: "a".into(),
            num_comments: 0,
            points,
        }
    }

    #[test]
    /// What: Typing edits and persists the draft; Enter submits it.
    ///
    /// Inputs:
    /// - Backspace x5 over `React`, then `V`, `u`, `e`, Enter.
    ///
    /// Output:
    /// - Draft `Vue` stored; fetch request for `Vue` page 0.
    fn typing_and_enter_submit_search() {
        let mut app = AppState::default();
        let (tx, mut rx) = mpsc::unbounded_channel();
        for _ in 0..5 {
            handle_event(&key(KeyCode::Backspace), &mut app, &tx);
        }
        assert!(app.draft.is_empty());
        for c in ['V', 'u', 'e'] {
            handle_event(&key(KeyCode::Char(c)), &mut app, &tx);
        }
        assert_eq!(app.store.get(SEARCH_KEY).as_deref(), Some("Vue"));
        assert!(!handle_event(&key(KeyCode::Enter), &mut app, &tx));
        let req = rx.try_recv().expect("request");
        assert_eq!(req.locator, Locator::new("Vue", 0));
    }

    #[test]
    /// What: Ctrl+N is ignored while loading and requests the next page when idle.
    fn more_is_ignored_while_loading() {
        let mut app = AppState::default();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let more = key_mod(KeyCode::Char('n'), KeyModifiers::CONTROL);

        app.stories.is_loading = true;
        handle_event(&more, &mut app, &tx);
        assert!(rx.try_recv().is_err());

        app.stories.is_loading = false;
        handle_event(&more, &mut app, &tx);
        let req = rx.try_recv().expect("request");
        assert_eq!(req.locator, Locator::new("React", 1));
    }

    #[test]
    /// What: Delete dismisses the story highlighted in the sorted view, not the raw list.
    ///
    /// Inputs:
    /// - Stories a(1), b(9); Points sort puts b first; cursor on row 0.
    ///
    /// Output:
    /// - `b` is removed.
    fn delete_dismisses_sorted_selection() {
        let mut app = AppState::default();
        let (tx, _rx) = mpsc::unbounded_channel();
        app.stories.data = vec![story("a", 1), story("b", 9)];
        handle_event(&key(KeyCode::F(5)), &mut app, &tx);
        handle_event(&key(KeyCode::Delete), &mut app, &tx);
        assert_eq!(app.stories.data.len(), 1);
        assert_eq!(app.stories.data[0].object_id, "a");
    }

    #[test]
    /// What: Alt+digit selects the matching recent search.
    fn alt_digit_picks_recent_search() {
        let mut app = AppState::default();
        let (tx, mut rx) = mpsc::unbounded_channel();
        change_search_draft(&mut app, "Vue");
        submit_search(&mut app, &tx);
        let _ = rx.try_recv();

        handle_event(&key_mod(KeyCode::Char('1'), KeyModifiers::ALT), &mut app, &tx);
        let req = rx.try_recv().expect("request");
        assert_eq!(req.locator, Locator::new("React", 0));
        assert_eq!(app.draft, "React");

        handle_event(&key_mod(KeyCode::Char('9'), KeyModifiers::ALT), &mut app, &tx);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    /// What: Esc and Ctrl+C request exit; F-keys toggle sorting.
    fn exit_keys_and_sort_keys() {
        let mut app = AppState::default();
        let (tx, _rx) = mpsc::unbounded_channel();
        handle_event(&key(KeyCode::F(2)), &mut app, &tx);
        assert_eq!(app.sort.key, SortKey::Title);
        handle_event(&key(KeyCode::F(2)), &mut app, &tx);
        assert!(app.sort.is_reverse);
        assert!(handle_event(&key(KeyCode::Esc), &mut app, &tx));
        assert!(handle_event(
            &key_mod(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut app,
            &tx
        ));
    }
}
