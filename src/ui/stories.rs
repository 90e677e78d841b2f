//! Stories table with sortable column headers.

use ratatui::{
    Frame,
    layout::Constraint,
    prelude::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Cell, Row, Table, TableState},
};

use super::theme::PALETTE;
use crate::state::{AppState, SortKey, SortSelection};
use crate::util::fit_width;

/// Columns shown in the table, each with the F-key that sorts by it.
const COLUMNS: [(SortKey, &str); 4] = [
    (SortKey::Title, "F2"),
    (SortKey::Author, "F3"),
    (SortKey::Comments, "F4"),
    (SortKey::Points, "F5"),
];

/// What: Build the header label for one column.
///
/// Inputs:
/// - `key`: Column sort key
/// - `hotkey`: F-key shown next to the label
/// - `sort`: Current sort selection
///
/// Output:
/// - Label such as `Title [F2]`, suffixed with `▲`/`▼` when the column is active.
///
/// Details:
/// - Comments and Points sort descending by default, so their unreversed arrow points down.
#[must_use]
pub fn header_label(key: SortKey, hotkey: &str, sort: SortSelection) -> String {
    let base = format!("{} [{hotkey}]", key.label());
    if sort.key != key {
        return base;
    }
    let descending_by_default = matches!(key, SortKey::Comments | SortKey::Points);
    let arrow = if descending_by_default != sort.is_reverse {
        '▼'
    } else {
        '▲'
    };
    format!("{base} {arrow}")
}

/// What: Render the stories table.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (stories, sort selection, cursor)
/// - `area`: Target rectangle
///
/// Details:
/// - Rows follow the sorted view; the cursor row is highlighted.
/// - Titles are truncated to the column width by display width.
pub fn render_stories(f: &mut Frame, app: &AppState, area: Rect) {
    let th = PALETTE;
    let view = app.sorted_view();
    let title_width = usize::from(area.width.saturating_sub(2 + 16 + 10 + 10 + 3));

    let header = Row::new(COLUMNS.iter().map(|(key, hotkey)| {
        let style = if app.sort.key == *key {
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.overlay1)
        };
        Cell::from(header_label(*key, hotkey, app.sort)).style(style)
    }));

    let rows = view.iter().map(|story| {
        Row::new(vec![
            Cell::from(fit_width(&story.title, title_width)).style(Style::default().fg(th.text)),
            Cell::from(fit_width(&story.author, 16)).style(Style::default().fg(th.subtext0)),
            Cell::from(story.num_comments.to_string()).style(Style::default().fg(th.subtext0)),
            Cell::from(story.points.to_string()).style(Style::default().fg(th.subtext0)),
        ])
    });

    let sort_caption = if app.sort.key == SortKey::None {
        String::new()
    } else {
        format!("  sorted by {}", app.sort.key.label())
    };
    let block = Block::default()
        .title(Line::styled(
            format!("Stories ({}){sort_caption}", view.len()),
            Style::default().fg(th.overlay1),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface1));

    let table = Table::new(
        rows,
        [
            Constraint::Min(10),
            Constraint::Length(16),
            Constraint::Length(10),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(block)
    .style(Style::default().fg(th.text).bg(th.base))
    .row_highlight_style(
        Style::default()
            .bg(th.surface2)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("> ");

    let mut state = TableState::default();
    if !view.is_empty() {
        state.select(Some(app.selected.min(view.len() - 1)));
    }
    f.render_stateful_widget(table, area, &mut state);
}
