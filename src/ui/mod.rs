//! Presentation layer: renders `AppState` into a ratatui frame.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::AppState;

/// Stories table.
pub mod stories;
/// Colour palette.
pub mod theme;

use theme::PALETTE;

/// Status line shown below the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Footer {
    /// A fetch is in flight.
    Loading,
    /// The last applied fetch failed; "more" stays available as a retry.
    Error {
        /// Page the next request will ask for.
        next_page: u32,
    },
    /// Idle; offers the next page.
    More {
        /// Page the next request will ask for.
        next_page: u32,
    },
}

impl Footer {
    /// What: Derive the footer from state.
    ///
    /// Details:
    /// - A pending fetch hides both the error and the More hint; `Init` clears the error flag.
    /// - An error keeps the More hint next to it so the user can retry with Ctrl+N.
    #[must_use]
    pub fn from_state(app: &AppState) -> Self {
        if app.stories.is_loading {
            Self::Loading
        } else {
            let next_page = app.stories.page.saturating_add(1);
            if app.stories.is_error {
                Self::Error { next_page }
            } else {
                Self::More { next_page }
            }
        }
    }

    /// Text shown in the footer line.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Loading => "Loading ...".to_string(),
            Self::Error { next_page } => {
                format!("Something went wrong ...  More (page {next_page})  [Ctrl+N]")
            }
            Self::More { next_page } => format!("More (page {next_page})  [Ctrl+N]"),
        }
    }
}

/// What: Render the whole screen.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state
///
/// Details:
/// - Layout top to bottom: search input, recent searches, stories table, footer.
pub fn ui(f: &mut Frame, app: &AppState) {
    let th = PALETTE;
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    render_search(f, app, chunks[0]);
    render_recent(f, app, chunks[1]);
    stories::render_stories(f, app, chunks[2]);
    render_footer(f, app, chunks[3]);
}

/// Search input with the cursor placed after the draft.
fn render_search(f: &mut Frame, app: &AppState, area: Rect) {
    let th = PALETTE;
    let input = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(th.sapphire)),
        Span::styled(app.draft.clone(), Style::default().fg(th.text)),
    ]))
    .block(
        Block::default()
            .title(Span::styled(
                "Search [Enter]",
                Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.mauve)),
    );
    f.render_widget(input, area);

    let draft_w = u16::try_from(app.draft.width()).unwrap_or(u16::MAX);
    let max_x = area.x + area.width.saturating_sub(2);
    let x = (area.x + 3).saturating_add(draft_w).min(max_x);
    f.set_cursor_position(Position::new(x, area.y + 1));
}

/// One line of recent searches, each tagged with its Alt+digit shortcut.
fn render_recent(f: &mut Frame, app: &AppState, area: Rect) {
    let th = PALETTE;
    let mut spans = vec![Span::styled("Recent: ", Style::default().fg(th.overlay1))];
    for (i, term) in app.recent_search_terms().iter().enumerate() {
        spans.push(Span::styled(
            format!("[Alt+{}] ", i + 1),
            Style::default().fg(th.sapphire),
        ));
        spans.push(Span::styled(
            format!("{term}  "),
            Style::default().fg(th.subtext0),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = PALETTE;
    let footer = Footer::from_state(app);
    let color = match footer {
        Footer::Loading => th.yellow,
        Footer::Error { .. } => th.red,
        Footer::More { .. } => th.overlay1,
    };
    let hints = "  F1-F5 sort  Del dismiss  Ctrl+O open  Esc quit";
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(footer.text(), Style::default().fg(color)),
            Span::styled(hints, Style::default().fg(th.surface2)),
        ])),
        area,
    );
}
