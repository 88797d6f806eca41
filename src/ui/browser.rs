//! Browse view
//!
//! The featured carousel strip over the scrollable show list. Rows carry a
//! favorite marker, the title, last-updated date, and genre names.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::app::{App, View};
use crate::ui::{truncate, Theme};

/// Render the browse view: carousel on top when there is room, list below.
pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
    let show_carousel = !app.carousel().is_empty() && area.height >= 10;

    if show_carousel {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(1)])
            .split(area);
        render_carousel(frame, chunks[0], app);
        render_list(frame, chunks[1], app);
    } else {
        render_list(frame, area, app);
    }
}

/// The featured strip: up to five cells, one per leading visible show.
fn render_carousel(frame: &mut Frame, area: Rect, app: &App) {
    let strip = app.carousel();
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, strip.len() as u32); strip.len()])
        .split(area);

    for (show, cell) in strip.iter().zip(cells.iter()) {
        let genre = show
            .genre_names()
            .first()
            .copied()
            .unwrap_or("—")
            .to_string();
        let width = cell.width.saturating_sub(2) as usize;

        let card = Paragraph::new(vec![
            Line::from(Span::styled(truncate(&show.title, width), Theme::title())),
            Line::from(Span::styled(truncate(&genre, width), Theme::dimmed())),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Theme::border())
                .title(Span::styled(" FEATURED ", Theme::dimmed())),
        );
        frame.render_widget(card, *cell);
    }
}

fn render_list(frame: &mut Frame, area: Rect, app: &mut App) {
    let title = match app.view {
        View::DetailLoading { .. } => format!(" SHOWS ({}) · opening… ", app.visible.len()),
        _ => format!(" SHOWS ({}) ", app.visible.len()),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border())
        .title(Span::styled(title, Theme::title()));

    if app.visible.is_empty() {
        let hint = if app.search.query.is_empty() {
            "No shows available.  r to reload".to_string()
        } else {
            format!("Nothing matches \"{}\"", app.search.query)
        };
        let empty = Paragraph::new(hint)
            .style(Theme::dimmed())
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let height = area.height.saturating_sub(2) as usize;
    app.list.scroll_into_view(height);

    let items: Vec<ListItem> = app
        .visible
        .iter()
        .enumerate()
        .skip(app.list.offset)
        .take(height)
        .map(|(ix, show)| {
            let marker = if app.favorites.contains(show.id) {
                Span::styled("★ ", Theme::favorite())
            } else {
                Span::styled("  ", Theme::text())
            };
            let row_style = if ix == app.list.selected {
                Theme::selected()
            } else {
                Theme::text()
            };
            let line = Line::from(vec![
                marker,
                Span::styled(show.title.clone(), row_style),
                Span::raw("  "),
                Span::styled(show.updated.format("%Y-%m-%d").to_string(), Theme::date()),
                Span::raw("  "),
                Span::styled(show.genre_names().join(", "), Theme::dimmed()),
            ]);
            ListItem::new(line)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
