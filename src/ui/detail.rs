//! Show detail view
//!
//! Header with title, genres, and description; below it the season pane on
//! the left and the episode pane on the right. Tab moves focus between the
//! panes, Enter on an episode starts playback.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::app::{App, DetailPane, DetailView, ListState, View};
use crate::ui::Theme;

pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
    let View::Detail(ref mut detail) = app.view else {
        return;
    };
    let favorite = app.favorites.contains(detail.show.id);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(1)])
        .split(area);

    render_header(frame, chunks[0], detail, favorite);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(32), Constraint::Percentage(68)])
        .split(chunks[1]);

    render_seasons(frame, panes[0], detail);
    render_episodes(frame, panes[1], detail);
}

fn render_header(frame: &mut Frame, area: Rect, detail: &DetailView, favorite: bool) {
    let show = &detail.show;
    let marker = if favorite { "★ " } else { "" };
    let title = format!(" {}{} ", marker, show.title);

    let mut lines = vec![Line::from(Span::styled(
        show.genre_names().join(" · "),
        Theme::dimmed(),
    ))];
    lines.push(Line::from(Span::styled(
        show.description.clone(),
        Theme::text(),
    )));

    let header = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border())
            .title(Span::styled(title, Theme::title())),
    );
    frame.render_widget(header, area);
}

fn render_seasons(frame: &mut Frame, area: Rect, detail: &mut DetailView) {
    let focused = detail.pane == DetailPane::Seasons;
    let height = area.height.saturating_sub(2) as usize;
    detail.seasons.scroll_into_view(height);

    let items = pane_items(
        detail
            .show
            .seasons
            .iter()
            .map(|season| season.to_string())
            .collect(),
        &detail.seasons,
        height,
        focused,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(pane_border(focused))
        .title(Span::styled(" SEASONS ", Theme::title()));
    frame.render_widget(List::new(items).block(block), area);
}

fn render_episodes(frame: &mut Frame, area: Rect, detail: &mut DetailView) {
    let focused = detail.pane == DetailPane::Episodes;
    let height = area.height.saturating_sub(2) as usize;
    detail.episodes.scroll_into_view(height);

    let labels = detail
        .selected_season()
        .map(|season| {
            season
                .episodes
                .iter()
                .map(|episode| episode.to_string())
                .collect()
        })
        .unwrap_or_default();
    let items = pane_items(labels, &detail.episodes, height, focused);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(pane_border(focused))
        .title(Span::styled(" EPISODES ", Theme::title()));
    frame.render_widget(List::new(items).block(block), area);
}

fn pane_items(
    labels: Vec<String>,
    cursor: &ListState,
    height: usize,
    focused: bool,
) -> Vec<ListItem<'static>> {
    labels
        .into_iter()
        .enumerate()
        .skip(cursor.offset)
        .take(height)
        .map(|(ix, label)| {
            let style = if ix == cursor.selected && focused {
                Theme::selected()
            } else if ix == cursor.selected {
                Theme::title()
            } else {
                Theme::text()
            };
            ListItem::new(Line::from(Span::styled(label, style)))
        })
        .collect()
}

fn pane_border(focused: bool) -> Style {
    if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    }
}
