//! Now-playing bar
//!
//! Single bordered strip shown above the status bar whenever an episode is
//! playing, in every view. Cleared when playback stops.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::App;
use crate::ui::{truncate, Theme};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(episode) = app.playback.current_episode() else {
        return;
    };
    let width = area.width.saturating_sub(4) as usize;

    let line = Line::from(vec![
        Span::styled("♪ ", Theme::playing()),
        Span::styled(truncate(&episode.title, width), Theme::playing()),
        Span::raw("  "),
        Span::styled(truncate(&episode.description, width / 2), Theme::dimmed()),
    ]);

    let bar = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border())
            .title(Span::styled(" NOW PLAYING ", Theme::playing())),
    );
    frame.render_widget(bar, area);
}
