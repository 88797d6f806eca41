//! podtui - terminal dashboard for the Audio Horizon podcast directory
//!
//! Browse the show catalog, keep favorites, and play episodes through mpv.
//!
//! # Usage
//!
//! ```bash
//! # Launch interactive TUI
//! podtui
//!
//! # CLI mode (for automation)
//! podtui shows --search crime --sort title-asc
//! podtui info 10716 --json
//! podtui play 10716 --season 2 --episode 5
//! ```

use std::io::{stdout, Stdout};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc::{self, UnboundedSender};

use podtui::app::{App, Command as AppCommand, FetchOutcome, InputMode, View};
use podtui::cli::{Cli, Command, ExitCode, Output};
use podtui::commands;
use podtui::config::Config;
use podtui::logging;
use podtui::playback::{MpvAudioOutput, PlaybackController};
use podtui::store::{FavoritesStore, FileStore};
use podtui::ui::{self, Theme};
use podtui::CatalogClient;

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.is_cli_mode() {
        // CLI mode: execute command and exit
        let exit_code = run_cli(cli).await;
        std::process::exit(exit_code.into());
    } else {
        // TUI mode: launch interactive interface
        run_tui(cli).await
    }
}

fn load_config(cli: &Cli) -> Config {
    match cli.config.as_deref() {
        Some(path) => Config::load_from(Some(path)),
        None => Config::load(),
    }
}

fn catalog_client(config: &Config) -> CatalogClient {
    match &config.api_base {
        Some(base) => CatalogClient::with_base_url(base.clone()),
        None => CatalogClient::new(),
    }
}

/// Run CLI command and return exit code
async fn run_cli(cli: Cli) -> ExitCode {
    let output = Output::new(&cli);
    let config = load_config(&cli);

    match cli.command {
        Some(Command::Shows(cmd)) => commands::shows_cmd(cmd, &config, &output).await,

        Some(Command::Info(cmd)) => commands::info_cmd(cmd, &config, &output).await,

        Some(Command::Favorites(cmd)) => commands::favorites_cmd(cmd, &config, &output).await,

        Some(Command::Genres(cmd)) => commands::genres_cmd(cmd, &output).await,

        Some(Command::Play(cmd)) => commands::play_cmd(cmd, &config, &output).await,

        None => {
            // This shouldn't happen (handled by is_cli_mode check)
            ExitCode::Success
        }
    }
}

// =============================================================================
// TUI Mode
// =============================================================================

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run interactive TUI
async fn run_tui(cli: Cli) -> Result<()> {
    let config = load_config(&cli);

    // Logs go to a file; the terminal belongs to the TUI
    logging::init(&config.data_dir())?;

    let client = catalog_client(&config);
    let favorites = FavoritesStore::load(Box::new(FileStore::new(config.data_dir())));
    let playback =
        PlaybackController::new(Box::new(MpvAudioOutput::new(config.player_command())));
    let mut app = App::new(favorites, playback);

    let mut terminal = init_terminal()?;

    // Run the main event loop
    let result = run_event_loop(&mut terminal, &mut app, client).await;

    // Always restore terminal, even on error
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop - handles input, applies finished fetches, renders UI
async fn run_event_loop(terminal: &mut Tui, app: &mut App, client: CatalogClient) -> Result<()> {
    const TICK_RATE: Duration = Duration::from_millis(100);

    let (tx, mut rx) = mpsc::unbounded_channel();

    // The app starts in Loading; kick off the catalog fetch it is waiting on
    dispatch(&client, &tx, AppCommand::FetchCatalog);

    while app.running {
        // Render current state
        terminal.draw(|frame| render_ui(frame, app))?;

        // Apply any finished fetches before waiting on input again
        while let Ok(outcome) = rx.try_recv() {
            app.on_fetch(outcome);
        }

        // Poll for events with timeout so fetch results keep flowing in
        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (ignore releases on Windows)
                if key.kind == KeyEventKind::Press {
                    if let Some(command) = app.handle_key(key) {
                        dispatch(&client, &tx, command);
                    }
                }
            }
        }
    }

    Ok(())
}

/// Spawn the network task for a command; its outcome comes back via the
/// channel and is applied on a later tick.
fn dispatch(client: &CatalogClient, tx: &UnboundedSender<FetchOutcome>, command: AppCommand) {
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let outcome = match command {
            AppCommand::FetchCatalog => FetchOutcome::Catalog(client.fetch_shows().await),
            AppCommand::FetchDetail { show_id, ticket } => FetchOutcome::Detail {
                ticket,
                result: client.fetch_show_detail(show_id).await,
            },
        };
        // A closed receiver just means the loop already ended
        let _ = tx.send(outcome);
    });
}

// =============================================================================
// UI Rendering
// =============================================================================

/// Main render function - dispatches to view-specific renderers
fn render_ui(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Clear with background color
    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(Style::default().bg(Theme::BACKGROUND)),
        area,
    );

    // Main layout: header, content, optional now-playing bar, status bar
    let playing = app.playback.current_episode().is_some();
    let mut constraints = vec![Constraint::Length(3), Constraint::Min(1)];
    if playing {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    render_header(frame, chunks[0], app);
    render_content(frame, chunks[1], app);
    if playing {
        ui::player::render(frame, chunks[2], app);
    }
    render_status_bar(frame, chunks[chunks.len() - 1], app);

    // Render notice overlay if present
    if let Some(ref notice) = app.notice {
        render_notice_popup(frame, area, notice);
    }
}

/// Render the header with logo and search box
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16), // Logo
            Constraint::Min(1),     // Search box
        ])
        .split(area);

    // Logo
    let logo = Paragraph::new(Line::from(vec![
        Span::styled(
            "POD",
            Style::default()
                .fg(Theme::PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "TUI",
            Style::default()
                .fg(Theme::SECONDARY)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border()),
    );
    frame.render_widget(logo, header_chunks[0]);

    // Search box
    let search_style = if app.input_mode == InputMode::Editing {
        Theme::border_focused()
    } else {
        Theme::border()
    };

    let search_text = if app.input_mode == InputMode::Editing {
        let query = &app.search.query;
        let cursor = app.search.cursor.min(query.len());
        let (before, after) = query.split_at(cursor);
        format!("⌕ {}│{}", before, after)
    } else if app.search.query.is_empty() {
        "⌕ Press / to search...".to_string()
    } else {
        format!("⌕ {}", app.search.query)
    };

    let search_box = Paragraph::new(search_text).style(Theme::input()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(search_style)
            .title(Span::styled(" SEARCH ", Theme::dimmed())),
    );
    frame.render_widget(search_box, header_chunks[1]);
}

/// Render the content area for the active view
fn render_content(frame: &mut Frame, area: Rect, app: &mut App) {
    match app.view {
        View::Loading => render_loading(frame, area),
        View::List | View::DetailLoading { .. } => ui::browser::render(frame, area, app),
        View::Detail(_) => ui::detail::render(frame, area, app),
    }
}

/// Full-area loading splash while the catalog fetch is in flight
fn render_loading(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("⟳ Loading catalog...", Theme::loading())),
        Line::from(""),
        Line::from(Span::styled("q to quit", Theme::dimmed())),
    ];
    let splash = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border()),
    );
    frame.render_widget(splash, area);
}

/// Render the status bar with mode, view, sort, favorites, and key hints
fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mode_indicator = match app.input_mode {
        InputMode::Normal => Span::styled(
            " NORMAL ",
            Style::default().fg(Theme::BACKGROUND).bg(Theme::PRIMARY),
        ),
        InputMode::Editing => Span::styled(
            " INSERT ",
            Style::default().fg(Theme::BACKGROUND).bg(Theme::ACCENT),
        ),
    };

    let view_indicator = Span::styled(
        format!(" {} ", app.view.name().to_uppercase()),
        Theme::dimmed(),
    );

    let sort_indicator = Span::styled(format!(" ⇅ {} ", app.sort), Theme::dimmed());

    let favorites_indicator = Span::styled(
        format!(" ★ {} ", app.favorites.len()),
        Theme::favorite(),
    );

    let help = Span::styled(
        " q:quit  /:search  s:sort  f:fav  r:reload  x:stop  ESC:back ",
        Theme::dimmed(),
    );

    let status_line = Line::from(vec![
        mode_indicator,
        view_indicator,
        sort_indicator,
        favorites_indicator,
        Span::raw(" │ "),
        help,
    ]);

    let status = Paragraph::new(status_line).style(Theme::status_bar());
    frame.render_widget(status, area);
}

/// Render notice popup overlay (fetch and playback problems land here)
fn render_notice_popup(frame: &mut Frame, area: Rect, notice: &str) {
    let popup_width = 60.min(area.width.saturating_sub(4));
    let popup_height = 5;

    let popup_area = Rect {
        x: area.x + (area.width.saturating_sub(popup_width)) / 2,
        y: area.y + (area.height.saturating_sub(popup_height)) / 2,
        width: popup_width,
        height: popup_height,
    };

    frame.render_widget(Clear, popup_area);

    let popup = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(notice, Theme::error())),
        Line::from(Span::styled("press any key", Theme::dimmed())),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::error())
            .title(Span::styled(" ⚠ NOTICE ", Theme::error())),
    );
    frame.render_widget(popup, popup_area);
}
