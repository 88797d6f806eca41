//! Application state management for the TUI
//!
//! `App` is a synchronous state machine: key events go in, view mutations
//! and fetch commands come out. Network work happens elsewhere (main spawns
//! tasks) and lands back here as [`FetchOutcome`] values, so every state
//! transition is testable without a terminal or a server.
//!
//! Detail fetches carry a ticket. Only the outcome matching the ticket of
//! the detail load currently on screen is applied; anything else is a
//! leftover from an abandoned selection and is dropped.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::api::FetchError;
use crate::filter;
use crate::models::{Episode, Season, Show, ShowDetail, SortKey};
use crate::playback::PlaybackController;
use crate::store::FavoritesStore;

// =============================================================================
// Views
// =============================================================================

/// What the content area is showing
#[derive(Debug)]
pub enum View {
    /// Catalog fetch in flight, nothing to browse yet
    Loading,
    /// Browse list (carousel + show rows)
    List,
    /// A show was selected; its detail fetch is in flight
    DetailLoading { show_id: u64, ticket: u64 },
    /// Full show detail with season and episode navigation
    Detail(DetailView),
}

impl View {
    /// Short name for the status bar.
    pub fn name(&self) -> &'static str {
        match self {
            View::Loading => "loading",
            View::List => "browse",
            View::DetailLoading { .. } => "opening",
            View::Detail(_) => "detail",
        }
    }
}

/// Which pane of the detail view has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailPane {
    Seasons,
    Episodes,
}

/// Detail view state: the fetched show plus cursors for both panes
#[derive(Debug)]
pub struct DetailView {
    pub show: ShowDetail,
    pub pane: DetailPane,
    pub seasons: ListState,
    pub episodes: ListState,
}

impl DetailView {
    pub fn new(show: ShowDetail) -> Self {
        let mut view = Self {
            seasons: ListState::new(show.seasons.len()),
            episodes: ListState::new(0),
            pane: DetailPane::Seasons,
            show,
        };
        view.sync_episodes();
        view
    }

    pub fn selected_season(&self) -> Option<&Season> {
        self.show.seasons.get(self.seasons.selected)
    }

    pub fn selected_episode(&self) -> Option<&Episode> {
        self.selected_season()
            .and_then(|season| season.episodes.get(self.episodes.selected))
    }

    pub fn toggle_pane(&mut self) {
        self.pane = match self.pane {
            DetailPane::Seasons => DetailPane::Episodes,
            DetailPane::Episodes => DetailPane::Seasons,
        };
    }

    fn move_up(&mut self) {
        match self.pane {
            DetailPane::Seasons => {
                self.seasons.up();
                self.sync_episodes();
            }
            DetailPane::Episodes => self.episodes.up(),
        }
    }

    fn move_down(&mut self) {
        match self.pane {
            DetailPane::Seasons => {
                self.seasons.down();
                self.sync_episodes();
            }
            DetailPane::Episodes => self.episodes.down(),
        }
    }

    /// Enter on the seasons pane moves focus; on the episodes pane it hands
    /// back the episode to play.
    fn activate(&mut self) -> Option<Episode> {
        match self.pane {
            DetailPane::Seasons => {
                self.pane = DetailPane::Episodes;
                None
            }
            DetailPane::Episodes => self.selected_episode().cloned(),
        }
    }

    // Selecting another season invalidates the episode cursor.
    fn sync_episodes(&mut self) {
        let len = self
            .selected_season()
            .map(|season| season.episodes.len())
            .unwrap_or(0);
        self.episodes = ListState::new(len);
    }
}

// =============================================================================
// Commands and Outcomes
// =============================================================================

/// Async work requested by a key handler, executed by the event loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    FetchCatalog,
    FetchDetail { show_id: u64, ticket: u64 },
}

/// Completed async work, fed back into the app by the event loop
#[derive(Debug)]
pub enum FetchOutcome {
    Catalog(Result<Vec<Show>, FetchError>),
    Detail {
        ticket: u64,
        result: Result<ShowDetail, FetchError>,
    },
}

// =============================================================================
// Input Mode
// =============================================================================

/// Input mode (vim-style)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Typing in the search box
    Editing,
}

// =============================================================================
// List State
// =============================================================================

/// Generic scrollable list cursor
#[derive(Debug, Clone, Default)]
pub struct ListState {
    /// Currently selected index
    pub selected: usize,
    /// Scroll offset for the viewport
    pub offset: usize,
    /// Total number of items
    pub len: usize,
}

impl ListState {
    pub fn new(len: usize) -> Self {
        Self {
            selected: 0,
            offset: 0,
            len,
        }
    }

    pub fn up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn down(&mut self) {
        if self.len > 0 && self.selected < self.len - 1 {
            self.selected += 1;
        }
    }

    /// Update length, clamping the selection into range.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
        self.offset = self.offset.min(self.selected);
    }

    pub fn reset(&mut self) {
        self.selected = 0;
        self.offset = 0;
    }

    /// Adjust the offset so the selection stays inside a viewport of
    /// `visible_height` rows. Called during rendering.
    pub fn scroll_into_view(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + visible_height {
            self.offset = self.selected - visible_height + 1;
        }
    }
}

// =============================================================================
// Search Input
// =============================================================================

/// Search box contents and cursor
#[derive(Debug, Default)]
pub struct SearchInput {
    pub query: String,
    pub cursor: usize,
}

impl SearchInput {
    pub fn insert(&mut self, c: char) {
        self.query.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.query[..self.cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor -= prev;
            self.query.remove(self.cursor);
        }
    }

    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            let prev = self.query[..self.cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor -= prev;
        }
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.query.len() {
            let next = self.query[self.cursor..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor += next;
        }
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.cursor = 0;
    }
}

// =============================================================================
// App
// =============================================================================

/// Main application state
pub struct App {
    /// Current view
    pub view: View,
    /// Full catalog as last fetched
    pub catalog: Vec<Show>,
    /// Catalog after search filter and sort, in render order
    pub visible: Vec<Show>,
    /// Search box state
    pub search: SearchInput,
    /// Active sort key
    pub sort: SortKey,
    /// Input mode
    pub input_mode: InputMode,
    /// Cursor over `visible`
    pub list: ListState,
    /// Favourited show ids
    pub favorites: FavoritesStore,
    /// Audio session control
    pub playback: PlaybackController,
    /// One-line message shown as a popup until the next keypress
    pub notice: Option<String>,
    /// Whether the app should keep running
    pub running: bool,
    /// Monotonic ticket source for detail fetches
    next_ticket: u64,
}

impl App {
    pub fn new(favorites: FavoritesStore, playback: PlaybackController) -> Self {
        Self {
            view: View::Loading,
            catalog: Vec::new(),
            visible: Vec::new(),
            search: SearchInput::default(),
            sort: SortKey::default(),
            input_mode: InputMode::default(),
            list: ListState::default(),
            favorites,
            playback,
            notice: None,
            running: true,
            next_ticket: 0,
        }
    }

    /// Handle a key event. Returns async work for the event loop, if any.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Command> {
        // Any keypress dismisses the notice popup
        self.notice = None;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return None;
        }

        match self.input_mode {
            InputMode::Editing => {
                self.handle_editing_key(key);
                None
            }
            InputMode::Normal => self.handle_normal_key(key),
        }
    }

    /// Apply a completed fetch. Stale detail outcomes are dropped here.
    pub fn on_fetch(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Catalog(Ok(shows)) => {
                tracing::info!(count = shows.len(), "catalog loaded");
                self.catalog = shows;
                self.list.reset();
                self.apply_filter();
                self.view = View::List;
            }
            FetchOutcome::Catalog(Err(e)) => {
                tracing::error!(error = %e, "catalog fetch failed");
                self.catalog.clear();
                self.apply_filter();
                self.notice = Some(format!("Could not load catalog: {}", e));
                self.view = View::List;
            }
            FetchOutcome::Detail { ticket, result } => {
                let expected = match self.view {
                    View::DetailLoading { ticket, .. } => Some(ticket),
                    _ => None,
                };
                if expected != Some(ticket) {
                    tracing::debug!(ticket, "dropping stale detail response");
                    return;
                }
                match result {
                    Ok(show) => {
                        tracing::info!(show_id = show.id, "detail loaded");
                        self.view = View::Detail(DetailView::new(show));
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "detail fetch failed");
                        self.notice = Some(format!("Could not load show: {}", e));
                        self.view = View::List;
                    }
                }
            }
        }
    }

    /// Shows for the featured carousel (first few of the visible list).
    pub fn carousel(&self) -> &[Show] {
        filter::carousel(&self.visible)
    }

    pub fn quit(&mut self) {
        self.playback.stop();
        self.running = false;
    }

    // -------------------------------------------------------------------------
    // Key handlers
    // -------------------------------------------------------------------------

    fn handle_editing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Char(c) => {
                self.search.insert(c);
                self.apply_filter();
            }
            KeyCode::Backspace => {
                self.search.backspace();
                self.apply_filter();
            }
            KeyCode::Left => self.search.cursor_left(),
            KeyCode::Right => self.search.cursor_right(),
            _ => {}
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Option<Command> {
        // Global shortcuts
        match key.code {
            KeyCode::Char('q') => {
                self.quit();
                return None;
            }
            KeyCode::Char('x') => {
                self.playback.stop();
                return None;
            }
            KeyCode::Esc => {
                self.back();
                return None;
            }
            _ => {}
        }

        match self.view {
            View::Loading => None,
            View::List | View::DetailLoading { .. } => self.handle_browse_key(key),
            View::Detail(_) => {
                self.handle_detail_key(key);
                None
            }
        }
    }

    /// Keys for the browse list. Also active while a detail fetch is in
    /// flight, so a slow show can be abandoned for another.
    fn handle_browse_key(&mut self, key: KeyEvent) -> Option<Command> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.list.up();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.list.down();
                None
            }
            KeyCode::Enter => self.select_show(),
            KeyCode::Char('/') => {
                self.input_mode = InputMode::Editing;
                None
            }
            KeyCode::Char('s') => {
                self.sort = self.sort.cycle();
                self.apply_filter();
                None
            }
            KeyCode::Char('f') => {
                if let Some(id) = self.visible.get(self.list.selected).map(|s| s.id) {
                    self.favorites.toggle(id);
                }
                None
            }
            KeyCode::Char('r') => {
                self.view = View::Loading;
                Some(Command::FetchCatalog)
            }
            _ => None,
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        let View::Detail(ref mut detail) = self.view else {
            return;
        };
        match key.code {
            KeyCode::Tab => detail.toggle_pane(),
            KeyCode::Up | KeyCode::Char('k') => detail.move_up(),
            KeyCode::Down | KeyCode::Char('j') => detail.move_down(),
            KeyCode::Enter => {
                if let Some(episode) = detail.activate() {
                    self.start_playback(&episode);
                }
            }
            KeyCode::Char('f') => {
                let id = detail.show.id;
                self.favorites.toggle(id);
            }
            _ => {}
        }
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Begin a detail fetch for the selected show under a fresh ticket.
    fn select_show(&mut self) -> Option<Command> {
        let show_id = self.visible.get(self.list.selected)?.id;
        self.next_ticket += 1;
        let ticket = self.next_ticket;
        self.view = View::DetailLoading { show_id, ticket };
        Some(Command::FetchDetail { show_id, ticket })
    }

    fn back(&mut self) {
        match self.view {
            // Leaving detail keeps audio playing; x stops it explicitly.
            View::Detail(_) | View::DetailLoading { .. } => self.view = View::List,
            View::Loading | View::List => {}
        }
    }

    fn start_playback(&mut self, episode: &Episode) {
        if let Err(e) = self.playback.play(episode) {
            tracing::error!(error = %e, episode = %episode.title, "playback failed");
            self.notice = Some(format!("Playback failed: {}", e));
        }
    }

    /// Recompute the visible list from catalog, search, and sort.
    fn apply_filter(&mut self) {
        self.visible = filter::apply(&self.catalog, &self.search.query, self.sort);
        self.list.set_len(self.visible.len());
    }
}

// =============================================================================
// Tests
// =============================================================================
