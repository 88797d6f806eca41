//! Warm radio-dial theme for podtui
//!
//! Amber dial light on charcoal, teal for whatever is currently sounding.

use ratatui::style::{Color, Modifier, Style};

/// Color palette and style helpers
pub struct Theme;

impl Theme {
    // ═══════════════════════════════════════════════════════════════════════
    // CORE PALETTE
    // ═══════════════════════════════════════════════════════════════════════

    /// Background: #121210 (charcoal)
    pub const BACKGROUND: Color = Color::Rgb(0x12, 0x12, 0x10);

    /// Slightly lighter background for bars and input fields
    pub const BACKGROUND_LIGHT: Color = Color::Rgb(0x1c, 0x1c, 0x18);

    /// Primary: #ffb000 (amber dial light)
    pub const PRIMARY: Color = Color::Rgb(0xff, 0xb0, 0x00);

    /// Secondary: #2ec4b6 (teal, now-playing)
    pub const SECONDARY: Color = Color::Rgb(0x2e, 0xc4, 0xb6);

    /// Accent: #ff5d73 (coral, favorites)
    pub const ACCENT: Color = Color::Rgb(0xff, 0x5d, 0x73);

    /// Text: #e8e3d8 (warm white)
    pub const TEXT: Color = Color::Rgb(0xe8, 0xe3, 0xd8);

    /// Dim: #5a554c (muted)
    pub const DIM: Color = Color::Rgb(0x5a, 0x55, 0x4c);

    /// Error: #ff4040
    pub const ERROR: Color = Color::Rgb(0xff, 0x40, 0x40);

    /// Border (dim amber)
    pub const BORDER: Color = Color::Rgb(0x8a, 0x64, 0x10);

    /// Border when focused (full amber)
    pub const BORDER_FOCUSED: Color = Self::PRIMARY;

    // ═══════════════════════════════════════════════════════════════════════
    // STYLE HELPERS
    // ═══════════════════════════════════════════════════════════════════════

    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT)
    }

    /// Dimmed/muted text
    pub fn dimmed() -> Style {
        Style::default().fg(Self::DIM)
    }

    /// Title/header style
    pub fn title() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected list row (inverted amber)
    pub fn selected() -> Style {
        Style::default()
            .fg(Self::BACKGROUND)
            .bg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Favorite marker
    pub fn favorite() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    /// Now-playing text
    pub fn playing() -> Style {
        Style::default()
            .fg(Self::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Error popup text
    pub fn error() -> Style {
        Style::default()
            .fg(Self::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    /// Normal/unfocused border
    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    /// Focused border
    pub fn border_focused() -> Style {
        Style::default()
            .fg(Self::BORDER_FOCUSED)
            .add_modifier(Modifier::BOLD)
    }

    /// Input field style
    pub fn input() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND_LIGHT)
    }

    /// Status bar style
    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND_LIGHT)
    }

    /// Loading indicator
    pub fn loading() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Date metadata in list rows
    pub fn date() -> Style {
        Style::default().fg(Self::SECONDARY)
    }
}
