//! Terminal UI components
//!
//! Built with ratatui. Warm amber-on-charcoal look, keyboard-first
//! navigation throughout.

pub mod browser;
pub mod detail;
pub mod player;
pub mod theme;

pub use theme::Theme;

/// Truncate to `max` characters, ellipsis included, for fixed-width cells.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", cut)
}
