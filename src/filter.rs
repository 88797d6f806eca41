//! Filter and sort for the browse view
//!
//! Pure functions over show slices. The app calls [`apply`] after every input
//! change (search keystroke, sort cycle, catalog replacement) and renders the
//! returned list; nothing here mutates app state or touches the network.

use crate::models::{Show, SortKey};

/// How many of the visible shows feed the featured carousel.
pub const CAROUSEL_LEN: usize = 5;

/// Filter `shows` by case-insensitive title substring, then sort by `sort`.
///
/// An empty search term matches everything; whitespace in the term is
/// matched literally like any other character. The sort is stable, so shows
/// that compare equal keep their catalog order, and [`SortKey::None`]
/// returns the filtered list in catalog order untouched.
pub fn apply(shows: &[Show], search: &str, sort: SortKey) -> Vec<Show> {
    let needle = search.to_lowercase();
    let mut visible: Vec<Show> = shows
        .iter()
        .filter(|show| needle.is_empty() || show.title.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    match sort {
        SortKey::None => {}
        SortKey::TitleAsc => visible.sort_by(|a, b| title_key(a).cmp(&title_key(b))),
        SortKey::TitleDesc => visible.sort_by(|a, b| title_key(b).cmp(&title_key(a))),
        SortKey::DateAsc => visible.sort_by(|a, b| a.updated.cmp(&b.updated)),
        SortKey::DateDesc => visible.sort_by(|a, b| b.updated.cmp(&a.updated)),
    }

    visible
}

/// The carousel strip: the first [`CAROUSEL_LEN`] visible shows, fewer when
/// the filtered list is shorter.
pub fn carousel(visible: &[Show]) -> &[Show] {
    &visible[..visible.len().min(CAROUSEL_LEN)]
}

// Case-folded title so "alpha" and "Alpha" compare equal, approximating the
// locale-aware compare podcast directories tend to use.
fn title_key(show: &Show) -> String {
    show.title.to_lowercase()
}
