//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready strings only: ratings are already
//! formatted, titles already truncated, matches already located.

use crate::domain::ItemId;

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Navigation bar and current search query.
    pub nav: NavInfo,

    /// Rotating hero, present only on the home page.
    pub hero: Option<HeroInfo>,

    /// Featured highlights above the movies listing grid.
    pub highlights: Vec<CardItem>,

    /// Heading of the grid section.
    pub section: SectionInfo,

    /// Genre selector chips. Empty where the page has no grid.
    pub genre_chips: Vec<GenreChip>,

    /// Active sort label, present only on the movies listing.
    pub sort_label: Option<String>,

    /// Grid cards in display order.
    pub cards: Vec<CardItem>,

    /// Message shown in place of the grid.
    pub empty_state: Option<EmptyState>,

    /// Detail overlay drawn over the page.
    pub overlay: Option<DetailOverlay>,

    /// Footer information (command hints).
    pub footer: FooterInfo,
}

/// Navigation bar.
#[derive(Debug, Clone)]
pub struct NavInfo {
    /// One entry per page, in navigation order.
    pub items: Vec<NavItem>,

    /// Current search query as typed.
    pub search_query: String,
}

/// A navigation entry.
#[derive(Debug, Clone)]
pub struct NavItem {
    pub label: String,
    pub is_active: bool,
}

/// Hero banner for the featured movie on display.
#[derive(Debug, Clone)]
pub struct HeroInfo {
    pub title: String,
    pub rating: String,
    pub year: i32,
    pub duration: String,
    /// First two genre tags.
    pub genres: Vec<String>,
    pub description: String,
}

/// Grid section heading.
#[derive(Debug, Clone)]
pub struct SectionInfo {
    /// `Browse Movies`, `All Movies`, `Search Results for "..."`, etc.
    pub title: String,

    /// Result count such as `(4 movies)`, on listing pages only.
    pub count_label: Option<String>,
}

/// A genre selector chip.
#[derive(Debug, Clone)]
pub struct GenreChip {
    pub id: String,
    pub name: String,
    pub is_selected: bool,
}

/// One card in a grid or the highlights row.
#[derive(Debug, Clone)]
pub struct CardItem {
    /// Id to pass to `open`.
    pub id: ItemId,

    /// Title, truncated to fit the terminal width.
    pub title: String,

    pub rating: String,
    pub year: i32,
    pub duration: String,

    /// First two genre tags.
    pub genres: Vec<String>,

    /// Character ranges of search matches within the title.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices, end
    /// exclusive. Empty when the title was truncated.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Detail overlay for the selected item.
#[derive(Debug, Clone)]
pub struct DetailOverlay {
    pub title: String,
    pub rating: String,
    pub year: i32,
    pub duration: String,
    /// All genre tags.
    pub genres: Vec<String>,
    pub synopsis: String,
    pub director: String,
    pub cast: Vec<String>,
    pub trailer: Option<String>,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Command hints for the current page.
    pub keybindings: String,
}

/// Message shown in place of the grid.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "No movies found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
