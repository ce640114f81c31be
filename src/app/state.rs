//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single source of truth for what the
//! browser shows: the active page, the search query, the genre filter, the sort
//! key, the item open in the detail overlay and the hero rotation.
//!
//! # Architecture
//!
//! `AppState` owns the catalog and stores only selectors. Everything the
//! presentation layer needs (visible items, hero, overlay item) is derived on
//! read from those selectors with the pure engines in [`crate::query`] and
//! [`crate::rotation`], so there is no cached derived state to keep in sync.
//!
//! # Example
//!
//! ```rust
//! use marquee::app::AppState;
//! use marquee::catalog::{BundledCatalog, CatalogSource};
//! use marquee::ui::Theme;
//!
//! let catalog = BundledCatalog.load()?;
//! let mut state = AppState::new(catalog, Theme::default());
//! state.search_query = "villeneuve".to_string();
//! let visible = state.visible_items();
//! let viewmodel = state.compute_viewmodel(80);
//! # Ok::<(), marquee::MarqueeError>(())
//! ```

use super::actions::Action;
use super::modes::Page;
use crate::catalog::Catalog;
use crate::domain::error::{MarqueeError, Result};
use crate::domain::{ItemId, MediaItem};
use crate::query::{self, GenreFilter, SortKey};
use crate::rotation::{resolve_hero, HeroRotation};
use crate::ui::components::{CARD_CHROME_WIDTH, MIN_TITLE_WIDTH};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CardItem, DetailOverlay, EmptyState, FooterInfo, GenreChip, HeroInfo, NavInfo, NavItem,
    SectionInfo, UIViewModel,
};

/// Number of featured movies shown above the movies listing.
const FEATURED_HIGHLIGHTS: usize = 3;

/// Genre tags shown on cards and on the hero.
const CARD_GENRES: usize = 2;

/// Central application state container.
///
/// Mutated only by the event handler. Created once at startup with every
/// selector at its default and discarded at exit.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Read-only catalog. Never mutated after construction.
    pub catalog: Catalog,

    /// Page currently on screen.
    ///
    /// Changed only through [`AppState::change_page`].
    pub current_page: Page,

    /// Free-text search query; empty means no text filter.
    ///
    /// Used as typed, without trimming. Survives page changes.
    pub search_query: String,

    /// Genre selector. Survives page changes.
    pub genre_filter: GenreFilter,

    /// Ordering of the movies listing. Ignored by every other page.
    pub sort_key: SortKey,

    /// Item shown in the detail overlay.
    ///
    /// Holds an id, not the item: the catalog stays the sole owner.
    pub selected_item: Option<ItemId>,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Hero rotation, present only while the home page is active.
    rotation: Option<HeroRotation>,

    /// Generation the next home visit's rotation will carry.
    next_generation: u64,
}

impl AppState {
    /// Creates the state with default selectors on the home page.
    ///
    /// The home page starts with a rotation at index 0 and generation 0; the
    /// owner is responsible for starting the matching timer (see
    /// [`AppState::initial_actions`]).
    #[must_use]
    pub fn new(catalog: Catalog, theme: Theme) -> Self {
        Self {
            catalog,
            current_page: Page::Home,
            search_query: String::new(),
            genre_filter: GenreFilter::All,
            sort_key: SortKey::Rating,
            selected_item: None,
            theme,
            rotation: Some(HeroRotation::new(0)),
            next_generation: 1,
        }
    }

    /// Actions required to bring the runtime in line with a fresh state.
    ///
    /// For the default home page this starts the rotation timer.
    #[must_use]
    pub fn initial_actions(&self) -> Vec<Action> {
        self.rotation
            .map(|r| vec![Action::StartRotation { generation: r.generation() }])
            .unwrap_or_default()
    }

    /// Switches to `page`.
    ///
    /// Leaving the home page drops its rotation and stops the timer; entering
    /// it creates a fresh rotation at index 0 and starts a new timer. Search
    /// query, genre filter and selected item are left untouched. Switching to
    /// the page already shown changes nothing.
    ///
    /// # Returns
    ///
    /// The side effects the runtime must execute.
    pub fn change_page(&mut self, page: Page) -> Vec<Action> {
        if page == self.current_page {
            tracing::trace!(page = %page, "already on page");
            return vec![];
        }

        tracing::debug!(from = %self.current_page, to = %page, "changing page");

        let mut actions = vec![];

        if self.current_page == Page::Home {
            self.rotation = None;
            actions.push(Action::StopRotation);
        }

        self.current_page = page;

        if page == Page::Home {
            let rotation = HeroRotation::new(self.next_generation);
            self.next_generation += 1;
            self.rotation = Some(rotation);
            actions.push(Action::StartRotation { generation: rotation.generation() });
        }

        actions
    }

    /// Opens the detail overlay for `id`.
    ///
    /// Ignored on pages that do not wire item selection.
    ///
    /// # Returns
    ///
    /// `true` if the overlay now shows the item.
    ///
    /// # Errors
    ///
    /// Returns [`MarqueeError::ItemNotFound`] if the catalog has no such item;
    /// the current selection is kept.
    pub fn select_item(&mut self, id: ItemId) -> Result<bool> {
        if !self.current_page.supports_detail() {
            tracing::debug!(page = %self.current_page, item_id = %id, "page has no detail view, ignoring selection");
            return Ok(false);
        }

        if self.catalog.find(id).is_none() {
            return Err(MarqueeError::ItemNotFound(id));
        }

        self.selected_item = Some(id);
        Ok(true)
    }

    /// Closes the detail overlay. Returns `true` if one was open.
    pub fn close_overlay(&mut self) -> bool {
        self.selected_item.take().is_some()
    }

    /// Advances the hero for a timer tick.
    ///
    /// Ticks from a timer of an earlier home visit, or arriving while the home
    /// page is not shown, are ignored.
    ///
    /// # Returns
    ///
    /// `true` if the hero moved.
    pub fn advance_rotation(&mut self, generation: u64) -> bool {
        let featured_count = self.catalog.movies.iter().filter(|m| m.featured).count();

        match self.rotation.as_mut() {
            Some(rotation) if rotation.generation() == generation => {
                let before = rotation.index();
                rotation.advance(featured_count);
                tracing::trace!(from = before, to = rotation.index(), featured_count, "hero advanced");
                rotation.index() != before
            }
            _ => {
                tracing::debug!(generation, "ignoring stale rotation tick");
                false
            }
        }
    }

    /// Index of the hero within the featured subsequence, if on the home page.
    #[must_use]
    pub fn rotation_index(&self) -> Option<usize> {
        self.rotation.map(|r| r.index())
    }

    /// Generation of the active rotation, if on the home page.
    #[must_use]
    pub fn rotation_generation(&self) -> Option<u64> {
        self.rotation.map(|r| r.generation())
    }

    /// Items the active page lists, in display order.
    ///
    /// - Home: movies matching query and genre, catalog order
    /// - Movies listing: the same set ordered by the sort key
    /// - TV listing: shows matching query and genre, catalog order
    /// - Newsletter: nothing
    #[must_use]
    pub fn visible_items(&self) -> Vec<&MediaItem> {
        match self.current_page {
            Page::Home => query::filter(&self.catalog.movies, &self.search_query, &self.genre_filter),
            Page::MoviesListing => {
                let filtered = query::filter(&self.catalog.movies, &self.search_query, &self.genre_filter);
                query::sort(&filtered, self.sort_key)
            }
            Page::TvListing => query::filter(&self.catalog.shows, &self.search_query, &self.genre_filter),
            Page::Newsletter => vec![],
        }
    }

    /// The featured movie the hero currently shows.
    ///
    /// `None` off the home page or when the catalog has no movies. Falls back
    /// to the first movie when nothing is featured.
    #[must_use]
    pub fn hero_item(&self) -> Option<&MediaItem> {
        let rotation = self.rotation?;
        let featured = self.catalog.featured();
        resolve_hero(&featured, &self.catalog.movies, rotation.index())
    }

    /// Whether an item is selected for the detail overlay.
    #[must_use]
    pub const fn is_overlay_open(&self) -> bool {
        self.selected_item.is_some()
    }

    /// The selected item resolved against the catalog.
    #[must_use]
    pub fn selected_item(&self) -> Option<&MediaItem> {
        self.selected_item.and_then(|id| self.catalog.find(id))
    }

    /// Featured movies highlighted above the movies listing.
    ///
    /// Independent of search and genre.
    #[must_use]
    pub fn featured_highlights(&self) -> Vec<&MediaItem> {
        let mut featured = self.catalog.featured();
        featured.truncate(FEATURED_HIGHLIGHTS);
        featured
    }

    /// Computes a renderable view model for a terminal `cols` wide.
    ///
    /// Titles longer than the card column are truncated with `...`, and search
    /// matches inside card titles are returned as highlight ranges.
    #[must_use]
    pub fn compute_viewmodel(&self, cols: usize) -> UIViewModel {
        let visible = self.visible_items();
        let title_width = cols.saturating_sub(CARD_CHROME_WIDTH).max(MIN_TITLE_WIDTH);

        let cards: Vec<CardItem> = visible
            .iter()
            .map(|item| self.compute_card(item, title_width))
            .collect();

        let highlights = if self.current_page == Page::MoviesListing {
            self.featured_highlights()
                .into_iter()
                .map(|item| self.compute_card(item, title_width))
                .collect()
        } else {
            vec![]
        };

        let empty_state = self.compute_empty_state(cards.is_empty());

        let overlay = if self.current_page.supports_detail() {
            self.selected_item().map(Self::compute_overlay)
        } else {
            None
        };

        UIViewModel {
            nav: self.compute_nav(),
            hero: self.hero_item().map(Self::compute_hero),
            highlights,
            section: self.compute_section(cards.len()),
            genre_chips: self.compute_genre_chips(),
            sort_label: (self.current_page == Page::MoviesListing)
                .then(|| self.sort_key.label().to_string()),
            cards,
            empty_state,
            overlay,
            footer: self.compute_footer(),
        }
    }

    fn compute_nav(&self) -> NavInfo {
        NavInfo {
            items: Page::ALL
                .iter()
                .map(|page| NavItem {
                    label: page.label().to_string(),
                    is_active: *page == self.current_page,
                })
                .collect(),
            search_query: self.search_query.clone(),
        }
    }

    fn compute_card(&self, item: &MediaItem, title_width: usize) -> CardItem {
        let title = truncate_chars(&item.title, title_width);
        let highlight_ranges = if title == item.title {
            compute_highlight_ranges(&item.title, &self.search_query)
        } else {
            vec![]
        };

        CardItem {
            id: item.id,
            title,
            rating: format!("{:.1}", item.rating),
            year: item.year,
            duration: item.duration.clone(),
            genres: item.genre.iter().take(CARD_GENRES).cloned().collect(),
            highlight_ranges,
        }
    }

    fn compute_hero(item: &MediaItem) -> HeroInfo {
        HeroInfo {
            title: item.title.clone(),
            rating: format!("{:.1}", item.rating),
            year: item.year,
            duration: item.duration.clone(),
            genres: item.genre.iter().take(CARD_GENRES).cloned().collect(),
            description: item.description.clone(),
        }
    }

    fn compute_overlay(item: &MediaItem) -> DetailOverlay {
        DetailOverlay {
            title: item.title.clone(),
            rating: format!("{:.1}", item.rating),
            year: item.year,
            duration: item.duration.clone(),
            genres: item.genre.clone(),
            synopsis: item.description.clone(),
            director: item.director.clone(),
            cast: item.cast.clone(),
            trailer: item.trailer.clone(),
        }
    }

    fn compute_section(&self, count: usize) -> SectionInfo {
        let title = if !self.search_query.is_empty() && self.current_page != Page::Newsletter {
            format!("Search Results for \"{}\"", self.search_query)
        } else {
            match self.current_page {
                Page::Home => "Browse Movies".to_string(),
                Page::MoviesListing => "All Movies".to_string(),
                Page::TvListing => "TV Shows".to_string(),
                Page::Newsletter => "Newsletter".to_string(),
            }
        };

        let count_label = match self.current_page {
            Page::MoviesListing => Some(format!("({count} movies)")),
            Page::TvListing => Some(format!("({count} shows)")),
            Page::Home | Page::Newsletter => None,
        };

        SectionInfo { title, count_label }
    }

    fn compute_genre_chips(&self) -> Vec<GenreChip> {
        if self.current_page == Page::Newsletter {
            return vec![];
        }

        self.catalog
            .genres
            .iter()
            .map(|genre| GenreChip {
                id: genre.id.clone(),
                name: genre.name.clone(),
                is_selected: genre.id == self.genre_filter.id(),
            })
            .collect()
    }

    fn compute_empty_state(&self, no_cards: bool) -> Option<EmptyState> {
        match self.current_page {
            Page::Newsletter => Some(EmptyState {
                message: "Never miss a premiere".to_string(),
                subtitle: "New releases and picks from our editors, once a week.".to_string(),
            }),
            Page::TvListing if no_cards => Some(EmptyState {
                message: "No shows found".to_string(),
                subtitle: "Try adjusting your search or filter criteria".to_string(),
            }),
            Page::Home | Page::MoviesListing if no_cards => Some(EmptyState {
                message: "No movies found".to_string(),
                subtitle: "Try adjusting your search or filter criteria".to_string(),
            }),
            _ => None,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.is_overlay_open() && self.current_page.supports_detail() {
            "close: close details  page <name>: navigate  quit: exit".to_string()
        } else {
            match self.current_page {
                Page::Home | Page::MoviesListing => {
                    let sort = if self.current_page == Page::MoviesListing {
                        "sort rating|year|title  "
                    } else {
                        ""
                    };
                    format!("search <text>  genre <id>  {sort}open <id>  page home|movies|tv|newsletter  quit")
                }
                Page::TvListing => {
                    "search <text>  genre <id>  page home|movies|tv|newsletter  quit".to_string()
                }
                Page::Newsletter => "page home|movies|tv|newsletter  quit".to_string(),
            }
        };

        FooterInfo { keybindings }
    }
}

/// Truncates `text` to `width` characters, ending in `...` when shortened.
fn truncate_chars(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Computes character ranges of every case-insensitive occurrence of `query`
/// in `text`.
///
/// Returns `(start, end)` character indices with an exclusive end. Texts whose
/// lowercase form has a different character count are not highlighted, since
/// indices would not line up.
fn compute_highlight_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    if query.is_empty() {
        return vec![];
    }

    let haystack = text.to_lowercase();
    let needle = query.to_lowercase();

    if haystack.chars().count() != text.chars().count() {
        return vec![];
    }

    let needle_chars = needle.chars().count();
    haystack
        .match_indices(&needle)
        .map(|(byte_idx, _)| {
            let start = haystack[..byte_idx].chars().count();
            (start, start + needle_chars)
        })
        .collect()
}
