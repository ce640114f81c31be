//! Composable UI component renderers.
//!
//! Each component appends one part of the frame to a `String`.
//!
//! # Components
//!
//! - [`header`]: Brand, navigation bar and search query
//! - [`hero`]: Rotating featured movie banner
//! - [`grid`]: Section heading, genre chips, sort label and cards
//! - [`overlay`]: Detail panel for the selected item
//! - [`empty`]: Message shown in place of an empty grid
//! - [`footer`]: Command hints

mod empty;
mod footer;
mod grid;
mod header;
mod hero;
mod overlay;

use crate::ui::helpers::render_border;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::render_footer;
use grid::{render_cards, render_genre_chips, render_section};
use header::render_header;
use hero::render_hero;
use overlay::render_overlay;

/// Columns a card row spends outside the title.
pub(crate) const CARD_CHROME_WIDTH: usize = 48;

/// Titles are never truncated below this many characters.
pub(crate) const MIN_TITLE_WIDTH: usize = 12;

/// Renders the page layout.
///
/// ```text
/// [Header + nav]
/// [Border]
/// [Hero]                 home only
/// [Featured highlights]  movies listing only
/// [Section heading]
/// [Genre chips]
/// [Cards | Empty state]
/// [Overlay]              when an item is selected
/// [Border]
/// [Footer]
/// ```
pub fn render_page(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize) {
    render_header(out, &vm.nav, theme, cols);
    render_border(out, &theme.colors.border, cols);

    if let Some(hero) = &vm.hero {
        render_hero(out, hero, theme, cols);
    }

    if !vm.highlights.is_empty() {
        out.push('\n');
        out.push(' ');
        out.push_str(Theme::bold());
        out.push_str(&Theme::fg(&theme.colors.accent));
        out.push_str("Featured");
        out.push_str(Theme::reset());
        out.push('\n');
        render_cards(out, &vm.highlights, theme, cols);
    }

    render_section(out, &vm.section, vm.sort_label.as_deref(), theme);
    render_genre_chips(out, &vm.genre_chips, theme, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(out, empty, theme, cols);
    } else {
        render_cards(out, &vm.cards, theme, cols);
    }

    if let Some(overlay) = &vm.overlay {
        render_overlay(out, overlay, theme, cols);
    }

    out.push('\n');
    render_border(out, &theme.colors.border, cols);
    render_footer(out, &vm.footer, theme, cols);
}
