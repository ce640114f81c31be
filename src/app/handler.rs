//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place that mutates [`AppState`] after
//! construction. It turns an [`Event`] into state changes plus a list of
//! [`Action`]s for the runtime to execute.
//!
//! # Event Types
//!
//! - **Selectors**: `SearchChanged`, `GenreSelected`, `SortSelected`
//! - **Navigation**: `PageChanged`
//! - **Overlay**: `ItemSelected`, `OverlayClosed`
//! - **Timer**: `RotationTick`
//! - **Lifecycle**: `Quit`
//!
//! # Example
//!
//! ```rust
//! use marquee::app::{AppState, Event, handle_event};
//! use marquee::catalog::{BundledCatalog, CatalogSource};
//! use marquee::ui::Theme;
//!
//! let mut state = AppState::new(BundledCatalog.load()?, Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::SearchChanged("dune".into()))?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), marquee::MarqueeError>(())
//! ```

use super::modes::Page;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::ItemId;
use crate::query::{GenreFilter, SortKey};

/// Discrete inputs processed by the handler, one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Replaces the search query. An empty string clears the text filter.
    SearchChanged(String),

    /// Replaces the genre filter. Only `"all"` disables it; any other id,
    /// including an empty one, is matched as an exact tag.
    GenreSelected(String),

    /// Replaces the movies listing ordering.
    SortSelected(SortKey),

    /// Switches the visible page.
    PageChanged(Page),

    /// Opens the detail overlay for an item.
    ItemSelected(ItemId),

    /// Closes the detail overlay.
    OverlayClosed,

    /// Advances the hero if the tick belongs to the active rotation.
    RotationTick {
        /// Generation stamped by the timer that produced the tick.
        generation: u64,
    },

    /// Ends the session.
    Quit,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// A `(should_render, actions)` pair. `should_render` is `false` when the
/// event left everything on screen unchanged (stale tick, same page, ignored
/// selection). Actions must be executed in order.
///
/// # Errors
///
/// Returns [`MarqueeError::ItemNotFound`](crate::MarqueeError::ItemNotFound)
/// when `ItemSelected` names an id absent from the catalog. State is left
/// unchanged in that case.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SearchChanged(query) => {
            if &state.search_query == query {
                return Ok((false, vec![]));
            }
            tracing::trace!(query = %query, "search query updated");
            state.search_query.clone_from(query);
            Ok((true, vec![]))
        }
        Event::GenreSelected(genre) => {
            let filter = GenreFilter::from(genre.as_str());
            if state.genre_filter == filter {
                return Ok((false, vec![]));
            }
            tracing::debug!(genre = %filter, "genre filter updated");
            state.genre_filter = filter;
            Ok((true, vec![]))
        }
        Event::SortSelected(key) => {
            if state.sort_key == *key {
                return Ok((false, vec![]));
            }
            tracing::debug!(sort_key = %key, "sort key updated");
            state.sort_key = *key;
            Ok((true, vec![]))
        }
        Event::PageChanged(page) => {
            let changed = state.current_page != *page;
            let actions = state.change_page(*page);
            Ok((changed, actions))
        }
        Event::ItemSelected(id) => {
            let opened = state.select_item(*id)?;
            if opened {
                tracing::debug!(item_id = %id, "detail overlay opened");
            }
            Ok((opened, vec![]))
        }
        Event::OverlayClosed => {
            let closed = state.close_overlay();
            if !closed {
                tracing::trace!("no overlay open");
            }
            Ok((closed, vec![]))
        }
        Event::RotationTick { generation } => {
            let advanced = state.advance_rotation(*generation);
            Ok((advanced, vec![]))
        }
        Event::Quit => {
            tracing::debug!("quit requested");
            Ok((false, vec![Action::Exit]))
        }
    }
}
