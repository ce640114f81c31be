//! Catalog store: the read-only in-memory collection of media items and genres.
//!
//! The catalog is loaded once at startup from a [`CatalogSource`] and never
//! mutated afterwards. Every filtered or sorted view borrows from it.
//!
//! # Modules
//!
//! - `source`: Loader trait abstraction for catalog backends
//! - `json`: JSON file and bundled-data loaders

pub mod json;
pub mod source;

pub use json::{BundledCatalog, JsonCatalogFile};
pub use source::CatalogSource;

use crate::domain::error::{MarqueeError, Result};
use crate::domain::{Genre, ItemId, MediaItem};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Static media catalog.
///
/// `movies` feed the home and movies pages and the featured rotation; `shows`
/// feed the TV listing. Ids are unique across both collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub genres: Vec<Genre>,
    pub movies: Vec<MediaItem>,
    #[serde(default)]
    pub shows: Vec<MediaItem>,
}

impl Catalog {
    /// Builds a catalog after checking id uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`MarqueeError::Catalog`] if two items share an id.
    ///
    /// # Examples
    ///
    /// ```
    /// use marquee::catalog::Catalog;
    ///
    /// let catalog = Catalog::new(vec![], vec![], vec![])?;
    /// assert!(catalog.movies.is_empty());
    /// # Ok::<(), marquee::MarqueeError>(())
    /// ```
    pub fn new(genres: Vec<Genre>, movies: Vec<MediaItem>, shows: Vec<MediaItem>) -> Result<Self> {
        let catalog = Self { genres, movies, shows };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Checks catalog invariants.
    ///
    /// Duplicate ids are rejected. Genre tags that do not name a known genre
    /// are tolerated and only logged.
    ///
    /// # Errors
    ///
    /// Returns [`MarqueeError::Catalog`] naming the first duplicated id.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for item in self.items() {
            if !seen.insert(item.id) {
                return Err(MarqueeError::Catalog(format!("duplicate item id {}", item.id)));
            }
        }

        for item in self.items() {
            for tag in &item.genre {
                if !self.genres.iter().any(|g| &g.id == tag) {
                    tracing::debug!(item_id = %item.id, tag = %tag, "item uses unknown genre tag");
                }
            }
        }

        Ok(())
    }

    /// Iterates over every item, movies first, then shows.
    pub fn items(&self) -> impl Iterator<Item = &MediaItem> {
        self.movies.iter().chain(self.shows.iter())
    }

    /// Looks up an item by id in either collection.
    #[must_use]
    pub fn find(&self, id: ItemId) -> Option<&MediaItem> {
        self.items().find(|item| item.id == id)
    }

    /// Returns the featured movies in catalog order.
    ///
    /// This is the subsequence the hero rotation cycles through.
    #[must_use]
    pub fn featured(&self) -> Vec<&MediaItem> {
        self.movies.iter().filter(|m| m.featured).collect()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::domain::{ItemId, MediaItem};

    pub fn item(id: u32, title: &str, rating: f32, year: i32, genre: &[&str], featured: bool) -> MediaItem {
        MediaItem {
            id: ItemId(id),
            title: title.to_string(),
            description: String::new(),
            poster: format!("posters/{id}.jpg"),
            backdrop: format!("backdrops/{id}.jpg"),
            rating,
            year,
            duration: "2h".to_string(),
            genre: genre.iter().map(ToString::to_string).collect(),
            cast: vec![],
            director: String::new(),
            trailer: None,
            featured,
        }
    }

    /// The two-movie catalog used throughout the scenario tests.
    pub fn dune_and_her() -> Vec<MediaItem> {
        vec![
            item(1, "Dune", 8.0, 2021, &["scifi"], true),
            item(2, "Her", 8.5, 2013, &["drama"], true),
        ]
    }
}
