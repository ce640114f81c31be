//! Media item and genre domain models.
//!
//! A [`MediaItem`] is one movie or show in the catalog. Items are immutable once
//! loaded; every view over the catalog borrows them rather than copying.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog-unique identifier of a media item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A movie or show held by the catalog.
///
/// # Fields
///
/// - `rating`: compared with `f32::total_cmp` when sorting, so every value
///   (including NaN) has a defined position
/// - `duration`: preformatted display text such as `"2h 35m"`, never parsed
/// - `genre`: ordered genre tags, matched by exact string equality
/// - `featured`: eligible for hero rotation; absent in the source means `false`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub poster: String,
    pub backdrop: String,
    pub rating: f32,
    pub year: i32,
    pub duration: String,
    pub genre: Vec<String>,
    pub cast: Vec<String>,
    pub director: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailer: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl MediaItem {
    /// Returns `true` if the item carries `tag` among its genre tags.
    ///
    /// Comparison is exact and case-sensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use marquee::domain::{ItemId, MediaItem};
    ///
    /// let item = MediaItem {
    ///     id: ItemId(1),
    ///     title: "Dune".into(),
    ///     description: String::new(),
    ///     poster: String::new(),
    ///     backdrop: String::new(),
    ///     rating: 8.0,
    ///     year: 2021,
    ///     duration: "2h 35m".into(),
    ///     genre: vec!["scifi".into()],
    ///     cast: vec![],
    ///     director: "Denis Villeneuve".into(),
    ///     trailer: None,
    ///     featured: true,
    /// };
    /// assert!(item.has_genre("scifi"));
    /// assert!(!item.has_genre("SciFi"));
    /// ```
    #[must_use]
    pub fn has_genre(&self, tag: &str) -> bool {
        self.genre.iter().any(|g| g == tag)
    }
}

/// A genre chip offered for filtering.
///
/// `id` is the token stored on items; `name` is for display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: String,
    pub name: String,
}
