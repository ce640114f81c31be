//! Search and genre filtering over catalog slices.
//!
//! Filtering is a pure function: it borrows the catalog, never reorders it and
//! returns a freshly allocated vector of references.

use crate::domain::MediaItem;
use std::fmt;

/// The genre id that selects every item.
pub const ALL_GENRES: &str = "all";

/// Genre selector applied on top of text search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GenreFilter {
    /// Matches every item. Parsed from the `"all"` sentinel only.
    #[default]
    All,
    /// Matches items whose tag list contains this exact tag.
    Tag(String),
}

impl GenreFilter {
    /// Returns `true` if `item` passes this genre filter.
    #[must_use]
    pub fn matches(&self, item: &MediaItem) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => item.has_genre(tag),
        }
    }

    /// The genre id this filter corresponds to (`"all"` for [`GenreFilter::All`]).
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::All => ALL_GENRES,
            Self::Tag(tag) => tag,
        }
    }
}

impl From<&str> for GenreFilter {
    fn from(id: &str) -> Self {
        if id == ALL_GENRES {
            Self::All
        } else {
            Self::Tag(id.to_string())
        }
    }
}

impl fmt::Display for GenreFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Returns `true` if `item` matches an already-lowercased search needle.
///
/// The needle is looked for in the title, the description and each cast
/// member's name. An empty needle matches everything.
fn matches_needle(item: &MediaItem, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    item.title.to_lowercase().contains(needle)
        || item.description.to_lowercase().contains(needle)
        || item.cast.iter().any(|actor| actor.to_lowercase().contains(needle))
}

/// Returns `true` if `item` matches the free-text `query`, ignoring case.
///
/// The query is used as given; surrounding whitespace is significant.
///
/// # Examples
///
/// ```
/// use marquee::catalog::{BundledCatalog, CatalogSource};
/// use marquee::query::matches_query;
///
/// let catalog = BundledCatalog.load()?;
/// let arrival = catalog.movies.iter().find(|m| m.title == "Arrival").unwrap();
/// assert!(matches_query(arrival, "AMY ADAMS"));
/// assert!(matches_query(arrival, ""));
/// # Ok::<(), marquee::MarqueeError>(())
/// ```
#[must_use]
pub fn matches_query(item: &MediaItem, query: &str) -> bool {
    matches_needle(item, &query.to_lowercase())
}

/// Computes the visible subset of `items` for a search query and genre filter.
///
/// An item is kept when it matches the query (see [`matches_query`]) and the
/// genre filter. Source order is preserved.
///
/// # Examples
///
/// ```
/// use marquee::catalog::{BundledCatalog, CatalogSource};
/// use marquee::query::{filter, GenreFilter};
///
/// let catalog = BundledCatalog.load()?;
/// let all = filter(&catalog.movies, "", &GenreFilter::All);
/// assert_eq!(all.len(), catalog.movies.len());
/// # Ok::<(), marquee::MarqueeError>(())
/// ```
#[must_use]
pub fn filter<'a>(items: &'a [MediaItem], query: &str, genre: &GenreFilter) -> Vec<&'a MediaItem> {
    let _span = tracing::debug_span!("filter",
        total_items = items.len(),
        query_len = query.len(),
        genre = %genre
    ).entered();

    let needle = query.to_lowercase();

    let visible: Vec<&MediaItem> = items
        .iter()
        .filter(|item| genre.matches(item) && matches_needle(item, &needle))
        .collect();

    tracing::trace!(visible_count = visible.len(), "filter applied");

    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::{dune_and_her, item};

    fn ids(items: &[&MediaItem]) -> Vec<u32> {
        items.iter().map(|m| m.id.0).collect()
    }

    fn cast_catalog() -> Vec<MediaItem> {
        let mut heat = item(3, "Heat", 8.3, 1995, &["crime", "drama"], false);
        heat.description = "A group of professional bank robbers".to_string();
        heat.cast = vec!["Al Pacino".to_string(), "Robert De Niro".to_string()];

        let mut alien = item(4, "Alien", 8.5, 1979, &["horror", "scifi"], true);
        alien.description = "The crew of a commercial spacecraft".to_string();
        alien.cast = vec!["Sigourney Weaver".to_string()];

        let mut items = dune_and_her();
        items.push(heat);
        items.push(alien);
        items
    }

    #[test]
    fn query_matches_title_case_insensitively() {
        let catalog = dune_and_her();
        assert_eq!(ids(&filter(&catalog, "dune", &GenreFilter::All)), vec![1]);
        assert_eq!(ids(&filter(&catalog, "DUNE", &GenreFilter::All)), vec![1]);
    }

    #[test]
    fn query_matches_description_or_cast() {
        let catalog = cast_catalog();
        assert_eq!(ids(&filter(&catalog, "spacecraft", &GenreFilter::All)), vec![4]);
        assert_eq!(ids(&filter(&catalog, "de niro", &GenreFilter::All)), vec![3]);
        assert_eq!(ids(&filter(&catalog, "weaver", &GenreFilter::All)), vec![4]);
    }

    #[test]
    fn empty_query_is_identity() {
        let catalog = cast_catalog();
        let all = filter(&catalog, "", &GenreFilter::All);
        assert_eq!(ids(&all), vec![1, 2, 3, 4]);
    }

    #[test]
    fn genre_filter_is_exact_and_case_sensitive() {
        let catalog = dune_and_her();
        assert_eq!(ids(&filter(&catalog, "", &GenreFilter::from("drama"))), vec![2]);
        assert!(filter(&catalog, "", &GenreFilter::from("Drama")).is_empty());
        assert!(filter(&catalog, "", &GenreFilter::from("dram")).is_empty());
    }

    #[test]
    fn text_and_genre_must_both_match() {
        let catalog = cast_catalog();
        assert_eq!(ids(&filter(&catalog, "a", &GenreFilter::from("scifi"))), vec![4]);
        assert!(filter(&catalog, "dune", &GenreFilter::from("drama")).is_empty());
    }

    #[test]
    fn result_is_an_ordered_subsequence_satisfying_the_predicate() {
        let catalog = cast_catalog();
        for query in ["", "e", "al", "robert", "zzz", " "] {
            let visible = filter(&catalog, query, &GenreFilter::All);
            let positions: Vec<usize> = visible
                .iter()
                .map(|v| catalog.iter().position(|c| c.id == v.id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "order broken for {query:?}");
            assert!(visible.iter().all(|v| matches_query(v, query)));
        }
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        let catalog = dune_and_her();
        assert!(filter(&catalog, " dune", &GenreFilter::All).is_empty());
    }

    #[test]
    fn empty_catalog_gives_empty_result() {
        assert!(filter(&[], "anything", &GenreFilter::from("drama")).is_empty());
    }

    #[test]
    fn all_sentinel_parses_to_all() {
        assert_eq!(GenreFilter::from("all"), GenreFilter::All);
        assert_eq!(GenreFilter::from("scifi").id(), "scifi");
        assert_eq!(GenreFilter::All.to_string(), "all");
    }

    #[test]
    fn empty_genre_id_matches_nothing() {
        let catalog = dune_and_her();
        assert_eq!(GenreFilter::from(""), GenreFilter::Tag(String::new()));
        assert!(filter(&catalog, "", &GenreFilter::from("")).is_empty());
    }
}
