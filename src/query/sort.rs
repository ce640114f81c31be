//! Ordering of filtered results for the movies listing.
//!
//! Sorting never touches the input slice; it copies the references into a new
//! vector and sorts that with a stable sort, so equal keys keep their input order.

use crate::domain::MediaItem;
use crate::domain::error::MarqueeError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Sort order selectable on the movies listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Highest rating first.
    #[default]
    Rating,
    /// Newest first.
    Year,
    /// Alphabetical by title.
    Title,
}

impl SortKey {
    /// Display label used by the sort selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rating => "Rating",
            Self::Year => "Year",
            Self::Title => "Title",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Rating => "rating",
            Self::Year => "year",
            Self::Title => "title",
        })
    }
}

impl FromStr for SortKey {
    type Err = MarqueeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rating" => Ok(Self::Rating),
            "year" => Ok(Self::Year),
            "title" => Ok(Self::Title),
            other => Err(MarqueeError::Command(format!(
                "unknown sort key '{other}' (expected rating, year or title)"
            ))),
        }
    }
}

/// Lowercased title with combining marks removed after canonical decomposition.
fn collation_key(title: &str) -> String {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compares titles the way a reader expects an alphabetical list to look.
///
/// Accents and case are ignored first, so `"Élite"` sorts among the `e`s.
/// Remaining ties put the unaccented form first and then lowercase before
/// uppercase, which keeps the ordering total.
fn compare_titles(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

/// Returns `items` ordered by `key`.
///
/// - [`SortKey::Rating`]: descending, compared with `f32::total_cmp`
/// - [`SortKey::Year`]: descending
/// - [`SortKey::Title`]: ascending, ignoring accents and case first
///
/// # Examples
///
/// ```
/// use marquee::catalog::{BundledCatalog, CatalogSource};
/// use marquee::query::{filter, sort, GenreFilter, SortKey};
///
/// let catalog = BundledCatalog.load()?;
/// let visible = filter(&catalog.movies, "", &GenreFilter::All);
/// let by_year = sort(&visible, SortKey::Year);
/// assert!(by_year.windows(2).all(|w| w[0].year >= w[1].year));
/// # Ok::<(), marquee::MarqueeError>(())
/// ```
#[must_use]
pub fn sort<'a>(items: &[&'a MediaItem], key: SortKey) -> Vec<&'a MediaItem> {
    let _span = tracing::debug_span!("sort", count = items.len(), key = %key).entered();

    let mut sorted = items.to_vec();
    match key {
        SortKey::Rating => sorted.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Year => sorted.sort_by(|a, b| b.year.cmp(&a.year)),
        SortKey::Title => sorted.sort_by(|a, b| compare_titles(&a.title, &b.title)),
    }
    sorted
}
