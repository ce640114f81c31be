//! Hero rotation cursor and hero resolution.

use crate::domain::MediaItem;

/// Position of the hero within the featured subsequence.
///
/// A rotation lives exactly as long as the home page is active. Each one is
/// stamped with a generation so ticks from a timer that belonged to an
/// earlier home visit can be told apart and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroRotation {
    generation: u64,
    index: usize,
}

impl HeroRotation {
    /// Starts a rotation at index 0.
    #[must_use]
    pub const fn new(generation: u64) -> Self {
        Self { generation, index: 0 }
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Advances to the next featured item, wrapping after `featured_count`.
    ///
    /// No-op when nothing is featured.
    pub fn advance(&mut self, featured_count: usize) {
        if featured_count == 0 {
            return;
        }
        self.index = (self.index + 1) % featured_count;
    }
}

/// Picks the hero item for a rotation index.
///
/// Resolution order:
/// 1. `featured[index]`
/// 2. `featured[0]` if the index is out of range
/// 3. `catalog[0]` if nothing is featured
/// 4. `None` for an empty catalog
///
/// # Examples
///
/// ```
/// use marquee::catalog::{BundledCatalog, CatalogSource};
/// use marquee::rotation::resolve_hero;
///
/// let catalog = BundledCatalog.load()?;
/// let featured = catalog.featured();
/// let hero = resolve_hero(&featured, &catalog.movies, 0).unwrap();
/// assert!(hero.featured);
///
/// let fallback = resolve_hero(&[], &catalog.movies, 3).unwrap();
/// assert_eq!(fallback.id, catalog.movies[0].id);
/// # Ok::<(), marquee::MarqueeError>(())
/// ```
#[must_use]
pub fn resolve_hero<'a>(
    featured: &[&'a MediaItem],
    catalog: &'a [MediaItem],
    index: usize,
) -> Option<&'a MediaItem> {
    featured
        .get(index)
        .or_else(|| featured.first())
        .copied()
        .or_else(|| catalog.first())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::{dune_and_her, item};

    #[test]
    fn returns_to_start_after_n_ticks() {
        for n in 1..=5 {
            let mut rotation = HeroRotation::new(0);
            rotation.advance(n);
            for _ in 1..n {
                rotation.advance(n);
            }
            assert_eq!(rotation.index(), 0, "did not wrap for n = {n}");
        }
    }

    #[test]
    fn advances_one_step_per_tick() {
        let mut rotation = HeroRotation::new(7);
        rotation.advance(3);
        assert_eq!(rotation.index(), 1);
        rotation.advance(3);
        assert_eq!(rotation.index(), 2);
        rotation.advance(3);
        assert_eq!(rotation.index(), 0);
        assert_eq!(rotation.generation(), 7);
    }

    #[test]
    fn zero_featured_is_a_noop() {
        let mut rotation = HeroRotation::new(0);
        rotation.advance(0);
        assert_eq!(rotation.index(), 0);
    }

    #[test]
    fn hero_follows_index() {
        let catalog = dune_and_her();
        let featured: Vec<&MediaItem> = catalog.iter().filter(|m| m.featured).collect();
        assert_eq!(resolve_hero(&featured, &catalog, 1).map(|m| m.id.0), Some(2));
    }

    #[test]
    fn hero_falls_back_to_first_catalog_item_without_featured() {
        let catalog = vec![item(5, "Heat", 8.3, 1995, &[], false), item(6, "Alien", 8.5, 1979, &[], false)];
        assert_eq!(resolve_hero(&[], &catalog, 0).map(|m| m.id.0), Some(5));
    }

    #[test]
    fn stale_index_falls_back_to_first_featured() {
        let catalog = dune_and_her();
        let featured: Vec<&MediaItem> = catalog.iter().collect();
        assert_eq!(resolve_hero(&featured, &catalog, 9).map(|m| m.id.0), Some(1));
    }

    #[test]
    fn empty_catalog_has_no_hero() {
        assert!(resolve_hero(&[], &[], 0).is_none());
    }
}
