//! Catalog loader abstraction.
//!
//! The [`CatalogSource`] trait hides where catalog data comes from (compiled-in
//! JSON, a file on disk) so the application layer only ever sees a validated
//! [`Catalog`].

use crate::catalog::Catalog;
use crate::domain::error::Result;

/// A place a catalog can be loaded from.
///
/// Implementations must return a validated catalog: loaders call
/// [`Catalog::validate`] before handing data out.
///
/// # Implementations
///
/// - [`BundledCatalog`](crate::catalog::BundledCatalog): compiled-in sample data
/// - [`JsonCatalogFile`](crate::catalog::JsonCatalogFile): JSON file on disk
///
/// # Examples
///
/// ```
/// use marquee::catalog::{BundledCatalog, CatalogSource};
///
/// let catalog = BundledCatalog.load()?;
/// assert!(!catalog.movies.is_empty());
/// # Ok::<(), marquee::MarqueeError>(())
/// ```
pub trait CatalogSource {
    /// Loads and validates the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be read, parsed, or violates
    /// catalog invariants.
    fn load(&self) -> Result<Catalog>;

    /// Short human-readable description used in logs.
    fn describe(&self) -> String;
}
