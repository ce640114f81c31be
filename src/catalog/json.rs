//! JSON catalog loaders.
//!
//! # File Format
//!
//! ```json
//! {
//!   "genres": [{ "id": "all", "name": "All" }, { "id": "drama", "name": "Drama" }],
//!   "movies": [
//!     {
//!       "id": 2,
//!       "title": "Her",
//!       "description": "...",
//!       "poster": "posters/her.jpg",
//!       "backdrop": "backdrops/her.jpg",
//!       "rating": 8.5,
//!       "year": 2013,
//!       "duration": "2h 6m",
//!       "genre": ["drama", "romance"],
//!       "cast": ["Joaquin Phoenix"],
//!       "director": "Spike Jonze",
//!       "featured": true
//!     }
//!   ],
//!   "shows": []
//! }
//! ```
//!
//! `featured`, `trailer` and `shows` may be omitted.

use crate::catalog::{Catalog, CatalogSource};
use crate::domain::error::{MarqueeError, Result};
use std::path::PathBuf;

/// Sample catalog compiled into the binary.
const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Parses and validates catalog JSON.
///
/// # Errors
///
/// Returns [`MarqueeError::Json`] on malformed input and
/// [`MarqueeError::Catalog`] on invariant violations.
pub fn parse_catalog(contents: &str) -> Result<Catalog> {
    let _span = tracing::debug_span!("parse_catalog", bytes = contents.len()).entered();

    let catalog: Catalog = serde_json::from_str(contents)?;
    catalog.validate()?;

    tracing::debug!(
        genres = catalog.genres.len(),
        movies = catalog.movies.len(),
        shows = catalog.shows.len(),
        "catalog parsed"
    );

    Ok(catalog)
}

/// The compiled-in sample catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledCatalog;

impl CatalogSource for BundledCatalog {
    fn load(&self) -> Result<Catalog> {
        parse_catalog(BUNDLED_CATALOG)
    }

    fn describe(&self) -> String {
        "bundled catalog".to_string()
    }
}

/// A catalog stored as a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonCatalogFile {
    path: PathBuf,
}

impl JsonCatalogFile {
    /// Creates a loader for the given file path. The file is read on [`load`](CatalogSource::load).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for JsonCatalogFile {
    fn load(&self) -> Result<Catalog> {
        tracing::debug!(path = ?self.path, "loading catalog file");

        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            MarqueeError::Catalog(format!("failed to read {}: {e}", self.path.display()))
        })?;

        parse_catalog(&contents)
    }

    fn describe(&self) -> String {
        format!("catalog file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn bundled_catalog_is_valid() {
        let catalog = BundledCatalog.load().unwrap();
        assert!(!catalog.movies.is_empty());
        assert!(!catalog.featured().is_empty());
        assert!(catalog.genres.iter().any(|g| g.id == "all"));
    }

    #[test]
    fn optional_fields_default() {
        let json = r#"{
            "genres": [],
            "movies": [{
                "id": 7, "title": "Heat", "description": "", "poster": "", "backdrop": "",
                "rating": 8.3, "year": 1995, "duration": "2h 50m",
                "genre": ["crime"], "cast": [], "director": "Michael Mann"
            }]
        }"#;

        let catalog = parse_catalog(json).unwrap();
        assert!(catalog.shows.is_empty());
        assert!(!catalog.movies[0].featured);
        assert!(catalog.movies[0].trailer.is_none());
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let err = parse_catalog("{ not json").unwrap_err();
        assert!(matches!(err, MarqueeError::Json(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"genres": [{{"id": "all", "name": "All"}}], "movies": []}}"#).unwrap();

        let catalog = JsonCatalogFile::new(file.path()).load().unwrap();
        assert_eq!(catalog.genres.len(), 1);
    }

    #[test]
    fn missing_file_is_a_catalog_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonCatalogFile::new(dir.path().join("nope.json")).load().unwrap_err();
        assert!(matches!(err, MarqueeError::Catalog(_)));
    }
}
