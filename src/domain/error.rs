//! Error types for the Marquee media browser.
//!
//! This module defines the centralized error type [`MarqueeError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! The filter, sort and rotation engines never fail; these errors come from the
//! surrounding layers (catalog loading, configuration, command input, timers).

use crate::domain::media::ItemId;
use thiserror::Error;

/// The main error type for Marquee operations.
///
/// # Examples
///
/// ```
/// use marquee::MarqueeError;
///
/// fn validate_catalog() -> Result<(), MarqueeError> {
///     Err(MarqueeError::Catalog("duplicate movie id 3".to_string()))
/// }
///
/// assert!(validate_catalog().is_err());
/// ```
#[derive(Debug, Error)]
pub enum MarqueeError {
    /// Catalog data is malformed or violates an invariant (e.g. duplicate ids).
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Automatically converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON catalog content could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// An input line could not be turned into an event.
    #[error("Command error: {0}")]
    Command(String),

    /// An item id was referenced that the catalog does not contain.
    #[error("No catalog item with id {0}")]
    ItemNotFound(ItemId),

    /// The rotation timer thread could not be started.
    #[error("Timer error: {0}")]
    Timer(String),
}

/// A specialized `Result` type for Marquee operations.
///
/// This is a type alias for `std::result::Result<T, MarqueeError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, MarqueeError>;
