//! Domain layer for the Marquee media browser.
//!
//! This module contains the core domain types, independent of rendering, timers
//! or file formats.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`media`]: Media item and genre models
//!
//! # Examples
//!
//! ```
//! use marquee::domain::{Genre, Result};
//!
//! fn drama() -> Result<Genre> {
//!     Ok(Genre { id: "drama".to_string(), name: "Drama".to_string() })
//! }
//! # assert_eq!(drama().unwrap().id, "drama");
//! ```

pub mod error;
pub mod media;

pub use error::{MarqueeError, Result};
pub use media::{Genre, ItemId, MediaItem};
