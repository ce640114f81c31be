//! Filter and sort engines.
//!
//! Both engines are pure functions over borrowed catalog data:
//!
//! ```text
//! &[MediaItem] → filter(query, genre) → Vec<&MediaItem> → sort(key) → Vec<&MediaItem>
//! ```
//!
//! The home page only filters; the movies listing filters and then sorts.

pub mod filter;
pub mod sort;

pub use filter::{filter, matches_query, GenreFilter, ALL_GENRES};
pub use sort::{sort, SortKey};
