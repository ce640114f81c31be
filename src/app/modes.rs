//! Page state machine types.
//!
//! The browser shows exactly one [`Page`] at a time. Any page can be reached
//! from any other through a single `PageChanged` event; there are no
//! intermediate states and no URL routing.
//!
//! # Example
//!
//! ```rust
//! use marquee::app::modes::Page;
//!
//! let page: Page = "movies".parse()?;
//! assert_eq!(page, Page::MoviesListing);
//! assert!(page.supports_detail());
//! # Ok::<(), marquee::MarqueeError>(())
//! ```

use crate::domain::error::MarqueeError;
use std::fmt;
use std::str::FromStr;

/// The page currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Hero rotation plus the filtered (unsorted) movie grid.
    #[default]
    Home,

    /// Featured highlights plus the filtered and sorted movie grid.
    MoviesListing,

    /// Filtered grid of TV shows.
    TvListing,

    /// Newsletter sign-up page; shows no catalog items.
    Newsletter,
}

impl Page {
    /// Every page in navigation order.
    pub const ALL: [Self; 4] = [Self::Home, Self::MoviesListing, Self::TvListing, Self::Newsletter];

    /// Navigation label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::MoviesListing => "Movies",
            Self::TvListing => "TV Shows",
            Self::Newsletter => "Newsletter",
        }
    }

    /// Whether selecting an item on this page opens the detail overlay.
    ///
    /// Only the home page and the movies listing wire item selection.
    #[must_use]
    pub const fn supports_detail(self) -> bool {
        matches!(self, Self::Home | Self::MoviesListing)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Home => "home",
            Self::MoviesListing => "movies",
            Self::TvListing => "tv",
            Self::Newsletter => "newsletter",
        })
    }
}

impl FromStr for Page {
    type Err = MarqueeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Self::Home),
            "movies" => Ok(Self::MoviesListing),
            "tv" | "tvshows" => Ok(Self::TvListing),
            "newsletter" => Ok(Self::Newsletter),
            other => Err(MarqueeError::Command(format!(
                "unknown page '{other}' (expected home, movies, tv or newsletter)"
            ))),
        }
    }
}
