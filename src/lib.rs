//! Marquee: a terminal media-browsing core.
//!
//! Marquee holds a static catalog of movies and TV shows and provides:
//! - Case-insensitive search over titles, descriptions and cast
//! - Genre filtering and rating/year/title ordering
//! - A featured hero that rotates on a cancellable background timer
//! - Page navigation with a detail overlay for the selected item

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI shim (main.rs)                                 │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Runtime (runtime.rs)                               │  ← Event loop, timer ownership
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Command parsing                                  │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Query Layer   │   │ Rotation      │
//! │ (ui/)         │   │ (query/)      │   │ (rotation/)   │
//! │ - Rendering   │   │ - Filter      │   │ - Hero cursor │
//! │ - Theming     │   │ - Sort        │   │ - Timer       │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Catalog, Domain & Infrastructure                   │
//! │  - Catalog loading (catalog/)                       │
//! │  - Media types and errors (domain/)                 │
//! │  - Platform paths (infrastructure/)                 │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber, rotating log file            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```toml
//! # ~/.config/marquee/config.toml
//! catalog_file = "~/movies/catalog.json"
//! theme = "marquee-light"
//! trace_level = "debug"
//! rotation_interval_ms = 5000
//! ```
//!
//! Every key can also be passed on the command line as `--key=value`, which
//! wins over the file.
//!
//! # Example
//!
//! ```rust
//! use marquee::{handle_event, initialize, Config, Event, Page};
//!
//! let mut state = initialize(&Config::default())?;
//!
//! for event in [Event::SearchChanged("night".into()), Event::PageChanged(Page::MoviesListing)] {
//!     let (_render, _actions) = handle_event(&mut state, &event)?;
//! }
//! # Ok::<(), marquee::MarqueeError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod query;
pub mod rotation;
pub mod runtime;
pub mod ui;

pub use app::{handle_event, parse_command, Action, AppState, Event, Page};
pub use catalog::{BundledCatalog, Catalog, CatalogSource, JsonCatalogFile};
pub use domain::{Genre, ItemId, MarqueeError, MediaItem, Result};
pub use query::{GenreFilter, SortKey};
pub use runtime::Runtime;
pub use ui::Theme;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default hero rotation interval in milliseconds.
pub const DEFAULT_ROTATION_INTERVAL_MS: u64 = 8000;

/// Application configuration.
///
/// Built from a key/value map (see [`Config::from_map`]) so that the config
/// file and command-line flags share one parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to a JSON catalog. The bundled catalog is used when unset.
    ///
    /// A leading `~` is expanded to the home directory.
    pub catalog_file: Option<String>,

    /// Built-in theme name to use.
    ///
    /// Options: `marquee-dark`, `marquee-light`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Log level.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any `EnvFilter`
    /// directive. `RUST_LOG` wins when set. Default: `"info"`
    pub trace_level: Option<String>,

    /// Milliseconds between hero advances. Default: 8000
    pub rotation_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_file: None,
            theme_name: None,
            theme_file: None,
            trace_level: None,
            rotation_interval_ms: DEFAULT_ROTATION_INTERVAL_MS,
        }
    }
}

impl Config {
    /// Parses configuration from a key/value map.
    ///
    /// # Parsing Rules
    ///
    /// - `catalog_file`, `theme_file`, `trace_level`: taken as-is; empty means unset
    /// - `theme` (or `theme_name`): built-in theme name
    /// - `rotation_interval_ms`: positive integer, falls back to 8000 otherwise
    ///
    /// Unknown keys are ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use marquee::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "marquee-light".to_string());
    /// map.insert("rotation_interval_ms".to_string(), "soon".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("marquee-light"));
    /// assert_eq!(config.rotation_interval_ms, 8000);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let non_empty = |key: &str| config.get(key).filter(|v| !v.trim().is_empty()).cloned();

        let rotation_interval_ms = config
            .get("rotation_interval_ms")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_ROTATION_INTERVAL_MS);

        Self {
            catalog_file: non_empty("catalog_file"),
            theme_name: non_empty("theme").or_else(|| non_empty("theme_name")),
            theme_file: non_empty("theme_file"),
            trace_level: non_empty("trace_level"),
            rotation_interval_ms,
        }
    }

    /// Reads a TOML config file into a key/value map.
    ///
    /// Non-string values are converted with their TOML rendering, so
    /// `rotation_interval_ms = 5000` and `rotation_interval_ms = "5000"` are
    /// equivalent.
    ///
    /// # Errors
    ///
    /// Returns [`MarqueeError::Config`] if the file cannot be read or is not a
    /// TOML table.
    pub fn read_file(path: &Path) -> Result<BTreeMap<String, String>> {
        let contents = fs::read_to_string(path)
            .map_err(|e| MarqueeError::Config(format!("failed to read {}: {e}", path.display())))?;

        let table: BTreeMap<String, toml::Value> = toml::from_str(&contents)
            .map_err(|e| MarqueeError::Config(format!("failed to parse {}: {e}", path.display())))?;

        Ok(table
            .into_iter()
            .map(|(key, value)| {
                let value = match value {
                    toml::Value::String(s) => s,
                    other => other.to_string(),
                };
                (key, value)
            })
            .collect())
    }

    /// Builds the configuration from command-line pairs and an optional file.
    ///
    /// The file is `args["config"]` when given (it must exist), otherwise
    /// `<config_dir>/marquee/config.toml` if present. Command-line pairs
    /// override file values.
    ///
    /// # Errors
    ///
    /// Returns [`MarqueeError::Config`] if the config file cannot be read.
    pub fn load(args: &BTreeMap<String, String>) -> Result<Self> {
        let file = match args.get("config") {
            Some(path) => Some(infrastructure::expand_tilde(path)),
            None => infrastructure::default_config_file().filter(|p| p.is_file()),
        };

        let mut merged = match &file {
            Some(path) => Self::read_file(path)?,
            None => BTreeMap::new(),
        };
        merged.extend(args.iter().map(|(k, v)| (k.clone(), v.clone())));

        Ok(Self::from_map(&merged))
    }

    /// Rotation interval as a `Duration`.
    #[must_use]
    pub const fn rotation_interval(&self) -> Duration {
        Duration::from_millis(self.rotation_interval_ms)
    }
}

/// Builds the initial application state from configuration.
///
/// - Theme: `theme_file`, else `theme_name`, else the default. A theme that
///   fails to load falls back to the default with a warning.
/// - Catalog: `catalog_file` if set, else the bundled catalog.
///
/// # Errors
///
/// Returns catalog loading errors; an unreadable or invalid catalog is fatal.
///
/// # Example
///
/// ```rust
/// use marquee::{initialize, Config, Page};
///
/// let state = initialize(&Config::default())?;
/// assert_eq!(state.current_page, Page::Home);
/// # Ok::<(), marquee::MarqueeError>(())
/// ```
pub fn initialize(config: &Config) -> Result<AppState> {
    let _span = tracing::debug_span!("initialize").entered();

    let theme = load_theme(config);

    let source: Box<dyn CatalogSource> = match &config.catalog_file {
        Some(path) => Box::new(JsonCatalogFile::new(infrastructure::expand_tilde(path))),
        None => Box::new(BundledCatalog),
    };
    let catalog = source.load()?;

    tracing::info!(
        source = %source.describe(),
        movies = catalog.movies.len(),
        shows = catalog.shows.len(),
        genres = catalog.genres.len(),
        theme = %theme.name,
        "marquee initialized"
    );

    Ok(AppState::new(catalog, theme))
}

fn load_theme(config: &Config) -> Theme {
    config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn from_map_parses_known_keys() {
        let config = Config::from_map(&map(&[
            ("catalog_file", "/tmp/c.json"),
            ("theme_file", "/tmp/t.toml"),
            ("trace_level", "debug"),
            ("rotation_interval_ms", "250"),
            ("unknown", "x"),
        ]));

        assert_eq!(config.catalog_file.as_deref(), Some("/tmp/c.json"));
        assert_eq!(config.theme_file.as_deref(), Some("/tmp/t.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.rotation_interval(), Duration::from_millis(250));
    }

    #[test]
    fn from_map_falls_back_on_bad_values() {
        let config = Config::from_map(&map(&[("rotation_interval_ms", "0"), ("catalog_file", "  ")]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_merges_file_and_args() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "theme = \"marquee-light\"\nrotation_interval_ms = 5000\ntrace_level = \"warn\"").unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let config = Config::load(&map(&[("config", &path), ("trace_level", "trace")])).unwrap();
        assert_eq!(config.theme_name.as_deref(), Some("marquee-light"));
        assert_eq!(config.rotation_interval_ms, 5000);
        assert_eq!(config.trace_level.as_deref(), Some("trace"));
    }

    #[test]
    fn load_rejects_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml").to_string_lossy().into_owned();
        assert!(matches!(Config::load(&map(&[("config", &path)])), Err(MarqueeError::Config(_))));
    }

    #[test]
    fn initialize_uses_bundled_catalog_and_default_theme() {
        let state = initialize(&Config::default()).unwrap();
        assert!(!state.catalog.movies.is_empty());
        assert_eq!(state.theme.name, "marquee-dark");
    }

    #[test]
    fn initialize_falls_back_on_unknown_theme() {
        let config = Config { theme_name: Some("neon".into()), ..Config::default() };
        assert_eq!(initialize(&config).unwrap().theme.name, "marquee-dark");
    }

    #[test]
    fn initialize_fails_on_missing_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            catalog_file: Some(dir.path().join("none.json").to_string_lossy().into_owned()),
            ..Config::default()
        };
        assert!(matches!(initialize(&config), Err(MarqueeError::Catalog(_))));
    }
}
