//! Platform path resolution.
//!
//! Data and config locations follow the platform conventions reported by the
//! `dirs` crate, each with a `marquee` subdirectory.

use std::path::PathBuf;

const APP_DIR: &str = "marquee";

/// Returns the data directory holding the log file.
///
/// `~/.local/share/marquee` on Linux. Falls back to `./.marquee` when the
/// platform reports no data directory.
///
/// # Examples
///
/// ```
/// use marquee::infrastructure::get_data_dir;
///
/// assert!(get_data_dir().ends_with("marquee"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .or_else(dirs::data_dir)
        .map_or_else(|| PathBuf::from(".marquee"), |dir| dir.join(APP_DIR))
}

/// Returns the config directory searched for `config.toml`.
///
/// `~/.config/marquee` on Linux; `None` when the platform reports none.
#[must_use]
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR))
}

/// Default configuration file location.
#[must_use]
pub fn default_config_file() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.toml"))
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading `~`, or when no home directory is known, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use marquee::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), std::path::PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let Some(home) = dirs::home_dir() else {
        return PathBuf::from(path);
    };

    if path == "~" {
        home
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(path)
    }
}
