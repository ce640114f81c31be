//! Theme management and ANSI escape sequence generation.
//!
//! Built-in themes are embedded TOML files; custom themes are loaded from a
//! TOML file with the same layout.
//!
//! # Built-in Themes
//!
//! - `marquee-dark`: Cinema dark with a red accent (default)
//! - `marquee-light`: Light variant for bright terminals
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#f5f5f1"
//! nav_active_fg = "#e50914"
//! text_normal = "#e5e5e5"
//! text_dim = "#808080"
//! border = "#333333"
//! accent = "#e50914"
//! rating_fg = "#f5c518"
//! chip_fg = "#b3b3b3"
//! chip_selected_fg = "#ffffff"
//! chip_selected_bg = "#e50914"
//! match_highlight_fg = "#141414"
//! match_highlight_bg = "#f5c518"
//! empty_state_fg = "#e50914"
//! overlay_border = "#e50914"
//! ```
//!
//! # Example
//!
//! ```rust
//! use marquee::ui::theme::Theme;
//!
//! let theme = Theme::from_name("marquee-dark").unwrap();
//! println!("{}Bold{}", Theme::bold(), Theme::reset());
//! println!("{}", Theme::fg(&theme.colors.accent));
//! ```

use crate::domain::error::{MarqueeError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are hex strings (e.g. `"#e50914"`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Brand and heading text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Active navigation entry.
    pub nav_active_fg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Hero title and card ids.
    pub accent: String,
    /// Star ratings.
    pub rating_fg: String,

    /// Unselected genre chip.
    pub chip_fg: String,
    /// Selected genre chip foreground.
    pub chip_selected_fg: String,
    /// Selected genre chip background.
    pub chip_selected_bg: String,

    /// Search match highlight foreground.
    pub match_highlight_fg: String,
    /// Search match highlight background.
    pub match_highlight_bg: String,

    /// Empty state message color.
    pub empty_state_fg: String,

    /// Detail overlay frame.
    pub overlay_border: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `marquee-dark`, `marquee-light`.
    ///
    /// # Returns
    ///
    /// `None` if the theme name is unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "marquee-dark" => include_str!("../../themes/marquee-dark.toml"),
            "marquee-light" => include_str!("../../themes/marquee-light.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`MarqueeError::Theme`] if the file cannot be read or is not a
    /// valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| MarqueeError::Theme(format!("failed to read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| MarqueeError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Returns white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (`marquee-dark`).
    ///
    /// # Panics
    ///
    /// Panics if the embedded theme fails to parse, which the tests rule out.
    fn default() -> Self {
        Self::from_name("marquee-dark").expect("built-in marquee-dark theme should always parse")
    }
}
