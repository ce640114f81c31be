//! Detail overlay component renderer.

use super::hero::wrap;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailOverlay;

/// Renders the detail panel for the selected item inside a frame.
///
/// ```text
/// ┌──────────────────────────────────────┐
/// │ HER                                  │
/// │ ★ 8.5  2013  2h 6m                   │
/// │ drama, romance                       │
/// │                                      │
/// │ Synopsis                             │
/// │ ...                                  │
/// └──────────────────────────────────────┘
/// ```
pub fn render_overlay(out: &mut String, overlay: &DetailOverlay, theme: &Theme, cols: usize) {
    let inner = cols.saturating_sub(4).max(20);
    let border = Theme::fg(&theme.colors.overlay_border);

    let mut lines: Vec<(String, String)> = vec![
        (format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent)), overlay.title.to_uppercase()),
        (
            Theme::fg(&theme.colors.rating_fg),
            format!("★ {}  {}  {}", overlay.rating, overlay.year, overlay.duration),
        ),
        (Theme::fg(&theme.colors.text_dim), overlay.genres.join(", ")),
        (String::new(), String::new()),
        (format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg)), "Synopsis".to_string()),
    ];

    let normal = Theme::fg(&theme.colors.text_normal);
    lines.extend(wrap(&overlay.synopsis, inner).into_iter().map(|l| (normal.clone(), l)));
    lines.push((String::new(), String::new()));
    lines.push((normal.clone(), format!("Director: {}", overlay.director)));
    lines.extend(
        wrap(&format!("Cast: {}", overlay.cast.join(", ")), inner)
            .into_iter()
            .map(|l| (normal.clone(), l)),
    );
    if let Some(trailer) = &overlay.trailer {
        lines.push((Theme::fg(&theme.colors.text_dim), format!("Trailer: {trailer}")));
    }
    lines.push((String::new(), String::new()));
    lines.push((Theme::fg(&theme.colors.text_dim), "close to return".to_string()));

    out.push('\n');
    out.push_str(&border);
    out.push_str(&format!("┌{}┐", "─".repeat(inner + 2)));
    out.push_str(Theme::reset());
    out.push('\n');

    for (style, text) in lines {
        let text: String = text.chars().take(inner).collect();
        let len = text.chars().count();

        out.push_str(&border);
        out.push_str("│ ");
        out.push_str(Theme::reset());
        out.push_str(&style);
        out.push_str(&text);
        out.push_str(Theme::reset());
        out.push_str(&" ".repeat(inner - len));
        out.push_str(&border);
        out.push_str(" │");
        out.push_str(Theme::reset());
        out.push('\n');
    }

    out.push_str(&border);
    out.push_str(&format!("└{}┘", "─".repeat(inner + 2)));
    out.push_str(Theme::reset());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::strip_ansi;

    #[test]
    fn frames_every_detail_field() {
        let overlay = DetailOverlay {
            title: "Her".into(),
            rating: "8.5".into(),
            year: 2013,
            duration: "2h 6m".into(),
            genres: vec!["drama".into(), "romance".into()],
            synopsis: "A writer falls for an operating system.".into(),
            director: "Spike Jonze".into(),
            cast: vec!["Joaquin Phoenix".into(), "Scarlett Johansson".into()],
            trailer: None,
        };
        let mut out = String::new();
        render_overlay(&mut out, &overlay, &Theme::default(), 60);

        let plain = strip_ansi(&out);
        let widths: Vec<usize> = plain.lines().filter(|l| !l.is_empty()).map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|w| *w == 60));
        assert!(plain.contains("HER"));
        assert!(plain.contains("Synopsis"));
        assert!(plain.contains("Director: Spike Jonze"));
        assert!(plain.contains("Cast: Joaquin Phoenix, Scarlett Johansson"));
        assert!(!plain.contains("Trailer"));
    }
}
