//! Header component renderer.
//!
//! Brand line followed by the navigation bar and the current search query.

use crate::ui::helpers::push_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::NavInfo;

const BRAND: &str = "MARQUEE";

/// Renders the brand, the page navigation and the search box.
///
/// # Layout
///
/// ```text
///                                  MARQUEE
///  [Home]  Movies  TV Shows  Newsletter                    search: dune
/// ```
pub fn render_header(out: &mut String, nav: &NavInfo, theme: &Theme, cols: usize) {
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        out.push_str(&Theme::bg(bg));
    }
    push_centered(out, BRAND, cols);
    out.push_str(Theme::reset());
    out.push('\n');

    let mut used = 1;
    out.push(' ');
    for item in &nav.items {
        if item.is_active {
            out.push_str(Theme::bold());
            out.push_str(&Theme::fg(&theme.colors.nav_active_fg));
            out.push_str(&format!("[{}]", item.label));
        } else {
            out.push_str(&Theme::fg(&theme.colors.text_normal));
            out.push_str(&format!(" {} ", item.label));
        }
        out.push_str(Theme::reset());
        out.push(' ');
        used += item.label.chars().count() + 3;
    }

    let search = if nav.search_query.is_empty() {
        "search: -".to_string()
    } else {
        format!("search: {}", nav.search_query)
    };
    let search_len = search.chars().count();
    out.push_str(&" ".repeat(cols.saturating_sub(used + search_len + 1)));
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&search);
    out.push_str(Theme::reset());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::strip_ansi;
    use crate::ui::viewmodel::NavItem;

    #[test]
    fn marks_active_page_and_shows_query() {
        let nav = NavInfo {
            items: vec![
                NavItem { label: "Home".into(), is_active: false },
                NavItem { label: "Movies".into(), is_active: true },
            ],
            search_query: "heat".into(),
        };
        let mut out = String::new();
        render_header(&mut out, &nav, &Theme::default(), 60);

        let plain = strip_ansi(&out);
        assert!(plain.contains("MARQUEE"));
        assert!(plain.contains("[Movies]"));
        assert!(plain.contains(" Home "));
        assert!(plain.contains("search: heat"));
    }
}
