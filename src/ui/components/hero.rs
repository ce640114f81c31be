//! Hero banner component renderer.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeroInfo;

/// Renders the featured movie banner.
///
/// ```text
///  DUNE: PART TWO
///  ★ 8.6  2024  2h 46m  Sci-Fi · Adventure
///  Paul Atreides unites with Chani and the Fremen...
/// ```
pub fn render_hero(out: &mut String, hero: &HeroInfo, theme: &Theme, cols: usize) {
    out.push('\n');
    out.push(' ');
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.accent));
    out.push_str(&hero.title.to_uppercase());
    out.push_str(Theme::reset());
    out.push('\n');

    out.push(' ');
    out.push_str(&Theme::fg(&theme.colors.rating_fg));
    out.push_str(&format!("★ {}", hero.rating));
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&format!("  {}  {}  {}", hero.year, hero.duration, hero.genres.join(" · ")));
    out.push_str(Theme::reset());
    out.push('\n');

    out.push_str(&Theme::fg(&theme.colors.text_normal));
    for line in wrap(&hero.description, cols.saturating_sub(2).max(20)) {
        out.push(' ');
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(Theme::reset());
}

/// Greedy word wrap to `width` characters.
pub(super) fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = vec![];
    let mut line = String::new();

    for word in text.split_whitespace() {
        let needed = if line.is_empty() { 0 } else { 1 } + word.chars().count();
        if !line.is_empty() && line.chars().count() + needed > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::strip_ansi;

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(wrap("one two three four", 9), vec!["one two", "three", "four"]);
        assert!(wrap("", 10).is_empty());
    }

    #[test]
    fn renders_title_and_metadata() {
        let hero = HeroInfo {
            title: "Arrival".into(),
            rating: "7.9".into(),
            year: 2016,
            duration: "1h 56m".into(),
            genres: vec!["scifi".into(), "drama".into()],
            description: "Linguist meets visitors.".into(),
        };
        let mut out = String::new();
        render_hero(&mut out, &hero, &Theme::default(), 80);

        let plain = strip_ansi(&out);
        assert!(plain.contains("ARRIVAL"));
        assert!(plain.contains("★ 7.9  2016  1h 56m  scifi · drama"));
        assert!(plain.contains("Linguist meets visitors."));
    }
}
