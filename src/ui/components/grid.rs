//! Grid component renderer.
//!
//! Renders the section heading, genre chips, sort indicator and card rows.

use crate::ui::helpers;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CardItem, GenreChip, SectionInfo};

/// Renders the section heading with its optional count and sort label.
pub fn render_section(
    out: &mut String,
    section: &SectionInfo,
    sort_label: Option<&str>,
    theme: &Theme,
) {
    out.push('\n');
    out.push(' ');
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    out.push_str(&section.title);
    out.push_str(Theme::reset());

    if let Some(count) = &section.count_label {
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push(' ');
        out.push_str(count);
        out.push_str(Theme::reset());
    }

    if let Some(label) = sort_label {
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str(&format!("   sorted by {label}"));
        out.push_str(Theme::reset());
    }
    out.push('\n');
}

/// Renders the genre chips on one wrapped line set.
pub fn render_genre_chips(out: &mut String, chips: &[GenreChip], theme: &Theme, cols: usize) {
    if chips.is_empty() {
        return;
    }

    let mut used = 1;
    out.push(' ');
    for chip in chips {
        let width = chip.name.chars().count() + 3;
        if used + width > cols && used > 1 {
            out.push('\n');
            out.push(' ');
            used = 1;
        }

        if chip.is_selected {
            out.push_str(&Theme::fg(&theme.colors.chip_selected_fg));
            out.push_str(&Theme::bg(&theme.colors.chip_selected_bg));
        } else {
            out.push_str(&Theme::fg(&theme.colors.chip_fg));
        }
        out.push_str(&format!(" {} ", chip.name));
        out.push_str(Theme::reset());
        out.push(' ');
        used += width;
    }
    out.push('\n');
}

/// Renders one row per card.
///
/// ```text
///  #1    ★ 8.6  2024  2h 46m   Dune: Part Two          scifi, adventure
/// ```
pub fn render_cards(out: &mut String, cards: &[CardItem], theme: &Theme, cols: usize) {
    let title_width = cols.saturating_sub(super::CARD_CHROME_WIDTH).max(super::MIN_TITLE_WIDTH);

    for card in cards {
        out.push(' ');
        out.push_str(&Theme::fg(&theme.colors.accent));
        out.push_str(&format!("{:<6}", format!("#{}", card.id)));
        out.push_str(&Theme::fg(&theme.colors.rating_fg));
        out.push_str(&format!("★ {:<5}", card.rating));
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str(&format!("{:<6}{:<9}", card.year, card.duration));

        out.push_str(&Theme::fg(&theme.colors.text_normal));
        helpers::render_highlighted_text(
            out,
            &card.title,
            &card.highlight_ranges,
            theme,
            &theme.colors.text_normal,
        );
        let title_len = card.title.chars().count();
        out.push_str(&" ".repeat(title_width.saturating_sub(title_len) + 2));

        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str(&card.genres.join(", "));
        out.push_str(Theme::reset());
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemId;
    use crate::ui::helpers::strip_ansi;

    fn card(id: u32, title: &str) -> CardItem {
        CardItem {
            id: ItemId(id),
            title: title.into(),
            rating: "8.0".into(),
            year: 2021,
            duration: "2h 35m".into(),
            genres: vec!["scifi".into()],
            highlight_ranges: vec![],
        }
    }

    #[test]
    fn one_row_per_card() {
        let mut out = String::new();
        render_cards(&mut out, &[card(1, "Dune"), card(2, "Her")], &Theme::default(), 80);

        let plain = strip_ansi(&out);
        let rows: Vec<&str> = plain.lines().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].contains("#1"));
        assert!(rows[0].contains("★ 8.0"));
        assert!(rows[0].contains("Dune"));
        assert!(rows[1].contains("Her"));
    }

    #[test]
    fn selected_chip_is_styled() {
        let theme = Theme::default();
        let chips = vec![
            GenreChip { id: "all".into(), name: "All".into(), is_selected: false },
            GenreChip { id: "drama".into(), name: "Drama".into(), is_selected: true },
        ];
        let mut out = String::new();
        render_genre_chips(&mut out, &chips, &theme, 80);

        assert!(out.contains(&format!("{} Drama ", Theme::bg(&theme.colors.chip_selected_bg))));
        assert_eq!(strip_ansi(&out).trim_end(), "  All   Drama");
    }

    #[test]
    fn section_shows_count_and_sort() {
        let section = SectionInfo { title: "All Movies".into(), count_label: Some("(2 movies)".into()) };
        let mut out = String::new();
        render_section(&mut out, &section, Some("Year"), &Theme::default());

        assert_eq!(strip_ansi(&out).trim(), "All Movies (2 movies)   sorted by Year");
    }
}
