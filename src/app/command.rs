//! Line command parsing for the terminal front end.
//!
//! Each input line maps to at most one [`Event`]:
//!
//! ```text
//! search <text>       replace the search query (verbatim, may be empty)
//! genre <id>          select a genre; "all" clears the filter
//! sort rating|year|title
//! page home|movies|tv|newsletter
//! open <id>           open the detail overlay
//! close               close the detail overlay
//! quit                exit
//! ```
//!
//! A blank line yields no event and only re-renders.

use super::handler::Event;
use super::modes::Page;
use crate::domain::error::{MarqueeError, Result};
use crate::domain::ItemId;
use crate::query::SortKey;

/// Parses one input line.
///
/// The keyword is separated from its argument by the first ASCII whitespace
/// character. The argument of `search` is kept exactly as typed; other
/// arguments are trimmed.
///
/// # Returns
///
/// `None` for a blank line.
///
/// # Errors
///
/// Returns [`MarqueeError::Command`] for an unknown keyword or a malformed
/// argument.
pub fn parse_command(line: &str) -> Result<Option<Event>> {
    let line = line.trim_end_matches(['\n', '\r']);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let line = line.trim_start();
    let (keyword, argument) = match line.find(|c: char| c.is_ascii_whitespace()) {
        Some(at) => (&line[..at], &line[at + 1..]),
        None => (line, ""),
    };

    let event = match keyword {
        "search" | "/" => Event::SearchChanged(argument.to_string()),
        "genre" | "g" => {
            let id = argument.trim();
            if id.is_empty() {
                return Err(MarqueeError::Command(
                    "genre needs an id (use 'genre all' to clear it)".to_string(),
                ));
            }
            Event::GenreSelected(id.to_string())
        }
        "sort" | "s" => Event::SortSelected(argument.trim().parse::<SortKey>()?),
        "page" | "p" => Event::PageChanged(argument.trim().parse::<Page>()?),
        "open" | "o" => {
            let id = argument
                .trim()
                .parse::<u32>()
                .map_err(|_| MarqueeError::Command(format!("invalid item id '{}'", argument.trim())))?;
            Event::ItemSelected(ItemId(id))
        }
        "close" | "c" | "esc" => Event::OverlayClosed,
        "quit" | "q" | "exit" => Event::Quit,
        other => return Err(MarqueeError::Command(format!("unknown command '{other}'"))),
    };

    Ok(Some(event))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_only_render() {
        assert_eq!(parse_command("").unwrap(), None);
        assert_eq!(parse_command("   \n").unwrap(), None);
    }

    #[test]
    fn search_keeps_argument_verbatim() {
        assert_eq!(
            parse_command("search  dune ").unwrap(),
            Some(Event::SearchChanged(" dune ".to_string()))
        );
        assert_eq!(parse_command("search").unwrap(), Some(Event::SearchChanged(String::new())));
    }

    #[test]
    fn keyword_ends_at_any_ascii_whitespace() {
        assert_eq!(
            parse_command("search\tdune ").unwrap(),
            Some(Event::SearchChanged("dune ".to_string()))
        );
        assert_eq!(parse_command("  genre\tdrama").unwrap(), Some(Event::GenreSelected("drama".into())));
        assert_eq!(parse_command("quit \r\n").unwrap(), Some(Event::Quit));
    }

    #[test]
    fn genre_requires_an_id() {
        assert!(matches!(parse_command("genre"), Err(MarqueeError::Command(_))));
        assert!(matches!(parse_command("genre   "), Err(MarqueeError::Command(_))));
        assert_eq!(parse_command("genre all").unwrap(), Some(Event::GenreSelected("all".into())));
    }

    #[test]
    fn parses_navigation_and_selectors() {
        assert_eq!(parse_command("page tv\n").unwrap(), Some(Event::PageChanged(Page::TvListing)));
        assert_eq!(parse_command("sort title").unwrap(), Some(Event::SortSelected(SortKey::Title)));
        assert_eq!(parse_command("genre scifi").unwrap(), Some(Event::GenreSelected("scifi".into())));
        assert_eq!(parse_command("open 7").unwrap(), Some(Event::ItemSelected(ItemId(7))));
        assert_eq!(parse_command("close").unwrap(), Some(Event::OverlayClosed));
        assert_eq!(parse_command("q").unwrap(), Some(Event::Quit));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(parse_command("open seven"), Err(MarqueeError::Command(_))));
        assert!(matches!(parse_command("sort popularity"), Err(MarqueeError::Command(_))));
        assert!(matches!(parse_command("page settings"), Err(MarqueeError::Command(_))));
        assert!(matches!(parse_command("rewind"), Err(MarqueeError::Command(_))));
    }
}
