//! Free-text query normalization.
//!
//! One canonical convention, applied everywhere a raw string needs to become
//! an (artist, title) pair:
//!
//! 1. If the text contains the literal separator `" - "` and splits into
//!    exactly two non-empty parts, those are the artist and title.
//! 2. Otherwise the first whitespace token is the artist and the remainder
//!    is the title ("Burna Last" -> artist "Burna", title "Last").
//!
//! History stores the structured pair, so nothing ever re-parses a formatted
//! display string.

use crate::lyrics::domain::SearchQuery;

/// Literal separator for the explicit artist/title form
const SEPARATOR: &str = " - ";

/// Parse a raw search string into a normalized query.
///
/// Returns `None` when no title can be derived (blank input, a single word,
/// or a malformed separator form) - callers report that as a validation
/// error.
pub fn parse_free_text(raw: &str) -> Option<SearchQuery> {
    if raw.trim().is_empty() {
        return None;
    }

    if raw.contains(SEPARATOR) {
        let parts: Vec<&str> = raw.split(SEPARATOR).collect();
        if parts.len() == 2 {
            return SearchQuery::new(parts[0], parts[1]);
        }
        // More than one separator is ambiguous; fall through to the
        // whitespace rule rather than guessing which dash binds.
    }

    let (artist, title) = raw.trim().split_once(char::is_whitespace)?;
    SearchQuery::new(artist, title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_separator_form() {
        let q = parse_free_text("Burna Boy - Last Last").unwrap();
        assert_eq!(q.artist, "Burna Boy");
        assert_eq!(q.title, "Last Last");
    }

    #[test]
    fn test_whitespace_fallback() {
        let q = parse_free_text("Burna Last").unwrap();
        assert_eq!(q.artist, "Burna");
        assert_eq!(q.title, "Last");
    }

    #[test]
    fn test_whitespace_fallback_keeps_multiword_title() {
        let q = parse_free_text("Wizkid Essence feat Tems").unwrap();
        assert_eq!(q.artist, "Wizkid");
        assert_eq!(q.title, "Essence feat Tems");
    }

    #[test]
    fn test_single_word_has_no_title() {
        assert!(parse_free_text("Burna").is_none());
        assert!(parse_free_text("  Burna  ").is_none());
    }

    #[test]
    fn test_blank_input() {
        assert!(parse_free_text("").is_none());
        assert!(parse_free_text("   \t ").is_none());
    }

    #[test]
    fn test_malformed_separator_falls_back() {
        // Two separators: whitespace rule applies instead
        let q = parse_free_text("A - B - C").unwrap();
        assert_eq!(q.artist, "A");
        assert_eq!(q.title, "- B - C");
    }

    #[test]
    fn test_separator_with_blank_side_is_rejected() {
        // " - Last Last" has an empty artist under the separator rule, and
        // the whitespace fallback would make the artist a bare dash; the
        // separator rule wins and rejects it.
        assert!(parse_free_text(" - Last Last").is_none());
    }

    proptest! {
        /// The separator form round-trips any artist/title pair that doesn't
        /// itself contain the separator.
        #[test]
        fn prop_separator_roundtrip(
            artist in "[A-Za-z][A-Za-z ]{0,10}[A-Za-z]",
            title in "[A-Za-z][A-Za-z ]{0,10}[A-Za-z]",
        ) {
            prop_assume!(!artist.contains(" - ") && !title.contains(" - "));
            let raw = format!("{artist} - {title}");
            let q = parse_free_text(&raw).unwrap();
            prop_assert_eq!(q.artist, artist.trim());
            prop_assert_eq!(q.title, title.trim());
        }

        /// Parsing never panics on arbitrary input.
        #[test]
        fn prop_parse_never_panics(raw in ".{0,64}") {
            let _ = parse_free_text(&raw);
        }
    }
}
