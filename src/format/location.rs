//! Splitting a location into offset descriptor and primary place.

/// A location split for display.
///
/// Both parts borrow from the inputs: the offset is either a prefix of the
/// raw location or the nearby phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationParts<'a> {
    /// Distance and direction, e.g. `"5km N of"`.
    pub offset: &'a str,
    /// The named place, e.g. `" Nowhere"`.
    pub primary: &'a str,
}

/// Split `raw` at the first occurrence of `separator`.
///
/// The offset runs up to and including the separator; the primary is the
/// rest, untrimmed, including any later separators. Without a match the
/// offset is `nearby_offset` and the primary is `raw` as given.
///
/// Matching is a plain case-sensitive substring search, so `"of"` also
/// matches inside words such as `"Soft"`.
pub fn split_location<'a>(
    raw: &'a str,
    separator: &str,
    nearby_offset: &'a str,
) -> LocationParts<'a> {
    match raw.find(separator) {
        Some(start) => {
            let (offset, primary) = raw.split_at(start + separator.len());
            LocationParts { offset, primary }
        }
        None => LocationParts {
            offset: nearby_offset,
            primary: raw,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(raw: &str) -> (&str, &str) {
        let parts = split_location(raw, "of", "Near the");
        (parts.offset, parts.primary)
    }

    #[test]
    fn splits_at_separator() {
        assert_eq!(split("5km N of Nowhere"), ("5km N of", " Nowhere"));
        assert_eq!(
            split("88km N of Yelizovo, Russia"),
            ("88km N of", " Yelizovo, Russia")
        );
    }

    #[test]
    fn no_separator_uses_nearby_offset() {
        assert_eq!(split("Near Somewhere"), ("Near the", "Near Somewhere"));
        assert_eq!(
            split("Pacific-Antarctic Ridge"),
            ("Near the", "Pacific-Antarctic Ridge")
        );
    }

    #[test]
    fn empty_location() {
        assert_eq!(split(""), ("Near the", ""));
    }

    #[test]
    fn only_first_separator_splits() {
        assert_eq!(
            split("10km S of Gulf of Aden"),
            ("10km S of", " Gulf of Aden")
        );
    }

    #[test]
    fn separator_at_edges() {
        assert_eq!(split("of Somewhere"), ("of", " Somewhere"));
        assert_eq!(split("5km N of"), ("5km N of", ""));
        assert_eq!(split("of"), ("of", ""));
    }

    #[test]
    fn whitespace_is_preserved() {
        assert_eq!(split("  3km W of  Town  "), ("  3km W of", "  Town  "));
    }

    #[test]
    fn matches_inside_words() {
        assert_eq!(split("Soft Rock"), ("Sof", "t Rock"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(split("5km N OF Town"), ("Near the", "5km N OF Town"));
    }

    #[test]
    fn empty_separator_matches_at_start() {
        let parts = split_location("Town", "", "Near the");
        assert_eq!(parts.offset, "");
        assert_eq!(parts.primary, "Town");
    }

    #[test]
    fn custom_separator_and_phrase() {
        let parts = split_location("12 km NE de Lima", "de", "Cerca de");
        assert_eq!(parts.offset, "12 km NE de");
        assert_eq!(parts.primary, " Lima");

        let parts = split_location("Lima", "de", "Cerca de");
        assert_eq!(parts.offset, "Cerca de");
        assert_eq!(parts.primary, "Lima");
    }

    #[test]
    fn multibyte_text() {
        let parts = split_location("5 km N of Ōita, Japan", "of", "Near the");
        assert_eq!(parts.offset, "5 km N of");
        assert_eq!(parts.primary, " Ōita, Japan");
    }
}
