//! Case mapping, find/replace, and whitespace stripping.

/// Upper-cases ASCII letters; everything else passes through unchanged.
///
/// This is the single-byte legacy mapping: multibyte-aware casing is an
/// accepted limitation of the data formats served here, not a bug.
pub fn to_upper_case(s: &str) -> String {
    s.to_ascii_uppercase()
}

/// Lower-cases ASCII letters; see [`to_upper_case`].
pub fn to_lower_case(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// Replaces every non-overlapping occurrence of `from` with `to`.
///
/// The scan continues after each inserted replacement, so a `to` that
/// contains `from` cannot loop. An empty `from` matches nowhere and returns
/// the input unchanged.
pub fn find_and_replace(source: &str, from: &str, to: &str) -> String {
    if from.is_empty() {
        return source.to_string();
    }
    let mut destination = String::with_capacity(source.len());
    let mut rest = source;
    while let Some(pos) = rest.find(from) {
        destination.push_str(&rest[..pos]);
        destination.push_str(to);
        rest = &rest[pos + from.len()..];
    }
    destination.push_str(rest);
    destination
}

/// Alias of [`find_and_replace`] kept for the legacy call sites.
pub fn replace(source: &str, from: &str, to: &str) -> String {
    find_and_replace(source, from, to)
}

/// Strips space, tab, newline, and carriage return.
///
/// Other characters pass through, including other Unicode whitespace.
pub fn remove_whitespaces(input: &str) -> String {
    input
        .chars()
        .filter(|&c| !matches!(c, ' ' | '\t' | '\n' | '\r'))
        .collect()
}

/// True if the wide string has any character other than a plain space.
pub fn not_empty(input: &[u16]) -> bool {
    input.iter().any(|&unit| unit != b' ' as u16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::utf8_to_wide;

    #[test]
    fn test_case_conversion_is_ascii_only() {
        assert_eq!(to_upper_case("tux42"), "TUX42");
        assert_eq!(to_lower_case("TUX42"), "tux42");
        assert_eq!(to_upper_case("café"), "CAFé");
    }

    #[test]
    fn test_find_and_replace_all_occurrences() {
        assert_eq!(find_and_replace("a-b-c", "-", "+"), "a+b+c");
        assert_eq!(find_and_replace("none here", "xyz", "!"), "none here");
        assert_eq!(replace("kart kart", "kart", "track"), "track track");
    }

    #[test]
    fn test_replacement_containing_pattern_terminates() {
        assert_eq!(find_and_replace("aaa", "a", "aa"), "aaaaaa");
        assert_eq!(find_and_replace("x", "x", "xx"), "xx");
    }

    #[test]
    fn test_empty_pattern_is_a_no_op() {
        assert_eq!(find_and_replace("abc", "", "!"), "abc");
    }

    #[test]
    fn test_remove_whitespaces() {
        assert_eq!(remove_whitespaces(" a\tb\nc\r "), "abc");
        // Non-breaking space is not in the strip set.
        assert_eq!(remove_whitespaces("a\u{a0}b"), "a\u{a0}b");
    }

    #[test]
    fn test_not_empty() {
        assert!(not_empty(&utf8_to_wide("  x  ")));
        assert!(!not_empty(&utf8_to_wide("    ")));
        assert!(!not_empty(&utf8_to_wide("")));
    }
}
