//! Delimiter splitting with pinned legacy semantics.
//!
//! `keep_split_char` is deliberately asymmetric: each segment after the
//! first carries the delimiter that *precedes* it, so concatenating the
//! segments reconstructs the input exactly for any input. Template
//! substitution ([`crate::template`]) relies on this to keep each `%`
//! attached to its placeholder.
//!
//! Other pinned edge cases: an empty input yields no segments, interior
//! empty segments are kept, and a trailing delimiter emits no trailing
//! empty segment — except in keep mode, where it becomes a final
//! one-character segment so the reconstruction identity holds.

use crate::log::default_sink;
use crate::LogSink;
use crate::WideString;

const COMPONENT: &str = "split";

/// Verifies a segment boundary produced by the scan.
///
/// A violation here is a programming error in the scan itself, not bad
/// input: it is logged at fatal level and the process aborts. This is the
/// crate's only terminating path and is unreachable for a well-formed scan.
fn check_segment(from: usize, to: usize, len: usize, describe: impl Fn() -> String) {
    if from > to || to > len {
        default_sink().fatal(
            COMPONENT,
            &format!(
                "segment [{from}..{to}] out of bounds (len {len}) while splitting '{}'",
                describe()
            ),
        );
        std::process::abort();
    }
}

/// Splits `s` at every occurrence of `delim`.
///
/// `split("a b=c d=e", ' ')` yields `["a", "b=c", "d=e"]`.
pub fn split(s: &str, delim: char) -> Vec<String> {
    split_keep(s, delim, false)
}

/// As [`split`]; with `keep_split_char` every segment after the first keeps
/// its leading delimiter, so `split_keep("a:b", ':', true)` yields
/// `["a", ":b"]`.
pub fn split_keep(s: &str, delim: char, keep_split_char: bool) -> Vec<String> {
    let mut result = Vec::new();
    let d = delim.len_utf8();
    let mut start = 0usize;

    while start < s.len() {
        match s[start..].find(delim) {
            Some(offset) => {
                let i = start + offset;
                let from = if keep_split_char && start != 0 { start - d } else { start };
                check_segment(from, i, s.len(), || s.to_string());
                result.push(s[from..i].to_string());
                start = i + d;
            }
            None => {
                // End of input reached.
                let from = if keep_split_char && start != 0 { start - d } else { start };
                check_segment(from, s.len(), s.len(), || s.to_string());
                result.push(s[from..].to_string());
                return result;
            }
        }
    }
    // Trailing delimiter: emit it as its own segment so the concatenation
    // of keep_split_char segments reconstructs the input exactly.
    if keep_split_char && start != 0 {
        result.push(s[start - d..].to_string());
    }
    result
}

/// Wide (UTF-16) variant of [`split`].
pub fn split_wide(s: &[u16], delim: u16) -> Vec<WideString> {
    split_wide_keep(s, delim, false)
}

/// Wide (UTF-16) variant of [`split_keep`]; behaves identically to the
/// narrow variant on ASCII input.
pub fn split_wide_keep(s: &[u16], delim: u16, keep_split_char: bool) -> Vec<WideString> {
    let mut result = Vec::new();
    let mut start = 0usize;

    while start < s.len() {
        match s[start..].iter().position(|&u| u == delim) {
            Some(offset) => {
                let i = start + offset;
                let from = if keep_split_char && start != 0 { start - 1 } else { start };
                check_segment(from, i, s.len(), || String::from_utf16_lossy(s));
                result.push(s[from..i].to_vec());
                start = i + 1;
            }
            None => {
                let from = if keep_split_char && start != 0 { start - 1 } else { start };
                check_segment(from, s.len(), s.len(), || String::from_utf16_lossy(s));
                result.push(s[from..].to_vec());
                return result;
            }
        }
    }
    if keep_split_char && start != 0 {
        result.push(s[start - 1..].to_vec());
    }
    result
}

/// [`split`] followed by best-effort integer parsing: each segment yields
/// its leading decimal value, or 0 when there is none. No error is raised
/// for non-numeric segments.
///
/// Unlike the legacy `atoi`-into-unsigned path, a negative segment parses
/// to 0 rather than wrapping around; data files relying on the old wrap
/// must be fixed up instead.
pub fn split_to_uint(s: &str, delim: char) -> Vec<u32> {
    split(s, delim).iter().map(|part| parse_uint_prefix(part)).collect()
}

/// Legacy `atoi` for unsigned values: optional leading whitespace and `+`,
/// then decimal digits. Anything else parses to 0; overflow saturates.
pub(crate) fn parse_uint_prefix(s: &str) -> u32 {
    let t = s.trim_start_matches([' ', '\t', '\n', '\r']);
    let t = t.strip_prefix('+').unwrap_or(t);
    let end = t
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(t.len());
    if end == 0 {
        return 0;
    }
    t[..end].parse().unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_split_basic() {
        assert_eq!(split("a b=c d=e", ' '), vec!["a", "b=c", "d=e"]);
        assert_eq!(split("kart", ':'), vec!["kart"]);
    }

    #[test]
    fn test_split_empty_input_yields_no_segments() {
        assert!(split("", ':').is_empty());
        assert!(split_keep("", ':', true).is_empty());
    }

    #[test]
    fn test_split_interior_empty_segments_kept() {
        assert_eq!(split("a::b", ':'), vec!["a", "", "b"]);
    }

    #[test]
    fn test_split_trailing_delimiter_emits_no_empty_tail() {
        assert_eq!(split("a:", ':'), vec!["a"]);
        assert_eq!(split(":", ':'), vec![""]);
    }

    #[test]
    fn test_split_keep_trailing_delimiter_kept_as_segment() {
        assert_eq!(split_keep("a:", ':', true), vec!["a", ":"]);
        assert_eq!(split_keep(":", ':', true), vec!["", ":"]);
    }

    #[test]
    fn test_split_leading_delimiter() {
        assert_eq!(split(":a", ':'), vec!["", "a"]);
        assert_eq!(split_keep(":ab", ':', true), vec!["", ":ab"]);
    }

    #[test]
    fn test_split_keep_prefixes_delimiter() {
        assert_eq!(split_keep("a:b:c", ':', true), vec!["a", ":b", ":c"]);
        assert_eq!(split_keep("%s and %s", '%', true), vec!["", "%s and ", "%s"]);
    }

    #[test]
    fn test_split_wide_matches_narrow_on_ascii() {
        let wide: Vec<u16> = "a:b::c:".encode_utf16().collect();
        let narrow = split_keep("a:b::c:", ':', true);
        let as_narrow: Vec<String> = split_wide_keep(&wide, b':' as u16, true)
            .iter()
            .map(|w| String::from_utf16_lossy(w))
            .collect();
        assert_eq!(as_narrow, narrow);

        let plain: Vec<String> = split_wide(&wide, b':' as u16)
            .iter()
            .map(|w| String::from_utf16_lossy(w))
            .collect();
        assert_eq!(plain, split("a:b::c:", ':'));
    }

    #[test]
    fn test_split_to_uint_best_effort() {
        assert_eq!(split_to_uint("12,34,56", ','), vec![12, 34, 56]);
        assert_eq!(split_to_uint("12,abc,7x", ','), vec![12, 0, 7]);
        assert_eq!(split_to_uint(" 3,+4", ','), vec![3, 4]);
    }

    #[test]
    fn test_parse_uint_prefix_saturates() {
        assert_eq!(parse_uint_prefix("99999999999999999999"), u32::MAX);
        assert_eq!(parse_uint_prefix("-3"), 0);
    }

    proptest! {
        // The keep_split_char segments concatenate back to the input for
        // any input, including delimiter runs at either end.
        #[test]
        fn prop_keep_split_concat_reconstructs(s in ".*") {
            let joined: String = split_keep(&s, ':', true).concat();
            prop_assert_eq!(joined, s);
        }

        // Without edge delimiters, split then rejoin is the identity.
        #[test]
        fn prop_split_rejoin(parts in proptest::collection::vec("[a-z]{1,4}", 1..6)) {
            let s = parts.join(":");
            prop_assert_eq!(split(&s, ':').join(":"), s);
        }
    }
}
