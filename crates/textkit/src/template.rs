//! Positional and indexed placeholder substitution.
//!
//! Templates use `%`-led two-character markers: `%s`/`%d`/`%i`/`%f` consume
//! the next positional value, `%0`–`%9` select a value by zero-based index,
//! and anything else after a `%` is literal text. The splitter keeps the
//! `%` attached to each segment ([`split_keep`] with `keep_split_char`), so
//! reassembly is append-only and markers cannot drift.
//!
//! Translators reorder arguments with the indexed forms; the wide variant
//! additionally accepts the gettext-style 1-based `<digit>$` form.

use crate::log::default_sink;
use crate::split::{split_keep, split_wide_keep};
use crate::LogSink;
use crate::WideString;

const COMPONENT: &str = "insert_values";

const PERCENT: u16 = b'%' as u16;
const DOLLAR: u16 = b'$' as u16;
const QUESTION: u16 = b'?' as u16;

/// Substitutes `values` into `template`.
///
/// A marker without a matching value degrades to `"??"` with a warning on
/// the default sink; malformed templates never panic.
pub fn insert_values(template: &str, values: &[&str]) -> String {
    insert_values_with(template, values, default_sink())
}

/// As [`insert_values`], logging to the supplied sink.
pub fn insert_values_with(template: &str, values: &[&str], sink: &dyn LogSink) -> String {
    let segments = split_keep(template, '%', true);
    let mut out = String::new();
    let mut cursor = 0usize;

    for seg in &segments {
        let mut chars = seg.chars();
        if chars.next() != Some('%') {
            out.push_str(seg);
            continue;
        }
        match chars.next() {
            Some('s' | 'd' | 'i' | 'f') => {
                let rest = &seg[2..];
                match values.get(cursor) {
                    Some(value) => {
                        out.push_str(value);
                        out.push_str(rest);
                    }
                    None => {
                        sink.warn(
                            COMPONENT,
                            &format!("invalid number of arguments in '{template}'"),
                        );
                        out.push_str("??");
                        out.push_str(rest);
                    }
                }
                // The cursor advances even past the end, matching the
                // positional numbering a fixed template implies.
                cursor += 1;
            }
            Some(c) if c.is_ascii_digit() => {
                let rest = &seg[2..];
                let index = (c as u8 - b'0') as usize;
                match values.get(index) {
                    Some(value) => {
                        out.push_str(value);
                        out.push_str(rest);
                    }
                    None => {
                        sink.warn(
                            COMPONENT,
                            &format!("invalid argument index {index} in '{template}'"),
                        );
                        out.push_str("??");
                        out.push_str(rest);
                    }
                }
            }
            // Bare trailing '%' or an unknown code: literal text.
            _ => out.push_str(seg),
        }
    }
    out
}

/// Wide (UTF-16) variant of [`insert_values`].
///
/// Identical to the narrow variant on equivalent input, and additionally
/// accepts `%<digit>$` meaning "index digit minus one" (1-based indices).
pub fn insert_values_wide(template: &[u16], values: &[&[u16]]) -> WideString {
    insert_values_wide_with(template, values, default_sink())
}

/// As [`insert_values_wide`], logging to the supplied sink.
pub fn insert_values_wide_with(
    template: &[u16],
    values: &[&[u16]],
    sink: &dyn LogSink,
) -> WideString {
    let segments = split_wide_keep(template, PERCENT, true);
    let mut out: WideString = Vec::new();
    let mut cursor = 0usize;

    for seg in &segments {
        if seg.first() != Some(&PERCENT) {
            out.extend_from_slice(seg);
            continue;
        }
        match seg.get(1).copied() {
            Some(u) if is_type_code(u) => {
                let rest = &seg[2..];
                match values.get(cursor) {
                    Some(value) => {
                        out.extend_from_slice(value);
                        out.extend_from_slice(rest);
                    }
                    None => {
                        sink.warn(
                            COMPONENT,
                            &format!(
                                "invalid number of arguments in '{}'",
                                String::from_utf16_lossy(template)
                            ),
                        );
                        out.push(QUESTION);
                        out.push(QUESTION);
                        out.extend_from_slice(rest);
                    }
                }
                cursor += 1;
            }
            Some(u) if is_ascii_digit(u) => {
                // "%1$s …" swallows the marker's type code as well.
                let (rest, delta): (&[u16], i32) = if seg.len() >= 4 && seg[2] == DOLLAR {
                    (&seg[4..], -1)
                } else {
                    (&seg[2..], 0)
                };
                let index = (u - b'0' as u16) as i32 + delta;
                let value = usize::try_from(index).ok().and_then(|i| values.get(i));
                match value {
                    Some(v) => {
                        out.extend_from_slice(v);
                        out.extend_from_slice(rest);
                    }
                    None => {
                        sink.warn(
                            COMPONENT,
                            &format!(
                                "invalid argument index {index} in '{}'",
                                String::from_utf16_lossy(template)
                            ),
                        );
                        out.push(QUESTION);
                        out.push(QUESTION);
                        out.extend_from_slice(rest);
                    }
                }
            }
            _ => out.extend_from_slice(seg),
        }
    }
    out
}

fn is_type_code(u: u16) -> bool {
    u == b's' as u16 || u == b'd' as u16 || u == b'i' as u16 || u == b'f' as u16
}

fn is_ascii_digit(u: u16) -> bool {
    (b'0' as u16..=b'9' as u16).contains(&u)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::utf8_to_wide;
    use crate::log::{Level, MemorySink};

    fn wide(s: &str) -> WideString {
        utf8_to_wide(s)
    }

    #[test]
    fn test_positional_substitution() {
        assert_eq!(insert_values("%s and %s", &["a", "b"]), "a and b");
        assert_eq!(insert_values("Track %d, lap %i", &["3", "2"]), "Track 3, lap 2");
    }

    #[test]
    fn test_indexed_substitution() {
        assert_eq!(insert_values("%1 then %0", &["x", "y"]), "y then x");
        assert_eq!(insert_values("%0%0", &["ha"]), "haha");
    }

    #[test]
    fn test_literal_percent_passes_through() {
        assert_eq!(insert_values("100%!", &[]), "100%!");
        assert_eq!(insert_values("50%", &[]), "50%");
        assert_eq!(insert_values("a%%b", &[]), "a%%b");
    }

    #[test]
    fn test_missing_positional_value_degrades() {
        let sink = MemorySink::new();
        let out = insert_values_with("%s vs %s", &["tux"], &sink);
        assert_eq!(out, "tux vs ??");
        assert_eq!(sink.count(Level::Warn), 1);
    }

    #[test]
    fn test_out_of_range_index_degrades() {
        let sink = MemorySink::new();
        let out = insert_values_with("take %7!", &["a"], &sink);
        assert_eq!(out, "take ??!");
        assert_eq!(sink.count(Level::Warn), 1);
    }

    #[test]
    fn test_wide_matches_narrow() {
        let narrow = insert_values("%s scored %0 (%1)", &["tux", "10"]);
        let vals = [wide("tux"), wide("10")];
        let refs: Vec<&[u16]> = vals.iter().map(|v| v.as_slice()).collect();
        let out = insert_values_wide(&wide("%s scored %0 (%1)"), &refs);
        assert_eq!(String::from_utf16_lossy(&out), narrow);
    }

    #[test]
    fn test_wide_dollar_form_is_one_based() {
        let vals = [wide("red"), wide("blue")];
        let refs: Vec<&[u16]> = vals.iter().map(|v| v.as_slice()).collect();
        let out = insert_values_wide(&wide("%2$s beats %1$s"), &refs);
        assert_eq!(String::from_utf16_lossy(&out), "blue beats red");
    }

    #[test]
    fn test_wide_dollar_zero_underflows_to_question_marks() {
        let sink = MemorySink::new();
        let vals = [wide("x")];
        let refs: Vec<&[u16]> = vals.iter().map(|v| v.as_slice()).collect();
        let out = insert_values_wide_with(&wide("%0$s!"), &refs, &sink);
        assert_eq!(String::from_utf16_lossy(&out), "??!");
        assert_eq!(sink.count(Level::Warn), 1);
    }
}
