//! UTF-8 ↔ UTF-16 conversion.
//!
//! Both directions use the standard library's conformant converters. Rust
//! slices are length-delimited, so the legacy NUL-termination handling has
//! no counterpart here.

use crate::error::WideStringError;
use crate::WideString;

/// Transcodes UTF-8 text to UTF-16 code units.
pub fn utf8_to_wide(input: &str) -> WideString {
    input.encode_utf16().collect()
}

/// Transcodes UTF-16 code units to UTF-8.
///
/// Unpaired surrogates are rejected with a typed error; valid input
/// round-trips exactly through [`utf8_to_wide`].
pub fn wide_to_utf8(input: &[u16]) -> Result<String, WideStringError> {
    let mut out = String::with_capacity(input.len());
    let mut position = 0usize;
    for decoded in char::decode_utf16(input.iter().copied()) {
        match decoded {
            Ok(ch) => {
                out.push(ch);
                position += ch.len_utf16();
            }
            Err(_) => return Err(WideStringError::UnpairedSurrogate { position }),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ascii_round_trip() {
        let wide = utf8_to_wide("SuperTux");
        assert_eq!(wide.len(), 8);
        assert_eq!(wide_to_utf8(&wide).unwrap(), "SuperTux");
    }

    #[test]
    fn test_astral_characters_use_surrogate_pairs() {
        let wide = utf8_to_wide("\u{1F3CE}");
        assert_eq!(wide.len(), 2);
        assert_eq!(wide_to_utf8(&wide).unwrap(), "\u{1F3CE}");
    }

    #[test]
    fn test_unpaired_surrogate_rejected_with_position() {
        let err = wide_to_utf8(&[b'a' as u16, 0xD800]).unwrap_err();
        assert_eq!(err, WideStringError::UnpairedSurrogate { position: 1 });
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(utf8_to_wide(""), Vec::<u16>::new());
        assert_eq!(wide_to_utf8(&[]).unwrap(), "");
    }

    proptest! {
        #[test]
        fn prop_utf8_round_trips_through_wide(s in ".*") {
            prop_assert_eq!(wide_to_utf8(&utf8_to_wide(&s)).unwrap(), s);
        }
    }
}
