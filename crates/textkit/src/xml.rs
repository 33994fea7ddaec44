//! XML numeric-entity codec for wide strings.
//!
//! The encode direction escapes everything non-ASCII plus the XML-unsafe
//! characters as `&#x..;` references; the decode direction is a small
//! three-state scanner. Decode tolerates a known upstream quirk: the XML
//! reader already replaces `&amp;` in attribute values with a literal `&`,
//! so a `&` not followed by `#` must pass through unchanged rather than be
//! reported.

use crate::log::default_sink;
use crate::LogSink;
use crate::WideString;

const COMPONENT: &str = "xml";

enum State {
    Normal,
    EntityPreamble,
    EntityBody,
}

/// [`xml_decode_with`] on the default sink.
pub fn xml_decode(input: &str) -> WideString {
    xml_decode_with(input, default_sink())
}

/// Decodes `&#<decimal>;` and `&#x<hex>;` entities to UTF-16 code units.
///
/// A malformed body (empty or non-numeric) contributes no output and logs a
/// warning; a lone `&` at end of input contributes nothing. Everything else
/// is copied through.
pub fn xml_decode_with(input: &str, sink: &dyn LogSink) -> WideString {
    let mut output: WideString = Vec::new();
    let mut entity = String::new();
    let mut is_hex = false;
    let mut state = State::Normal;

    for ch in input.chars() {
        match state {
            State::Normal => {
                if ch == '&' {
                    state = State::EntityPreamble;
                    entity.clear();
                    is_hex = false;
                } else {
                    push_char(&mut output, ch);
                }
            }
            State::EntityPreamble => {
                if ch == '#' {
                    state = State::EntityBody;
                } else {
                    // Literal '&' from the upstream reader; re-emit both
                    // characters and carry on.
                    output.push(b'&' as u16);
                    push_char(&mut output, ch);
                    state = State::Normal;
                }
            }
            State::EntityBody => {
                if ch == 'x' && entity.is_empty() {
                    is_hex = true;
                } else if ch == ';' {
                    let radix = if is_hex { 16 } else { 10 };
                    match u32::from_str_radix(&entity, radix) {
                        Ok(code) => push_code_point(&mut output, code),
                        Err(_) => sink.warn(
                            COMPONENT,
                            &format!("non-numeric entity not supported in '{input}'"),
                        ),
                    }
                    state = State::Normal;
                } else {
                    entity.push(ch);
                }
            }
        }
    }
    output
}

/// Escapes wide text to plain ASCII.
///
/// Every unit that is non-ASCII (≥ 128) or one of `&`, `<`, `>`, `"`,
/// space becomes `&#x<HEX>;` (uppercase, no leading zeros); all other
/// units pass through unchanged. [`xml_decode`] inverts this exactly.
pub fn xml_encode(input: &[u16]) -> String {
    let mut output = String::new();
    for &unit in input {
        if unit >= 128 || matches!(unit as u8, b'&' | b'<' | b'>' | b'"' | b' ') {
            output.push_str(&format!("&#x{unit:X};"));
        } else {
            output.push(unit as u8 as char);
        }
    }
    output
}

/// Appends a decoded code point: BMP values are a single unit (including
/// raw surrogate values, the legacy wide-char cast), anything above the BMP
/// becomes a surrogate pair, and out-of-range values are truncated to one
/// unit.
fn push_code_point(out: &mut WideString, code: u32) {
    match char::from_u32(code) {
        Some(ch) if code > 0xFFFF => push_char(out, ch),
        _ => out.push(code as u16),
    }
}

fn push_char(out: &mut WideString, ch: char) {
    let mut buf = [0u16; 2];
    out.extend_from_slice(ch.encode_utf16(&mut buf));
}
