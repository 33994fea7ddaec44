//! Dotted version-string ordering.
//!
//! `X.Y.Z[m][-rcN]` maps to a single ordered integer with a fixed
//! digit-width budget per component: three digits each for the dotted
//! components, one for the trailing micro letter, one for the release
//! candidate. A plain release gets an implicit RC number of 9 so every real
//! release candidate (`rc1`–`rc8`) sorts strictly below it; that single
//! reserved digit is why RC numbers must stay below 9 — allowing more
//! requires widening every weight at once.

use crate::log::default_sink;
use crate::split::{parse_uint_prefix, split};
use crate::LogSink;

const COMPONENT: &str = "version";

/// The value reserved for development builds, `99.99.99i-rc9`: above every
/// concrete release.
const GIT_VERSION: i32 = 1_000_000 * 99 + 10_000 * 99 + 100 * 99 + 10 * 9 + 9;

/// [`version_to_int_with`] on the default sink.
pub fn version_to_int(version: &str) -> i32 {
    version_to_int_with(version, default_sink())
}

/// Converts a version string to its ordering integer.
///
/// `"GIT"`/`"git"` map to the maximum value. Otherwise a trailing `-rc<N>`
/// is stripped (N captured; 9 when absent), then a trailing lowercase
/// micro letter (a=1, b=2, …), then the remainder splits on `.` into up to
/// three components (missing or unparseable ones default to 0). A
/// non-positive result is logged as an error and returned as-is.
pub fn version_to_int_with(version: &str, sink: &dyn LogSink) -> i32 {
    if version == "GIT" || version == "git" {
        return GIT_VERSION;
    }

    let mut s = version;
    let mut release_candidate = 9i64;
    if s.len() > 4 {
        if let Some(rc) = s.get(s.len() - 4..).and_then(parse_rc_suffix) {
            release_candidate = rc;
            s = &s[..s.len() - 4];
            // rc9 would collide with the implicit final-release number and
            // rc10+ would outsort it; widen all the weights before ever
            // allowing this.
            debug_assert!(
                release_candidate < 9,
                "rc number {release_candidate} breaks release ordering"
            );
        }
    }

    let mut very_minor = 0i64;
    if let Some(last) = s.chars().last() {
        if last.is_ascii_lowercase() {
            very_minor = (last as u8 - b'a' + 1) as i64;
            s = &s[..s.len() - 1];
        }
    }

    let mut parts = split(s, '.');
    while parts.len() < 3 {
        parts.push("0".to_string());
    }

    // Legacy int arithmetic: absurd components wrap instead of panicking,
    // and the wrap is what the non-positive check below catches.
    let wide = 1_000_000 * parse_uint_prefix(&parts[0]) as i64
        + 10_000 * parse_uint_prefix(&parts[1]) as i64
        + 100 * parse_uint_prefix(&parts[2]) as i64
        + 10 * very_minor
        + release_candidate;
    let version_int = wide as i32;

    if version_int <= 0 {
        sink.error(COMPONENT, &format!("invalid version string '{s}'"));
    }
    version_int
}

/// Matches a 4-character `-rc<digit>` tail.
fn parse_rc_suffix(tail: &str) -> Option<i64> {
    let digits = tail.strip_prefix("-rc")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
