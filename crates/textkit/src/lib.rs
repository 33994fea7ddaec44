//! textkit: legacy-compatible string manipulation utilities.
//!
//! This crate collects the small, independent text transforms a game client
//! needs when loading data files, formatting race times, and filling
//! translated message templates: path decomposition, delimiter splitting,
//! placeholder substitution, duration formatting, XML numeric-entity
//! encoding/decoding, UTF-8/UTF-16 conversion, and version-string ordering.
//!
//! Every function is pure and stateless: inputs are taken by reference and
//! never mutated, outputs are newly constructed, and there is no shared
//! state, so all operations are safe to call concurrently.
//!
//! # Quick Start
//!
//! ```rust
//! use textkit::{insert_values, time_to_string, version_to_int};
//!
//! let lap = time_to_string(65.5, 2, true, false);
//! assert_eq!(lap, "01:05.50");
//!
//! let msg = insert_values("%s finished in %s", &["Amanda", &lap]);
//! assert_eq!(msg, "Amanda finished in 01:05.50");
//!
//! assert!(version_to_int("1.2.3-rc1") < version_to_int("1.2.3"));
//! ```
//!
//! # Modules
//!
//! - [`path`]: path decomposition and search-path splitting
//! - [`split`]: delimiter splitting with pinned legacy semantics
//! - [`template`]: `%`-marker placeholder substitution
//! - [`timefmt`]: race-time formatting and the loading-dots animation
//! - [`xml`]: XML numeric-entity codec for wide strings
//! - [`encoding`]: UTF-8 ↔ UTF-16 conversion
//! - [`version`]: dotted version-string ordering
//! - [`text`]: case mapping, find/replace, whitespace stripping
//! - [`log`]: the injected logging capability
//! - [`error`]: error types
//!
//! # Error contract
//!
//! Malformed input (missing delimiters, out-of-range placeholder indices,
//! bad entity bodies, unparseable versions) never stops the caller: the
//! affected operation logs a warning or error through its [`log::LogSink`]
//! and returns a best-effort result. The one exception is an internal
//! bounds-invariant violation inside the split scan, which is logged at
//! fatal level and aborts the process; see [`split`].

pub mod encoding;
pub mod error;
pub mod log;
pub mod path;
pub mod split;
pub mod template;
pub mod text;
pub mod timefmt;
pub mod version;
pub mod xml;

// Re-export commonly used items at crate root
pub use encoding::{utf8_to_wide, wide_to_utf8};
pub use error::WideStringError;
pub use log::{default_sink, Level, LogSink, MemorySink, TracingSink};
pub use path::{
    get_basename, get_extension, get_path, remove_extension, split_path,
    split_path_with_drive_letters,
};
pub use split::{split, split_keep, split_to_uint, split_wide, split_wide_keep};
pub use template::{insert_values, insert_values_wide, insert_values_wide_with, insert_values_with};
pub use text::{
    find_and_replace, not_empty, remove_whitespaces, replace, to_lower_case, to_upper_case,
};
pub use timefmt::{loading_dots, loading_dots_with, time_to_string, Clock, SystemClock};
pub use version::{version_to_int, version_to_int_with};
pub use xml::{xml_decode, xml_decode_with, xml_encode};

/// UTF-16 code units, the wide-string carrier used throughout the crate.
///
/// The legacy engine's wide strings travel through a UTF-16 converter, so
/// code units (not code points) are the faithful representation; operations
/// that index "characters" index units.
pub type WideString = Vec<u16>;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
