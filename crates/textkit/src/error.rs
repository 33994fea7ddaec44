//! Error types for textkit.

use thiserror::Error;

/// Error converting wide (UTF-16) text to UTF-8.
///
/// The conversion uses a conformant UTF-16 decoder, so an unpaired
/// surrogate is the only way it can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WideStringError {
    #[error("invalid UTF-16: unpaired surrogate at code unit {position}")]
    UnpairedSurrogate { position: usize },
}
