//! Error types for the lexitrie index
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::alphabet::{ALPHABET_FIRST, ALPHABET_LAST};
use thiserror::Error;

/// Result type alias for lexitrie operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the lexitrie index
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Index depth not positive (construction-time configuration error)
    #[error("index depth must be at least 1, got {0}")]
    InvalidDepth(usize),

    /// Character outside the indexable alphabet reached the trie.
    ///
    /// Unreachable through the bundled tokenizer; indicates a custom
    /// word-extraction strategy emitted a non-conforming word.
    #[error("character {0:?} outside indexable range {ALPHABET_FIRST:?}..={ALPHABET_LAST:?}")]
    CharOutOfRange(char),
}
