//! Autocomplete engine for lexitrie
//!
//! This crate contains:
//! - `tokenizer`: lazy word extraction over the fixed lowercase alphabet
//! - `index`: the bounded-depth trie index behind the autocomplete surface
//!
//! The [`AutoCompleteIndex`] trait is the generic add/search contract;
//! [`TrieIndex`] is its trie-backed implementation.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod index;
pub mod tokenizer;

pub use index::{MatchFn, TrieIndex, WordsFn};
pub use tokenizer::{tokenize, tokenize_unique};

use lexitrie_core::Result;
use std::collections::HashSet;

/// Index interface for finding items that contain a word with a given prefix.
pub trait AutoCompleteIndex<E> {
    /// Add an item to the index.
    fn add(&mut self, value: E) -> Result<()>;

    /// Find all items whose tokenization contains a word matching every
    /// word of `prefix`. Absence of matches is the empty set, never an
    /// error; result order is unspecified.
    fn search(&self, prefix: &str) -> Result<HashSet<E>>;
}
