//! Lexitrie - embedded autocomplete index over a bounded-depth trie
//!
//! Lexitrie tokenizes each added value into lowercase words and indexes the
//! leading characters of every word in a trie of fixed depth. A prefix query
//! returns every value whose tokenization contains a word matching the
//! query; multi-word queries intersect their per-word matches.
//!
//! # Quick Start
//!
//! ```
//! use lexitrie::{AutoCompleteIndex, TrieIndex};
//!
//! let mut index = TrieIndex::strings(3)?;
//! index.add("org.hibernate:hibernate-core:6.1.3.Final".to_string())?;
//! index.add("org.postgresql:postgresql:42.5.1".to_string())?;
//!
//! let matches = index.search("hib")?;
//! assert_eq!(matches.len(), 1);
//! # Ok::<(), lexitrie::Error>(())
//! ```
//!
//! # Architecture
//!
//! The algorithms live in `lexitrie-engine` (tokenizer + trie index); the
//! foundations (alphabet, errors, set combinators) live in `lexitrie-core`.
//! This crate re-exports the public surface.
//!
//! The index is single-threaded while loading; once no further `add` calls
//! will occur, a shared reference can serve any number of concurrent
//! `search` calls.

pub use lexitrie_core::{Error, Result};
pub use lexitrie_engine::{tokenize, tokenize_unique, AutoCompleteIndex, TrieIndex};
