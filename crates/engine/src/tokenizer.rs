//! Word tokenizer for indexing and query text
//!
//! Pipeline: split on non-alphabet characters → drop empty runs. No case
//! folding is performed: only `a..=z` counts as a word character, so
//! uppercase letters act as separators. Indexed text and query text must
//! agree on casing.

use lexitrie_core::alphabet::is_word_char;
use std::collections::HashSet;

/// Tokenize text into words.
///
/// Yields each maximal run of alphabet characters, left to right, lazily.
/// Never yields an empty word. Each call returns a fresh iterator; the
/// input is not mutated.
///
/// # Example
///
/// ```
/// use lexitrie_engine::tokenizer::tokenize;
///
/// let words: Vec<&str> = tokenize("spring-boot-starter-web").collect();
/// assert_eq!(words, vec!["spring", "boot", "starter", "web"]);
/// ```
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|ch: char| !is_word_char(ch))
        .filter(|word| !word.is_empty())
}

/// Tokenize and deduplicate for query processing.
///
/// Preserves first-seen order. Repeated query words would intersect the
/// same candidate set again, so the query path drops them up front.
///
/// # Example
///
/// ```
/// use lexitrie_engine::tokenizer::tokenize_unique;
///
/// let words = tokenize_unique("boot spring boot");
/// assert_eq!(words, vec!["boot", "spring"]);
/// ```
pub fn tokenize_unique(text: &str) -> Vec<&str> {
    let mut seen = HashSet::new();
    tokenize(text).filter(|word| seen.insert(*word)).collect()
}
