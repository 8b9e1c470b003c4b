//! Bounded-depth trie index
//!
//! This module provides:
//! - TrieIndex with injected word-extraction and match strategies
//! - Insertion-path construction over the 27-symbol alphabet
//! - Prefix-walk search with leaf-bucket fallback/union semantics
//!
//! Each edge in the tree consumes one character of a word. The first
//! `depth` levels are branch nodes; one level further down every path ends
//! in a leaf holding the bucket of values indexed under that path. Short
//! words pad the remaining levels with the terminator symbol.
//!
//! # Concurrency
//!
//! No internal synchronization: `add` mutates shared tree state and must
//! not run concurrently with itself or with `search`. Once loading is
//! finished a shared reference can be handed to any number of reader
//! threads.

use crate::tokenizer::{tokenize, tokenize_unique};
use crate::AutoCompleteIndex;
use lexitrie_core::alphabet::{self, FANOUT, TERMINATOR};
use lexitrie_core::error::{Error, Result};
use lexitrie_core::sets::{intersect_all, merge_all};
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

/// Word-extraction strategy: derives the index words for a value.
pub type WordsFn<E> = Box<dyn Fn(&E) -> Vec<String> + Send + Sync>;

/// Match strategy: re-validates a candidate value against a query word
/// whenever a search bottoms out on a leaf.
pub type MatchFn<E> = Box<dyn Fn(&str, &E) -> bool + Send + Sync>;

// ============================================================================
// Nodes
// ============================================================================

/// Trie node: either an internal branch or a terminal value bucket.
///
/// Every consumption site matches both variants exhaustively. A leaf never
/// has children; every path has exactly `depth` branch levels above its
/// leaf.
enum Node<E> {
    Branch(Branch<E>),
    Leaf(Leaf<E>),
}

/// Internal node: one optional child per alphabet symbol.
struct Branch<E> {
    children: [Option<Box<Node<E>>>; FANOUT],
}

/// Terminal node: deduplicated bucket of indexed values.
struct Leaf<E> {
    values: HashSet<E>,
}

impl<E> Branch<E> {
    fn new() -> Self {
        Branch {
            children: std::array::from_fn(|_| None),
        }
    }

    fn child(&self, offset: usize) -> Option<&Node<E>> {
        self.children[offset].as_deref()
    }

    /// Child branch at `offset`, created on first use.
    fn branch_child(&mut self, offset: usize) -> &mut Branch<E> {
        let node = self.children[offset]
            .get_or_insert_with(|| Box::new(Node::Branch(Branch::new())));
        match node.as_mut() {
            Node::Branch(branch) => branch,
            Node::Leaf(_) => unreachable!("leaf node above full index depth"),
        }
    }

    /// Child leaf at `offset`, created on first use.
    fn leaf_child(&mut self, offset: usize) -> &mut Leaf<E> {
        let node = self.children[offset]
            .get_or_insert_with(|| Box::new(Node::Leaf(Leaf::new())));
        match node.as_mut() {
            Node::Leaf(leaf) => leaf,
            Node::Branch(_) => unreachable!("branch node at leaf depth"),
        }
    }
}

impl<E: Clone + Eq + Hash> Branch<E> {
    /// Every value reachable in every leaf beneath this node.
    fn values(&self) -> HashSet<E> {
        merge_all(self.children.iter().flatten().map(|child| child.values()))
    }
}

impl<E> Leaf<E> {
    fn new() -> Self {
        Leaf {
            values: HashSet::new(),
        }
    }
}

impl<E: Clone + Eq + Hash> Node<E> {
    fn values(&self) -> HashSet<E> {
        match self {
            Node::Branch(branch) => branch.values(),
            Node::Leaf(leaf) => leaf.values.clone(),
        }
    }
}

// ============================================================================
// TrieIndex
// ============================================================================

/// Trie index of bounded depth.
///
/// Values are tokenized into words by the injected word-extraction
/// strategy; each word is indexed along a path of `depth` branch levels
/// plus a leaf, so the trie disambiguates a word's first `depth + 1`
/// characters. Queries walk the same paths: a word that bottoms out on a
/// leaf takes the bucket filtered by the match strategy, a word exhausted
/// at a branch takes the union of the subtree beneath it, and multi-word
/// queries intersect their per-word matches.
///
/// Nodes are created lazily on first use by an insertion path and never
/// destroyed; there is no removal.
pub struct TrieIndex<E> {
    /// Branch levels below the root on every path (immutable)
    depth: usize,
    /// Root branch, created at construction
    root: Branch<E>,
    /// Word-extraction strategy
    words: WordsFn<E>,
    /// Leaf re-validation strategy
    matcher: MatchFn<E>,
}

impl<E: Clone + Eq + Hash> TrieIndex<E> {
    /// Create an index with injected strategies.
    ///
    /// `depth` is fixed for the lifetime of the index; zero is a
    /// configuration error.
    pub fn new<W, M>(depth: usize, words: W, matcher: M) -> Result<Self>
    where
        W: Fn(&E) -> Vec<String> + Send + Sync + 'static,
        M: Fn(&str, &E) -> bool + Send + Sync + 'static,
    {
        if depth == 0 {
            return Err(Error::InvalidDepth(depth));
        }
        Ok(TrieIndex {
            depth,
            root: Branch::new(),
            words: Box::new(words),
            matcher: Box::new(matcher),
        })
    }

    /// Number of branch levels below the root.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Index one word for a value: walk/extend `depth` branch levels, then
    /// add the value to the leaf bucket one level further down. Short words
    /// pad with the terminator symbol.
    fn put_word(&mut self, word: &str, value: E) -> Result<()> {
        let depth = self.depth;
        let mut node = &mut self.root;
        for level in 0..depth {
            let offset = alphabet::offset_at(word, level)?;
            node = node.branch_child(offset);
        }
        let offset = alphabet::offset_at(word, depth)?;
        node.leaf_child(offset).values.insert(value);
        Ok(())
    }

    /// Candidate set for a single query word.
    ///
    /// The walk is bounded by the word's own length, not by `depth`: a
    /// missing child means no match, bottoming out on a leaf means the
    /// bucket filtered by the match strategy (distinct longer words can
    /// collide on one leaf), and running out of characters at a branch
    /// means the union of every leaf beneath it.
    fn word_matches(&self, word: &str) -> Result<HashSet<E>> {
        let mut node = &self.root;
        for ch in word.chars() {
            let offset = alphabet::symbol(ch)?;
            match node.child(offset) {
                None => return Ok(HashSet::new()),
                Some(Node::Branch(branch)) => node = branch,
                Some(Node::Leaf(leaf)) => {
                    let matches = leaf
                        .values
                        .iter()
                        .filter(|value| (self.matcher)(word, value))
                        .cloned()
                        .collect();
                    return Ok(matches);
                }
            }
        }
        Ok(node.values())
    }
}

impl TrieIndex<String> {
    /// String index with the default strategies: words come from
    /// tokenizing the value itself, and leaf candidates are re-validated
    /// by substring containment.
    pub fn strings(depth: usize) -> Result<Self> {
        TrieIndex::new(
            depth,
            |value: &String| tokenize(value).map(str::to_owned).collect(),
            |word, value| value.contains(word),
        )
    }
}

impl<E: Clone + Eq + Hash> AutoCompleteIndex<E> for TrieIndex<E> {
    fn add(&mut self, value: E) -> Result<()> {
        let words = (self.words)(&value);
        tracing::trace!(
            target: "lexitrie::index",
            words = words.len(),
            "indexing value"
        );
        for word in &words {
            self.put_word(word, value.clone())?;
        }
        Ok(())
    }

    fn search(&self, prefix: &str) -> Result<HashSet<E>> {
        let query = tokenize_unique(prefix);
        let mut candidates = Vec::with_capacity(query.len());
        for word in &query {
            candidates.push(self.word_matches(word)?);
        }
        let matches = intersect_all(candidates);
        tracing::debug!(
            target: "lexitrie::index",
            words = query.len(),
            matches = matches.len(),
            "prefix search"
        );
        Ok(matches)
    }
}

// ============================================================================
// Diagnostics
// ============================================================================

impl<E: fmt::Debug> fmt::Debug for TrieIndex<E> {
    /// Indented tree dump: one line per occupied child slot, `_` for the
    /// terminator, leaf lines ending with the bucket. Bucket order is
    /// unspecified.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.dump(f, 0)
    }
}

impl<E: fmt::Debug> Branch<E> {
    fn dump(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        for (offset, slot) in self.children.iter().enumerate() {
            let Some(child) = slot else { continue };
            let label = if offset == TERMINATOR {
                '_'
            } else {
                (b'a' + offset as u8) as char
            };
            write!(f, "{:indent$}{label}:", "")?;
            match child.as_ref() {
                Node::Branch(branch) => {
                    writeln!(f)?;
                    branch.dump(f, indent + 2)?;
                }
                Node::Leaf(leaf) => writeln!(f, " {:?}", leaf.values)?,
            }
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
