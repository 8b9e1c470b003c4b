//! Set combinators for composing per-word candidate sets
//!
//! Multi-word queries AND their per-word matches together with
//! [`intersect_all`]; subtree scans OR their leaf buckets together with
//! [`merge_all`]. Both are single-pass left-to-right folds and assume no
//! random access over their input.

use std::collections::HashSet;
use std::hash::Hash;

/// Intersection of every set in the sequence.
///
/// Folds from the first element; an empty input yields the empty set
/// (there are no words to match against, so nothing universally matches).
pub fn intersect_all<E, I>(sets: I) -> HashSet<E>
where
    E: Eq + Hash,
    I: IntoIterator<Item = HashSet<E>>,
{
    let mut sets = sets.into_iter();
    let first = match sets.next() {
        Some(set) => set,
        None => return HashSet::new(),
    };
    sets.fold(first, |mut acc, set| {
        acc.retain(|value| set.contains(value));
        acc
    })
}

/// Union of every set in the sequence, starting from the empty set.
pub fn merge_all<E, I>(sets: I) -> HashSet<E>
where
    E: Eq + Hash,
    I: IntoIterator<Item = HashSet<E>>,
{
    sets.into_iter().fold(HashSet::new(), |mut acc, set| {
        acc.extend(set);
        acc
    })
}
