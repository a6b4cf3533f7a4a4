//! Identifier set comparison.
//!
//! The check is positional: both sides are sorted and compared index by index.
//! With duplicate identifiers this is not a set difference. `["/a", "/a", "/b"]`
//! against `["/a", "/b", "/b"]` reports `/a` although both hold the same set, and
//! only left-hand values are ever reported.

use models::Identifier;

/// Result of comparing search results with cart-search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comparison {
    /// Lengths differ; no positional walk is done.
    SizeMismatch { left: usize, right: usize },

    /// Left-hand identifiers whose sorted position holds something else on the
    /// right. Empty means consistent.
    Positional(Vec<Identifier>),
}

impl Comparison {
    pub fn is_consistent(&self) -> bool {
        matches!(self, Comparison::Positional(differing) if differing.is_empty())
    }
}

pub fn compare(left: &[Identifier], right: &[Identifier]) -> Comparison {
    if left.len() != right.len() {
        return Comparison::SizeMismatch {
            left: left.len(),
            right: right.len(),
        };
    }

    let mut left_sorted = left.to_vec();
    let mut right_sorted = right.to_vec();
    left_sorted.sort();
    right_sorted.sort();

    let differing = left_sorted
        .into_iter()
        .zip(right_sorted.iter())
        .filter(|(l, r)| l != *r)
        .map(|(l, _)| l)
        .collect();

    Comparison::Positional(differing)
}
