// Unit tests for the positional identifier comparison

use crate::compare::{Comparison, compare};

use models::Identifier;

fn ids(values: &[&str]) -> Vec<Identifier> {
    values.iter().copied().map(Identifier::from).collect()
}

/// **VALUE**: Same identifiers in a different order are consistent.
///
/// **WHY THIS MATTERS**: The portal does not promise the same ordering for
/// `/search/` and `/cart-search/`.
#[test]
fn given_same_identifiers_in_different_order_when_compared_then_consistent() {
    let result = compare(&ids(&["/a", "/b"]), &ids(&["/b", "/a"]));

    assert_eq!(result, Comparison::Positional(vec![]));
    assert!(result.is_consistent());
}

/// **VALUE**: Different lengths short-circuit to SizeMismatch.
#[test]
fn given_different_lengths_when_compared_then_size_mismatch() {
    let result = compare(&ids(&["/a"]), &ids(&["/a", "/b"]));

    assert_eq!(result, Comparison::SizeMismatch { left: 1, right: 2 });
    assert!(!result.is_consistent());
}

/// **VALUE**: A differing identifier at the same sorted position is reported
/// from the left-hand side only.
#[test]
fn given_true_mismatch_when_compared_then_reports_left_value() {
    let result = compare(&ids(&["/a", "/c"]), &ids(&["/a", "/b"]));

    assert_eq!(result, Comparison::Positional(ids(&["/c"])));
}

/// **VALUE**: Documents that duplicates make the check diverge from a set
/// difference.
///
/// **WHY THIS MATTERS**: As sets both sides are `{/a, /b}`, yet the positional
/// walk reports `/a`. This test pins the current behaviour so a change to a true
/// symmetric difference is a deliberate decision.
#[test]
fn given_duplicates_when_compared_then_positional_result_differs_from_set_difference() {
    let result = compare(&ids(&["/a", "/a", "/b"]), &ids(&["/a", "/b", "/b"]));

    assert_eq!(result, Comparison::Positional(ids(&["/a"])));
}

/// **VALUE**: A shifted sort order reports every left value after the gap.
#[test]
fn given_shifted_sort_order_when_compared_then_reports_all_shifted_positions() {
    let result = compare(&ids(&["/b", "/c", "/d"]), &ids(&["/a", "/b", "/c"]));

    assert_eq!(result, Comparison::Positional(ids(&["/b", "/c", "/d"])));
}

#[test]
fn given_two_empty_sets_when_compared_then_consistent() {
    assert!(compare(&[], &[]).is_consistent());
}
