use crate::error::GammaError;
use crate::ranking::{
    dense_rank, first_tie, normalize_pair, same_item_set, to_ordering, to_ranking, TiePolicy,
};

#[test]
fn test_dense_rank_of_permutation_is_identity() {
    assert_eq!(dense_rank(&[3, 1, 2]).unwrap(), vec![3, 1, 2]);
}

#[test]
fn test_dense_rank_of_arbitrary_labels() {
    assert_eq!(dense_rank(&[10.5, -2.0, 7.25]).unwrap(), vec![3, 1, 2]);
    assert_eq!(dense_rank(&["b", "c", "a"]).unwrap(), vec![2, 3, 1]);
}

#[test]
fn test_dense_rank_shares_rank_on_ties() {
    assert_eq!(dense_rank(&[1, 1, 2, 3]).unwrap(), vec![1, 1, 2, 3]);
    assert_eq!(dense_rank(&[5, 9, 5, 9, 7]).unwrap(), vec![1, 3, 1, 3, 2]);
}

#[test]
fn test_dense_rank_rejects_nan() {
    let err = dense_rank(&[1.0, f64::NAN, 2.0]).unwrap_err();
    assert_eq!(err, GammaError::Incomparable { ranking: "ranking", position: 1 });
    assert!(err.is_domain());
}

#[test]
fn test_same_item_set() {
    assert!(same_item_set(&[1, 2, 3], &[3, 1, 2]));
    assert!(same_item_set(&[1, 1, 2, 3], &[1, 2, 2, 3]));
    assert!(!same_item_set(&[1.5, 3.445, 4.3], &[3.0, 4.0, 1.0]));
    assert!(!same_item_set(&[1, 2, 3], &[1, 2, 2]));
}

#[test]
fn test_first_tie() {
    assert_eq!(first_tie(&[1, 2, 3]), None);
    assert_eq!(first_tie(&[2, 1, 3, 1]), Some((1, 3)));
    assert_eq!(first_tie(&[]), None);
    assert_eq!(first_tie(&[1, 2, 2, 1]), Some((1, 2)));
}

#[test]
fn test_first_tie_handles_huge_rank_values() {
    assert_eq!(first_tie(&[usize::MAX, 1, usize::MAX]), Some((0, 2)));
    assert_eq!(first_tie(&[usize::MAX, usize::MAX - 1]), None);
}

#[test]
fn test_normalize_pair_lengths() {
    assert_eq!(
        normalize_pair(&[1, 2, 3], &[1, 2], TiePolicy::default()).unwrap_err(),
        GammaError::LengthMismatch { left: 3, right: 2 }
    );
    assert_eq!(
        normalize_pair(&[1], &[1], TiePolicy::default()).unwrap_err(),
        GammaError::TooShort(1)
    );
    let empty: [i32; 0] = [];
    assert_eq!(
        normalize_pair(&empty, &empty, TiePolicy::default()).unwrap_err(),
        GammaError::TooShort(0)
    );
}

#[test]
fn test_normalize_pair_different_item_sets() {
    let err = normalize_pair(&[1.5, 3.445, 4.3], &[3.0, 4.0, 1.0], TiePolicy::default())
        .unwrap_err();
    assert_eq!(err, GammaError::ItemSetMismatch { left_distinct: 3, right_distinct: 3 });
    assert!(err.is_domain());
    let msg = err.to_string();
    assert!(msg.contains("ranking_a") && msg.contains("ranking_b"), "{msg}");
}

#[test]
fn test_normalize_pair_ties_policy() {
    let (ra, rb) = normalize_pair(&[1, 1, 2, 3], &[1, 2, 2, 3], TiePolicy::ZeroContribution)
        .unwrap();
    assert_eq!(ra, vec![1, 1, 2, 3]);
    assert_eq!(rb, vec![1, 2, 2, 3]);

    let err = normalize_pair(&[1, 1, 2, 3], &[1, 2, 2, 3], TiePolicy::Reject).unwrap_err();
    assert_eq!(err, GammaError::TiedRanks { ranking: "ranking_a", first: 0, second: 1 });

    let err = normalize_pair(&[1, 2, 3, 4], &[1, 2, 2, 4], TiePolicy::Reject).unwrap_err();
    // the item sets differ before any tie is looked at
    assert!(matches!(err, GammaError::ItemSetMismatch { .. }));
}

#[test]
fn test_normalize_pair_reports_nan_side() {
    let err = normalize_pair(&[1.0, 2.0], &[2.0, f64::NAN], TiePolicy::default()).unwrap_err();
    assert_eq!(err, GammaError::Incomparable { ranking: "ranking_b", position: 1 });
}

#[test]
fn test_ranking_ordering_conversions() {
    // items 1..=4, item 3 best, then 1, 4, 2
    let ordering = [3, 1, 4, 2];
    let ranking = to_ranking(&ordering).unwrap();
    assert_eq!(ranking, vec![2, 4, 1, 3]);
    assert_eq!(to_ordering(&ranking).unwrap(), ordering.to_vec());
}

#[test]
fn test_conversions_reject_non_permutations() {
    assert!(matches!(to_ranking(&[1, 2, 2]), Err(GammaError::NotPermutation(_))));
    assert!(matches!(to_ordering(&[0, 1, 2]), Err(GammaError::NotPermutation(_))));
    assert!(matches!(to_ordering(&[1, 2, 4]), Err(GammaError::NotPermutation(_))));
}
