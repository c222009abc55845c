//! Integration tests for BoundedHistory
//!
//! Tests overwrite-oldest semantics and logical indexing.

use dungeon_foundation::{BoundedHistory, ErrorKind};
use proptest::prelude::*;

#[test]
fn history_rejects_zero_capacity() {
    let err = BoundedHistory::<String>::new(0).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidArgument(_)));
}

#[test]
fn history_fills_without_evicting() {
    let mut history = BoundedHistory::new(3).unwrap();
    history.add("a");
    history.add("b");

    assert_eq!(history.len(), 2);
    assert!(!history.is_full());
    assert_eq!(history.get(0), Some(&"a"));
    assert_eq!(history.get(1), Some(&"b"));
    assert_eq!(history.get(2), None);
    assert_eq!(history.last(), Some(&"b"));
}

#[test]
fn history_evicts_the_oldest() {
    let mut history = BoundedHistory::new(3).unwrap();
    for word in ["a", "b", "c", "d", "e"] {
        history.add(word);
    }

    assert!(history.is_full());
    assert_eq!(history.capacity(), 3);
    let words: Vec<&str> = history.iter().copied().collect();
    assert_eq!(words, vec!["c", "d", "e"]);
    assert_eq!(history.get(0), Some(&"c"));
    assert_eq!(history.get(2), Some(&"e"));
}

#[test]
fn history_of_one() {
    let mut history = BoundedHistory::new(1).unwrap();
    history.add(1);
    history.add(2);
    assert_eq!(history.len(), 1);
    assert_eq!(history.get(0), Some(&2));
    assert_eq!(history.last(), Some(&2));
}

#[test]
fn empty_history_has_no_last() {
    let history = BoundedHistory::<u8>::new(4).unwrap();
    assert!(history.is_empty());
    assert_eq!(history.last(), None);
    assert_eq!(history.iter().count(), 0);
}

proptest! {
    #[test]
    fn oldest_and_newest_after_overflow(capacity in 1usize..16, extra in 0usize..32) {
        let mut history = BoundedHistory::new(capacity).unwrap();
        let total = capacity + extra;
        for value in 0..total {
            history.add(value);
        }
        prop_assert_eq!(history.len(), capacity);
        prop_assert_eq!(history.get(0), Some(&extra));
        prop_assert_eq!(history.get(capacity - 1), Some(&(total - 1)));
        prop_assert_eq!(history.get(capacity), None);
    }

    #[test]
    fn iteration_matches_indexing(capacity in 1usize..8, values in prop::collection::vec(any::<u16>(), 0..40)) {
        let mut history = BoundedHistory::new(capacity).unwrap();
        for value in &values {
            history.add(*value);
        }
        let by_index: Vec<u16> = (0..history.len()).filter_map(|i| history.get(i).copied()).collect();
        let by_iter: Vec<u16> = history.iter().copied().collect();
        let start = values.len().saturating_sub(capacity);
        prop_assert_eq!(&by_index, &by_iter);
        prop_assert_eq!(by_iter, values[start..].to_vec());
    }
}
