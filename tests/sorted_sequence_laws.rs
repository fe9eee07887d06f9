#![cfg(feature = "ordered")]
//! Property-based tests for the sorted list invariants.
//!
//! 1. **Order**: every adjacent pair is in layout order after any adds
//! 2. **Set uniqueness**: adding an element twice equals adding it once
//! 3. **Position**: `get(position_of(x)) == x` whenever `x` is present
//! 4. **Reverse**: `clone_reverse` holds the same elements back-to-front
//! 5. **Capacity**: `len <= capacity` after every mutation
//! 6. **Range**: for `from <= to <= len`, `clone_range` holds exactly
//!    `from..to` and `clone_reverse_range` holds it back-to-front

use proptest::prelude::*;
use sortring::prelude::*;

fn order_strategy() -> impl Strategy<Value = SortOrder> {
    prop_oneof![Just(SortOrder::Ascending), Just(SortOrder::Descending)]
}

fn in_layout(order: SortOrder, left: i32, right: i32) -> bool {
    if order.is_ascending() { left <= right } else { left >= right }
}

proptest! {
    #[test]
    fn prop_sequence_stays_sorted(
        values in prop::collection::vec(any::<i32>(), 0..64),
        order in order_strategy()
    ) {
        let mut sequence = SortedSequence::with_order(order);
        for value in &values {
            sequence.add(*value);
            prop_assert!(sequence.len() <= sequence.capacity());
        }
        prop_assert_eq!(sequence.len(), values.len());
        prop_assert!(sequence.as_slice().windows(2).all(|pair| in_layout(order, pair[0], pair[1])));
    }

    #[test]
    fn prop_set_add_is_idempotent(values in prop::collection::vec(0..32i32, 0..64)) {
        let mut once = SortedSet::new();
        once.add_all(values.iter().copied());
        let mut twice = once.clone();
        for value in &values {
            prop_assert!(!twice.add(*value));
        }
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.as_slice().windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn prop_position_of_finds_present_element(
        values in prop::collection::vec(any::<i16>(), 1..64),
        pick in any::<prop::sample::Index>(),
        order in order_strategy()
    ) {
        let mut sequence = SortedSequence::with_order(order);
        sequence.add_all(values.iter().copied());
        let target = values[pick.index(values.len())];
        prop_assert_eq!(sequence.get(sequence.position_of(&target)), Some(&target));
    }

    #[test]
    fn prop_clone_reverse_mirrors(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let sequence: SortedSequence<i32> = values.into_iter().collect();
        let reversed = sequence.clone_reverse();
        let mut expected = sequence.as_slice().to_vec();
        expected.reverse();
        prop_assert_eq!(reversed.as_slice(), expected.as_slice());
        prop_assert_eq!(reversed.order(), sequence.order().reverse());
    }

    #[test]
    fn prop_clone_range_matches_window(
        values in prop::collection::vec(any::<i32>(), 0..64),
        first in any::<prop::sample::Index>(),
        second in any::<prop::sample::Index>(),
        order in order_strategy()
    ) {
        let mut sequence = SortedSequence::with_order(order);
        sequence.add_all(values);
        let len = sequence.len();
        let (left, right) = (first.index(len + 1), second.index(len + 1));
        let (from, to) = (left.min(right), left.max(right));
        let window = &sequence.as_slice()[from..to];

        let range = sequence.clone_range(from, to).unwrap();
        prop_assert_eq!(range.as_slice(), window);
        prop_assert_eq!(range.order(), order);

        let reversed = sequence.clone_reverse_range(from, to).unwrap();
        let expected: Vec<i32> = window.iter().rev().copied().collect();
        prop_assert_eq!(reversed.as_slice(), expected.as_slice());
        prop_assert_eq!(reversed.order(), order.reverse());
        prop_assert!(reversed.as_slice().windows(2).all(|pair| in_layout(order.reverse(), pair[0], pair[1])));
    }

    #[test]
    fn prop_clone_range_rejects_inverted_window(
        values in prop::collection::vec(any::<i32>(), 0..64),
        from in 1..80usize,
        shortfall in 1..80usize
    ) {
        let sequence: SortedSequence<i32> = values.into_iter().collect();
        let to = from.saturating_sub(shortfall);
        let len = sequence.len();
        prop_assert_eq!(
            sequence.clone_range(from, to),
            Err(CollectionError::InvalidRange { from, to, len })
        );
        prop_assert_eq!(
            sequence.clone_reverse_range(from, to),
            Err(CollectionError::InvalidRange { from, to, len })
        );
    }

    #[test]
    fn prop_remove_at_keeps_order(
        values in prop::collection::vec(any::<i32>(), 1..64),
        pick in any::<prop::sample::Index>()
    ) {
        let mut sequence: SortedSequence<i32> = values.into_iter().collect();
        let index = pick.index(sequence.len());
        let expected = sequence[index];
        prop_assert_eq!(sequence.remove_at(index), Ok(expected));
        prop_assert!(sequence.as_slice().windows(2).all(|pair| pair[0] <= pair[1]));
    }
}
