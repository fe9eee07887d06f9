#![cfg(feature = "circular")]
//! Property-based tests for circular buffer FIFO behaviour.
//!
//! A `VecDeque` bounded to the same capacity serves as the model.

use std::collections::VecDeque;

use proptest::prelude::*;
use sortring::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    Push(u8),
    Pop,
    Clear,
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        4 => any::<u8>().prop_map(Operation::Push),
        3 => Just(Operation::Pop),
        1 => Just(Operation::Clear),
    ]
}

proptest! {
    #[test]
    fn prop_matches_bounded_queue_model(
        capacity in 0..8usize,
        operations in prop::collection::vec(operation_strategy(), 0..128)
    ) {
        let mut buffer = CircularBuffer::new(capacity);
        let mut model = VecDeque::new();

        for operation in operations {
            match operation {
                Operation::Push(value) => {
                    let accepted = buffer.push(value).is_ok();
                    prop_assert_eq!(accepted, model.len() < capacity);
                    if accepted {
                        model.push_back(value);
                    }
                }
                Operation::Pop => {
                    prop_assert_eq!(buffer.poll(), model.pop_front());
                }
                Operation::Clear => {
                    buffer.clear();
                    model.clear();
                }
            }
            prop_assert_eq!(buffer.len(), model.len());
            prop_assert!(capacity == 0 || buffer.head() < capacity);
            prop_assert!(capacity == 0 || buffer.tail() < capacity);
            prop_assert!(buffer.iter().eq(model.iter()));
        }
    }

    #[test]
    fn prop_peek_ahead_matches_element(
        values in prop::collection::vec(any::<i32>(), 0..16),
        index in 0..20usize
    ) {
        let mut buffer = CircularBuffer::new(16);
        for value in &values {
            buffer.push(*value).unwrap();
        }
        prop_assert_eq!(buffer.peek_ahead(index), buffer.element(index).ok());
        prop_assert_eq!(buffer.peek_ahead(index), values.get(index));
    }
}
