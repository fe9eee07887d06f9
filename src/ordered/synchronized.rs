//! Mutex-guarded sorted sequence.
//!
//! Every method locks the inner [`SortedSequence`] for the duration of that
//! one call. Nothing spans two calls: a caller doing `contains` followed by
//! `add` must hold [`SynchronizedSortedSequence::lock`] across both.

use parking_lot::{Mutex, MutexGuard};

use super::{Growth, SortedSequence};
use crate::comparator::{Comparator, NaturalOrder, SortOrder};
use crate::error::Result;

/// A [`SortedSequence`] shared between threads, growing by a fixed increment.
///
/// Reads return clones because no reference may outlive the lock.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use std::thread;
/// use sortring::ordered::SynchronizedSortedSequence;
///
/// let shared = Arc::new(SynchronizedSortedSequence::new());
/// let handles: Vec<_> = (0..4)
///     .map(|worker| {
///         let shared = Arc::clone(&shared);
///         thread::spawn(move || {
///             for value in 0..25 {
///                 shared.add(worker * 100 + value);
///             }
///         })
///     })
///     .collect();
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// assert_eq!(shared.len(), 100);
/// assert_eq!(shared.smallest(), Ok(0));
/// assert_eq!(shared.largest(), Ok(324));
/// ```
pub struct SynchronizedSortedSequence<T, C = NaturalOrder> {
    inner: Mutex<SortedSequence<T, C>>,
}

impl<T: Ord> SynchronizedSortedSequence<T> {
    /// Creates an empty ascending sequence growing by
    /// [`Growth::DEFAULT_INCREMENT`] slots at a time.
    #[must_use]
    pub fn new() -> Self {
        Self::with_order(SortOrder::Ascending)
    }

    /// Creates an empty sequence of the given order.
    #[must_use]
    pub fn with_order(order: SortOrder) -> Self {
        Self::with_comparator(NaturalOrder, order)
    }

    /// Creates an empty sequence growing by `increment` slots at a time.
    #[must_use]
    pub fn with_capacity_increment(increment: usize, order: SortOrder) -> Self {
        Self::from_sequence(
            SortedSequence::with_order(order).with_growth(Growth::Additive { increment }),
        )
    }
}

impl<T, C> SynchronizedSortedSequence<T, C> {
    /// Creates an empty sequence ordered by `comparator`.
    #[must_use]
    pub fn with_comparator(comparator: C, order: SortOrder) -> Self {
        Self::from_sequence(SortedSequence::with_comparator(comparator, order).with_growth(
            Growth::Additive {
                increment: Growth::DEFAULT_INCREMENT,
            },
        ))
    }

    /// Wraps an existing sequence, keeping its elements and growth policy.
    #[must_use]
    pub fn from_sequence(sequence: SortedSequence<T, C>) -> Self {
        Self {
            inner: Mutex::new(sequence),
        }
    }

    /// Consumes the wrapper, returning the inner sequence.
    pub fn into_inner(self) -> SortedSequence<T, C> {
        self.inner.into_inner()
    }

    /// Locks the sequence until the returned guard is dropped.
    ///
    /// Use this for check-then-act sequences that must not interleave with
    /// other callers.
    pub fn lock(&self) -> MutexGuard<'_, SortedSequence<T, C>> {
        self.inner.lock()
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if the sequence holds no elements.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Returns the current revision.
    pub fn revision(&self) -> u64 {
        self.inner.lock().revision()
    }

    /// Returns a clone of the element at `index`.
    pub fn get(&self, index: usize) -> Option<T>
    where
        T: Clone,
    {
        self.inner.lock().get(index).cloned()
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`](crate::error::CollectionError::IndexOutOfRange)
    /// if `index >= len`.
    pub fn remove_at(&self, index: usize) -> Result<T> {
        self.inner.lock().remove_at(index)
    }

    /// Removes every element.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Returns a snapshot of the elements in layout order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner.lock().as_slice().to_vec()
    }

    /// Returns an independent sequence holding a copy of `from..to`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidRange`](crate::error::CollectionError::InvalidRange)
    /// unless `from <= to <= len`.
    pub fn clone_range(&self, from: usize, to: usize) -> Result<SortedSequence<T, C>>
    where
        T: Clone,
        C: Clone,
    {
        self.inner.lock().clone_range(from, to)
    }

    /// Returns an independent sequence of the opposite order holding every element.
    pub fn clone_reverse(&self) -> SortedSequence<T, C>
    where
        T: Clone,
        C: Clone,
    {
        self.inner.lock().clone_reverse()
    }

    /// Returns an independent sequence of the opposite order holding `from..to`
    /// read back-to-front.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidRange`](crate::error::CollectionError::InvalidRange)
    /// unless `from <= to <= len`.
    pub fn clone_reverse_range(&self, from: usize, to: usize) -> Result<SortedSequence<T, C>>
    where
        T: Clone,
        C: Clone,
    {
        self.inner.lock().clone_reverse_range(from, to)
    }
}

impl<T, C: Comparator<T>> SynchronizedSortedSequence<T, C> {
    /// Inserts `element` at its sorted position. Always returns `true`.
    pub fn add(&self, element: T) -> bool {
        self.inner.lock().add(element)
    }

    /// Adds every element of `elements` under a single lock.
    pub fn add_all<I: IntoIterator<Item = T>>(&self, elements: I) -> bool {
        self.inner.lock().add_all(elements)
    }

    /// Returns the index of a comparator-equal element or the insertion index.
    pub fn position_of(&self, element: &T) -> usize {
        self.inner.lock().position_of(element)
    }

    /// Returns the index of the first element equal to `element`.
    pub fn index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.inner.lock().index_of(element)
    }

    /// Returns `true` if an element equal to `element` is present.
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.inner.lock().contains(element)
    }

    /// Removes the first element equal to `element`.
    pub fn remove(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.inner.lock().remove(element)
    }

    /// Returns a clone of the smallest element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`](crate::error::CollectionError::Empty)
    /// if the sequence is empty.
    pub fn smallest(&self) -> Result<T>
    where
        T: Clone,
    {
        self.inner.lock().smallest().cloned()
    }

    /// Returns a clone of the largest element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`](crate::error::CollectionError::Empty)
    /// if the sequence is empty.
    pub fn largest(&self) -> Result<T>
    where
        T: Clone,
    {
        self.inner.lock().largest().cloned()
    }
}

impl<T: Ord> Default for SynchronizedSortedSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> From<SortedSequence<T, C>> for SynchronizedSortedSequence<T, C> {
    fn from(sequence: SortedSequence<T, C>) -> Self {
        Self::from_sequence(sequence)
    }
}

impl<T: std::fmt::Debug, C> std::fmt::Debug for SynchronizedSortedSequence<T, C> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("SynchronizedSortedSequence")
            .field("inner", &*self.inner.lock())
            .finish()
    }
}

static_assertions::assert_impl_all!(SynchronizedSortedSequence<i32>: Send, Sync);
static_assertions::assert_impl_all!(SynchronizedSortedSequence<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CollectionError;
    use rstest::rstest;
    use std::sync::Arc;
    use std::thread;

    #[rstest]
    fn test_default_growth_is_additive_by_two() {
        let sequence: SynchronizedSortedSequence<i32> = SynchronizedSortedSequence::new();
        assert_eq!(
            sequence.lock().growth(),
            Growth::Additive {
                increment: Growth::DEFAULT_INCREMENT
            }
        );
    }

    #[rstest]
    fn test_custom_increment() {
        let sequence: SynchronizedSortedSequence<i32> =
            SynchronizedSortedSequence::with_capacity_increment(8, SortOrder::Descending);
        assert_eq!(sequence.lock().growth(), Growth::Additive { increment: 8 });
        sequence.add(1);
        sequence.add(3);
        assert_eq!(sequence.to_vec(), vec![3, 1]);
    }

    #[rstest]
    fn test_single_call_operations() {
        let sequence = SynchronizedSortedSequence::new();
        assert!(sequence.add(4));
        assert!(sequence.add(2));
        assert_eq!(sequence.get(0), Some(2));
        assert_eq!(sequence.index_of(&4), Some(1));
        assert!(sequence.contains(&2));
        assert_eq!(sequence.position_of(&3), 1);
        assert_eq!(sequence.remove_at(0), Ok(2));
        assert!(sequence.remove(&4));
        assert!(sequence.is_empty());
        assert_eq!(sequence.smallest(), Err(CollectionError::Empty));
    }

    #[rstest]
    fn test_clear_bumps_revision() {
        let sequence = SynchronizedSortedSequence::new();
        sequence.add(1);
        let revision = sequence.revision();
        sequence.clear();
        assert!(sequence.revision() > revision);
        assert_eq!(sequence.len(), 0);
    }

    #[rstest]
    fn test_guard_gives_multi_call_atomicity() {
        let sequence = SynchronizedSortedSequence::new();
        {
            let mut guard = sequence.lock();
            if !guard.contains(&1) {
                guard.add(1);
            }
        }
        assert_eq!(sequence.to_vec(), vec![1]);
    }

    #[rstest]
    fn test_concurrent_adds_keep_order() {
        let shared = Arc::new(SynchronizedSortedSequence::new());
        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    for value in 0..50 {
                        shared.add((value * 8 + worker) % 97);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let snapshot = shared.to_vec();
        assert_eq!(snapshot.len(), 400);
        assert!(snapshot.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(shared.revision(), 400);
    }

    #[rstest]
    fn test_clones_are_detached() {
        let sequence = SynchronizedSortedSequence::new();
        sequence.add_all([1, 2, 3]);
        let reversed = sequence.clone_reverse();
        sequence.clear();
        assert_eq!(reversed.as_slice(), &[3, 2, 1]);
    }
}
