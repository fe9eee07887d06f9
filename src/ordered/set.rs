//! Duplicate-free sorted sequence.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Index;

use super::{SortedList, SortedSequence};
use crate::comparator::{Comparator, NaturalOrder, SortOrder};
use crate::error::Result;

/// A [`SortedSequence`] that never holds two comparator-equal elements.
///
/// Growth and positioning are those of the underlying sequence; [`add`]
/// short-circuits when the insertion point already holds an equal element.
///
/// [`add`]: SortedSet::add
///
/// # Examples
///
/// ```rust
/// use sortring::ordered::SortedSet;
///
/// let mut set = SortedSet::new();
/// assert!(set.add(3));
/// assert!(!set.add(3));
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Clone)]
pub struct SortedSet<T, C = NaturalOrder> {
    inner: SortedSequence<T, C>,
}

impl<T: Ord> SortedSet<T> {
    /// Creates an empty ascending set using the natural order of `T`.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::with_order(SortOrder::Ascending)
    }

    /// Creates an empty set of the given order using the natural order of `T`.
    #[inline]
    #[must_use]
    pub const fn with_order(order: SortOrder) -> Self {
        Self {
            inner: SortedSequence::with_order(order),
        }
    }

    /// Creates an empty set with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize, order: SortOrder) -> Self {
        Self {
            inner: SortedSequence::with_capacity(capacity, order),
        }
    }
}

impl<T, C> SortedSet<T, C> {
    /// Creates an empty set ordered by `comparator`.
    #[inline]
    #[must_use]
    pub const fn with_comparator(comparator: C, order: SortOrder) -> Self {
        Self {
            inner: SortedSequence::with_comparator(comparator, order),
        }
    }

    /// Creates an empty set ordered by `comparator` with room for `capacity`
    /// elements.
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C, order: SortOrder) -> Self {
        Self {
            inner: SortedSequence::with_capacity_and_comparator(capacity, comparator, order),
        }
    }

    /// Returns the underlying sequence.
    #[inline]
    pub const fn as_sequence(&self) -> &SortedSequence<T, C> {
        &self.inner
    }

    /// Consumes the set, returning the underlying sequence.
    #[inline]
    pub fn into_sequence(self) -> SortedSequence<T, C> {
        self.inner
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of elements the backing store can hold without growing.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns the current revision.
    #[inline]
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.inner.revision()
    }

    /// Returns the layout direction.
    #[inline]
    #[must_use]
    pub const fn order(&self) -> SortOrder {
        self.inner.order()
    }

    /// Returns `true` if the smallest element comes first.
    #[inline]
    #[must_use]
    pub const fn is_ascending(&self) -> bool {
        self.inner.is_ascending()
    }

    /// Returns the elements in layout order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }

    /// Returns an iterator over the elements in layout order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.inner.iter()
    }

    /// Returns the element at `index`, or `None` if out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.inner.get(index)
    }

    /// Consumes the set, returning its elements in layout order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.inner.into_vec()
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`](crate::error::CollectionError::IndexOutOfRange)
    /// if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        self.inner.remove_at(index)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Returns an independent set holding a copy of `from..to`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidRange`](crate::error::CollectionError::InvalidRange)
    /// unless `from <= to <= len`.
    pub fn clone_range(&self, from: usize, to: usize) -> Result<Self>
    where
        T: Clone,
        C: Clone,
    {
        self.inner
            .clone_range(from, to)
            .map(|inner| Self { inner })
    }

    /// Returns an independent set of the opposite order holding every element.
    #[must_use]
    pub fn clone_reverse(&self) -> Self
    where
        T: Clone,
        C: Clone,
    {
        Self {
            inner: self.inner.clone_reverse(),
        }
    }

    /// Returns an independent set of the opposite order holding `from..to`
    /// read back-to-front.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidRange`](crate::error::CollectionError::InvalidRange)
    /// unless `from <= to <= len`.
    pub fn clone_reverse_range(&self, from: usize, to: usize) -> Result<Self>
    where
        T: Clone,
        C: Clone,
    {
        self.inner
            .clone_reverse_range(from, to)
            .map(|inner| Self { inner })
    }
}

impl<T, C: Comparator<T>> SortedSet<T, C> {
    /// Builds a set from `elements`, keeping the first of any comparator-equal
    /// group.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortring::comparator::SortOrder;
    /// use sortring::ordered::SortedSet;
    ///
    /// let by_length = |left: &&str, right: &&str| left.len().cmp(&right.len());
    /// let set = SortedSet::from_iter_with(["ox", "cat", "ax", "horse"], by_length, SortOrder::Ascending);
    /// assert_eq!(set.as_slice(), &["ox", "cat", "horse"]);
    /// ```
    pub fn from_iter_with<I>(elements: I, comparator: C, order: SortOrder) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = Self::with_comparator(comparator, order);
        set.add_all(elements);
        set
    }

    /// Returns the index of the equal element if present, otherwise the
    /// insertion index that keeps the order.
    #[must_use]
    pub fn position_of(&self, element: &T) -> usize {
        self.inner.position_of(element)
    }

    /// Inserts `element` unless a comparator-equal element is already present.
    ///
    /// Returns `false` and leaves the set (including its revision) unchanged
    /// when the element is rejected.
    pub fn add(&mut self, element: T) -> bool {
        let index = self.inner.position_of(&element);
        let occupied = self
            .inner
            .get(index)
            .is_some_and(|existing| self.inner.layout(existing, &element) == Ordering::Equal);
        if occupied {
            tracing::trace!(index, "rejected duplicate element");
            return false;
        }
        self.inner.insert_at(index, element);
        true
    }

    /// Adds every element of `elements`, returning `true` if any was added.
    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, elements: I) -> bool {
        elements
            .into_iter()
            .fold(false, |modified, element| self.add(element) | modified)
    }

    /// Returns the index of the element equal to `element`.
    #[must_use]
    pub fn index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.inner.index_of(element)
    }

    /// Returns `true` if an element equal to `element` is present.
    #[must_use]
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.inner.contains(element)
    }

    /// Removes the element equal to `element`, returning whether one was found.
    pub fn remove(&mut self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.inner.remove(element)
    }

    /// Returns the smallest element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`](crate::error::CollectionError::Empty)
    /// if the set is empty.
    pub fn smallest(&self) -> Result<&T> {
        self.inner.smallest()
    }

    /// Returns the largest element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`](crate::error::CollectionError::Empty)
    /// if the set is empty.
    pub fn largest(&self) -> Result<&T> {
        self.inner.largest()
    }
}

impl<T, C: Comparator<T>> SortedList<T> for SortedSet<T, C> {
    fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }

    fn revision(&self) -> u64 {
        self.inner.revision()
    }

    fn order(&self) -> SortOrder {
        self.inner.order()
    }

    fn position_of(&self, element: &T) -> usize {
        self.inner.position_of(element)
    }

    fn add(&mut self, element: T) -> bool {
        Self::add(self, element)
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        self.inner.remove_at(index)
    }
}

impl<T: Ord> Default for SortedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for SortedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.add_all(iter);
        set
    }
}

impl<T, C: Comparator<T>> Extend<T> for SortedSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<T, C> IntoIterator for SortedSet<T, C> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T, C> IntoIterator for &'a SortedSet<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<T, C> Index<usize> for SortedSet<T, C> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.inner[index]
    }
}

impl<T: PartialEq, C> PartialEq for SortedSet<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Eq, C> Eq for SortedSet<T, C> {}

impl<T: fmt::Debug, C> fmt::Debug for SortedSet<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SortedSet")
            .field("order", &self.inner.order())
            .field("elements", &self.inner.as_slice())
            .field("revision", &self.inner.revision())
            .finish_non_exhaustive()
    }
}

impl<T: fmt::Display, C> fmt::Display for SortedSet<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, formatter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CollectionError;
    use rstest::rstest;

    #[rstest]
    fn test_duplicate_add_is_rejected_without_revision_bump() {
        let mut set = SortedSet::new();
        assert!(set.add(3));
        let revision = set.revision();
        assert!(!set.add(3));
        assert_eq!(set.len(), 1);
        assert_eq!(set.revision(), revision);
    }

    #[rstest]
    fn test_rejects_comparator_equal_elements() {
        let case_insensitive =
            |left: &&str, right: &&str| left.to_lowercase().cmp(&right.to_lowercase());
        let mut set = SortedSet::with_comparator(case_insensitive, SortOrder::Ascending);
        assert!(set.add("Beta"));
        assert!(set.add("alpha"));
        assert!(!set.add("BETA"));
        assert_eq!(set.as_slice(), &["alpha", "Beta"]);
    }

    #[rstest]
    fn test_descending_set_orders_and_deduplicates() {
        let mut set = SortedSet::with_order(SortOrder::Descending);
        for value in [4, 9, 4, 1, 9] {
            set.add(value);
        }
        assert_eq!(set.as_slice(), &[9, 4, 1]);
        assert_eq!(set.to_string(), "{9,4,1]");
    }

    #[rstest]
    fn test_add_all_reports_modification() {
        let mut set: SortedSet<i32> = SortedSet::new();
        assert!(set.add_all([1, 2]));
        assert!(!set.add_all([1, 2]));
        assert!(set.add_all([2, 3]));
        assert_eq!(set.as_slice(), &[1, 2, 3]);
    }

    #[rstest]
    fn test_remove_then_readd() {
        let mut set: SortedSet<i32> = [5, 6, 7].into_iter().collect();
        assert!(set.remove(&6));
        assert!(!set.contains(&6));
        assert!(set.add(6));
        assert_eq!(set.index_of(&6), Some(1));
    }

    #[rstest]
    fn test_clone_operations_return_sets() {
        let set: SortedSet<i32> = (1..=4).collect();
        let mut range = set.clone_range(0, 2).unwrap();
        assert!(!range.add(2));
        let reversed = set.clone_reverse_range(2, 4).unwrap();
        assert_eq!(reversed.as_slice(), &[4, 3]);
        assert_eq!(set.clone_reverse().largest(), Ok(&4));
        assert_eq!(
            set.clone_range(3, 1),
            Err(CollectionError::InvalidRange {
                from: 3,
                to: 1,
                len: 4
            })
        );
    }

    #[rstest]
    fn test_empty_set_extremes() {
        let set: SortedSet<i32> = SortedSet::default();
        assert_eq!(set.smallest(), Err(CollectionError::Empty));
    }

    #[rstest]
    fn test_from_iter_with_keeps_first_of_equal_group() {
        let by_abs = |left: &i32, right: &i32| left.abs().cmp(&right.abs());
        let set = SortedSet::from_iter_with([-2, 3, 2, -1, -3], by_abs, SortOrder::Descending);
        assert_eq!(set.as_slice(), &[3, -2, -1]);
        assert!(!set.is_ascending());
    }
}
