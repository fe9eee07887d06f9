//! The sorted sequence engine.
//!
//! [`SortedSequence`] stores its live elements contiguously in a `Vec` and
//! keeps them in comparator order. Insertion positions are found by binary
//! search; growth of the backing store follows a [`Growth`] policy instead of
//! `Vec`'s own doubling so that the multiplicative and additive variants
//! behave as configured.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Index, Range};

use super::{Growth, SortedList};
use crate::comparator::{Comparator, NaturalOrder, SortOrder};
use crate::display::write_delimited;
use crate::error::{CollectionError, Result, check_range};

/// A sequence whose elements are always in comparator order.
///
/// Comparator-equal elements may sit next to each other; see
/// [`SortedSet`](super::SortedSet) for the duplicate-free variant.
///
/// # Type Parameters
///
/// * `T` - The element type.
/// * `C` - The comparator. Defaults to [`NaturalOrder`], which requires `T: Ord`.
///
/// # Examples
///
/// ```rust
/// use sortring::ordered::SortedSequence;
///
/// let mut sequence = SortedSequence::new();
/// sequence.add(5);
/// sequence.add(2);
/// sequence.add(8);
/// sequence.add(2);
///
/// assert_eq!(sequence.as_slice(), &[2, 2, 5, 8]);
/// assert!(sequence.position_of(&2) <= 1);
/// assert_eq!(sequence.to_string(), "[2,2,5,8}");
/// ```
#[derive(Clone)]
pub struct SortedSequence<T, C = NaturalOrder> {
    data: Vec<T>,
    order: SortOrder,
    comparator: C,
    growth: Growth,
    revision: u64,
}

impl<T: Ord> SortedSequence<T> {
    /// Creates an empty ascending sequence using the natural order of `T`.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::with_order(SortOrder::Ascending)
    }

    /// Creates an empty sequence of the given order using the natural order of `T`.
    #[inline]
    #[must_use]
    pub const fn with_order(order: SortOrder) -> Self {
        Self::with_comparator(NaturalOrder, order)
    }

    /// Creates an empty sequence with room for `capacity` elements before the
    /// first growth step.
    #[must_use]
    pub fn with_capacity(capacity: usize, order: SortOrder) -> Self {
        Self::with_capacity_and_comparator(capacity, NaturalOrder, order)
    }
}

impl<T, C> SortedSequence<T, C> {
    /// Creates an empty sequence ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortring::comparator::SortOrder;
    /// use sortring::ordered::SortedSequence;
    ///
    /// let by_length = |left: &String, right: &String| left.len().cmp(&right.len());
    /// let mut words = SortedSequence::with_comparator(by_length, SortOrder::Descending);
    /// words.add("ox".to_string());
    /// words.add("horse".to_string());
    /// words.add("cat".to_string());
    ///
    /// assert_eq!(words.as_slice(), &["horse", "cat", "ox"]);
    /// ```
    #[inline]
    #[must_use]
    pub const fn with_comparator(comparator: C, order: SortOrder) -> Self {
        Self {
            data: Vec::new(),
            order,
            comparator,
            growth: Growth::Multiplicative,
            revision: 0,
        }
    }

    /// Creates an empty sequence ordered by `comparator` with room for
    /// `capacity` elements.
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C, order: SortOrder) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            ..Self::with_comparator(comparator, order)
        }
    }

    /// Replaces the growth policy used by later insertions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortring::ordered::{Growth, SortedSequence};
    ///
    /// let sequence: SortedSequence<i32> =
    ///     SortedSequence::new().with_growth(Growth::Additive { increment: 4 });
    /// assert_eq!(sequence.growth(), Growth::Additive { increment: 4 });
    /// ```
    #[must_use]
    pub fn with_growth(mut self, growth: Growth) -> Self {
        self.growth = growth;
        self
    }

    /// Returns the number of live elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the sequence holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the backing store can hold without growing.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns the current revision.
    #[inline]
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the layout direction.
    #[inline]
    #[must_use]
    pub const fn order(&self) -> SortOrder {
        self.order
    }

    /// Returns `true` if the smallest element comes first.
    #[inline]
    #[must_use]
    pub const fn is_ascending(&self) -> bool {
        self.order.is_ascending()
    }

    /// Returns the growth policy.
    #[inline]
    #[must_use]
    pub const fn growth(&self) -> Growth {
        self.growth
    }

    /// Returns the comparator.
    #[inline]
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the live elements in layout order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns an iterator over the elements in layout order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns the element at `index`, or `None` if out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Returns the first element in layout order.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns the last element in layout order.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.data.last()
    }

    /// Consumes the sequence, returning its elements in layout order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Removes and returns the element at `index`, shifting every later
    /// element one slot left.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `index >= len`. The
    /// sequence and its revision are left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortring::ordered::SortedSequence;
    ///
    /// let mut sequence: SortedSequence<i32> = [4, 1, 3].into_iter().collect();
    /// assert_eq!(sequence.remove_at(1), Ok(3));
    /// assert_eq!(sequence.as_slice(), &[1, 4]);
    /// assert!(sequence.remove_at(2).is_err());
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let len = self.data.len();
        if index >= len {
            return Err(CollectionError::IndexOutOfRange { index, len });
        }
        let removed = self.data.remove(index);
        self.revision += 1;
        Ok(removed)
    }

    /// Removes every element. The backing store keeps its capacity.
    pub fn clear(&mut self) {
        self.data.clear();
        self.revision += 1;
    }

    /// Returns an independent sequence holding a copy of `from..to`, in the
    /// same order and with the same comparator.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidRange`] unless `from <= to <= len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortring::ordered::SortedSequence;
    ///
    /// let sequence: SortedSequence<i32> = (1..=5).collect();
    /// let middle = sequence.clone_range(1, 4).unwrap();
    /// assert_eq!(middle.as_slice(), &[2, 3, 4]);
    /// ```
    pub fn clone_range(&self, from: usize, to: usize) -> Result<Self>
    where
        T: Clone,
        C: Clone,
    {
        check_range(from, to, self.data.len())?;
        Ok(self.derive(self.order, self.data[from..to].to_vec()))
    }

    /// Returns an independent sequence of the opposite order holding every
    /// element read back-to-front.
    #[must_use]
    pub fn clone_reverse(&self) -> Self
    where
        T: Clone,
        C: Clone,
    {
        self.derive(self.order.reverse(), self.data.iter().rev().cloned().collect())
    }

    /// Returns an independent sequence of the opposite order holding
    /// `from..to` read back-to-front.
    ///
    /// No comparisons are made: reversing both the layout and the order keeps
    /// the invariant.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidRange`] unless `from <= to <= len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortring::ordered::SortedSequence;
    ///
    /// let sequence: SortedSequence<i32> = (1..=5).collect();
    /// let reversed = sequence.clone_reverse_range(1, 4).unwrap();
    /// assert_eq!(reversed.as_slice(), &[4, 3, 2]);
    /// assert!(!reversed.is_ascending());
    /// ```
    pub fn clone_reverse_range(&self, from: usize, to: usize) -> Result<Self>
    where
        T: Clone,
        C: Clone,
    {
        check_range(from, to, self.data.len())?;
        Ok(self.derive(
            self.order.reverse(),
            self.data[from..to].iter().rev().cloned().collect(),
        ))
    }

    fn derive(&self, order: SortOrder, data: Vec<T>) -> Self
    where
        C: Clone,
    {
        Self {
            data,
            order,
            comparator: self.comparator.clone(),
            growth: self.growth,
            revision: 0,
        }
    }

    /// Writes `element` at `index` without consulting the comparator.
    ///
    /// Callers must have obtained `index` from [`Self::position_of`].
    pub(crate) fn insert_at(&mut self, index: usize, element: T) {
        self.reserve_slot();
        self.data.insert(index, element);
        self.revision += 1;
    }

    fn reserve_slot(&mut self) {
        let capacity = self.data.capacity();
        if self.data.len() < capacity {
            return;
        }
        let new_capacity = self.growth.next_capacity(capacity);
        self.data.reserve_exact(new_capacity - self.data.len());
        tracing::trace!(
            old_capacity = capacity,
            new_capacity,
            growth = ?self.growth,
            "grew sorted sequence backing store"
        );
    }
}

impl<T, C: Comparator<T>> SortedSequence<T, C> {
    /// Compares two elements by layout position rather than by value.
    #[inline]
    pub(crate) fn layout(&self, left: &T, right: &T) -> Ordering {
        self.order.orient(self.comparator.compare(left, right))
    }

    /// Builds a sequence from `elements` in one sort instead of one insertion
    /// per element.
    ///
    /// Comparator-equal elements keep their iteration order. The result starts
    /// at revision 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortring::comparator::SortOrder;
    /// use sortring::ordered::SortedSequence;
    ///
    /// let by_length = |left: &&str, right: &&str| left.len().cmp(&right.len());
    /// let words =
    ///     SortedSequence::from_iter_with(["ox", "horse", "cat"], by_length, SortOrder::Descending);
    /// assert_eq!(words.as_slice(), &["horse", "cat", "ox"]);
    /// assert_eq!(words.revision(), 0);
    /// ```
    pub fn from_iter_with<I>(elements: I, comparator: C, order: SortOrder) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut data: Vec<T> = elements.into_iter().collect();
        data.sort_by(|left, right| order.orient(comparator.compare(left, right)));
        Self {
            data,
            ..Self::with_comparator(comparator, order)
        }
    }

    /// Returns the index of a comparator-equal element if one exists,
    /// otherwise the lowest insertion index that keeps the order.
    ///
    /// Among several equal elements no particular one is guaranteed.
    #[must_use]
    pub fn position_of(&self, element: &T) -> usize {
        let mut low = 0;
        let mut high = self.data.len();
        while low < high {
            let middle = low + (high - low) / 2;
            match self.layout(&self.data[middle], element) {
                Ordering::Less => low = middle + 1,
                Ordering::Greater => high = middle,
                Ordering::Equal => return middle,
            }
        }
        low
    }

    /// Inserts `element` at its sorted position. Always returns `true`.
    ///
    /// Grows the backing store by the configured [`Growth`] policy when it is
    /// full.
    pub fn add(&mut self, element: T) -> bool {
        let index = self.position_of(&element);
        self.insert_at(index, element);
        true
    }

    /// Adds every element of `elements`, returning `true` if any was added.
    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, elements: I) -> bool {
        elements
            .into_iter()
            .fold(false, |modified, element| self.add(element) | modified)
    }

    /// Returns the indices of the run of elements comparator-equal to `element`.
    fn equal_run(&self, element: &T) -> Range<usize> {
        let start = self
            .data
            .partition_point(|item| self.layout(item, element) == Ordering::Less);
        let length = self.data[start..]
            .partition_point(|item| self.layout(item, element) == Ordering::Equal);
        start..start + length
    }

    /// Returns the index of the first element equal to `element`.
    ///
    /// Only the run of comparator-equal elements is scanned, so the comparator
    /// must agree with `PartialEq`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortring::ordered::SortedSequence;
    ///
    /// let sequence: SortedSequence<i32> = [3, 1, 3, 2].into_iter().collect();
    /// assert_eq!(sequence.index_of(&3), Some(2));
    /// assert_eq!(sequence.last_index_of(&3), Some(3));
    /// assert_eq!(sequence.index_of(&7), None);
    /// ```
    #[must_use]
    pub fn index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let run = self.equal_run(element);
        let start = run.start;
        self.data[run]
            .iter()
            .position(|item| item == element)
            .map(|offset| start + offset)
    }

    /// Returns the index of the last element equal to `element`.
    #[must_use]
    pub fn last_index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let run = self.equal_run(element);
        let start = run.start;
        self.data[run]
            .iter()
            .rposition(|item| item == element)
            .map(|offset| start + offset)
    }

    /// Returns `true` if an element equal to `element` is present.
    #[must_use]
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(element).is_some()
    }

    /// Removes the first element equal to `element`, returning whether one
    /// was found.
    pub fn remove(&mut self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(element)
            .is_some_and(|index| self.remove_at(index).is_ok())
    }

    /// Returns the smallest element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if the sequence is empty.
    pub fn smallest(&self) -> Result<&T> {
        SortedList::smallest(self)
    }

    /// Returns the largest element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if the sequence is empty.
    pub fn largest(&self) -> Result<&T> {
        SortedList::largest(self)
    }
}

impl<T, C: Comparator<T>> SortedList<T> for SortedSequence<T, C> {
    fn as_slice(&self) -> &[T] {
        &self.data
    }

    fn revision(&self) -> u64 {
        self.revision
    }

    fn order(&self) -> SortOrder {
        self.order
    }

    fn position_of(&self, element: &T) -> usize {
        Self::position_of(self, element)
    }

    fn add(&mut self, element: T) -> bool {
        Self::add(self, element)
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        Self::remove_at(self, index)
    }
}

impl<T: Ord> Default for SortedSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for SortedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with(iter, NaturalOrder, SortOrder::Ascending)
    }
}

impl<T, C: Comparator<T>> Extend<T> for SortedSequence<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<T, C> IntoIterator for SortedSequence<T, C> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, C> IntoIterator for &'a SortedSequence<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T, C> Index<usize> for SortedSequence<T, C> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: PartialEq, C> PartialEq for SortedSequence<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order && self.data == other.data
    }
}

impl<T: Eq, C> Eq for SortedSequence<T, C> {}

impl<T: fmt::Debug, C> fmt::Debug for SortedSequence<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SortedSequence")
            .field("order", &self.order)
            .field("elements", &self.data)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

/// Ascending sequences print as `[a,b,c}`, descending ones as `{c,b,a]`:
/// the square bracket marks the smallest end.
impl<T: fmt::Display, C> fmt::Display for SortedSequence<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, close) = if self.is_ascending() {
            ('[', '}')
        } else {
            ('{', ']')
        };
        write_delimited(formatter, open, close, &self.data)
    }
}
