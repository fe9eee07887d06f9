//! Detached bidirectional cursor over a [`SortedList`].
//!
//! A borrowing iterator (`iter()`) can never observe a mutation, because the
//! borrow checker forbids one while it lives. A [`SortedCursor`] holds no
//! borrow: it stores a position and the revision it last saw, and takes the
//! list as an argument on every step. If the list was mutated by anything
//! other than the cursor itself, the step fails with
//! [`CollectionError::ConcurrentModification`].
//!
//! # Examples
//!
//! ```rust
//! use sortring::error::CollectionError;
//! use sortring::ordered::{SortedList, SortedSequence};
//!
//! let mut sequence: SortedSequence<i32> = [1, 2, 3].into_iter().collect();
//! let mut cursor = sequence.cursor();
//! assert_eq!(cursor.next(&sequence), Ok(&1));
//!
//! sequence.add(0);
//! assert!(matches!(
//!     cursor.next(&sequence),
//!     Err(CollectionError::ConcurrentModification { .. })
//! ));
//! ```

use super::SortedList;
use crate::error::{CollectionError, Result};

/// Position within a sorted list plus the list revision it is valid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortedCursor {
    position: usize,
    last_returned: Option<usize>,
    revision: u64,
}

impl SortedCursor {
    pub(crate) const fn new(position: usize, revision: u64) -> Self {
        Self {
            position,
            last_returned: None,
            revision,
        }
    }

    /// Returns the revision this cursor expects the list to have.
    #[inline]
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the index of the element the next call to [`next`](Self::next)
    /// would return.
    #[inline]
    #[must_use]
    pub const fn next_index(&self) -> usize {
        self.position
    }

    /// Returns the index of the element the next call to
    /// [`previous`](Self::previous) would return, or `None` at the front.
    #[inline]
    #[must_use]
    pub const fn previous_index(&self) -> Option<usize> {
        self.position.checked_sub(1)
    }

    /// Returns `true` if an element follows the cursor.
    pub fn has_next<T, L>(&self, list: &L) -> bool
    where
        L: SortedList<T> + ?Sized,
    {
        self.position < list.len()
    }

    /// Returns `true` if an element precedes the cursor.
    #[inline]
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.position > 0
    }

    fn check<T, L>(&self, list: &L) -> Result<()>
    where
        L: SortedList<T> + ?Sized,
    {
        let actual = list.revision();
        if actual == self.revision {
            Ok(())
        } else {
            tracing::debug!(
                expected = self.revision,
                actual,
                "cursor observed a foreign modification"
            );
            Err(CollectionError::ConcurrentModification {
                expected: self.revision,
                actual,
            })
        }
    }

    /// Returns the next element and advances.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::ConcurrentModification`] if the list changed.
    /// - [`CollectionError::IndexOutOfRange`] if the cursor is at the end.
    pub fn next<'a, T, L>(&mut self, list: &'a L) -> Result<&'a T>
    where
        L: SortedList<T> + ?Sized,
    {
        self.check(list)?;
        let index = self.position;
        let element = list
            .get(index)
            .ok_or(CollectionError::IndexOutOfRange {
                index,
                len: list.len(),
            })?;
        self.position += 1;
        self.last_returned = Some(index);
        Ok(element)
    }

    /// Steps back and returns the element now after the cursor.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::ConcurrentModification`] if the list changed.
    /// - [`CollectionError::IndexOutOfRange`] if the cursor is at the front.
    pub fn previous<'a, T, L>(&mut self, list: &'a L) -> Result<&'a T>
    where
        L: SortedList<T> + ?Sized,
    {
        self.check(list)?;
        let index = self
            .position
            .checked_sub(1)
            .ok_or(CollectionError::IndexOutOfRange {
                index: 0,
                len: list.len(),
            })?;
        let element = list.get(index).ok_or(CollectionError::IndexOutOfRange {
            index,
            len: list.len(),
        })?;
        self.position = index;
        self.last_returned = Some(index);
        Ok(element)
    }

    /// Removes the element most recently returned by [`next`](Self::next) or
    /// [`previous`](Self::previous).
    ///
    /// # Errors
    ///
    /// - [`CollectionError::ConcurrentModification`] if the list changed.
    /// - [`CollectionError::NoCurrentElement`] if nothing was returned since
    ///   the cursor was created or last mutated the list.
    pub fn remove<T, L>(&mut self, list: &mut L) -> Result<T>
    where
        L: SortedList<T> + ?Sized,
    {
        self.check(list)?;
        let index = self.last_returned.ok_or(CollectionError::NoCurrentElement)?;
        let removed = list.remove_at(index)?;
        if index < self.position {
            self.position -= 1;
        }
        self.last_returned = None;
        self.revision = list.revision();
        Ok(removed)
    }

    /// Inserts `element` at its sorted position.
    ///
    /// The cursor keeps pointing at the same next element: an element landing
    /// exactly at the cursor goes before it. Returns whatever
    /// the list's `add` returns.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::ConcurrentModification`] if the list changed.
    pub fn add<T, L>(&mut self, list: &mut L, element: T) -> Result<bool>
    where
        L: SortedList<T> + ?Sized,
    {
        self.check(list)?;
        let index = list.position_of(&element);
        if !list.add(element) {
            return Ok(false);
        }
        if index <= self.position {
            self.position += 1;
        }
        self.last_returned = None;
        self.revision = list.revision();
        Ok(true)
    }

    /// Replacing an element in place could break the order, so this always fails.
    ///
    /// # Errors
    ///
    /// Always returns [`CollectionError::Unsupported`].
    pub fn set<T>(&mut self, _element: T) -> Result<()> {
        Err(CollectionError::Unsupported { operation: "set" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::SortOrder;
    use crate::ordered::{SortedSequence, SortedSet};
    use rstest::rstest;

    fn sequence(values: &[i32]) -> SortedSequence<i32> {
        values.iter().copied().collect()
    }

    #[rstest]
    fn test_forward_and_backward_walk() {
        let list = sequence(&[3, 1, 2]);
        let mut cursor = list.cursor();
        assert!(!cursor.has_previous());
        assert_eq!(cursor.next(&list), Ok(&1));
        assert_eq!(cursor.next(&list), Ok(&2));
        assert_eq!(cursor.next(&list), Ok(&3));
        assert!(!cursor.has_next(&list));
        assert_eq!(
            cursor.next(&list),
            Err(CollectionError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(cursor.previous(&list), Ok(&3));
        assert_eq!(cursor.previous_index(), Some(1));
        assert_eq!(cursor.next_index(), 2);
    }

    #[rstest]
    fn test_previous_at_front_fails() {
        let list = sequence(&[1]);
        let mut cursor = list.cursor();
        assert_eq!(
            cursor.previous(&list),
            Err(CollectionError::IndexOutOfRange { index: 0, len: 1 })
        );
        assert_eq!(cursor.previous_index(), None);
    }

    #[rstest]
    fn test_foreign_mutation_is_detected() {
        let mut list = sequence(&[1, 2]);
        let mut cursor = list.cursor();
        list.remove_at(0).unwrap();
        assert_eq!(
            cursor.next(&list),
            Err(CollectionError::ConcurrentModification {
                expected: cursor.revision(),
                actual: list.revision(),
            })
        );
    }

    #[rstest]
    fn test_reads_do_not_invalidate_cursor() {
        let list = sequence(&[1, 2]);
        let mut cursor = list.cursor();
        let _ = list.position_of(&2);
        let _ = list.smallest();
        let _ = list.clone_range(0, 1);
        assert_eq!(cursor.next(&list), Ok(&1));
    }

    #[rstest]
    fn test_remove_last_returned() {
        let mut list = sequence(&[1, 2, 3]);
        let mut cursor = list.cursor();
        cursor.next(&list).unwrap();
        cursor.next(&list).unwrap();
        assert_eq!(cursor.remove(&mut list), Ok(2));
        assert_eq!(list.as_slice(), &[1, 3]);
        assert_eq!(cursor.next(&list), Ok(&3));
        assert_eq!(cursor.remove(&mut list), Ok(3));
        assert_eq!(cursor.remove(&mut list), Err(CollectionError::NoCurrentElement));
    }

    #[rstest]
    fn test_remove_after_previous() {
        let mut list = sequence(&[1, 2, 3]);
        let mut cursor = list.cursor_at(3).unwrap();
        assert_eq!(cursor.previous(&list), Ok(&3));
        assert_eq!(cursor.remove(&mut list), Ok(3));
        assert_eq!(cursor.next_index(), 2);
        assert!(!cursor.has_next(&list));
    }

    #[rstest]
    fn test_add_keeps_next_element() {
        let mut list = sequence(&[10, 20, 30]);
        let mut cursor = list.cursor();
        cursor.next(&list).unwrap();
        assert_eq!(cursor.add(&mut list, 5), Ok(true));
        assert_eq!(cursor.next(&list), Ok(&20));
        assert_eq!(cursor.add(&mut list, 40), Ok(true));
        assert_eq!(cursor.next(&list), Ok(&30));
        assert_eq!(list.as_slice(), &[5, 10, 20, 30, 40]);
    }

    #[rstest]
    fn test_add_between_last_returned_and_next() {
        let mut list = sequence(&[10, 20, 30]);
        let mut cursor = list.cursor();
        assert_eq!(cursor.next(&list), Ok(&10));
        assert_eq!(cursor.add(&mut list, 15), Ok(true));
        assert_eq!(cursor.next(&list), Ok(&20));
        assert_eq!(cursor.previous(&list), Ok(&20));
        assert_eq!(cursor.previous(&list), Ok(&15));
        assert_eq!(list.as_slice(), &[10, 15, 20, 30]);
    }

    #[rstest]
    fn test_add_equal_to_next_goes_before_cursor() {
        let mut list = sequence(&[1, 2, 3]);
        let mut cursor = list.cursor();
        cursor.next(&list).unwrap();
        assert_eq!(cursor.add(&mut list, 2), Ok(true));
        assert_eq!(cursor.next_index(), 2);
        assert_eq!(cursor.next(&list), Ok(&2));
        assert_eq!(cursor.next(&list), Ok(&3));
    }

    #[rstest]
    fn test_add_rejected_by_set_keeps_revision() {
        let mut set: SortedSet<i32> = SortedSet::with_order(SortOrder::Descending);
        set.add(1);
        let mut cursor = set.cursor();
        assert_eq!(cursor.add(&mut set, 1), Ok(false));
        assert_eq!(cursor.revision(), set.revision());
        assert_eq!(cursor.next(&set), Ok(&1));
    }

    #[rstest]
    fn test_set_is_unsupported() {
        let list = sequence(&[1]);
        let mut cursor = list.cursor();
        assert_eq!(
            cursor.set(7),
            Err(CollectionError::Unsupported { operation: "set" })
        );
    }

    #[rstest]
    fn test_cursor_at_bounds() {
        let list = sequence(&[1, 2]);
        assert!(list.cursor_at(2).is_ok());
        assert_eq!(
            list.cursor_at(3),
            Err(CollectionError::IndexOutOfRange { index: 3, len: 2 })
        );
    }
}
