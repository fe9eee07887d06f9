//! Array-backed sequences kept in comparator order.
//!
//! This module provides:
//!
//! - [`SortedSequence`]: sorted sequence that admits comparator-equal duplicates
//! - [`SortedSet`]: sorted sequence that rejects comparator-equal duplicates
//! - [`SynchronizedSortedSequence`]: sorted sequence behind a mutex, with
//!   additive growth (requires the `sync` feature)
//! - [`SortedCursor`]: detached bidirectional cursor with staleness detection
//!
//! All of them share the [`SortedList`] interface.
//!
//! # Invariant
//!
//! For every `i < j < len`, `order.orient(comparator.compare(&data[i], &data[j]))`
//! is never `Greater`. Every insertion goes through binary-search positioning,
//! so the invariant holds after each call.
//!
//! # Time Complexity
//!
//! | Operation            | Complexity              |
//! |----------------------|-------------------------|
//! | `position_of`        | O(log n)                |
//! | `add`                | O(log n) + O(n) shift   |
//! | `remove_at`          | O(n) shift              |
//! | `index_of`           | O(log n) + O(k) equal run |
//! | `smallest`/`largest` | O(1)                    |
//! | `clone_range`        | O(to - from)            |
//!
//! # Examples
//!
//! ```rust
//! use sortring::comparator::SortOrder;
//! use sortring::ordered::{SortedList, SortedSequence};
//!
//! let mut sequence = SortedSequence::with_order(SortOrder::Descending);
//! for value in [5, 2, 8, 2] {
//!     sequence.add(value);
//! }
//! assert_eq!(sequence.as_slice(), &[8, 5, 2, 2]);
//! assert_eq!(sequence.smallest(), Ok(&2));
//! assert_eq!(sequence.to_string(), "{8,5,2,2]");
//! ```

mod cursor;
mod sequence;
mod set;
#[cfg(feature = "sync")]
mod synchronized;

pub use cursor::SortedCursor;
pub use sequence::SortedSequence;
pub use set::SortedSet;
#[cfg(feature = "sync")]
pub use synchronized::SynchronizedSortedSequence;

use crate::comparator::SortOrder;
use crate::error::{CollectionError, Result};

/// Backing-store growth policy applied when an insertion finds the store full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Growth {
    /// `capacity * 3 / 2 + 1`: amortized O(1) reallocation per insertion.
    #[default]
    Multiplicative,
    /// `capacity + increment`: smaller over-allocation, more reallocations.
    Additive {
        /// Slots added on each growth step. Zero is treated as one.
        increment: usize,
    },
}

impl Growth {
    /// Increment used by [`SynchronizedSortedSequence`] unless configured otherwise.
    pub const DEFAULT_INCREMENT: usize = 2;

    /// Returns the capacity to grow to from a full store of `capacity` slots.
    ///
    /// The result exceeds `capacity` for every capacity an allocator can
    /// satisfy; arithmetic saturates instead of overflowing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortring::ordered::Growth;
    ///
    /// assert_eq!(Growth::Multiplicative.next_capacity(10), 16);
    /// assert_eq!(Growth::Multiplicative.next_capacity(0), 1);
    /// assert_eq!(Growth::Additive { increment: 2 }.next_capacity(10), 12);
    /// ```
    #[must_use]
    pub const fn next_capacity(self, capacity: usize) -> usize {
        match self {
            Self::Multiplicative => capacity.saturating_mul(3) / 2 + 1,
            Self::Additive { increment } => {
                let step = if increment == 0 { 1 } else { increment };
                capacity.saturating_add(step)
            }
        }
    }
}

/// Common interface of the sorted containers.
///
/// Implementors supply storage access, positioning and the two structural
/// mutators; everything else is derived. [`SortedCursor`] drives any
/// implementor through this trait.
pub trait SortedList<T> {
    /// Returns the live elements in layout order.
    fn as_slice(&self) -> &[T];

    /// Returns the current revision. It increases on every structural
    /// mutation and never on reads.
    fn revision(&self) -> u64;

    /// Returns the direction the elements are laid out in.
    fn order(&self) -> SortOrder;

    /// Returns the index of a comparator-equal element if one exists,
    /// otherwise the lowest index at which `element` could be inserted
    /// without breaking the order.
    fn position_of(&self, element: &T) -> usize;

    /// Inserts `element` at its sorted position.
    ///
    /// Returns `false`, without mutating, when the container declines the
    /// element.
    fn add(&mut self, element: T) -> bool;

    /// Removes and returns the element at `index`, shifting later elements left.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `index >= len`.
    fn remove_at(&mut self, index: usize) -> Result<T>;

    /// Returns the number of live elements.
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns `true` if the container holds no elements.
    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Returns the element at `index`, or `None` if out of range.
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns the element at index 0.
    fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the element at index `len - 1`.
    fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns a borrowing iterator in layout order.
    fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns `true` if the smallest element comes first.
    fn is_ascending(&self) -> bool {
        self.order().is_ascending()
    }

    /// Returns the smallest element in O(1).
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if the container is empty.
    fn smallest(&self) -> Result<&T> {
        let elements = self.as_slice();
        let smallest = if self.is_ascending() {
            elements.first()
        } else {
            elements.last()
        };
        smallest.ok_or(CollectionError::Empty)
    }

    /// Returns the largest element in O(1).
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if the container is empty.
    fn largest(&self) -> Result<&T> {
        let elements = self.as_slice();
        let largest = if self.is_ascending() {
            elements.last()
        } else {
            elements.first()
        };
        largest.ok_or(CollectionError::Empty)
    }

    /// Returns a cursor positioned before the first element.
    fn cursor(&self) -> SortedCursor {
        SortedCursor::new(0, self.revision())
    }

    /// Returns a cursor whose next element is the one at `index`.
    ///
    /// `index == len` places the cursor after the last element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `index > len`.
    fn cursor_at(&self, index: usize) -> Result<SortedCursor> {
        let len = self.len();
        if index > len {
            return Err(CollectionError::IndexOutOfRange { index, len });
        }
        Ok(SortedCursor::new(index, self.revision()))
    }
}
