//! Detached forward cursor over a [`CircularBuffer`].
//!
//! Like [`SortedCursor`](crate::ordered::SortedCursor), the cursor stores an
//! offset from the tail and the buffer revision it was created against, and
//! takes the buffer as an argument on every step.

use super::CircularBuffer;
use crate::error::{CollectionError, Result};

/// Single-pass cursor from the oldest to the newest element.
///
/// # Examples
///
/// ```rust
/// use sortring::circular::CircularBuffer;
///
/// let mut buffer = CircularBuffer::new(3);
/// buffer.push(1).unwrap();
/// buffer.push(2).unwrap();
///
/// let mut cursor = buffer.cursor();
/// assert_eq!(cursor.next(&buffer), Ok(&1));
/// assert_eq!(cursor.remove(&mut buffer), Ok(1));
/// assert_eq!(cursor.next(&buffer), Ok(&2));
/// assert!(!cursor.has_next(&buffer));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircularCursor {
    offset: usize,
    revision: u64,
}

impl CircularCursor {
    pub(crate) const fn new(revision: u64) -> Self {
        Self {
            offset: 0,
            revision,
        }
    }

    /// Returns the revision this cursor expects the buffer to have.
    #[inline]
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the offset from the tail of the element [`next`](Self::next)
    /// would return.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns `true` if an element remains ahead of the cursor.
    #[must_use]
    pub const fn has_next<T>(&self, buffer: &CircularBuffer<T>) -> bool {
        self.offset < buffer.len()
    }

    fn check<T>(&self, buffer: &CircularBuffer<T>) -> Result<()> {
        let actual = buffer.revision();
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
    /// - [`CollectionError::ConcurrentModification`] if the buffer changed.
    /// - [`CollectionError::IndexOutOfRange`] if every element was visited.
    pub fn next<'a, T>(&mut self, buffer: &'a CircularBuffer<T>) -> Result<&'a T> {
        self.check(buffer)?;
        let element = buffer.element(self.offset)?;
        self.offset += 1;
        Ok(element)
    }

    /// Pops the oldest element of the buffer.
    ///
    /// The cursor keeps pointing at the same upcoming element.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::ConcurrentModification`] if the buffer changed.
    /// - [`CollectionError::Empty`] if the buffer is empty.
    pub fn remove<T>(&mut self, buffer: &mut CircularBuffer<T>) -> Result<T> {
        self.check(buffer)?;
        let removed = buffer.pop()?;
        self.offset = self.offset.saturating_sub(1);
        self.revision = buffer.revision();
        Ok(removed)
    }
}
