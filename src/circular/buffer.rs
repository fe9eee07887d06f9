//! The circular buffer engine.
//!
//! `head` is the next slot to write and `tail` the next slot to read. Both
//! stay in `0..capacity` and wrap eagerly on every advance; `len`
//! disambiguates the `head == tail` case between empty and full.

use std::fmt;
use std::iter::FusedIterator;

use super::{BufferState, CircularCursor};
use crate::display::write_delimited;
use crate::error::{CollectionError, Result};

/// A FIFO queue over a fixed number of slots.
///
/// The capacity is set at construction and never changes.
///
/// # Examples
///
/// ```rust
/// use sortring::circular::CircularBuffer;
/// use sortring::error::CollectionError;
///
/// let mut buffer = CircularBuffer::new(4);
/// for letter in ['a', 'b', 'c', 'd'] {
///     buffer.push(letter).unwrap();
/// }
/// assert!(buffer.is_full());
/// assert_eq!(buffer.push('e'), Err(CollectionError::Full { capacity: 4 }));
///
/// assert_eq!(buffer.pop(), Ok('a'));
/// buffer.push('e').unwrap();
///
/// let drained: Vec<char> = std::iter::from_fn(|| buffer.poll()).collect();
/// assert_eq!(drained, vec!['b', 'c', 'd', 'e']);
/// ```
#[derive(Clone)]
pub struct CircularBuffer<T> {
    slots: Box<[Option<T>]>,
    head: usize,
    tail: usize,
    len: usize,
    revision: u64,
}

impl<T> CircularBuffer<T> {
    /// Capacity used by [`Default`].
    pub const DEFAULT_CAPACITY: usize = 16;

    /// Creates an empty buffer with `capacity` slots.
    ///
    /// A zero-capacity buffer is both empty and full: every push fails.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
            head: 0,
            tail: 0,
            len: 0,
            revision: 0,
        }
    }

    /// Returns the fixed number of slots.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of queued elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing is queued.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if every slot is occupied.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Returns the occupancy state.
    #[must_use]
    pub fn state(&self) -> BufferState {
        if self.is_empty() {
            BufferState::Empty
        } else if self.is_full() {
            BufferState::Full
        } else {
            BufferState::Partial
        }
    }

    /// Returns the slot the next push writes to.
    #[inline]
    #[must_use]
    pub const fn head(&self) -> usize {
        self.head
    }

    /// Returns the slot the next pop reads from.
    #[inline]
    #[must_use]
    pub const fn tail(&self) -> usize {
        self.tail
    }

    /// Returns the current revision.
    #[inline]
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    fn advance(&self, slot: usize) -> usize {
        let next = slot + 1;
        if next == self.capacity() { 0 } else { next }
    }

    /// Maps an offset from the tail onto a slot. `offset` must be below `len`.
    fn slot_of(&self, offset: usize) -> usize {
        let slot = self.tail + offset;
        if slot >= self.capacity() {
            slot - self.capacity()
        } else {
            slot
        }
    }

    /// Appends `element` at the head.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Full`] if every slot is occupied; the
    /// buffer is left untouched and `element` is dropped. Use
    /// [`offer`](Self::offer) to get the element back instead.
    pub fn push(&mut self, element: T) -> Result<()> {
        self.offer(element)
            .map_err(|_| CollectionError::Full {
                capacity: self.capacity(),
            })
    }

    /// Appends `element` at the head, handing it back if the buffer is full.
    ///
    /// # Errors
    ///
    /// Returns `Err(element)` when full.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortring::circular::CircularBuffer;
    ///
    /// let mut buffer = CircularBuffer::new(1);
    /// assert_eq!(buffer.offer("first"), Ok(()));
    /// assert_eq!(buffer.offer("second"), Err("second"));
    /// ```
    pub fn offer(&mut self, element: T) -> std::result::Result<(), T> {
        if self.is_full() {
            tracing::debug!(capacity = self.capacity(), "rejected push on full buffer");
            return Err(element);
        }
        self.slots[self.head] = Some(element);
        self.head = self.advance(self.head);
        self.len += 1;
        self.revision += 1;
        Ok(())
    }

    /// Removes and returns the element at the tail, clearing its slot.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if nothing is queued.
    pub fn pop(&mut self) -> Result<T> {
        if self.is_empty() {
            tracing::debug!("rejected pop on empty buffer");
            return Err(CollectionError::Empty);
        }
        let element = self.slots[self.tail]
            .take()
            .ok_or(CollectionError::Empty)?;
        self.tail = self.advance(self.tail);
        self.len -= 1;
        self.revision += 1;
        Ok(element)
    }

    /// Removes and returns the element at the tail, or `None` if empty.
    pub fn poll(&mut self) -> Option<T> {
        self.pop().ok()
    }

    /// Returns the element `index` places after the tail without removing it.
    ///
    /// `element(0)` is the element the next [`pop`](Self::pop) returns.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `index >= len`.
    pub fn element(&self, index: usize) -> Result<&T> {
        let out_of_range = CollectionError::IndexOutOfRange {
            index,
            len: self.len,
        };
        if index >= self.len {
            return Err(out_of_range);
        }
        self.slots[self.slot_of(index)]
            .as_ref()
            .ok_or(out_of_range)
    }

    /// Returns the element the next [`pop`](Self::pop) returns.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if nothing is queued.
    pub fn front(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(CollectionError::Empty);
        }
        self.element(0)
    }

    /// Returns the element the next [`pop`](Self::pop) returns, or `None`.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.peek_ahead(0)
    }

    /// Returns the element `index` places after the tail, or `None`.
    #[must_use]
    pub fn peek_ahead(&self, index: usize) -> Option<&T> {
        self.element(index).ok()
    }

    /// Forgets every queued element by resetting both cursors.
    ///
    /// Slots are not cleared eagerly; each stale value is dropped when its
    /// slot is next written or when the buffer itself is dropped.
    pub fn clear(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.len = 0;
        self.revision += 1;
    }

    /// Returns an iterator from the tail (oldest) to the head (newest).
    pub const fn iter(&self) -> Iter<'_, T> {
        Iter {
            buffer: self,
            front: 0,
            back: self.len,
        }
    }

    /// Returns a cursor positioned at the tail.
    #[must_use]
    pub const fn cursor(&self) -> CircularCursor {
        CircularCursor::new(self.revision)
    }
}

impl<T> Default for CircularBuffer<T> {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularBuffer<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("CircularBuffer")
            .field("capacity", &self.capacity())
            .field("elements", &self.iter().collect::<Vec<_>>())
            .field("head", &self.head)
            .field("tail", &self.tail)
            .field("revision", &self.revision)
            .finish()
    }
}

/// Prints the queued elements oldest first as `{a,b,c}`.
impl<T: fmt::Display> fmt::Display for CircularBuffer<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_delimited(formatter, '{', '}', self.iter())
    }
}

impl<'a, T> IntoIterator for &'a CircularBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`CircularBuffer`], oldest element first.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    buffer: &'a CircularBuffer<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let element = self.buffer.element(self.front).ok();
        self.front += 1;
        element
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.buffer.element(self.back).ok()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
