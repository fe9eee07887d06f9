//! Mutex-guarded circular buffer for producer/consumer use across threads.

use parking_lot::{Mutex, MutexGuard};

use super::{BufferState, CircularBuffer};
use crate::error::Result;

/// A [`CircularBuffer`] behind a mutex, operated through `&self`.
///
/// Each method holds the lock for one call. Reads return clones.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use std::thread;
/// use sortring::circular::SharedCircularBuffer;
///
/// let queue = Arc::new(SharedCircularBuffer::new(8));
/// let producer = {
///     let queue = Arc::clone(&queue);
///     thread::spawn(move || {
///         for value in 0..8 {
///             queue.push(value).unwrap();
///         }
///     })
/// };
/// producer.join().unwrap();
///
/// assert!(queue.is_full());
/// assert_eq!(queue.poll(), Some(0));
/// ```
pub struct SharedCircularBuffer<T> {
    inner: Mutex<CircularBuffer<T>>,
}

impl<T> SharedCircularBuffer<T> {
    /// Creates an empty shared buffer with `capacity` slots.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::from_buffer(CircularBuffer::new(capacity))
    }

    /// Wraps an existing buffer.
    #[must_use]
    pub fn from_buffer(buffer: CircularBuffer<T>) -> Self {
        Self {
            inner: Mutex::new(buffer),
        }
    }

    /// Consumes the wrapper, returning the inner buffer.
    pub fn into_inner(self) -> CircularBuffer<T> {
        self.inner.into_inner()
    }

    /// Locks the buffer until the returned guard is dropped.
    pub fn lock(&self) -> MutexGuard<'_, CircularBuffer<T>> {
        self.inner.lock()
    }

    /// Returns the fixed number of slots.
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Returns the number of queued elements.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Returns `true` if every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.inner.lock().is_full()
    }

    /// Returns the occupancy state.
    pub fn state(&self) -> BufferState {
        self.inner.lock().state()
    }

    /// Returns the current revision.
    pub fn revision(&self) -> u64 {
        self.inner.lock().revision()
    }

    /// Appends `element` at the head.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Full`](crate::error::CollectionError::Full)
    /// if every slot is occupied.
    pub fn push(&self, element: T) -> Result<()> {
        self.inner.lock().push(element)
    }

    /// Appends `element` at the head, handing it back if the buffer is full.
    ///
    /// # Errors
    ///
    /// Returns `Err(element)` when full.
    pub fn offer(&self, element: T) -> std::result::Result<(), T> {
        self.inner.lock().offer(element)
    }

    /// Removes and returns the oldest element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`](crate::error::CollectionError::Empty)
    /// if nothing is queued.
    pub fn pop(&self) -> Result<T> {
        self.inner.lock().pop()
    }

    /// Removes and returns the oldest element, or `None` if empty.
    pub fn poll(&self) -> Option<T> {
        self.inner.lock().poll()
    }

    /// Returns a clone of the element `index` places after the tail.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`](crate::error::CollectionError::IndexOutOfRange)
    /// if `index >= len`.
    pub fn element(&self, index: usize) -> Result<T>
    where
        T: Clone,
    {
        self.inner.lock().element(index).cloned()
    }

    /// Returns a clone of the oldest element, or `None` if empty.
    pub fn peek(&self) -> Option<T>
    where
        T: Clone,
    {
        self.inner.lock().peek().cloned()
    }

    /// Returns a clone of the element `index` places after the tail, or `None`.
    pub fn peek_ahead(&self, index: usize) -> Option<T>
    where
        T: Clone,
    {
        self.inner.lock().peek_ahead(index).cloned()
    }

    /// Forgets every queued element.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Returns a snapshot of the queued elements, oldest first.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner.lock().iter().cloned().collect()
    }
}

impl<T> Default for SharedCircularBuffer<T> {
    fn default() -> Self {
        Self::from_buffer(CircularBuffer::default())
    }
}

impl<T> From<CircularBuffer<T>> for SharedCircularBuffer<T> {
    fn from(buffer: CircularBuffer<T>) -> Self {
        Self::from_buffer(buffer)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SharedCircularBuffer<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("SharedCircularBuffer")
            .field("inner", &*self.inner.lock())
            .finish()
    }
}

static_assertions::assert_impl_all!(SharedCircularBuffer<i32>: Send, Sync);
static_assertions::assert_impl_all!(SharedCircularBuffer<String>: Send, Sync);
