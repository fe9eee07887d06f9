//! # sortring
//!
//! Array-backed containers that keep a structural invariant on every element
//! placement and expose it through positional APIs.
//!
//! ## Overview
//!
//! - **Ordered sequences**: [`SortedSequence`](ordered::SortedSequence) keeps
//!   its elements in comparator order, [`SortedSet`](ordered::SortedSet) also
//!   rejects comparator-equal duplicates, and
//!   [`SynchronizedSortedSequence`](ordered::SynchronizedSortedSequence)
//!   serializes every call behind a mutex.
//! - **Circular buffers**: [`CircularBuffer`](circular::CircularBuffer) is a
//!   fixed-capacity FIFO queue with wrap-around cursors, and
//!   [`SharedCircularBuffer`](circular::SharedCircularBuffer) is its
//!   mutex-guarded form.
//!
//! Every container carries a revision counter that increases on each
//! structural mutation. Detached cursors capture it and refuse to step once
//! the container has changed underneath them.
//!
//! ## Feature Flags
//!
//! - `ordered`: sorted sequence, sorted set and their cursor
//! - `circular`: circular buffer and its cursor
//! - `sync`: mutex-guarded variants (uses `parking_lot`)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use sortring::prelude::*;
//!
//! let mut sequence = SortedSequence::new();
//! sequence.add(5);
//! sequence.add(2);
//! sequence.add(8);
//! assert_eq!(sequence.as_slice(), &[2, 5, 8]);
//!
//! let mut buffer = CircularBuffer::new(2);
//! buffer.push('a').unwrap();
//! buffer.push('b').unwrap();
//! assert!(buffer.push('c').is_err());
//! assert_eq!(buffer.pop(), Ok('a'));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use sortring::prelude::*;
/// ```
pub mod prelude {
    pub use crate::comparator::*;
    pub use crate::error::CollectionError;

    #[cfg(feature = "ordered")]
    pub use crate::ordered::*;

    #[cfg(feature = "circular")]
    pub use crate::circular::*;
}

pub mod comparator;
pub mod error;

#[cfg(any(feature = "ordered", feature = "circular"))]
mod display;

#[cfg(feature = "ordered")]
pub mod ordered;

#[cfg(feature = "circular")]
pub mod circular;
