//! Fixed-capacity circular queues.
//!
//! This module provides:
//!
//! - [`CircularBuffer`]: FIFO queue over a fixed array with wrap-around cursors
//! - [`SharedCircularBuffer`]: the same queue behind a mutex (requires the
//!   `sync` feature)
//! - [`CircularCursor`]: detached single-pass cursor with staleness detection
//!
//! # Strict and lenient entry points
//!
//! | Strict                     | Lenient                | On full / empty         |
//! |----------------------------|------------------------|-------------------------|
//! | [`push`](CircularBuffer::push) | [`offer`](CircularBuffer::offer) | element handed back |
//! | [`pop`](CircularBuffer::pop)   | [`poll`](CircularBuffer::poll)   | `None`              |
//! | [`element`](CircularBuffer::element) | [`peek_ahead`](CircularBuffer::peek_ahead) | `None` |
//! | [`front`](CircularBuffer::front) | [`peek`](CircularBuffer::peek) | `None`              |
//!
//! Both forms share one implementation; only the failure report differs.
//!
//! # State Transitions
//!
//! ```text
//!              push                    push (len == capacity)
//!     Empty ───────────► Partial ──────────────────────────► Full
//!       ▲                 │   ▲                                │
//!       └─────────────────┘   └────────────────────────────────┘
//!         pop (len == 0)                   pop
//! ```
//!
//! `push` on `Full` and `pop` on `Empty` are rejected without any change.

mod buffer;
mod cursor;
#[cfg(feature = "sync")]
mod shared;

pub use buffer::{CircularBuffer, Iter};
pub use cursor::CircularCursor;
#[cfg(feature = "sync")]
pub use shared::SharedCircularBuffer;

/// Occupancy of a circular buffer, determined solely by its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferState {
    /// No elements.
    Empty,
    /// At least one element and at least one free slot.
    Partial,
    /// Every slot holds an element.
    Full,
}
