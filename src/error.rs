//! Error types shared by every container in the crate.
//!
//! All failures are local and synchronous. A mutator that returns an error
//! has made no change to its container and has not bumped its revision.

use thiserror::Error;

/// Convenience alias for results produced by container operations.
pub type Result<T> = std::result::Result<T, CollectionError>;

/// Represents the errors a container or cursor operation can report.
///
/// # Examples
///
/// ```rust
/// use sortring::error::CollectionError;
///
/// let error = CollectionError::IndexOutOfRange { index: 4, len: 3 };
/// assert_eq!(format!("{error}"), "index 4 is out of range for length 3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CollectionError {
    /// An index argument lies outside the valid window for the current length.
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// The number of live elements at the time of the call.
        len: usize,
    },

    /// A read or removal was attempted on a container with no elements.
    #[error("container is empty")]
    Empty,

    /// A write was attempted on a circular buffer at capacity.
    #[error("container is full (capacity {capacity})")]
    Full {
        /// The fixed capacity of the buffer.
        capacity: usize,
    },

    /// A `(from, to)` pair is reversed or exceeds the current length.
    #[error("invalid range {from}..{to} for length {len}")]
    InvalidRange {
        /// Inclusive start of the requested range.
        from: usize,
        /// Exclusive end of the requested range.
        to: usize,
        /// The number of live elements at the time of the call.
        len: usize,
    },

    /// The operation is never supported by the receiver.
    #[error("operation `{operation}` is not supported")]
    Unsupported {
        /// Name of the rejected operation.
        operation: &'static str,
    },

    /// A cursor observed a structural change it did not make itself.
    #[error("container was modified (revision {actual}, cursor expected {expected})")]
    ConcurrentModification {
        /// Revision captured by the cursor.
        expected: u64,
        /// Revision currently held by the container.
        actual: u64,
    },

    /// A cursor was asked to remove an element before stepping onto one.
    #[error("cursor has no current element")]
    NoCurrentElement,
}

/// Validates a half-open `from..to` window against `len`.
pub(crate) const fn check_range(from: usize, to: usize, len: usize) -> Result<()> {
    if from > to || to > len {
        Err(CollectionError::InvalidRange { from, to, len })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(CollectionError::Empty, "container is empty")]
    #[case(CollectionError::Full { capacity: 4 }, "container is full (capacity 4)")]
    #[case(
        CollectionError::InvalidRange { from: 3, to: 1, len: 5 },
        "invalid range 3..1 for length 5"
    )]
    #[case(
        CollectionError::Unsupported { operation: "set" },
        "operation `set` is not supported"
    )]
    #[case(
        CollectionError::ConcurrentModification { expected: 1, actual: 2 },
        "container was modified (revision 2, cursor expected 1)"
    )]
    fn test_error_display(#[case] error: CollectionError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case(0, 0, 0, true)]
    #[case(1, 3, 3, true)]
    #[case(2, 1, 3, false)]
    #[case(0, 4, 3, false)]
    #[case(4, 4, 3, false)]
    fn test_check_range(
        #[case] from: usize,
        #[case] to: usize,
        #[case] len: usize,
        #[case] valid: bool,
    ) {
        assert_eq!(check_range(from, to, len).is_ok(), valid);
    }

    #[rstest]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<CollectionError>();
    }
}
