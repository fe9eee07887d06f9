//! Orderings used by the sorted containers.
//!
//! A [`Comparator`] decides how two elements relate; a [`SortOrder`] decides
//! which direction the container lays them out in. Keeping the two apart lets
//! one comparator serve both ascending and descending containers.
//!
//! # Choosing a comparator
//!
//! | Supplied                  | Element type | Comparator used          |
//! |---------------------------|--------------|--------------------------|
//! | custom closure or type    | any          | the supplied comparator  |
//! | nothing                   | `T: Ord`     | [`NaturalOrder`]         |
//! | nothing                   | not `Ord`    | rejected at compile time |
//!
//! # Examples
//!
//! ```rust
//! use std::cmp::Ordering;
//! use sortring::comparator::{Comparator, NaturalOrder, SortOrder};
//!
//! assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
//!
//! let by_length = |left: &&str, right: &&str| left.len().cmp(&right.len());
//! assert_eq!(by_length.compare(&"abc", &"de"), Ordering::Greater);
//!
//! assert_eq!(SortOrder::Descending.orient(Ordering::Less), Ordering::Greater);
//! ```

use std::cmp::Ordering;

/// A total order over `T`.
///
/// Implemented by [`NaturalOrder`] and by every `Fn(&T, &T) -> Ordering`.
pub trait Comparator<T: ?Sized> {
    /// Compares two elements.
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}

/// Compares elements by their [`Ord`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

/// Direction in which a sorted container lays out its elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Smallest element first.
    #[default]
    Ascending,
    /// Largest element first.
    Descending,
}

impl SortOrder {
    /// Returns the sign multiplier for this order: `-1` for ascending and
    /// `+1` for descending.
    #[inline]
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Self::Ascending => -1,
            Self::Descending => 1,
        }
    }

    /// Returns `true` for [`SortOrder::Ascending`].
    #[inline]
    #[must_use]
    pub const fn is_ascending(self) -> bool {
        matches!(self, Self::Ascending)
    }

    /// Returns the opposite order.
    #[inline]
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Maps a comparator result onto layout position.
    ///
    /// `Less` means the left element belongs before the right one in a
    /// container of this order.
    #[inline]
    #[must_use]
    pub const fn orient(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_natural_order_delegates_to_ord() {
        assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
        assert_eq!(NaturalOrder.compare(&2, &2), Ordering::Equal);
        assert_eq!(NaturalOrder.compare("b", "a"), Ordering::Greater);
    }

    #[rstest]
    fn test_closure_is_comparator() {
        let by_abs = |left: &i32, right: &i32| left.abs().cmp(&right.abs());
        assert_eq!(by_abs.compare(&-5, &3), Ordering::Greater);
        assert_eq!(by_abs.compare(&-3, &3), Ordering::Equal);
    }

    #[rstest]
    #[case(SortOrder::Ascending, -1)]
    #[case(SortOrder::Descending, 1)]
    fn test_sign(#[case] order: SortOrder, #[case] sign: i32) {
        assert_eq!(order.sign(), sign);
    }

    #[rstest]
    #[case(SortOrder::Ascending, Ordering::Less, Ordering::Less)]
    #[case(SortOrder::Ascending, Ordering::Greater, Ordering::Greater)]
    #[case(SortOrder::Descending, Ordering::Less, Ordering::Greater)]
    #[case(SortOrder::Descending, Ordering::Equal, Ordering::Equal)]
    fn test_orient(#[case] order: SortOrder, #[case] input: Ordering, #[case] expected: Ordering) {
        assert_eq!(order.orient(input), expected);
    }

    #[rstest]
    fn test_reverse_round_trips() {
        assert_eq!(SortOrder::Ascending.reverse(), SortOrder::Descending);
        assert_eq!(SortOrder::Ascending.reverse().reverse(), SortOrder::Ascending);
        assert!(SortOrder::default().is_ascending());
    }
}
