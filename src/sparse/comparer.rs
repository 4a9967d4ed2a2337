//! Strategies deciding when a value counts as the default.

use std::cmp::Ordering;

/// Orders two values of `T`.
///
/// A sparse array asks its comparer whether a value equals `T::default()`;
/// equal values are elided instead of stored. Comparers are stateless and are
/// shared, never cloned, between an array and its clones.
pub trait Comparer<T>: Send + Sync {
    /// Signed ordering of `lhs` relative to `rhs`.
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering;

    /// `compare(lhs, rhs) == Ordering::Equal`.
    #[inline]
    fn equals(&self, lhs: &T, rhs: &T) -> bool {
        self.compare(lhs, rhs) == Ordering::Equal
    }
}

/// The type's own ordering.
///
/// Incomparable pairs (a `NaN` against anything) never compare equal, so a
/// `NaN` is always stored explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: PartialOrd> Comparer<T> for NaturalOrder {
    #[inline]
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        lhs.partial_cmp(rhs).unwrap_or(Ordering::Greater)
    }
}

impl<T, F> Comparer<T> for F
where
    F: Fn(&T, &T) -> Ordering + Send + Sync,
{
    #[inline]
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        self(lhs, rhs)
    }
}
