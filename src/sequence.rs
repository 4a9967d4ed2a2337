//! The contract shared by everything that produces a dense sequence.

use crate::error::Result;

/// A finite, index-addressable, versioned sequence of values.
///
/// Implemented by [`SparseArray`](crate::SparseArray), [`Vector`](crate::Vector)
/// and [`Matrix`](crate::Matrix). [`Cursor`](crate::Cursor) and
/// [`DebugView`](crate::DebugView) consume it.
pub trait Sequence {
    /// Element produced at each position.
    type Item;

    /// Number of positions, defaults included.
    fn len(&self) -> usize;

    /// Always `false`: every sequence in this crate has at least one slot.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Modification counter; moves forward on every structural mutation.
    fn generation(&self) -> u64;

    /// Value at `index`, default included.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) unless `index < len()`.
    fn element(&self, index: usize) -> Result<Self::Item>;
}
