//! Dense traversal of sparse storage.
//!
//! Two ways to walk a [`Sequence`]:
//! - [`Iter`] borrows its source, so the borrow checker already rules out
//!   mutation while it is alive.
//! - [`Cursor`] holds no borrow. It captures the source's generation when it is
//!   created and refuses to move once that generation has changed.

use std::iter::FusedIterator;

use crate::error::{Error, Result};
use crate::sequence::Sequence;

/// Borrowing iterator over every position of a sequence, defaults included.
pub struct Iter<'a, S: Sequence + ?Sized> {
    source: &'a S,
    front: usize,
    back: usize,
}

impl<'a, S: Sequence + ?Sized> Iter<'a, S> {
    #[inline]
    pub(crate) fn new(source: &'a S) -> Self {
        Self {
            source,
            front: 0,
            back: source.len(),
        }
    }
}

impl<S: Sequence + ?Sized> Clone for Iter<'_, S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source,
            front: self.front,
            back: self.back,
        }
    }
}

impl<S: Sequence + ?Sized> Iterator for Iter<'_, S> {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let index = self.front;
        self.front += 1;
        // in range by construction
        self.source.element(index).ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<S: Sequence + ?Sized> DoubleEndedIterator for Iter<'_, S> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.source.element(self.back).ok()
    }
}

impl<S: Sequence + ?Sized> ExactSizeIterator for Iter<'_, S> {}
impl<S: Sequence + ?Sized> FusedIterator for Iter<'_, S> {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    BeforeStart,
    At(usize),
    Ended,
}

/// Fail-fast, detached iteration state.
///
/// ```
/// use sparsela::{Error, SparseArray};
///
/// let mut array = SparseArray::from_values([0, 1, 2, 0])?;
/// let mut cursor = array.cursor();
/// assert!(cursor.advance(&array)?);
/// assert_eq!(cursor.current(&array)?, 0);
///
/// array.set(2, 5)?;
/// assert_eq!(cursor.advance(&array), Err(Error::CollectionModified));
/// # Ok::<(), Error>(())
/// ```
///
/// A cursor should only be driven with the source it was created from. It
/// records that source's length and generation, so a source of a different
/// length is rejected like a modified one. Another source that happens to
/// match both is not detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    position: Position,
    generation: u64,
    len: usize,
}

impl Cursor {
    /// Starts before the first element of `source`.
    pub fn new<S: Sequence + ?Sized>(source: &S) -> Self {
        Self {
            position: Position::BeforeStart,
            generation: source.generation(),
            len: source.len(),
        }
    }

    fn ensure_unmodified<S: Sequence + ?Sized>(&self, source: &S) -> Result<()> {
        if self.generation != source.generation() || self.len != source.len() {
            log::trace!(
                "cursor invalidated: generation {} -> {}, len {} -> {}",
                self.generation,
                source.generation(),
                self.len,
                source.len()
            );
            return Err(Error::CollectionModified);
        }
        Ok(())
    }

    /// Moves to the next position; `Ok(false)` once the sequence is exhausted.
    ///
    /// # Errors
    /// [`Error::CollectionModified`] if `source` changed since the cursor was
    /// created or last reset, or is not the same length as the original.
    pub fn advance<S: Sequence + ?Sized>(&mut self, source: &S) -> Result<bool> {
        self.ensure_unmodified(source)?;
        let next = match self.position {
            Position::BeforeStart => 0,
            Position::At(index) => index + 1,
            Position::Ended => return Ok(false),
        };
        if next < self.len {
            self.position = Position::At(next);
            Ok(true)
        } else {
            self.position = Position::Ended;
            Ok(false)
        }
    }

    /// Value at the current position.
    ///
    /// # Errors
    /// [`Error::CursorNotStarted`] before the first [`advance`](Self::advance),
    /// [`Error::CursorEnded`] after the last one.
    pub fn current<S: Sequence + ?Sized>(&self, source: &S) -> Result<S::Item> {
        match self.position {
            Position::BeforeStart => Err(Error::CursorNotStarted),
            Position::Ended => Err(Error::CursorEnded),
            Position::At(index) => source.element(index),
        }
    }

    /// Rewinds to before the first element.
    ///
    /// # Errors
    /// [`Error::CollectionModified`] if `source` changed; the cursor stays
    /// invalid.
    pub fn reset<S: Sequence + ?Sized>(&mut self, source: &S) -> Result<()> {
        self.ensure_unmodified(source)?;
        self.position = Position::BeforeStart;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SparseArray;

    #[test]
    fn iter_is_dense_and_exact() {
        let array = SparseArray::from_values([0, 3, 0, 4]).unwrap();
        let iter = array.iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.collect::<Vec<_>>(), vec![0, 3, 0, 4]);
        assert_eq!(array.iter().rev().collect::<Vec<_>>(), vec![4, 0, 3, 0]);
    }

    #[test]
    fn iter_restarts_from_scratch() {
        let array = SparseArray::from_values([1, 2]).unwrap();
        let first: Vec<_> = array.iter().collect();
        let second: Vec<_> = array.iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn cursor_walks_every_position() {
        let array = SparseArray::from_values([0, 1, 2, 0]).unwrap();
        let mut cursor = array.cursor();
        let mut seen = Vec::new();
        while cursor.advance(&array).unwrap() {
            seen.push(cursor.current(&array).unwrap());
        }
        assert_eq!(seen, vec![0, 1, 2, 0]);
        assert!(!cursor.advance(&array).unwrap());
    }

    #[test]
    fn current_before_start_and_after_end_fails() {
        let array = SparseArray::from_values([7]).unwrap();
        let mut cursor = array.cursor();
        assert_eq!(cursor.current(&array), Err(Error::CursorNotStarted));
        assert!(cursor.advance(&array).unwrap());
        assert_eq!(cursor.current(&array), Ok(7));
        assert!(!cursor.advance(&array).unwrap());
        assert_eq!(cursor.current(&array), Err(Error::CursorEnded));
    }

    #[test]
    fn mutation_mid_iteration_invalidates_cursor() {
        let mut array = SparseArray::from_values([0, 1, 2, 0]).unwrap();
        let mut cursor = array.cursor();
        assert!(cursor.advance(&array).unwrap());
        assert!(cursor.advance(&array).unwrap());
        array.set(2, 9).unwrap();
        let err = cursor.advance(&array).unwrap_err();
        assert_eq!(err, Error::CollectionModified);
        assert_eq!(err.kind(), crate::ErrorKind::InvalidOperation);
        assert_eq!(cursor.reset(&array), Err(Error::CollectionModified));
    }

    #[test]
    fn reset_rewinds_when_unmodified() {
        let array = SparseArray::from_values([5, 6]).unwrap();
        let mut cursor = array.cursor();
        assert!(cursor.advance(&array).unwrap());
        assert!(cursor.advance(&array).unwrap());
        cursor.reset(&array).unwrap();
        assert_eq!(cursor.current(&array), Err(Error::CursorNotStarted));
        assert!(cursor.advance(&array).unwrap());
        assert_eq!(cursor.current(&array), Ok(5));
    }

    #[test]
    fn cursor_rejects_a_source_of_another_length() {
        let short = SparseArray::from_values([1, 2]).unwrap();
        let long = SparseArray::from_values([1, 2, 3]).unwrap();
        assert_eq!(short.generation(), long.generation());
        let mut cursor = short.cursor();
        assert_eq!(cursor.advance(&long), Err(Error::CollectionModified));
        assert_eq!(cursor.reset(&long), Err(Error::CollectionModified));
        assert!(cursor.advance(&short).unwrap());
    }

    #[test]
    fn setting_an_unchanged_value_still_invalidates() {
        let mut array = SparseArray::from_values([1, 2]).unwrap();
        let mut cursor = array.cursor();
        array.set(0, 1).unwrap();
        assert_eq!(cursor.advance(&array), Err(Error::CollectionModified));
    }
}
