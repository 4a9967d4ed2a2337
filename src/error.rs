//! Error types for sparsela

use thiserror::Error;

/// Result type alias using sparsela's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of an [`Error`].
///
/// Every error is a program-logic fault: none of them is transient and none
/// should be retried without changing the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A numeric argument violates a construction precondition.
    ArgumentOutOfRange,
    /// An element access fell outside `[0, len)`.
    IndexOutOfRange,
    /// The call is well-formed but inconsistent with the current state.
    InvalidOperation,
}

/// Errors that can occur in sparsela operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A constructor or operation argument is outside its valid range
    #[error("Argument '{param}' out of range ({value}): {reason}")]
    ArgumentOutOfRange {
        /// The argument name
        param: &'static str,
        /// The rejected value
        value: usize,
        /// What the argument must satisfy
        reason: &'static str,
    },

    /// Index out of bounds
    #[error("Index {index} out of bounds for length {len}")]
    IndexOutOfRange {
        /// The invalid index
        index: usize,
        /// Length of the indexed sequence
        len: usize,
    },

    /// Dimension arithmetic produced a component below one
    #[error("The resultant value would be less than one")]
    ResultTooSmall,

    /// Dimension arithmetic left the representable range
    #[error("The resultant value does not fit in a dimension")]
    Overflow,

    /// Dimension arithmetic divided by zero
    #[error("Division of a dimension by zero")]
    DivideByZero,

    /// Inner dimensions do not agree for a dot product
    #[error("The dimensions {lhs} and {rhs} do not allow for a dot product operation")]
    DotMismatch {
        /// Left-hand side dimension, formatted
        lhs: String,
        /// Right-hand side dimension, formatted
        rhs: String,
    },

    /// Rows supplied to a matrix do not share one length
    #[error("Row {row} has {found} elements, expected {expected}")]
    RowLengthMismatch {
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        found: usize,
        /// Index of the offending row
        row: usize,
    },

    /// A column vector was supplied where a matrix row was expected
    #[error("Row {row} has dimension {dimension}, expected a single-row vector")]
    NotRowVector {
        /// Index of the offending row
        row: usize,
        /// Dimension of the offending vector, formatted
        dimension: String,
    },

    /// A matrix was assembled from zero rows
    #[error("A matrix needs at least one row")]
    EmptyRows,

    /// Copy target cannot hold the whole sequence from the start index
    #[error("Cannot copy to target: {needed} slots needed, {available} available from the start index")]
    DestinationTooSmall {
        /// Slots required
        needed: usize,
        /// Slots available after the start index
        available: usize,
    },

    /// Appending to a fixed-capacity array
    #[error("A fixed-capacity sparse array does not support appending")]
    FixedCapacity,

    /// The source changed after the cursor was created
    #[error("The collection has been modified")]
    CollectionModified,

    /// `current` was read before the first `advance`
    #[error("The cursor has not been started")]
    CursorNotStarted,

    /// `current` was read after the sequence was exhausted
    #[error("The cursor has ended")]
    CursorEnded,
}

impl Error {
    /// Classifies this error into the argument / index / state taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ArgumentOutOfRange { .. } => ErrorKind::ArgumentOutOfRange,
            Error::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Error::ResultTooSmall
            | Error::Overflow
            | Error::DivideByZero
            | Error::DotMismatch { .. }
            | Error::RowLengthMismatch { .. }
            | Error::NotRowVector { .. }
            | Error::EmptyRows
            | Error::DestinationTooSmall { .. }
            | Error::FixedCapacity
            | Error::CollectionModified
            | Error::CursorNotStarted
            | Error::CursorEnded => ErrorKind::InvalidOperation,
        }
    }

    pub(crate) fn argument(param: &'static str, value: usize, reason: &'static str) -> Self {
        Error::ArgumentOutOfRange { param, value, reason }
    }

    /// Fails with [`Error::IndexOutOfRange`] unless `index < len`.
    pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        Ok(())
    }
}
