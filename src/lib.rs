//! Dimension-checked vectors and matrices over a memory-conserving sparse array.
//!
//! The storage engine is [`SparseArray`]: a fixed-capacity, index-addressable
//! container that keeps only the values its [`Comparer`] considers different
//! from the default. [`Vector`] and [`Matrix`] layer shape metadata
//! ([`Dimension`]) on top of it.
//!
//! ```
//! use sparsela::{Matrix, Vector};
//!
//! let m = Matrix::from_rows(&[
//!     Vector::from_values([1, 2, 2])?,
//!     Vector::from_values([3, 4, 4])?,
//! ])?;
//! assert_eq!(m.transpose().row(0)?.to_vec(), vec![1, 3]);
//! assert_eq!(m.identity()?.dimension(), (3, 3));
//! # Ok::<(), sparsela::Error>(())
//! ```

mod dimension;
mod display;
mod error;
mod matrix;
mod scalar;
mod sequence;
mod sparse;
mod vector;

// dev-dependencies used only by benches or feature-gated tests
#[cfg(test)]
use criterion as _;
#[cfg(all(test, not(feature = "serde")))]
use serde_json as _;

pub use crate::dimension::{Dimension, DimensionOperand};
pub use crate::display::DebugView;
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::matrix::Matrix;
pub use crate::scalar::Scalar;
pub use crate::sequence::Sequence;
pub use crate::sparse::{Comparer, Cursor, Iter, NaturalOrder, SparseArray};
pub use crate::vector::Vector;
