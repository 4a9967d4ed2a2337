//! Fixed-length numeric vectors.
//!
//! A [`Vector`] is a [`SparseArray`] of known length plus matrix-compatible
//! shape metadata: `1 × N` as constructed, `N × 1` once transposed.
//! Transposition only reinterprets the shape, the element order never moves.

use crate::dimension::Dimension;
use crate::error::{Error, Result};
use crate::scalar::Scalar;
use crate::sequence::Sequence;
use crate::sparse::{Cursor, Iter, SparseArray};

/// A `1 × N` (or, transposed, `N × 1`) sequence of numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T = f64> {
    dimension: Dimension,
    storage: SparseArray<T>,
}

impl<T: Scalar> Vector<T> {
    /// Zero vector of `length` elements.
    ///
    /// # Errors
    /// [`Error::ArgumentOutOfRange`] if `length` is zero.
    pub fn new(length: usize) -> Result<Self> {
        let dimension = Dimension::new(1, length)?;
        Ok(Self {
            dimension,
            storage: SparseArray::new(length)?,
        })
    }

    /// Row vector holding `values` in order.
    ///
    /// # Errors
    /// [`Error::ArgumentOutOfRange`] if `values` is empty.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Result<Self> {
        let storage = SparseArray::from_values(values)?;
        Ok(Self {
            dimension: Dimension::new(1, storage.capacity())?,
            storage,
        })
    }

    pub(crate) fn from_storage(dimension: Dimension, storage: SparseArray<T>) -> Self {
        debug_assert_eq!(dimension.len(), storage.capacity());
        Self { dimension, storage }
    }

    /// Shape: `(1, len)` for a row vector, `(len, 1)` once transposed.
    #[inline]
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.capacity()
    }

    /// Always `false`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether the shape is `N × 1` with `N > 1`.
    #[inline]
    pub fn is_column(&self) -> bool {
        self.dimension.rows() > 1
    }

    /// Element at `index`.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] unless `index < len()`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<T> {
        self.storage.get(index)
    }

    /// Overwrites the element at `index`.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] unless `index < len()`.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        self.storage.set(index, value)
    }

    /// Number of non-zero elements actually stored.
    #[inline]
    pub fn sparsity(&self) -> usize {
        self.storage.sparsity()
    }

    /// Dense copy of the elements.
    pub fn to_vec(&self) -> Vec<T> {
        self.storage.to_vec()
    }

    /// Borrowing iterator over the elements.
    pub fn iter(&self) -> Iter<'_, Self> {
        Iter::new(self)
    }

    /// Detached, fail-fast iteration state for this vector.
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self)
    }

    /// Same values, swapped shape.
    #[must_use]
    pub fn transpose(&self) -> Vector<T> {
        Vector {
            dimension: self.dimension.transpose(),
            storage: self.storage.clone(),
        }
    }

    pub(crate) fn storage(&self) -> &SparseArray<T> {
        &self.storage
    }
}

impl<T: Scalar> Sequence for Vector<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        self.storage.capacity()
    }

    #[inline]
    fn generation(&self) -> u64 {
        self.storage.generation()
    }

    #[inline]
    fn element(&self, index: usize) -> Result<T> {
        self.storage.get(index)
    }
}

impl<T: Scalar> TryFrom<Vec<T>> for Vector<T> {
    type Error = Error;

    fn try_from(values: Vec<T>) -> Result<Self> {
        Vector::from_values(values)
    }
}

impl<T: Scalar> TryFrom<&[T]> for Vector<T> {
    type Error = Error;

    fn try_from(values: &[T]) -> Result<Self> {
        Vector::from_values(values.iter().copied())
    }
}

impl<'a, T: Scalar> IntoIterator for &'a Vector<T> {
    type Item = T;
    type IntoIter = Iter<'a, Vector<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Vector;
    use crate::dimension::Dimension;
    use crate::scalar::Scalar;
    use crate::sparse::SparseArray;

    #[derive(Serialize)]
    struct VectorRef<'a, T> {
        dimension: Dimension,
        values: &'a SparseArray<T>,
    }

    #[derive(Deserialize)]
    #[serde(bound(deserialize = "T: Scalar + Deserialize<'de>"))]
    struct VectorRepr<T> {
        dimension: Dimension,
        values: SparseArray<T>,
    }

    impl<T: Scalar + Serialize> Serialize for Vector<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            VectorRef {
                dimension: self.dimension,
                values: &self.storage,
            }
            .serialize(serializer)
        }
    }

    impl<'de, T> Deserialize<'de> for Vector<T>
    where
        T: Scalar + Deserialize<'de>,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let repr = VectorRepr::<T>::deserialize(deserializer)?;
            let dimension = repr.dimension;
            let one_wide = dimension.rows() == 1 || dimension.columns() == 1;
            if !one_wide || dimension.len() != repr.values.capacity() {
                return Err(D::Error::custom(format!(
                    "dimension {dimension} does not describe a vector of {} elements",
                    repr.values.capacity()
                )));
            }
            Ok(Vector::from_storage(dimension, repr.values))
        }
    }
}
