//! Dense-looking, sparsely stored matrices.
//!
//! A [`Matrix`] keeps every cell in one flat [`SparseArray`] addressed by
//! `row * columns + column`. Rows and columns handed out as [`Vector`]s are
//! materialised copies; writes go through [`Matrix::set`] or
//! [`Matrix::set_row`].

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::dimension::Dimension;
use crate::error::{Error, Result};
use crate::scalar::Scalar;
use crate::sequence::Sequence;
use crate::sparse::{Cursor, Iter, SparseArray};
use crate::vector::Vector;

/// An `R × C` grid of numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T = f64> {
    dimension: Dimension,
    storage: SparseArray<T>,
}

impl<T: Scalar> Matrix<T> {
    /// Zero matrix of `rows × columns`.
    ///
    /// # Errors
    /// [`Error::ArgumentOutOfRange`] if either is zero.
    pub fn zeros(rows: usize, columns: usize) -> Result<Self> {
        Self::with_dimension(Dimension::new(rows, columns)?)
    }

    /// Zero matrix of the given shape.
    ///
    /// # Errors
    /// [`Error::ArgumentOutOfRange`] for [`Dimension::EMPTY`].
    pub fn with_dimension(dimension: Dimension) -> Result<Self> {
        if dimension.is_empty() {
            return Err(Error::argument("dimension", 0, "must not be empty"));
        }
        log::debug!("zero matrix {dimension}");
        Ok(Self {
            dimension,
            storage: SparseArray::new(dimension.checked_len()?)?,
        })
    }

    /// Stacks `rows` top to bottom.
    ///
    /// # Errors
    /// [`Error::EmptyRows`] for an empty slice, [`Error::NotRowVector`] if a
    /// vector is shaped `N × 1`, [`Error::RowLengthMismatch`] if the rows
    /// differ in column count, [`Error::Overflow`] if the cell count does not
    /// fit in `usize`.
    pub fn from_rows(rows: &[Vector<T>]) -> Result<Self> {
        let first = rows.first().ok_or(Error::EmptyRows)?;
        let expected = first.dimension().columns();
        for (row, vector) in rows.iter().enumerate() {
            check_row(row, vector, expected)?;
        }

        let dimension = Dimension::new(rows.len(), expected)?;
        let len = dimension.checked_len()?;
        let mut values = BTreeMap::new();
        for (r, vector) in rows.iter().enumerate() {
            let offset = r * expected;
            values.extend(vector.storage().entries().map(|(c, v)| (offset + c, *v)));
        }
        log::debug!("matrix {dimension} assembled from rows, sparsity {}", values.len());
        Ok(Self {
            dimension,
            storage: SparseArray::from_parts(len, values, Arc::clone(first.storage().comparer())),
        })
    }

    /// Shape of the matrix.
    #[inline]
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.dimension.rows()
    }

    /// Number of columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.dimension.columns()
    }

    /// `rows == columns`.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.dimension.is_square()
    }

    /// Number of non-zero cells actually stored.
    #[inline]
    pub fn sparsity(&self) -> usize {
        self.storage.sparsity()
    }

    fn offset(&self, row: usize, column: usize) -> Result<usize> {
        Error::check_index(row, self.rows())?;
        Error::check_index(column, self.columns())?;
        Ok(row * self.columns() + column)
    }

    /// Cell at `(row, column)`.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] if either coordinate is outside the shape.
    pub fn get(&self, row: usize, column: usize) -> Result<T> {
        self.storage.get(self.offset(row, column)?)
    }

    /// Overwrites the cell at `(row, column)`.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] if either coordinate is outside the shape.
    pub fn set(&mut self, row: usize, column: usize, value: T) -> Result<()> {
        let offset = self.offset(row, column)?;
        self.storage.set(offset, value)
    }

    /// Copy of row `row` as a `1 × columns` vector.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] unless `row < rows()`.
    pub fn row(&self, row: usize) -> Result<Vector<T>> {
        Error::check_index(row, self.rows())?;
        let columns = self.columns();
        let start = row * columns;
        let values = self
            .storage
            .entries_in(start..start + columns)
            .map(|(k, v)| (k - start, *v))
            .collect();
        Ok(Vector::from_storage(
            Dimension::new(1, columns)?,
            SparseArray::from_parts(columns, values, Arc::clone(self.storage.comparer())),
        ))
    }

    /// Copy of column `column` as a `rows × 1` vector.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] unless `column < columns()`.
    pub fn column(&self, column: usize) -> Result<Vector<T>> {
        Error::check_index(column, self.columns())?;
        let columns = self.columns();
        let values = self
            .storage
            .entries()
            .filter(|(k, _)| k % columns == column)
            .map(|(k, v)| (k / columns, *v))
            .collect();
        Ok(Vector::from_storage(
            Dimension::new(self.rows(), 1)?,
            SparseArray::from_parts(self.rows(), values, Arc::clone(self.storage.comparer())),
        ))
    }

    /// Replaces row `row` with the elements of `values`.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] unless `row < rows()`;
    /// [`Error::NotRowVector`] for an `N × 1` vector;
    /// [`Error::RowLengthMismatch`] unless `values` has `columns()` columns.
    /// Nothing is written on error.
    pub fn set_row(&mut self, row: usize, values: &Vector<T>) -> Result<()> {
        Error::check_index(row, self.rows())?;
        check_row(row, values, self.columns())?;
        let start = row * self.columns();
        for (column, value) in values.iter().enumerate() {
            self.storage.set(start + column, value)?;
        }
        Ok(())
    }

    /// `columns × columns` identity, whatever the row count of `self`.
    ///
    /// # Errors
    /// [`Error::Overflow`] if `columns²` does not fit in `usize`.
    pub fn identity(&self) -> Result<Matrix<T>> {
        let n = self.columns();
        let dimension = Dimension::square(n);
        let len = dimension.checked_len()?;
        let values = (0..n).map(|i| (i * n + i, T::one())).collect();
        log::debug!("identity {n}x{n}");
        Ok(Matrix {
            dimension,
            storage: SparseArray::from_parts(len, values, Arc::clone(self.storage.comparer())),
        })
    }

    /// New matrix with `m[j][i] = self[i][j]`.
    #[must_use]
    pub fn transpose(&self) -> Matrix<T> {
        let (rows, columns) = (self.rows(), self.columns());
        let values = self
            .storage
            .entries()
            .map(|(k, v)| {
                let (i, j) = (k / columns, k % columns);
                (j * rows + i, *v)
            })
            .collect();
        log::debug!("transpose {} -> {}", self.dimension, self.dimension.transpose());
        Matrix {
            dimension: self.dimension.transpose(),
            storage: SparseArray::from_parts(self.storage.capacity(), values, Arc::clone(self.storage.comparer())),
        }
    }

    /// Every cell in row-major order.
    pub fn to_vec(&self) -> Vec<T> {
        self.storage.to_vec()
    }

    /// Borrowing row-major iterator over every cell.
    pub fn iter(&self) -> Iter<'_, Self> {
        Iter::new(self)
    }

    /// Detached, fail-fast row-major iteration state.
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self)
    }
}

/// Fails unless `vector` is a `1 × expected` row.
fn check_row<T: Scalar>(row: usize, vector: &Vector<T>, expected: usize) -> Result<()> {
    let dimension = vector.dimension();
    if dimension.rows() != 1 {
        return Err(Error::NotRowVector {
            row,
            dimension: dimension.to_string(),
        });
    }
    if dimension.columns() != expected {
        return Err(Error::RowLengthMismatch {
            expected,
            found: dimension.columns(),
            row,
        });
    }
    Ok(())
}

impl<T: Scalar> Sequence for Matrix<T> {
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

impl<T: Scalar> TryFrom<(usize, usize)> for Matrix<T> {
    type Error = Error;

    fn try_from((rows, columns): (usize, usize)) -> Result<Self> {
        Matrix::zeros(rows, columns)
    }
}

impl<T: Scalar> TryFrom<Dimension> for Matrix<T> {
    type Error = Error;

    fn try_from(dimension: Dimension) -> Result<Self> {
        Matrix::with_dimension(dimension)
    }
}

impl<'a, T: Scalar> IntoIterator for &'a Matrix<T> {
    type Item = T;
    type IntoIter = Iter<'a, Matrix<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Matrix;
    use crate::dimension::Dimension;
    use crate::scalar::Scalar;
    use crate::sparse::SparseArray;

    #[derive(Serialize)]
    struct MatrixRef<'a, T> {
        dimension: Dimension,
        values: &'a SparseArray<T>,
    }

    #[derive(Deserialize)]
    #[serde(bound(deserialize = "T: Scalar + Deserialize<'de>"))]
    struct MatrixRepr<T> {
        dimension: Dimension,
        values: SparseArray<T>,
    }

    impl<T: Scalar + Serialize> Serialize for Matrix<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            MatrixRef {
                dimension: self.dimension,
                values: &self.storage,
            }
            .serialize(serializer)
        }
    }

    impl<'de, T> Deserialize<'de> for Matrix<T>
    where
        T: Scalar + Deserialize<'de>,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let repr = MatrixRepr::<T>::deserialize(deserializer)?;
            let cells = repr.dimension.checked_len().ok();
            if repr.dimension.is_empty() || cells != Some(repr.values.capacity()) {
                return Err(D::Error::custom(format!(
                    "dimension {} does not describe {} cells",
                    repr.dimension,
                    repr.values.capacity()
                )));
            }
            Ok(Matrix {
                dimension: repr.dimension,
                storage: repr.values,
            })
        }
    }
}
