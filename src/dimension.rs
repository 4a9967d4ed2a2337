//! Shape bookkeeping for vectors and matrices.
//!
//! A [`Dimension`] is an immutable `(rows, columns)` pair. Both components are
//! at least one, except for the [`Dimension::EMPTY`] sentinel. Arithmetic never
//! hands back a partially valid shape: if either resulting component would
//! drop below one the whole operation fails.

use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The `(rows, columns)` shape of a vector or matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "DimensionRepr", into = "DimensionRepr"))]
pub struct Dimension {
    rows: usize,
    columns: usize,
}

impl Dimension {
    /// The all-zero sentinel standing for "no shape".
    pub const EMPTY: Dimension = Dimension { rows: 0, columns: 0 };

    /// Creates a validated dimension.
    ///
    /// # Errors
    /// [`Error::ArgumentOutOfRange`] if `rows` or `columns` is zero.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        if rows < 1 {
            return Err(Error::argument("rows", rows, "must be at least 1"));
        }
        if columns < 1 {
            return Err(Error::argument("columns", columns, "must be at least 1"));
        }
        Ok(Self { rows, columns })
    }

    /// Shape whose components are already known to be at least one.
    pub(crate) fn square(n: usize) -> Self {
        debug_assert!(n >= 1);
        Self { rows: n, columns: n }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Whether this is the [`Dimension::EMPTY`] sentinel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 && self.columns == 0
    }

    /// Total number of cells, `rows * columns`, saturating at `usize::MAX`.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.saturating_mul(self.columns)
    }

    /// `rows * columns` for shapes that must be addressable cell by cell.
    ///
    /// # Errors
    /// [`Error::Overflow`] if the product does not fit in `usize`.
    pub fn checked_len(&self) -> Result<usize> {
        self.rows.checked_mul(self.columns).ok_or(Error::Overflow)
    }

    /// Whether `rows == columns`.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// Swaps rows and columns. Never fails: both components are already valid.
    #[must_use]
    pub fn transpose(&self) -> Dimension {
        Dimension {
            rows: self.columns,
            columns: self.rows,
        }
    }

    /// Shape of `self · other`.
    ///
    /// Only the inner dimensions are checked; the product itself is not
    /// computed anywhere in this crate.
    ///
    /// # Errors
    /// [`Error::DotMismatch`] unless `self.columns == other.rows`.
    pub fn dot(&self, other: &Dimension) -> Result<Dimension> {
        if self.columns != other.rows {
            return Err(Error::DotMismatch {
                lhs: self.to_string(),
                rhs: other.to_string(),
            });
        }
        Ok(Dimension {
            rows: self.rows,
            columns: other.columns,
        })
    }

    /// [`Dimension::dot`] against a plain `(rows, columns)` pair.
    ///
    /// # Errors
    /// [`Error::DotMismatch`] on an inner mismatch, then
    /// [`Error::ArgumentOutOfRange`] if the pair has zero columns.
    pub fn dot_pair(&self, other: (usize, usize)) -> Result<Dimension> {
        let (rows, columns) = other;
        if self.columns != rows {
            return Err(Error::DotMismatch {
                lhs: self.to_string(),
                rhs: format!("({rows}, {columns})"),
            });
        }
        Dimension::new(self.rows, columns)
    }

    fn combine(self, (r, c): (i128, i128), op: fn(i128, i128) -> Option<i128>) -> Result<Dimension> {
        let rows = Self::component(op(self.rows as i128, r))?;
        let columns = Self::component(op(self.columns as i128, c))?;
        Ok(Dimension { rows, columns })
    }

    fn component(value: Option<i128>) -> Result<usize> {
        let value = value.ok_or(Error::Overflow)?;
        if value < 1 {
            return Err(Error::ResultTooSmall);
        }
        usize::try_from(value).map_err(|_| Error::Overflow)
    }
}

/// Right-hand operands accepted by the arithmetic operators on [`Dimension`].
///
/// A scalar applies to both components; pairs and dimensions apply
/// component-wise.
pub trait DimensionOperand {
    /// `(rows, columns)` contribution of this operand.
    fn components(self) -> (i128, i128);
}

impl DimensionOperand for i32 {
    fn components(self) -> (i128, i128) {
        (i128::from(self), i128::from(self))
    }
}

impl DimensionOperand for Dimension {
    fn components(self) -> (i128, i128) {
        (self.rows as i128, self.columns as i128)
    }
}

impl DimensionOperand for (i32, i32) {
    fn components(self) -> (i128, i128) {
        (i128::from(self.0), i128::from(self.1))
    }
}

impl DimensionOperand for (usize, usize) {
    fn components(self) -> (i128, i128) {
        (self.0 as i128, self.1 as i128)
    }
}

macro_rules! dimension_arithmetic {
    ($($trait:ident :: $method:ident => $op:expr;)*) => {$(
        impl<R: DimensionOperand> $trait<R> for Dimension {
            type Output = Result<Dimension>;

            fn $method(self, rhs: R) -> Result<Dimension> {
                self.combine(rhs.components(), $op)
            }
        }
    )*};
}

dimension_arithmetic! {
    Add::add => i128::checked_add;
    Sub::sub => i128::checked_sub;
    Mul::mul => i128::checked_mul;
}

impl<R: DimensionOperand> Div<R> for Dimension {
    type Output = Result<Dimension>;

    fn div(self, rhs: R) -> Result<Dimension> {
        let (r, c) = rhs.components();
        if r == 0 || c == 0 {
            return Err(Error::DivideByZero);
        }
        self.combine((r, c), i128::checked_div)
    }
}

impl Hash for Dimension {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // rows in the high half, columns in the low half
        (((self.rows as u64) << 32) | self.columns as u64).hash(state);
    }
}

impl PartialEq<(usize, usize)> for Dimension {
    fn eq(&self, other: &(usize, usize)) -> bool {
        self.rows == other.0 && self.columns == other.1
    }
}

impl PartialEq<Dimension> for (usize, usize) {
    fn eq(&self, other: &Dimension) -> bool {
        other == self
    }
}

impl TryFrom<(usize, usize)> for Dimension {
    type Error = Error;

    fn try_from((rows, columns): (usize, usize)) -> Result<Self> {
        Dimension::new(rows, columns)
    }
}

impl From<Dimension> for (usize, usize) {
    fn from(dim: Dimension) -> Self {
        (dim.rows, dim.columns)
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rows, self.columns)
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct DimensionRepr {
    rows: usize,
    columns: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<DimensionRepr> for Dimension {
    type Error = Error;

    fn try_from(repr: DimensionRepr) -> Result<Self> {
        if repr.rows == 0 && repr.columns == 0 {
            return Ok(Dimension::EMPTY);
        }
        Dimension::new(repr.rows, repr.columns)
    }
}

#[cfg(feature = "serde")]
impl From<Dimension> for DimensionRepr {
    fn from(dim: Dimension) -> Self {
        DimensionRepr {
            rows: dim.rows,
            columns: dim.columns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;
    use std::collections::hash_map::DefaultHasher;

    fn dim(rows: usize, columns: usize) -> Dimension {
        Dimension::new(rows, columns).unwrap()
    }

    fn hash_of(d: &Dimension) -> u64 {
        let mut hasher = DefaultHasher::new();
        d.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn construction_keeps_components() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        for _ in 0..200 {
            let (r, c) = (rng.gen_range(1..500), rng.gen_range(1..500));
            let d = dim(r, c);
            assert_eq!((d.rows(), d.columns()), (r, c));
            assert!(!d.is_empty());
            assert_eq!(d, dim(r, c));
            assert_eq!(d, (r, c));
            assert_eq!((r, c), d);
            assert_eq!(hash_of(&d), hash_of(&dim(r, c)));
        }
    }

    #[test]
    fn zero_components_are_rejected() {
        assert_eq!(Dimension::new(0, 1).unwrap_err().kind(), ErrorKind::ArgumentOutOfRange);
        assert_eq!(Dimension::new(1, 0).unwrap_err().kind(), ErrorKind::ArgumentOutOfRange);
        assert!(Dimension::try_from((0, 2)).is_err());
        assert_eq!(Dimension::try_from((1, 2)).unwrap(), dim(1, 2));
    }

    #[test]
    fn empty_sentinel() {
        assert!(Dimension::EMPTY.is_empty());
        assert!(Dimension::default().is_empty());
        assert_eq!(Dimension::EMPTY.len(), 0);
    }

    #[test]
    fn cell_count_never_wraps() {
        let huge = dim(usize::MAX, 2);
        assert_eq!(huge.len(), usize::MAX);
        assert_eq!(huge.checked_len(), Err(Error::Overflow));
        assert_eq!(dim(3, 4).checked_len(), Ok(12));
    }

    #[test]
    fn transpose_is_an_involution() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(11);
        for _ in 0..200 {
            let d = dim(rng.gen_range(1..100), rng.gen_range(1..100));
            assert_eq!(d.transpose().transpose(), d);
            assert_eq!(d.transpose().rows(), d.columns());
        }
    }

    #[test]
    fn dot_checks_inner_dimensions() {
        assert_eq!(dim(2, 3).dot(&dim(3, 4)).unwrap(), dim(2, 4));
        let err = dim(2, 3).dot(&dim(5, 4)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOperation);
        assert!(matches!(err, Error::DotMismatch { .. }));
        assert_ne!(err, Error::ResultTooSmall);
    }

    #[test]
    fn dot_pair_validates_both_sides() {
        assert_eq!(dim(2, 3).dot_pair((3, 4)).unwrap(), dim(2, 4));
        assert!(matches!(dim(2, 3).dot_pair((4, 4)), Err(Error::DotMismatch { .. })));
        assert_eq!(
            dim(2, 3).dot_pair((3, 0)).unwrap_err().kind(),
            ErrorKind::ArgumentOutOfRange
        );
    }

    #[test]
    fn addition() {
        assert_eq!((dim(1, 2) + dim(2, 3)).unwrap(), dim(3, 5));
        assert_eq!((dim(2, 3) + 1).unwrap(), dim(3, 4));
        assert_eq!((dim(1, 2) + (2, 3)).unwrap(), dim(3, 5));
        assert_eq!(dim(2, 1) + -1, Err(Error::ResultTooSmall));
        assert_eq!(dim(1, 2) + -1, Err(Error::ResultTooSmall));
        assert_eq!(dim(2, 2) + (1, -2), Err(Error::ResultTooSmall));
    }

    #[test]
    fn subtraction() {
        assert_eq!((dim(4, 5) - dim(1, 2)).unwrap(), dim(3, 3));
        assert_eq!((dim(4, 5) - 2).unwrap(), dim(2, 3));
        assert_eq!((dim(4, 5) - (3, 3)).unwrap(), dim(1, 2));
        assert_eq!(dim(2, 2) - dim(2, 1), Err(Error::ResultTooSmall));
        assert_eq!(dim(3, 1) - 1, Err(Error::ResultTooSmall));
    }

    #[test]
    fn multiplication() {
        assert_eq!((dim(2, 3) * 2).unwrap(), dim(4, 6));
        assert_eq!((dim(2, 3) * dim(3, 2)).unwrap(), dim(6, 6));
        assert_eq!((dim(2, 3) * (1, 2)).unwrap(), dim(2, 6));
        assert_eq!(dim(2, 3) * 0, Err(Error::ResultTooSmall));
        assert_eq!(dim(2, 3) * -1, Err(Error::ResultTooSmall));
    }

    #[test]
    fn division() {
        assert_eq!((dim(4, 2) / dim(2, 2)).unwrap(), dim(2, 1));
        assert_eq!((dim(3, 2) / 2).unwrap(), dim(1, 1));
        assert_eq!((dim(4, 3) / (2, 2)).unwrap(), dim(2, 1));
        assert_eq!(dim(2, 2) / -1, Err(Error::ResultTooSmall));
        assert_eq!(dim(4, 2) / (2, 3), Err(Error::ResultTooSmall));
        assert_eq!(dim(4, 2) / 0, Err(Error::DivideByZero));
    }

    #[test]
    fn pair_conversions() {
        let pair: (usize, usize) = dim(3, 4).into();
        assert_eq!(pair, (3, 4));
        assert_eq!(dim(3, 4).to_string(), "(3, 4)");
    }
}
