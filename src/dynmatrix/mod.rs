//! Heap-allocated dense matrices and vectors, and the factories that build them.
//!
//! [`DynMatrix`] stores its elements column-major in a `Vec<T>`; [`DynVector`]
//! wraps a one-row `DynMatrix`. Construction covers:
//!
//! - ragged row/column vector collections, padded with zeros
//!   ([`DynMatrix::from_row_vectors`], [`DynMatrix::from_col_vectors`]),
//! - canonical matrices ([`DynMatrix::identity`], [`DynMatrix::zeros`],
//!   [`DynMatrix::from_diagonal`]),
//! - random matrices with no all-zero row ([`DynMatrix::random_nonzero`]).

pub mod aliases;
mod factory;
mod ops;
mod random;
mod util;
mod vector;

pub use aliases::*;
pub use random::{RandomSettings, DEFAULT_MAX_ATTEMPTS};
pub use vector::DynVector;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::traits::{MatrixMut, MatrixRef, Scalar};

/// Errors from random matrix and vector generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationError {
    /// The sampling range `[lower, upper)` is empty.
    EmptyRange,
    /// A float range whose width is not finite (`f64::MIN..f64::MAX`, or an
    /// infinite bound).
    UnboundedRange,
    /// Every attempt produced at least one all-zero row.
    AttemptsExhausted {
        /// Number of full fills tried.
        attempts: usize,
    },
}

impl core::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GenerationError::EmptyRange => write!(f, "random range [lower, upper) is empty"),
            GenerationError::UnboundedRange => {
                write!(f, "random range [lower, upper) does not have a finite width")
            }
            GenerationError::AttemptsExhausted { attempts } => write!(
                f,
                "no fill without an all-zero row after {} attempts",
                attempts
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GenerationError {}

/// Dynamically-sized heap-allocated matrix.
///
/// Column-major `Vec<T>` storage. Always rectangular: every row has
/// `ncols` entries and every column `nrows`.
///
/// # Examples
///
/// ```
/// use numkit::DynMatrix;
///
/// let a = DynMatrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.nrows(), 2);
///
/// let b = DynMatrix::<f64>::identity(2, 3);
/// assert_eq!(b[(1, 1)], 1.0);
/// assert_eq!(b[(1, 2)], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DynMatrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> DynMatrix<T> {
    /// Additive identity: an `nrows x ncols` matrix of zeros.
    ///
    /// ```
    /// use numkit::DynMatrix;
    /// let m = DynMatrix::<i32>::zeros(2, 3);
    /// assert_eq!(m.nrows(), 2);
    /// assert_eq!(m.ncols(), 3);
    /// assert_eq!(m[(1, 2)], 0);
    /// ```
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self::fill(nrows, ncols, T::zero())
    }

    /// Create a matrix filled with a given value.
    pub fn fill(nrows: usize, ncols: usize, value: T) -> Self {
        Self {
            data: vec![value; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Multiplicative identity of any shape: one where `i == j`, zero elsewhere.
    ///
    /// For non-square shapes the diagonal stops at the shorter dimension.
    ///
    /// ```
    /// use numkit::DynMatrix;
    /// let id = DynMatrix::<f64>::identity(3, 2);
    /// assert_eq!(id[(0, 0)], 1.0);
    /// assert_eq!(id[(1, 1)], 1.0);
    /// assert_eq!(id[(2, 1)], 0.0);
    /// ```
    pub fn identity(nrows: usize, ncols: usize) -> Self {
        let mut m = Self::zeros(nrows, ncols);
        for i in 0..nrows.min(ncols) {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Square `n x n` identity.
    pub fn eye(n: usize) -> Self {
        Self::identity(n, n)
    }

    /// Square diagonal matrix with `diag` on the main diagonal.
    ///
    /// ```
    /// use numkit::DynMatrix;
    /// let d = DynMatrix::from_diagonal(&[3, 5]);
    /// assert_eq!(d[(0, 0)], 3);
    /// assert_eq!(d[(1, 1)], 5);
    /// assert_eq!(d[(0, 1)], 0);
    /// ```
    pub fn from_diagonal(diag: &[T]) -> Self {
        let n = diag.len();
        let mut m = Self::zeros(n, n);
        set_diagonal(&mut m, diag);
        m
    }

    /// Create a matrix from a flat slice in column-major order.
    ///
    /// Panics if `slice.len() != nrows * ncols`.
    pub fn from_slice(nrows: usize, ncols: usize, slice: &[T]) -> Self {
        assert_eq!(
            slice.len(),
            nrows * ncols,
            "slice length {} does not match {}x{} matrix",
            slice.len(),
            nrows,
            ncols,
        );
        Self {
            data: slice.to_vec(),
            nrows,
            ncols,
        }
    }

    /// Create a matrix from a flat slice in row-major order.
    ///
    /// Panics if `row_major.len() != nrows * ncols`.
    ///
    /// ```
    /// use numkit::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m[(0, 2)], 3.0);
    /// assert_eq!(m[(1, 0)], 4.0);
    /// ```
    pub fn from_rows(nrows: usize, ncols: usize, row_major: &[T]) -> Self {
        assert_eq!(
            row_major.len(),
            nrows * ncols,
            "slice length {} does not match {}x{} matrix",
            row_major.len(),
            nrows,
            ncols,
        );
        Self::from_fn(nrows, ncols, |i, j| row_major[i * ncols + j])
    }

    /// Create a matrix from an owned `Vec<T>` in column-major order.
    ///
    /// Panics if `data.len() != nrows * ncols`.
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            nrows * ncols,
            "vec length {} does not match {}x{} matrix",
            data.len(),
            nrows,
            ncols,
        );
        Self { data, nrows, ncols }
    }
}

impl<T> DynMatrix<T> {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(nrows, ncols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Whether either dimension is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Column-major view of the elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable column-major view of the elements.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use numkit::DynMatrix;
    /// let m = DynMatrix::from_fn(3, 3, |i, j| if i == j { 1.0_f64 } else { 0.0 });
    /// assert_eq!(m[(0, 0)], 1.0);
    /// assert_eq!(m[(0, 1)], 0.0);
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for j in 0..ncols {
            for i in 0..nrows {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }
}

/// Write `diag` onto the main diagonal of `m`, leaving other cells alone.
pub(crate) fn set_diagonal<T: Copy>(m: &mut impl MatrixMut<T>, diag: &[T]) {
    let n = diag.len().min(m.nrows()).min(m.ncols());
    for (i, &d) in diag.iter().take(n).enumerate() {
        *m.get_mut(i, i) = d;
    }
}

// ── MatrixRef / MatrixMut ───────────────────────────────────────────

impl<T> MatrixRef<T> for DynMatrix<T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        &self.data[col * self.nrows + row]
    }
}

impl<T> MatrixMut<T> for DynMatrix<T> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[col * self.nrows + row]
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for DynMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.nrows,
            self.ncols,
        );
        &self.data[col * self.nrows + row]
    }
}

impl<T> IndexMut<(usize, usize)> for DynMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.nrows,
            self.ncols,
        );
        &mut self.data[col * self.nrows + row]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros() {
        let m = DynMatrix::<f64>::zeros(3, 4);
        assert_eq!(m.shape(), (3, 4));
        for i in 0..3 {
            for j in 0..4 {
                assert_eq!(m[(i, j)], 0.0);
            }
        }
    }

    #[test]
    fn zeros_empty() {
        let m = DynMatrix::<i32>::zeros(0, 5);
        assert_eq!(m.shape(), (0, 5));
        assert!(m.is_empty());
    }

    #[test]
    fn fill() {
        let m = DynMatrix::fill(2, 3, 7_u16);
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(m[(i, j)], 7);
            }
        }
    }

    #[test]
    fn identity_square() {
        let m = DynMatrix::<f64>::eye(3);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(m[(i, j)], expected);
            }
        }
    }

    #[test]
    fn identity_rectangular() {
        let wide = DynMatrix::<i64>::identity(2, 4);
        let tall = DynMatrix::<i64>::identity(4, 2);
        for i in 0..2 {
            for j in 0..4 {
                let expected = if i == j { 1 } else { 0 };
                assert_eq!(wide[(i, j)], expected);
                assert_eq!(tall[(j, i)], expected);
            }
        }
    }

    #[test]
    fn from_diagonal() {
        let m = DynMatrix::from_diagonal(&[1.5_f32, -2.0, 4.0]);
        assert_eq!(m.shape(), (3, 3));
        assert_eq!(m[(2, 2)], 4.0);
        assert_eq!(m[(1, 1)], -2.0);
        assert_eq!(m[(0, 2)], 0.0);
    }

    #[test]
    fn from_rows() {
        let m = DynMatrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(1, 0)], 4.0);
        assert_eq!(m[(1, 2)], 6.0);
    }

    #[test]
    #[should_panic(expected = "slice length")]
    fn from_rows_wrong_length() {
        let _ = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn from_slice_column_major() {
        let m = DynMatrix::from_slice(2, 2, &[1, 3, 2, 4]);
        assert_eq!(m[(0, 0)], 1);
        assert_eq!(m[(1, 0)], 3);
        assert_eq!(m[(0, 1)], 2);
        assert_eq!(m.as_slice(), &[1, 3, 2, 4]);
    }

    #[test]
    fn from_vec() {
        let m = DynMatrix::from_vec(2, 2, vec![1.0, 3.0, 2.0, 4.0]);
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(1, 1)], 4.0);
    }

    #[test]
    fn from_fn() {
        let m = DynMatrix::from_fn(3, 3, |i, j| (i * 3 + j) as f64);
        assert_eq!(m[(0, 0)], 0.0);
        assert_eq!(m[(1, 1)], 4.0);
        assert_eq!(m[(2, 2)], 8.0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_out_of_bounds() {
        let m = DynMatrix::<f64>::zeros(2, 2);
        let _ = m[(2, 0)];
    }

    #[test]
    fn matrix_ref_trait() {
        let m = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        fn trace<T: Scalar>(m: &impl MatrixRef<T>) -> T {
            let mut sum = T::zero();
            let n = m.nrows().min(m.ncols());
            for i in 0..n {
                sum = sum + *m.get(i, i);
            }
            sum
        }
        assert_eq!(trace(&m), 5.0);
        assert_eq!(MatrixRef::shape(&m), (2, 2));
    }

    #[test]
    fn set_diagonal_clips_to_shape() {
        let mut m = DynMatrix::<i32>::zeros(2, 3);
        set_diagonal(&mut m, &[9, 8, 7]);
        assert_eq!(m[(0, 0)], 9);
        assert_eq!(m[(1, 1)], 8);
        assert_eq!(m.sum(), 17);
    }

    #[test]
    fn generation_error_display() {
        let s = format!("{}", GenerationError::AttemptsExhausted { attempts: 3 });
        assert!(s.contains("3 attempts"));
    }
}
