use alloc::vec::Vec;
use core::fmt::{self, Write as _};

use crate::traits::Scalar;

use super::vector::DynVector;
use super::DynMatrix;

impl<T: Scalar> DynMatrix<T> {
    /// Sum of all elements.
    ///
    /// ```
    /// use numkit::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 2, &[1, 2, 3, 4]);
    /// assert_eq!(m.sum(), 10);
    /// ```
    pub fn sum(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &x| acc + x)
    }

    /// Copy of row `i`.
    ///
    /// ```
    /// use numkit::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 3, &[1, 2, 3, 4, 5, 6]);
    /// assert_eq!(m.row(1).as_slice(), &[4, 5, 6]);
    /// ```
    pub fn row(&self, i: usize) -> DynVector<T> {
        assert!(i < self.nrows, "row {} out of bounds for {} rows", i, self.nrows);
        DynVector::from_vec((0..self.ncols).map(|j| self[(i, j)]).collect())
    }

    /// Copy of column `j`.
    pub fn col(&self, j: usize) -> DynVector<T> {
        assert!(j < self.ncols, "column {} out of bounds for {} columns", j, self.ncols);
        let start = j * self.nrows;
        DynVector::from_slice(&self.data[start..start + self.nrows])
    }
}

impl<T> DynMatrix<T> {
    /// Apply `f` to every element, producing a new matrix of the same shape.
    ///
    /// ```
    /// use numkit::DynMatrix;
    /// let m = DynMatrix::from_rows(1, 3, &[1_u8, 2, 3]);
    /// let wide = m.map(|x| u32::from(x) * 1000);
    /// assert_eq!(wide[(0, 2)], 3000);
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> DynMatrix<U>
    where
        T: Copy,
    {
        DynMatrix {
            data: self.data.iter().map(|&x| f(x)).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display> fmt::Display for DynMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut widths: Vec<usize> = alloc::vec![0; self.ncols];
        for (j, width) in widths.iter_mut().enumerate() {
            for i in 0..self.nrows {
                let w = CharCount::of(|wc| write!(wc, "{}", self[(i, j)]));
                *width = (*width).max(w);
            }
        }

        for i in 0..self.nrows {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "│")?;
            for (j, &width) in widths.iter().enumerate() {
                if j > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>width$}", self[(i, j)], width = width)?;
            }
            write!(f, "│")?;
        }
        Ok(())
    }
}

struct CharCount(usize);

impl CharCount {
    fn of(f: impl FnOnce(&mut Self) -> fmt::Result) -> usize {
        let mut wc = CharCount(0);
        let _ = f(&mut wc);
        wc.0
    }
}

impl fmt::Write for CharCount {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.chars().count();
        Ok(())
    }
}
