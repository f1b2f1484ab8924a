use alloc::vec::Vec;

use crate::traits::Scalar;

use super::vector::DynVector;
use super::DynMatrix;

// ── From vector collections ─────────────────────────────────────────

impl<T: Scalar> DynMatrix<T> {
    /// Stack vectors as rows.
    ///
    /// The row count is `rows.len()`; the column count is the longest row.
    /// Shorter rows are padded with zeros, so ragged input never fails. An
    /// empty collection gives a `0 x 0` matrix.
    ///
    /// Accepts anything viewable as `&[T]`: `DynVector`, `Vec`, arrays.
    ///
    /// ```
    /// use numkit::DynMatrix;
    ///
    /// let m = DynMatrix::<i32>::from_row_vectors(&[vec![1, 2, 3], vec![4]]);
    /// assert_eq!(m.shape(), (2, 3));
    /// assert_eq!(m[(1, 0)], 4);
    /// assert_eq!(m[(1, 2)], 0);
    /// ```
    pub fn from_row_vectors<V: AsRef<[T]>>(rows: &[V]) -> Self {
        let nrows = rows.len();
        let ncols = longest::<T, V>(rows);
        let mut m = Self::zeros(nrows, ncols);
        for (i, row) in rows.iter().enumerate() {
            for (j, &x) in row.as_ref().iter().enumerate() {
                m[(i, j)] = x;
            }
        }
        m
    }

    /// Stack vectors as columns.
    ///
    /// The column count is `cols.len()`; the row count is the longest column.
    /// Shorter columns are padded with zeros.
    ///
    /// ```
    /// use numkit::{DynMatrix, DynVector};
    ///
    /// let cols = [DynVector::from_slice(&[1.0, 2.0]), DynVector::from_slice(&[3.0])];
    /// let m = DynMatrix::<f64>::from_col_vectors(&cols);
    /// assert_eq!(m.shape(), (2, 2));
    /// assert_eq!(m[(0, 1)], 3.0);
    /// assert_eq!(m[(1, 1)], 0.0);
    /// ```
    pub fn from_col_vectors<V: AsRef<[T]>>(cols: &[V]) -> Self {
        let ncols = cols.len();
        let nrows = longest::<T, V>(cols);
        // Column-major storage: each column is one contiguous run.
        let mut data = Vec::with_capacity(nrows * ncols);
        for col in cols {
            let col = col.as_ref();
            data.extend_from_slice(col);
            data.resize(data.len() + (nrows - col.len()), T::zero());
        }
        Self { data, nrows, ncols }
    }
}

fn longest<T, V: AsRef<[T]>>(vectors: &[V]) -> usize {
    vectors
        .iter()
        .map(|v| v.as_ref().len())
        .max()
        .unwrap_or(0)
}

// ── Back to vector collections ──────────────────────────────────────

impl<T: Scalar> DynMatrix<T> {
    /// Copy out each row as an independent vector.
    ///
    /// Inverse of [`from_row_vectors`](Self::from_row_vectors) when every
    /// input row has the same length.
    ///
    /// ```
    /// use numkit::DynMatrix;
    ///
    /// let m = DynMatrix::from_rows(2, 2, &[1, 2, 3, 4]);
    /// let rows = m.row_vectors();
    /// assert_eq!(rows.len(), 2);
    /// assert_eq!(rows[1].as_slice(), &[3, 4]);
    /// ```
    pub fn row_vectors(&self) -> Vec<DynVector<T>> {
        (0..self.nrows()).map(|i| self.row(i)).collect()
    }

    /// Copy out each column as an independent vector.
    pub fn col_vectors(&self) -> Vec<DynVector<T>> {
        (0..self.ncols()).map(|j| self.col(j)).collect()
    }

    /// Main diagonal, length `min(nrows, ncols)`.
    pub fn diagonal(&self) -> DynVector<T> {
        let n = self.nrows().min(self.ncols());
        DynVector::from_vec((0..n).map(|i| self[(i, i)]).collect())
    }

    /// Transpose.
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.ncols(), self.nrows(), |i, j| self[(j, i)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn from_row_vectors_uniform() {
        let m = DynMatrix::<f64>::from_row_vectors(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
        assert_eq!(m.shape(), (3, 2));
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m[(2, 0)], 5.0);
    }

    #[test]
    fn from_row_vectors_ragged_pads_zero() {
        let rows = vec![vec![1_i32], vec![2, 3, 4], vec![]];
        let m = DynMatrix::<i32>::from_row_vectors(&rows);
        assert_eq!(m.shape(), (3, 3));
        assert_eq!(m[(0, 0)], 1);
        assert_eq!(m[(0, 1)], 0);
        assert_eq!(m[(0, 2)], 0);
        assert_eq!(m[(1, 2)], 4);
        for j in 0..3 {
            assert_eq!(m[(2, j)], 0);
        }
    }

    #[test]
    fn from_row_vectors_empty() {
        let rows: Vec<Vec<f64>> = Vec::new();
        let m = DynMatrix::<f64>::from_row_vectors(&rows);
        assert_eq!(m.shape(), (0, 0));
    }

    #[test]
    fn from_row_vectors_all_empty_rows() {
        let rows: Vec<Vec<f64>> = vec![vec![], vec![]];
        let m = DynMatrix::<f64>::from_row_vectors(&rows);
        assert_eq!(m.shape(), (2, 0));
    }

    #[test]
    fn from_col_vectors_ragged_pads_zero() {
        let cols = vec![vec![1_u8, 2, 3], vec![4]];
        let m = DynMatrix::<u8>::from_col_vectors(&cols);
        assert_eq!(m.shape(), (3, 2));
        assert_eq!(m[(2, 0)], 3);
        assert_eq!(m[(0, 1)], 4);
        assert_eq!(m[(1, 1)], 0);
        assert_eq!(m[(2, 1)], 0);
    }

    #[test]
    fn from_col_vectors_matches_transpose_of_rows() {
        let vs = vec![vec![1.0, 2.0], vec![3.0], vec![4.0, 5.0]];
        let by_cols = DynMatrix::<f64>::from_col_vectors(&vs);
        let by_rows = DynMatrix::<f64>::from_row_vectors(&vs);
        assert_eq!(by_cols, by_rows.transpose());
    }

    #[test]
    fn row_vectors_round_trip() {
        let rows = vec![
            DynVector::from_slice(&[1.0, 2.0, 3.0]),
            DynVector::from_slice(&[4.0, 5.0, 6.0]),
        ];
        let m = DynMatrix::<f64>::from_row_vectors(&rows);
        assert_eq!(m.row_vectors(), rows);
    }

    #[test]
    fn col_vectors_round_trip() {
        let cols = vec![
            DynVector::from_slice(&[1, 2]),
            DynVector::from_slice(&[3, 4]),
            DynVector::from_slice(&[5, 6]),
        ];
        let m = DynMatrix::<i32>::from_col_vectors(&cols);
        assert_eq!(m.col_vectors(), cols);
    }

    #[test]
    fn extracted_vectors_are_independent() {
        let m = DynMatrix::from_rows(2, 2, &[1, 2, 3, 4]);
        let mut rows = m.row_vectors();
        rows[0][0] = 100;
        assert_eq!(m[(0, 0)], 1);
    }

    #[test]
    fn diagonal_rectangular() {
        let m = DynMatrix::from_rows(2, 3, &[1, 2, 3, 4, 5, 6]);
        assert_eq!(m.diagonal().as_slice(), &[1, 5]);
    }

    #[test]
    fn transpose() {
        let m = DynMatrix::from_rows(2, 3, &[1, 2, 3, 4, 5, 6]);
        let t = m.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t[(2, 1)], 6);
        assert_eq!(t[(0, 1)], 4);
    }
}
