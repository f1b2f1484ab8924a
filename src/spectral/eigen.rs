use alloc::vec::Vec;
use core::cmp::Ordering;

use tracing::debug;

use crate::dynmatrix::DynMatrix;
use crate::traits::{FloatScalar, Number};

use super::{lambda_matrix, SpectralError};

/// A distinct eigenvalue and its algebraic multiplicity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EigenPair<T> {
    pub value: T,
    pub multiplicity: usize,
}

/// Distinct eigenvalues paired with their multiplicities, in a caller-chosen
/// order.
///
/// Every multiplicity is at least one. The pairing is fixed at construction:
/// reordering moves whole [`EigenPair`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct EigenMultiplicities<T> {
    pairs: Vec<EigenPair<T>>,
}

impl<T: Number> EigenMultiplicities<T> {
    /// Take the first `count` entries of each list.
    ///
    /// Fails with [`SpectralError::ShapeMismatch`] if either list is shorter
    /// than `count`, and with [`SpectralError::ZeroMultiplicity`] if a used
    /// multiplicity is zero. Entries past `count` are ignored.
    pub fn from_parts(
        count: usize,
        eigenvalues: &[T],
        multiplicities: &[usize],
    ) -> Result<Self, SpectralError> {
        let shortest = eigenvalues.len().min(multiplicities.len());
        if shortest < count {
            debug!(count, shortest, "eigen-multiplicity lists shorter than count");
            return Err(SpectralError::ShapeMismatch {
                expected: count,
                got: shortest,
            });
        }
        Self::from_pairs(
            eigenvalues[..count]
                .iter()
                .zip(&multiplicities[..count])
                .map(|(&value, &multiplicity)| (value, multiplicity)),
        )
    }

    /// Build from `(eigenvalue, multiplicity)` tuples.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, SpectralError>
    where
        I: IntoIterator<Item = (T, usize)>,
    {
        let mut out = Vec::new();
        for (index, (value, multiplicity)) in pairs.into_iter().enumerate() {
            if multiplicity == 0 {
                debug!(index, "zero eigenvalue multiplicity");
                return Err(SpectralError::ZeroMultiplicity { index });
            }
            out.push(EigenPair {
                value,
                multiplicity,
            });
        }
        Ok(Self { pairs: out })
    }

    /// Group runs of equal adjacent values; the inverse of
    /// [`expand`](Self::expand).
    ///
    /// ```
    /// use numkit::spectral::EigenMultiplicities;
    ///
    /// let set = EigenMultiplicities::from_eigenvalues(&[4, 4, 1, 4]);
    /// assert_eq!(set.eigenvalues().collect::<Vec<_>>(), vec![4, 1, 4]);
    /// assert_eq!(set.multiplicities().collect::<Vec<_>>(), vec![2, 1, 1]);
    /// ```
    pub fn from_eigenvalues(values: &[T]) -> Self {
        let mut pairs: Vec<EigenPair<T>> = Vec::new();
        for &value in values {
            match pairs.last_mut() {
                Some(last) if last.value == value => last.multiplicity += 1,
                _ => pairs.push(EigenPair {
                    value,
                    multiplicity: 1,
                }),
            }
        }
        Self { pairs }
    }

    /// Sum of all multiplicities.
    ///
    /// An overflowing sum is [`SpectralError::CapacityExceeded`].
    pub fn total(&self) -> Result<usize, SpectralError> {
        self.pairs
            .iter()
            .try_fold(0_usize, |acc, p| acc.checked_add(p.multiplicity))
            .ok_or_else(|| {
                debug!(len = self.pairs.len(), "total multiplicity overflows usize");
                SpectralError::CapacityExceeded {
                    capacity: usize::MAX,
                }
            })
    }

    /// Each eigenvalue repeated by its multiplicity, in pair order.
    pub fn expand(&self) -> Result<Vec<T>, SpectralError> {
        let total = self.total()?;
        let mut out = Vec::with_capacity(total);
        for pair in &self.pairs {
            if pair.multiplicity > total - out.len() {
                debug!(total, cursor = out.len(), "eigenvalue expansion overran total");
                return Err(SpectralError::CapacityExceeded { capacity: total });
            }
            out.extend(core::iter::repeat(pair.value).take(pair.multiplicity));
        }
        Ok(out)
    }

    /// Diagonal matrix of the expanded eigenvalues, `total x total`.
    pub fn lambda_matrix(&self) -> Result<DynMatrix<T>, SpectralError> {
        Ok(lambda_matrix(&self.expand()?))
    }

    /// Pairs reordered by descending eigenvalue.
    ///
    /// The sort is stable, so equal eigenvalues keep their relative order.
    /// NaN eigenvalues go last.
    pub fn sorted_descending(&self) -> Self {
        let mut pairs = self.pairs.clone();
        pairs.sort_by(|a, b| descending(&a.value, &b.value));
        Self { pairs }
    }

    /// The first `rank` singular values, `sqrt` of each expanded eigenvalue.
    ///
    /// Reads the pairs in their current order, so call
    /// [`sorted_descending`](Self::sorted_descending) first for the
    /// conventional non-increasing sequence. Negative eigenvalues (round-off
    /// on a positive semi-definite input) give zero.
    ///
    /// ```
    /// use numkit::spectral::{EigenMultiplicities, SpectralError};
    ///
    /// let set = EigenMultiplicities::from_parts(2, &[9_i32, 4], &[1, 2]).unwrap();
    /// assert_eq!(set.singular_values::<f32>(2), Ok(vec![3.0, 2.0]));
    /// assert_eq!(
    ///     set.singular_values::<f32>(4),
    ///     Err(SpectralError::RankOutOfRange { rank: 4, available: 3 })
    /// );
    /// ```
    pub fn singular_values<R: FloatScalar>(&self, rank: usize) -> Result<Vec<R>, SpectralError> {
        let total = self.total()?;
        if rank > total {
            debug!(rank, total, "singular value rank out of range");
            return Err(SpectralError::RankOutOfRange {
                rank,
                available: total,
            });
        }
        let mut out = Vec::with_capacity(rank);
        for pair in &self.pairs {
            let remaining = rank - out.len();
            if remaining == 0 {
                break;
            }
            let v = pair.value.checked_cast::<R>()?;
            let sv = if v < R::zero() { R::zero() } else { v.sqrt() };
            out.extend(core::iter::repeat(sv).take(pair.multiplicity.min(remaining)));
        }
        Ok(out)
    }
}

impl<T: Copy> EigenMultiplicities<T> {
    /// The pairs in their current order.
    #[inline]
    pub fn pairs(&self) -> &[EigenPair<T>] {
        &self.pairs
    }

    /// Number of distinct eigenvalues.
    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Eigenvalues in pair order.
    pub fn eigenvalues(&self) -> impl Iterator<Item = T> + '_ {
        self.pairs.iter().map(|p| p.value)
    }

    /// Multiplicities in pair order.
    pub fn multiplicities(&self) -> impl Iterator<Item = usize> + '_ {
        self.pairs.iter().map(|p| p.multiplicity)
    }
}

impl<T> Default for EigenMultiplicities<T> {
    fn default() -> Self {
        Self { pairs: Vec::new() }
    }
}

/// Descending order with NaN after every number.
fn descending<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    #[allow(clippy::eq_op)]
    let is_nan = |x: &T| x != x;
    match b.partial_cmp(a) {
        Some(o) => o,
        None => is_nan(a).cmp(&is_nan(b)),
    }
}
