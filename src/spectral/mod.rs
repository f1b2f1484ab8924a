//! Spectral assembly: lambda matrices and singular values from eigenvalues
//! with multiplicities.
//!
//! An [`EigenMultiplicities`] set pairs each distinct eigenvalue with its
//! algebraic multiplicity. From it this module builds
//!
//! - the **lambda matrix**, a square diagonal matrix of the expanded
//!   eigenvalue sequence ([`EigenMultiplicities::lambda_matrix`],
//!   [`lambda_matrix`]),
//! - the **descending ordering** of the pairs, multiplicities travelling with
//!   their eigenvalues ([`EigenMultiplicities::sorted_descending`]),
//! - the **singular values** for a given rank, square roots of the expanded
//!   eigenvalues read from a descending set
//!   ([`EigenMultiplicities::singular_values`]), and the diagonal singular
//!   value matrix ([`singular_matrix`]).
//!
//! # Example
//!
//! ```
//! use numkit::spectral::{singular_matrix, EigenMultiplicities};
//!
//! let set = EigenMultiplicities::from_parts(2, &[1.0_f64, 4.0], &[1, 2]).unwrap();
//! let sorted = set.sorted_descending();
//! assert_eq!(sorted.expand().unwrap(), vec![4.0, 4.0, 1.0]);
//!
//! let sv: Vec<f64> = sorted.singular_values(3).unwrap();
//! assert_eq!(sv, vec![2.0, 2.0, 1.0]);
//!
//! let sigma = singular_matrix(&sv, 2).unwrap();
//! assert_eq!(sigma.shape(), (2, 2));
//! assert_eq!(sigma[(1, 1)], 2.0);
//! ```

mod eigen;


pub use eigen::{EigenMultiplicities, EigenPair};

use tracing::debug;

use crate::convert::ConversionError;
use crate::dynmatrix::DynMatrix;
use crate::traits::Scalar;

/// Errors from spectral assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpectralError {
    /// An eigenvalue or multiplicity list is shorter than the declared count.
    ShapeMismatch {
        /// Declared number of distinct eigenvalues.
        expected: usize,
        /// Length of the shorter list.
        got: usize,
    },
    /// The requested rank exceeds what the input can supply.
    RankOutOfRange { rank: usize, available: usize },
    /// Expanding the eigenvalues overran the total multiplicity.
    CapacityExceeded { capacity: usize },
    /// A multiplicity of zero at the given position.
    ZeroMultiplicity { index: usize },
    /// An eigenvalue is not representable in the singular value type.
    Conversion(ConversionError),
}

impl core::fmt::Display for SpectralError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SpectralError::ShapeMismatch { expected, got } => write!(
                f,
                "expected {} eigenvalues and multiplicities, got {}",
                expected, got
            ),
            SpectralError::RankOutOfRange { rank, available } => {
                write!(f, "rank {} exceeds the {} values available", rank, available)
            }
            SpectralError::CapacityExceeded { capacity } => write!(
                f,
                "eigenvalue expansion exceeds total multiplicity {}",
                capacity
            ),
            SpectralError::ZeroMultiplicity { index } => {
                write!(f, "eigenvalue {} has zero multiplicity", index)
            }
            SpectralError::Conversion(e) => write!(f, "eigenvalue conversion failed: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SpectralError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SpectralError::Conversion(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConversionError> for SpectralError {
    fn from(e: ConversionError) -> Self {
        SpectralError::Conversion(e)
    }
}

/// Square diagonal matrix of an already expanded eigenvalue sequence.
///
/// ```
/// use numkit::spectral::lambda_matrix;
///
/// let l = lambda_matrix(&[3, 3, -1]);
/// assert_eq!(l.shape(), (3, 3));
/// assert_eq!(l[(2, 2)], -1);
/// assert_eq!(l[(0, 1)], 0);
/// ```
pub fn lambda_matrix<T: Scalar>(eigenvalues: &[T]) -> DynMatrix<T> {
    DynMatrix::from_diagonal(eigenvalues)
}

/// `rank x rank` diagonal matrix of the leading `rank` singular values.
pub fn singular_matrix<T: Scalar>(values: &[T], rank: usize) -> Result<DynMatrix<T>, SpectralError> {
    if rank > values.len() {
        debug!(rank, available = values.len(), "singular matrix rank out of range");
        return Err(SpectralError::RankOutOfRange {
            rank,
            available: values.len(),
        });
    }
    Ok(DynMatrix::from_diagonal(&values[..rank]))
}
