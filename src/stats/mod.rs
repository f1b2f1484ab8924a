//! Descriptive statistics over slices.
//!
//! Element and result types are independent: each value is converted to the
//! result type with a checked cast before it is accumulated, so summing `u8`
//! samples into a `u32` or averaging `i32` samples as `f64` never wraps
//! silently.
//!
//! | Function | Result |
//! |---|---|
//! | [`sum`] | Σ xᵢ |
//! | [`average`] | Σ xᵢ / n, error when `n == 0` |
//! | [`variance`] | sample variance, `n - 1` denominator |
//! | [`standard_deviation`] | square root of [`variance`] |
//!
//! # Example
//!
//! ```
//! use numkit::stats;
//!
//! let xs = [2_i32, 4, 4, 4, 5, 5, 7, 9];
//! let mean: f64 = stats::average(&xs).unwrap();
//! assert_eq!(mean, 5.0);
//! let sd: f64 = stats::standard_deviation(&xs).unwrap();
//! assert!((sd - 2.138089935299395).abs() < 1e-9);
//! ```


use crate::scalar::{self, ArithError};
use crate::traits::{FloatScalar, Number};

/// Sum of `values` accumulated in `R`.
///
/// An empty slice sums to zero.
pub fn sum<T: Number, R: Number>(values: &[T]) -> Result<R, ArithError> {
    values
        .iter()
        .try_fold(R::zero(), |acc, &x| scalar::add::<R, T, R>(acc, x))
}

/// Arithmetic mean in `R`.
///
/// Integer result types use truncating division. An empty slice fails with
/// [`ArithError::DivisionByZero`].
///
/// ```
/// use numkit::stats::average;
/// use numkit::scalar::ArithError;
///
/// assert_eq!(average::<u8, u32>(&[200, 250]), Ok(225));
/// assert_eq!(average::<f64, f64>(&[]), Err(ArithError::DivisionByZero));
/// ```
pub fn average<T: Number, R: Number>(values: &[T]) -> Result<R, ArithError> {
    let total = sum::<T, R>(values)?;
    scalar::divide::<R, usize, R>(total, values.len())
}

/// Sample variance (Bessel's correction) in `R`.
///
/// Fewer than two values give zero.
pub fn variance<T: Number, R: FloatScalar>(values: &[T]) -> Result<R, ArithError> {
    let n = values.len();
    if n < 2 {
        return Ok(R::zero());
    }
    let mean = average::<T, R>(values)?;
    let mut ss = R::zero();
    for &x in values {
        let d = x.checked_cast::<R>()? - mean;
        ss = ss + d * d;
    }
    scalar::divide::<R, usize, R>(ss, n - 1)
}

/// Sample standard deviation in `R`.
///
/// Fewer than two values give zero.
#[inline]
pub fn standard_deviation<T: Number, R: FloatScalar>(values: &[T]) -> Result<R, ArithError> {
    Ok(variance::<T, R>(values)?.sqrt())
}
