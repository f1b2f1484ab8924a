//! Mixed fractions over integer types.
//!
//! A [`MixedFraction`] stands for `whole + numerator / denominator`. The
//! components are added with their own signs, so `-1 3/4` is stored as
//! `whole = -1, numerator = -3, denominator = 4`. Every operation returns a
//! new fraction; a zero denominator is [`ArithError::DivisionByZero`].
//!
//! | Function | Result |
//! |---|---|
//! | [`to_improper`] | whole part folded into the numerator |
//! | [`to_proper`] | whole units moved out of the numerator |
//! | [`simplify`] | lowest terms, proper, positive denominator |
//! | [`scale_denominator`] | same value over a new denominator |
//! | [`round_to_mixed_fraction`] | nearest fraction with a bounded denominator |
//!
//! # Example
//!
//! ```
//! use numkit::fraction::{round_to_mixed_fraction, simplify, MixedFraction};
//!
//! let f = simplify(MixedFraction::new(0, 4, 8)).unwrap();
//! assert_eq!(f, MixedFraction::new(0, 1, 2));
//!
//! let g = round_to_mixed_fraction(2.3125_f64, 16_u32).unwrap();
//! assert_eq!(g.to_string(), "2 5/16");
//! ```

#[cfg(test)]
mod tests;

use num_traits::PrimInt;

use crate::convert::ConversionError;
use crate::scalar::{self, ArithError};
use crate::traits::{FloatScalar, Number};

/// `whole + numerator / denominator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MixedFraction<T> {
    pub whole: T,
    pub numerator: T,
    pub denominator: T,
}

impl<T> MixedFraction<T> {
    /// Fraction from its three components, unchecked.
    #[inline]
    pub const fn new(whole: T, numerator: T, denominator: T) -> Self {
        Self {
            whole,
            numerator,
            denominator,
        }
    }
}

impl<T: Number + PrimInt> MixedFraction<T> {
    /// Value as a float.
    ///
    /// ```
    /// use numkit::fraction::MixedFraction;
    /// assert_eq!(MixedFraction::new(-1, -3, 4).to_float::<f64>(), Ok(-1.75));
    /// ```
    pub fn to_float<F: FloatScalar>(&self) -> Result<F, ArithError> {
        let part = scalar::divide::<T, T, F>(self.numerator, self.denominator)?;
        Ok(self.whole.checked_cast::<F>()? + part)
    }
}

impl<T> From<(T, T, T)> for MixedFraction<T> {
    fn from((whole, numerator, denominator): (T, T, T)) -> Self {
        Self::new(whole, numerator, denominator)
    }
}

impl<T> From<MixedFraction<T>> for (T, T, T) {
    fn from(f: MixedFraction<T>) -> Self {
        (f.whole, f.numerator, f.denominator)
    }
}

impl<T: Number + PrimInt + core::fmt::Display> core::fmt::Display for MixedFraction<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let zero = T::zero();
        match (self.whole == zero, self.numerator == zero) {
            (_, true) => write!(f, "{}", self.whole),
            (true, false) => write!(f, "{}/{}", self.numerator, self.denominator),
            // The whole part carries the sign.
            (false, false) => {
                let num = if self.numerator < zero {
                    zero - self.numerator
                } else {
                    self.numerator
                };
                write!(f, "{} {}/{}", self.whole, num, self.denominator)
            }
        }
    }
}

fn nonzero_denominator<T: Number>(f: &MixedFraction<T>) -> Result<(), ArithError> {
    if f.denominator.is_zero() {
        Err(ArithError::DivisionByZero)
    } else {
        Ok(())
    }
}

/// Fold the whole part into the numerator: `whole = 0`.
///
/// ```
/// use numkit::fraction::{to_improper, MixedFraction};
/// assert_eq!(to_improper(MixedFraction::new(2, 1, 3)), Ok(MixedFraction::new(0, 7, 3)));
/// ```
pub fn to_improper<T: Number + PrimInt>(f: MixedFraction<T>) -> Result<MixedFraction<T>, ArithError> {
    nonzero_denominator(&f)?;
    let scaled = scalar::multiply::<T, T, T>(f.whole, f.denominator)?;
    let numerator = scalar::add::<T, T, T>(scaled, f.numerator)?;
    Ok(MixedFraction::new(T::zero(), numerator, f.denominator))
}

/// Move whole units out of the numerator so `|numerator| < |denominator|`.
///
/// ```
/// use numkit::fraction::{to_proper, MixedFraction};
/// assert_eq!(to_proper(MixedFraction::new(0, 7, 2)), Ok(MixedFraction::new(3, 1, 2)));
/// assert_eq!(to_proper(MixedFraction::new(0, -7, 2)), Ok(MixedFraction::new(-3, -1, 2)));
/// ```
pub fn to_proper<T: Number + PrimInt>(f: MixedFraction<T>) -> Result<MixedFraction<T>, ArithError> {
    let carry = scalar::divide::<T, T, T>(f.numerator, f.denominator)?;
    let numerator = scalar::modulus::<T, T, T>(f.numerator, f.denominator)?;
    let whole = scalar::add::<T, T, T>(f.whole, carry)?;
    Ok(MixedFraction::new(whole, numerator, f.denominator))
}

/// Reduce to lowest terms.
///
/// Divides numerator and denominator by their GCD, then reduces the
/// numerator modulo the denominator, carrying whole units into `whole`. A
/// negative denominator moves its sign onto the numerator. A zero numerator
/// gives denominator one.
pub fn simplify<T: Number + PrimInt>(f: MixedFraction<T>) -> Result<MixedFraction<T>, ArithError> {
    nonzero_denominator(&f)?;
    let g = scalar::gcd::<T, T, T>(f.numerator, f.denominator)?;
    let mut numerator = f.numerator / g;
    let mut denominator = f.denominator / g;
    if denominator < T::zero() {
        numerator = scalar::negate::<T, T>(numerator)?;
        denominator = scalar::negate::<T, T>(denominator)?;
    }
    to_proper(MixedFraction::new(f.whole, numerator, denominator))
}

/// Express the fractional part over `denominator`.
///
/// The numerator becomes `numerator * denominator / old_denominator`,
/// truncated toward zero when `denominator` is not a multiple of the old one.
///
/// ```
/// use numkit::fraction::{scale_denominator, MixedFraction};
/// let f = scale_denominator(MixedFraction::new(1, 3, 4), 16).unwrap();
/// assert_eq!(f, MixedFraction::new(1, 12, 16));
/// ```
pub fn scale_denominator<T: Number + PrimInt>(
    f: MixedFraction<T>,
    denominator: T,
) -> Result<MixedFraction<T>, ArithError> {
    nonzero_denominator(&f)?;
    if denominator.is_zero() {
        return Err(ArithError::DivisionByZero);
    }
    let scaled = scalar::multiply::<T, T, T>(f.numerator, denominator)?;
    let numerator = scalar::divide::<T, T, T>(scaled, f.denominator)?;
    Ok(MixedFraction::new(f.whole, numerator, denominator))
}

/// Nearest mixed fraction to `value` with denominator at most `accuracy`.
///
/// Scans every denominator from 1 to `accuracy` and keeps the first one with
/// the smallest error, which is therefore already in lowest terms. A
/// fractional part that rounds up to a whole unit carries into `whole`
/// (`2.99` at accuracy 4 gives `3`). A zero `accuracy` is
/// [`ArithError::DivisionByZero`]; values outside `T`'s range (NaN and
/// infinities included) are conversion errors.
///
/// ```
/// use numkit::fraction::{round_to_mixed_fraction, MixedFraction};
///
/// assert_eq!(round_to_mixed_fraction(0.33_f64, 8_i32), Ok(MixedFraction::new(0, 1, 3)));
/// assert_eq!(round_to_mixed_fraction(-1.75_f32, 4_i64), Ok(MixedFraction::new(-1, -3, 4)));
/// ```
pub fn round_to_mixed_fraction<F: FloatScalar, T: Number + PrimInt>(
    value: F,
    accuracy: T,
) -> Result<MixedFraction<T>, ArithError> {
    if accuracy <= T::zero() {
        return Err(ArithError::DivisionByZero);
    }
    if !value.is_finite() {
        return Err(ConversionError::Overflow.into());
    }
    let limit = accuracy.checked_cast::<u64>()?;
    let negative = value < F::zero();
    let magnitude = value.abs();
    let mut whole = magnitude.floor();
    let frac = magnitude - whole;

    let mut best_num = F::zero();
    let mut best_den = F::one();
    let mut best_err = F::infinity();
    for d in 1..=limit {
        let d = d.checked_cast::<F>()?;
        let n = (frac * d).round();
        let err = (frac - n / d).abs();
        if err < best_err {
            best_err = err;
            best_num = n;
            best_den = d;
        }
    }
    if best_num == best_den {
        whole = whole + F::one();
        best_num = F::zero();
        best_den = F::one();
    }
    if best_num.is_zero() {
        best_den = F::one();
    }

    let (whole, best_num) = if negative {
        (-whole, -best_num)
    } else {
        (whole, best_num)
    };
    Ok(MixedFraction::new(
        whole.checked_cast::<T>()?,
        best_num.checked_cast::<T>()?,
        best_den.checked_cast::<T>()?,
    ))
}
