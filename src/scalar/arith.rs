use crate::convert::ConversionError;
use crate::traits::Number;

use super::ArithError;

/// Convert both operands to the result type.
#[inline]
fn operands<A: Number, B: Number, R: Number>(a: A, b: B) -> Result<(R, R), ArithError> {
    Ok((a.checked_cast::<R>()?, b.checked_cast::<R>()?))
}

/// Whether `R` is an integer type (casting one half yields zero).
#[inline]
pub(crate) fn is_integral<R: Number>() -> bool {
    R::from(0.5_f64) == Some(R::zero())
}

/// `R::MIN / -1` for a signed integer `R`, whose quotient is unrepresentable.
#[inline]
fn min_over_neg_one<R: Number>(a: R, b: R) -> bool {
    is_integral::<R>()
        && R::min_value() < R::zero()
        && a == R::min_value()
        && b == R::zero() - R::one()
}

/// `a + b` in `R`.
#[inline]
pub fn add<A: Number, B: Number, R: Number>(a: A, b: B) -> Result<R, ArithError> {
    let (a, b) = operands::<A, B, R>(a, b)?;
    Ok(a + b)
}

/// `a - b` in `R`.
#[inline]
pub fn subtract<A: Number, B: Number, R: Number>(a: A, b: B) -> Result<R, ArithError> {
    let (a, b) = operands::<A, B, R>(a, b)?;
    Ok(a - b)
}

/// `a * b` in `R`.
#[inline]
pub fn multiply<A: Number, B: Number, R: Number>(a: A, b: B) -> Result<R, ArithError> {
    let (a, b) = operands::<A, B, R>(a, b)?;
    Ok(a * b)
}

/// `a / b` in `R`. A zero divisor is an error, floats included, and so is
/// `MIN / -1` for signed integers.
///
/// ```
/// use numkit::scalar::{divide, ArithError};
///
/// assert_eq!(divide::<i32, i32, f64>(7, 2), Ok(3.5));
/// assert_eq!(divide::<i32, i32, i32>(7, 2), Ok(3));
/// assert_eq!(divide::<f64, f64, f64>(1.0, 0.0), Err(ArithError::DivisionByZero));
/// ```
#[inline]
pub fn divide<A: Number, B: Number, R: Number>(a: A, b: B) -> Result<R, ArithError> {
    let (a, b) = operands::<A, B, R>(a, b)?;
    if b.is_zero() {
        return Err(ArithError::DivisionByZero);
    }
    if min_over_neg_one(a, b) {
        return Err(ConversionError::Overflow.into());
    }
    Ok(a / b)
}

/// Truncated remainder `a % b` in `R`; the result takes the sign of `a`.
#[inline]
pub fn modulus<A: Number, B: Number, R: Number>(a: A, b: B) -> Result<R, ArithError> {
    let (a, b) = operands::<A, B, R>(a, b)?;
    if b.is_zero() {
        return Err(ArithError::DivisionByZero);
    }
    if min_over_neg_one(a, b) {
        return Ok(R::zero());
    }
    Ok(a % b)
}

/// Spreadsheet-style `MOD(a, b)`: the result takes the sign of `b`.
///
/// Differs from [`modulus`] only when the truncated remainder and the divisor
/// have opposite signs, in which case the divisor is added back.
///
/// ```
/// use numkit::scalar::{modulo, modulus};
///
/// assert_eq!(modulus::<i32, i32, i32>(-7, 3), Ok(-1));
/// assert_eq!(modulo::<i32, i32, i32>(-7, 3), Ok(2));
/// assert_eq!(modulo::<f64, f64, f64>(7.5, -2.0), Ok(-0.5));
/// ```
#[inline]
pub fn modulo<A: Number, B: Number, R: Number>(a: A, b: B) -> Result<R, ArithError> {
    let (a, b) = operands::<A, B, R>(a, b)?;
    if b.is_zero() {
        return Err(ArithError::DivisionByZero);
    }
    if min_over_neg_one(a, b) {
        return Ok(R::zero());
    }
    let r = a % b;
    if !r.is_zero() && ((r < R::zero()) != (b < R::zero())) {
        Ok(r + b)
    } else {
        Ok(r)
    }
}

/// `a + 1` in `R`. Integer overflow at `R::max_value()` is an error.
#[inline]
pub fn increment<A: Number, R: Number>(a: A) -> Result<R, ArithError> {
    let a = a.checked_cast::<R>()?;
    if is_integral::<R>() && a == R::max_value() {
        return Err(ConversionError::Overflow.into());
    }
    Ok(a + R::one())
}

/// `a - 1` in `R`. Integer underflow at `R::min_value()` is an error.
#[inline]
pub fn decrement<A: Number, R: Number>(a: A) -> Result<R, ArithError> {
    let a = a.checked_cast::<R>()?;
    if is_integral::<R>() && a == R::min_value() {
        return Err(ConversionError::Overflow.into());
    }
    Ok(a - R::one())
}

/// `-a` in `R`.
///
/// Fails when the negation has no representation: any positive value in an
/// unsigned type, or `MIN` of a signed integer type.
#[inline]
pub fn negate<A: Number, R: Number>(a: A) -> Result<R, ArithError> {
    let a = a.checked_cast::<R>()?;
    if a.is_zero() {
        return Ok(a);
    }
    let unsigned = R::min_value().is_zero();
    if unsigned || (is_integral::<R>() && a == R::min_value()) {
        return Err(ConversionError::Overflow.into());
    }
    Ok(R::zero() - a)
}

/// Equality after converting both operands to `R`.
#[inline]
pub fn equals<A: Number, B: Number, R: Number>(a: A, b: B) -> Result<bool, ArithError> {
    let (a, b) = operands::<A, B, R>(a, b)?;
    Ok(a == b)
}

/// Greatest common divisor by repeated remainder.
///
/// Works on magnitudes, so the result is never negative. `gcd(a, 0) == |a|`.
/// Both operands zero is an error.
///
/// ```
/// use numkit::scalar::gcd;
///
/// assert_eq!(gcd::<i32, i32, i32>(54, 24), Ok(6));
/// assert_eq!(gcd::<i32, i32, i32>(-12, 18), Ok(6));
/// assert_eq!(gcd::<u8, u8, u8>(0, 9), Ok(9));
/// ```
pub fn gcd<A: Number, B: Number, R: Number>(a: A, b: B) -> Result<R, ArithError> {
    let (a, b) = operands::<A, B, R>(a, b)?;
    if a.is_zero() && b.is_zero() {
        return Err(ArithError::DivisionByZero);
    }
    let mut x = magnitude(a)?;
    let mut y = magnitude(b)?;
    while !y.is_zero() {
        let r = x % y;
        x = y;
        y = r;
    }
    Ok(x)
}

#[inline]
fn magnitude<R: Number>(a: R) -> Result<R, ArithError> {
    if a < R::zero() {
        negate::<R, R>(a)
    } else {
        Ok(a)
    }
}
