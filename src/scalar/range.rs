use crate::traits::{FloatScalar, Number};

use super::arith::is_integral;
use super::ArithError;

/// Restrict `value` to `[min, max]`.
///
/// `min` must not exceed `max`.
#[inline]
pub fn clamp<T: Number>(value: T, min: T, max: T) -> T {
    debug_assert!(min <= max, "clamp: min must not exceed max");
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Wrap `value` into the half-open range `[min, max)`.
///
/// An empty range (`max <= min`) is an error. Signed integer ranges are
/// measured in `i128`, so a span wider than `T::MAX` is handled exactly.
///
/// ```
/// use numkit::scalar::wrap;
///
/// assert_eq!(wrap(370.0_f64, 0.0, 360.0), Ok(10.0));
/// assert_eq!(wrap(-1_i32, 0, 7), Ok(6));
/// assert_eq!(wrap(2_u8, 5, 10), Ok(7));
/// assert_eq!(wrap(120_i8, -100, 100), Ok(-80));
/// ```
pub fn wrap<T: Number>(value: T, min: T, max: T) -> Result<T, ArithError> {
    if max <= min {
        return Err(ArithError::DivisionByZero);
    }
    if is_integral::<T>() && T::min_value() < T::zero() {
        return wrap_signed(value, min, max);
    }
    let span = max - min;
    if value >= min {
        Ok(min + (value - min) % span)
    } else {
        // Distances are non-negative so unsigned types stay in range.
        let back = (min - value) % span;
        if back.is_zero() {
            Ok(min)
        } else {
            Ok(max - back)
        }
    }
}

fn wrap_signed<T: Number>(value: T, min: T, max: T) -> Result<T, ArithError> {
    let v = value.checked_cast::<i128>()?;
    let lo = min.checked_cast::<i128>()?;
    let hi = max.checked_cast::<i128>()?;
    // Two's complement differences of in-range i128 values fit in u128.
    let span = hi.wrapping_sub(lo) as u128;
    let offset = if v >= lo {
        (v.wrapping_sub(lo) as u128) % span
    } else {
        match (lo.wrapping_sub(v) as u128) % span {
            0 => 0,
            back => span - back,
        }
    };
    Ok(lo.wrapping_add(offset as i128).checked_cast::<T>()?)
}

/// Round to `decimals` places, halves away from zero.
///
/// When `decimals` is finer than `T` can scale to, `value` is returned as is.
///
/// ```
/// use numkit::scalar::round_to;
///
/// assert_eq!(round_to(2.345_f64, 1), 2.3);
/// assert_eq!(round_to(-2.5_f64, 0), -3.0);
/// ```
#[inline]
pub fn round_to<T: FloatScalar>(value: T, decimals: u32) -> T {
    let ten = T::from(10.0).unwrap_or_else(T::one);
    let factor = ten.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}
