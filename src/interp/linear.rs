use crate::traits::{FloatScalar, Number};

use super::InterpError;

/// Blend `a` toward `b` by `t`, computed in `F`.
///
/// `t` is not clamped: values outside `[0, 1]` extrapolate along the line.
///
/// ```
/// use numkit::interp::{lerp, InterpError};
///
/// assert_eq!(lerp(2.0_f32, 4.0, 0.5_f32), Ok(3.0));
/// assert_eq!(lerp(0_i64, -5, 0.5_f64), Ok(-2));
/// assert!(matches!(lerp(0_u8, 255, 2.0_f64), Err(InterpError::Conversion(_))));
/// ```
pub fn lerp<T: Number, F: FloatScalar>(a: T, b: T, t: F) -> Result<T, InterpError> {
    let a_f = a.checked_cast::<F>()?;
    let b_f = b.checked_cast::<F>()?;
    let blended = a_f + (b_f - a_f) * t;
    Ok(blended.checked_cast::<T>()?)
}

/// Parameter `t` at which [`lerp`]`(a, b, t)` yields `value`.
///
/// Fails with [`InterpError::DegenerateRange`] when `a == b`.
///
/// ```
/// use numkit::interp::inverse_lerp;
///
/// assert_eq!(inverse_lerp::<i32, f64>(10, 20, 15), Ok(0.5));
/// assert_eq!(inverse_lerp::<f64, f64>(0.0, 4.0, 5.0), Ok(1.25));
/// ```
pub fn inverse_lerp<T: Number, F: FloatScalar>(a: T, b: T, value: T) -> Result<F, InterpError> {
    let a_f = a.checked_cast::<F>()?;
    let b_f = b.checked_cast::<F>()?;
    let span = b_f - a_f;
    if span.is_zero() {
        return Err(InterpError::DegenerateRange);
    }
    Ok((value.checked_cast::<F>()? - a_f) / span)
}

/// Map `value` from the interval `from` onto the interval `to`.
///
/// ```
/// use numkit::interp::remap;
///
/// // Celsius to Fahrenheit
/// let f: f64 = remap::<f64, f64, f64>(100.0, (0.0, 100.0), (32.0, 212.0)).unwrap();
/// assert_eq!(f, 212.0);
/// // 10-bit ADC reading to an 8-bit level
/// assert_eq!(remap::<u16, u8, f64>(512, (0, 1024), (0, 255)), Ok(127));
/// ```
pub fn remap<T: Number, U: Number, F: FloatScalar>(
    value: T,
    from: (T, T),
    to: (U, U),
) -> Result<U, InterpError> {
    let t = inverse_lerp::<T, F>(from.0, from.1, value)?;
    lerp(to.0, to.1, t)
}
