//! Conversion between numeric representations.
//!
//! Three flavors, matching the methods on [`Number`]:
//!
//! | Function            | Out of range           | NaN into integer |
//! |---------------------|------------------------|------------------|
//! | [`checked_cast`]    | `Err(Overflow)`        | `Err(Overflow)`  |
//! | [`saturating_cast`] | clamps to target bound | zero             |
//! | [`truncating_cast`] | primitive `as`         | zero             |
//!
//! Float to integer conversions drop the fractional part in all three. A
//! finite float that narrows to an infinity (`1e300_f64` into `f32`) counts as
//! out of range.
//!
//! ```
//! use numkit::convert::{checked_cast, saturating_cast, ConversionError};
//!
//! assert_eq!(checked_cast::<i64, i8>(-129), Err(ConversionError::Overflow));
//! assert_eq!(saturating_cast::<i64, i8>(-129), i8::MIN);
//! assert_eq!(saturating_cast::<f64, u16>(f64::NAN), 0);
//! assert_eq!(checked_cast::<f64, f32>(1e300), Err(ConversionError::Overflow));
//! assert_eq!(saturating_cast::<f64, f32>(-1e300), f32::MIN);
//! ```

use num_traits::{AsPrimitive, ToPrimitive};

use crate::traits::Number;

/// A checked conversion could not represent the value in the target type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    /// Source value lies outside the target type's range, or is NaN.
    Overflow,
}

impl core::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConversionError::Overflow => {
                write!(f, "value is not representable in the target numeric type")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConversionError {}

/// `U::from` with float narrowing treated as overflow.
///
/// `NumCast` narrows floats with `as`, which turns a finite value beyond the
/// target's range into an infinity instead of failing.
#[inline]
fn cast<T: Number, U: Number>(value: T) -> Option<U> {
    let out = U::from(value)?;
    let finite = |x: Option<f64>| x.map_or(false, f64::is_finite);
    if finite(value.to_f64()) && !finite(out.to_f64()) {
        None
    } else {
        Some(out)
    }
}

/// Convert `value` to `U`, failing when it is out of `U`'s range.
#[inline]
pub fn checked_cast<T: Number, U: Number>(value: T) -> Result<U, ConversionError> {
    cast(value).ok_or(ConversionError::Overflow)
}

/// Convert `value` to `U`, clamping to `U::min_value()` / `U::max_value()`.
///
/// NaN has no meaningful bound and maps to `U::zero()`.
#[inline]
pub fn saturating_cast<T: Number, U: Number>(value: T) -> U {
    match cast(value) {
        Some(v) => v,
        None if value > T::zero() => U::max_value(),
        None if value < T::zero() => U::min_value(),
        None => U::zero(),
    }
}

/// Convert `value` to `U` with primitive `as` semantics.
#[inline]
pub fn truncating_cast<T, U>(value: T) -> U
where
    T: AsPrimitive<U>,
    U: Copy + 'static,
{
    value.as_()
}
