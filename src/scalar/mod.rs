//! Scalar arithmetic over mixed numeric types.
//!
//! Every binary operation takes operands of two (possibly different) [`Number`]
//! types `A` and `B` and produces a third type `R`. Both operands are first
//! converted to `R` with a checked cast, then combined with `R`'s native
//! operator.
//!
//! | Operation | Notes |
//! |---|---|
//! | [`add`], [`subtract`], [`multiply`] | native operator after conversion |
//! | [`divide`], [`modulus`] | zero divisor is an error for every type |
//! | [`modulo`] | spreadsheet `MOD`: result carries the divisor's sign |
//! | [`increment`], [`decrement`], [`negate`] | unary, checked |
//! | [`equals`] | compares after conversion |
//! | [`gcd`] | Euclid on magnitudes |
//! | [`clamp`], [`wrap`] | range helpers |
//! | [`round_to`] | decimal places, half away from zero |
//!
//! # Example
//!
//! ```
//! use numkit::scalar::{add, gcd, modulo};
//!
//! let x: f64 = add(2_u8, 0.5_f32).unwrap();
//! assert_eq!(x, 2.5);
//! assert_eq!(gcd::<i32, i64, i64>(54, 24).unwrap(), 6);
//! assert_eq!(modulo::<i32, i32, i32>(-7, 3).unwrap(), 2);
//! ```

mod arith;
mod range;

#[cfg(test)]
mod tests;

pub use arith::{
    add, decrement, divide, equals, gcd, increment, modulo, modulus, multiply, negate, subtract,
};
pub use range::{clamp, round_to, wrap};

pub(crate) use arith::is_integral;

use crate::convert::ConversionError;
#[cfg(doc)]
use crate::traits::Number;

/// Errors from scalar arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithError {
    /// A divisor, modulus, or derived count was zero.
    DivisionByZero,
    /// An operand could not be converted to the result type.
    Conversion(ConversionError),
}

impl core::fmt::Display for ArithError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ArithError::DivisionByZero => write!(f, "division by zero"),
            ArithError::Conversion(e) => write!(f, "operand conversion failed: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ArithError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArithError::Conversion(e) => Some(e),
            ArithError::DivisionByZero => None,
        }
    }
}

impl From<ConversionError> for ArithError {
    fn from(e: ConversionError) -> Self {
        ArithError::Conversion(e)
    }
}
