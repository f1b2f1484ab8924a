//! Linear interpolation of scalars and composite values.
//!
//! The blend `a + (b - a) * t` is evaluated in a floating-point type `F`
//! chosen by the caller, then converted back to the element type with a
//! checked cast. Integer element types therefore truncate toward zero, and a
//! blend that leaves the element type's range is a
//! [`InterpError::Conversion`] error rather than a wrapped value.
//!
//! [`Lerp`] extends the blend component-wise to tuples (2 to 6 components),
//! fixed arrays, [`DynVector`](crate::DynVector) and
//! [`DynMatrix`](crate::DynMatrix). Operands of a vector or matrix blend must
//! have equal shapes.
//!
//! # Examples
//!
//! ```
//! use numkit::interp::{lerp, Lerp};
//!
//! assert_eq!(lerp(0.0_f64, 10.0, 0.5), Ok(5.0));
//! assert_eq!(lerp(0_i32, 5, 0.5_f32), Ok(2));
//!
//! let a = (0_u8, 0.0_f32);
//! let b = (100_u8, 1.0_f32);
//! assert_eq!(a.lerp(&b, 0.25_f64), Ok((25, 0.25)));
//! ```

mod blend;
mod linear;


pub use blend::Lerp;
pub use linear::{inverse_lerp, lerp, remap};

use crate::convert::ConversionError;

/// Errors from interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpError {
    /// Vector or matrix operands have different shapes.
    ShapeMismatch {
        /// `(nrows, ncols)` of the first operand.
        expected: (usize, usize),
        /// `(nrows, ncols)` of the second operand.
        got: (usize, usize),
    },
    /// The interval endpoints coincide, so no parameter maps onto it.
    DegenerateRange,
    /// An operand or the blended result is not representable.
    Conversion(ConversionError),
}

impl core::fmt::Display for InterpError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InterpError::ShapeMismatch { expected, got } => write!(
                f,
                "shape mismatch: {}x{} vs {}x{}",
                expected.0, expected.1, got.0, got.1
            ),
            InterpError::DegenerateRange => write!(f, "interval endpoints are equal"),
            InterpError::Conversion(e) => write!(f, "interpolation conversion failed: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InterpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InterpError::Conversion(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConversionError> for InterpError {
    fn from(e: ConversionError) -> Self {
        InterpError::Conversion(e)
    }
}
