use core::fmt::Debug;
use num_traits::{AsPrimitive, Bounded, Float, Num, NumCast, One, Zero};

use crate::convert::{self, ConversionError};

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point elements.
///
/// Required by operations that need `sqrt`, `round`, `abs` (interpolation
/// weights, statistics, singular values).
pub trait FloatScalar: Number + Float {}

impl<T: Number + Float> FloatScalar for T {}

/// The generic number capability: ordered, bounded, castable scalars.
///
/// Blanket-implemented for every primitive integer and float type. All
/// arithmetic, factory and spectral operations are written against this
/// trait. Conversion to a second `Number` type comes in three flavors:
///
/// - [`checked_cast`](Number::checked_cast) fails with
///   [`ConversionError::Overflow`] when the value is out of range (or NaN
///   into an integer). Fractional parts are truncated toward zero.
/// - [`saturating_cast`](Number::saturating_cast) clamps to the target's
///   bounds; NaN maps to zero.
/// - [`truncating_cast`](Number::truncating_cast) is the primitive `as`
///   conversion: integers keep their low bits, floats truncate.
///
/// ```
/// use numkit::Number;
///
/// assert_eq!(300_i32.checked_cast::<u8>().is_err(), true);
/// assert_eq!(300_i32.saturating_cast::<u8>(), 255);
/// assert_eq!(300_i32.truncating_cast::<u8>(), 44);
/// assert_eq!(2.75_f64.checked_cast::<i32>(), Ok(2));
/// ```
pub trait Number: Scalar + PartialOrd + NumCast + Bounded {
    /// Convert to `U`, failing when the value cannot be represented.
    #[inline]
    fn checked_cast<U: Number>(self) -> Result<U, ConversionError> {
        convert::checked_cast(self)
    }

    /// Convert to `U`, clamping to `U`'s bounds.
    #[inline]
    fn saturating_cast<U: Number>(self) -> U {
        convert::saturating_cast(self)
    }

    /// Convert to `U` with primitive `as` semantics.
    #[inline]
    fn truncating_cast<U>(self) -> U
    where
        Self: AsPrimitive<U>,
        U: Copy + 'static,
    {
        self.as_()
    }
}

impl<T: Scalar + PartialOrd + NumCast + Bounded> Number for T {}

/// Read-only access to a matrix-like type.
///
/// Implemented by [`DynMatrix`] and [`DynVector`] so caller code generic
/// over element access can take either one.
///
/// [`DynMatrix`]: crate::DynMatrix
/// [`DynVector`]: crate::DynVector
pub trait MatrixRef<T> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn get(&self, row: usize, col: usize) -> &T;

    /// `(nrows, ncols)`.
    #[inline]
    fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
}

/// Mutable access to a matrix-like type.
pub trait MatrixMut<T>: MatrixRef<T> {
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T;
}
