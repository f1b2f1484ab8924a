use crate::traits::FloatScalar;

#[cfg(feature = "alloc")]
use crate::dynmatrix::{DynMatrix, DynVector};
#[cfg(feature = "alloc")]
use crate::traits::Scalar;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use super::linear::lerp;
use super::InterpError;

/// Component-wise linear interpolation.
///
/// `F` is the floating-point type the blend is computed in.
///
/// ```
/// use numkit::interp::Lerp;
/// use numkit::DynVector;
///
/// let a = DynVector::from_slice(&[0.0_f64, 0.0]);
/// let b = DynVector::from_slice(&[10.0, 10.0]);
/// let mid = a.lerp(&b, 0.25_f64).unwrap();
/// assert_eq!(mid.as_slice(), &[2.5, 2.5]);
///
/// assert_eq!([0_u16, 100].lerp(&[10, 0], 0.5_f32), Ok([5, 50]));
/// ```
pub trait Lerp<F: FloatScalar>: Sized {
    /// Blend `self` toward `other` by `t`.
    fn lerp(&self, other: &Self, t: F) -> Result<Self, InterpError>;
}

macro_rules! impl_lerp_primitive {
    ($($t:ty),*) => {
        $(
            impl<F: FloatScalar> Lerp<F> for $t {
                #[inline]
                fn lerp(&self, other: &Self, t: F) -> Result<Self, InterpError> {
                    lerp(*self, *other, t)
                }
            }
        )*
    };
}

impl_lerp_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

macro_rules! impl_lerp_tuple {
    ($($name:ident . $idx:tt),+) => {
        impl<F: FloatScalar, $($name: Lerp<F>),+> Lerp<F> for ($($name,)+) {
            #[inline]
            fn lerp(&self, other: &Self, t: F) -> Result<Self, InterpError> {
                Ok(($(self.$idx.lerp(&other.$idx, t)?,)+))
            }
        }
    };
}

impl_lerp_tuple!(A.0, B.1);
impl_lerp_tuple!(A.0, B.1, C.2);
impl_lerp_tuple!(A.0, B.1, C.2, D.3);
impl_lerp_tuple!(A.0, B.1, C.2, D.3, E.4);
impl_lerp_tuple!(A.0, B.1, C.2, D.3, E.4, G.5);

impl<F: FloatScalar, T: Lerp<F> + Copy, const N: usize> Lerp<F> for [T; N] {
    fn lerp(&self, other: &Self, t: F) -> Result<Self, InterpError> {
        let mut out = *self;
        for (o, b) in out.iter_mut().zip(other) {
            *o = o.lerp(b, t)?;
        }
        Ok(out)
    }
}

#[cfg(feature = "alloc")]
fn lerp_elements<F: FloatScalar, T: Lerp<F>>(a: &[T], b: &[T], t: F) -> Result<Vec<T>, InterpError> {
    a.iter().zip(b).map(|(x, y)| x.lerp(y, t)).collect()
}

#[cfg(feature = "alloc")]
impl<F: FloatScalar, T: Scalar + Lerp<F>> Lerp<F> for DynVector<T> {
    fn lerp(&self, other: &Self, t: F) -> Result<Self, InterpError> {
        if self.len() != other.len() {
            return Err(InterpError::ShapeMismatch {
                expected: (1, self.len()),
                got: (1, other.len()),
            });
        }
        Ok(DynVector::from_vec(lerp_elements(
            self.as_slice(),
            other.as_slice(),
            t,
        )?))
    }
}

#[cfg(feature = "alloc")]
impl<F: FloatScalar, T: Scalar + Lerp<F>> Lerp<F> for DynMatrix<T> {
    fn lerp(&self, other: &Self, t: F) -> Result<Self, InterpError> {
        if self.shape() != other.shape() {
            return Err(InterpError::ShapeMismatch {
                expected: self.shape(),
                got: other.shape(),
            });
        }
        let data = lerp_elements(self.as_slice(), other.as_slice(), t)?;
        Ok(DynMatrix::from_vec(self.nrows(), self.ncols(), data))
    }
}
