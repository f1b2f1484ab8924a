//! Shorthand names for `DynMatrix` and `DynVector` over common element types.

use super::{DynMatrix, DynVector};

// ── DynMatrix scalar aliases ────────────────────────────────────────

/// Dynamic matrix with `f32` elements.
pub type DynMatrixf32 = DynMatrix<f32>;
/// Dynamic matrix with `f64` elements.
pub type DynMatrixf64 = DynMatrix<f64>;
/// Dynamic matrix with `i32` elements.
pub type DynMatrixi32 = DynMatrix<i32>;
/// Dynamic matrix with `i64` elements.
pub type DynMatrixi64 = DynMatrix<i64>;
/// Dynamic matrix with `u8` elements.
pub type DynMatrixu8 = DynMatrix<u8>;
/// Dynamic matrix with `u32` elements.
pub type DynMatrixu32 = DynMatrix<u32>;
/// Dynamic matrix with `u64` elements.
pub type DynMatrixu64 = DynMatrix<u64>;

// ── DynVector scalar aliases ────────────────────────────────────────

/// Dynamic vector with `f32` elements.
pub type DynVectorf32 = DynVector<f32>;
/// Dynamic vector with `f64` elements.
pub type DynVectorf64 = DynVector<f64>;
/// Dynamic vector with `i32` elements.
pub type DynVectori32 = DynVector<i32>;
/// Dynamic vector with `i64` elements.
pub type DynVectori64 = DynVector<i64>;
/// Dynamic vector with `u8` elements.
pub type DynVectoru8 = DynVector<u8>;
/// Dynamic vector with `u32` elements.
pub type DynVectoru32 = DynVector<u32>;
/// Dynamic vector with `u64` elements.
pub type DynVectoru64 = DynVector<u64>;
