//! # numkit
//!
//! Generic numeric primitives: dense matrix and vector construction, spectral
//! assembly, and the scalar, statistics, interpolation and fraction utilities
//! they are built from. Every operation is generic over the [`Number`]
//! capability, so the same code serves `u8` through `i128`, `f32` and `f64`.
//!
//! ## Quick start
//!
//! ```
//! use numkit::spectral::EigenMultiplicities;
//! use numkit::{DynMatrix, RandomSettings};
//! use rand::SeedableRng;
//!
//! // Ragged rows are padded with zeros.
//! let m = DynMatrix::<i32>::from_row_vectors(&[vec![1, 2, 3], vec![4]]);
//! assert_eq!(m.shape(), (2, 3));
//! assert_eq!(m.row_vectors()[1].as_slice(), &[4, 0, 0]);
//!
//! // Random matrix with no all-zero row, from an injected generator.
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let r = DynMatrix::random_nonzero(3, 3, &RandomSettings::<f64>::default(), &mut rng).unwrap();
//! assert_eq!(r.shape(), (3, 3));
//!
//! // Singular values from eigenvalues with multiplicities.
//! let set = EigenMultiplicities::from_parts(2, &[1.0_f64, 9.0], &[1, 2]).unwrap();
//! let sv: Vec<f64> = set.sorted_descending().singular_values(3).unwrap();
//! assert_eq!(sv, vec![3.0, 3.0, 1.0]);
//! ```
//!
//! ## Modules
//!
//! - [`traits`] — element trait hierarchy:
//!   - [`Scalar`] — matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`Number`] — ordered, bounded, castable scalars; checked, saturating
//!     and truncating conversion to a second `Number` type
//!   - [`FloatScalar`] — real floats, used where square roots and rounding
//!     are needed
//!   - [`MatrixRef`] / [`MatrixMut`] — generic read/write element access
//!
//! - [`convert`] — the three conversion flavors as free functions, and
//!   [`ConversionError`].
//!
//! - [`scalar`] — mixed-type arithmetic (`add::<A, B, R>` and friends),
//!   spreadsheet modulo, GCD, clamping, wrapping, rounding.
//!
//! - [`stats`] — sum, average, sample variance and standard deviation.
//!
//! - [`interp`] — linear interpolation of scalars, tuples, arrays, vectors
//!   and matrices via the [`Lerp`](interp::Lerp) trait.
//!
//! - [`fraction`] — mixed fractions: proper/improper forms, simplification,
//!   denominator scaling, rounding a float to the nearest fraction.
//!
//! - [`dynmatrix`] — heap-allocated `DynMatrix<T>` (column-major `Vec<T>`)
//!   and `DynVector<T>`, built from ragged row/column collections, identity,
//!   zero and random non-zero factories (requires `alloc`).
//!
//! - [`spectral`] — lambda matrices from eigenvalue multiplicities,
//!   descending reordering, singular values for a rank (requires `alloc`).
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Implies `alloc`. `std::error::Error` impls, `thread_rng` helpers |
//! | `alloc`   | via std  | `DynMatrix`, `DynVector`, spectral assembly |
//!
//! Float math goes through `num-traits`' `libm` backend, so everything
//! except the `alloc` modules works in `no_std` builds.
//!
//! ## Logging
//!
//! Rejected random fills and rejected spectral requests emit
//! [`tracing`](https://docs.rs/tracing) events at `debug` level; an exhausted
//! random fill emits a `warn`. Install any subscriber to see them.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod convert;
#[cfg(feature = "alloc")]
pub mod dynmatrix;
pub mod fraction;
pub mod interp;
pub mod scalar;
#[cfg(feature = "alloc")]
pub mod spectral;
pub mod stats;
pub mod traits;

pub use convert::ConversionError;
#[cfg(feature = "alloc")]
pub use dynmatrix::{
    DynMatrix, DynVector, GenerationError, RandomSettings,
    DynMatrixf32, DynMatrixf64, DynMatrixi32, DynMatrixi64, DynMatrixu32, DynMatrixu64, DynMatrixu8,
    DynVectorf32, DynVectorf64, DynVectori32, DynVectori64, DynVectoru32, DynVectoru64, DynVectoru8,
};
pub use traits::{FloatScalar, MatrixMut, MatrixRef, Number, Scalar};
