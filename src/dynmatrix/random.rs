use num_traits::ToPrimitive;
use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use tracing::{debug, warn};

use crate::scalar::is_integral;
use crate::traits::Number;

use super::vector::DynVector;
use super::{DynMatrix, GenerationError};

/// Default cap on full fills before [`GenerationError::AttemptsExhausted`].
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Settings for random non-zero generation.
///
/// Values are drawn from the half-open range `[lower, upper)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomSettings<T> {
    /// Inclusive lower bound (default: 0).
    pub lower: T,
    /// Exclusive upper bound (default: 1/1000).
    pub upper: T,
    /// Full fills tried before giving up (default: 1000).
    pub max_attempts: usize,
}

impl<T: Number> RandomSettings<T> {
    /// Settings for `[lower, upper)` with the default attempt cap.
    pub fn new(lower: T, upper: T) -> Self {
        Self {
            lower,
            upper,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Replace the attempt cap.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

impl Default for RandomSettings<f64> {
    fn default() -> Self {
        Self::new(0.0, 1e-3)
    }
}

impl Default for RandomSettings<f32> {
    fn default() -> Self {
        Self::new(0.0, 1e-3)
    }
}

impl<T: Number + SampleUniform> DynMatrix<T> {
    /// Random matrix in which every row holds at least one non-zero value.
    ///
    /// Each attempt fills all cells from `[settings.lower, settings.upper)`
    /// using `rng`; an attempt that leaves any row all zero is discarded and
    /// the whole fill is redrawn, up to `settings.max_attempts` times. A
    /// matrix with a zero dimension is returned without drawing.
    ///
    /// An empty range fails with [`GenerationError::EmptyRange`], and a float
    /// range without a finite width with [`GenerationError::UnboundedRange`],
    /// both before anything is drawn.
    ///
    /// ```
    /// use numkit::{DynMatrix, RandomSettings};
    /// use rand::SeedableRng;
    ///
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    /// let m = DynMatrix::random_nonzero(3, 4, &RandomSettings::<f64>::default(), &mut rng).unwrap();
    /// assert_eq!(m.shape(), (3, 4));
    /// assert!(m.as_slice().iter().all(|&x| (0.0..1e-3).contains(&x)));
    /// ```
    pub fn random_nonzero<R: Rng + ?Sized>(
        nrows: usize,
        ncols: usize,
        settings: &RandomSettings<T>,
        rng: &mut R,
    ) -> Result<Self, GenerationError> {
        if !(settings.lower < settings.upper) {
            return Err(GenerationError::EmptyRange);
        }
        if !is_integral::<T>() {
            let width = (settings.upper - settings.lower).to_f64();
            if !width.map_or(false, f64::is_finite) {
                debug!("random range has no finite width");
                return Err(GenerationError::UnboundedRange);
            }
        }
        if nrows == 0 || ncols == 0 {
            return Ok(Self::zeros(nrows, ncols));
        }

        let dist = Uniform::new(settings.lower, settings.upper);
        let mut m = Self::zeros(nrows, ncols);
        for attempt in 1..=settings.max_attempts {
            let mut every_row_nonzero = true;
            for i in 0..nrows {
                let mut row_nonzero = false;
                for j in 0..ncols {
                    let x = dist.sample(rng);
                    row_nonzero |= !x.is_zero();
                    m[(i, j)] = x;
                }
                every_row_nonzero &= row_nonzero;
            }
            if every_row_nonzero {
                return Ok(m);
            }
            debug!(attempt, nrows, ncols, "random fill left an all-zero row, redrawing");
        }

        warn!(
            attempts = settings.max_attempts,
            nrows, ncols, "random non-zero fill exhausted its attempt budget"
        );
        Err(GenerationError::AttemptsExhausted {
            attempts: settings.max_attempts,
        })
    }

    /// [`random_nonzero`](Self::random_nonzero) drawing from the calling
    /// thread's generator.
    #[cfg(feature = "std")]
    pub fn random_nonzero_thread_rng(
        nrows: usize,
        ncols: usize,
        settings: &RandomSettings<T>,
    ) -> Result<Self, GenerationError> {
        Self::random_nonzero(nrows, ncols, settings, &mut rand::thread_rng())
    }
}

impl<T: Number + SampleUniform> DynVector<T> {
    /// Random vector with at least one non-zero element.
    ///
    /// Same contract as [`DynMatrix::random_nonzero`] for a single row.
    pub fn random_nonzero<R: Rng + ?Sized>(
        n: usize,
        settings: &RandomSettings<T>,
        rng: &mut R,
    ) -> Result<Self, GenerationError> {
        let inner = DynMatrix::random_nonzero(1, n, settings, rng)?;
        Ok(Self { inner })
    }

    /// [`random_nonzero`](Self::random_nonzero) drawing from the calling
    /// thread's generator.
    #[cfg(feature = "std")]
    pub fn random_nonzero_thread_rng(
        n: usize,
        settings: &RandomSettings<T>,
    ) -> Result<Self, GenerationError> {
        Self::random_nonzero(n, settings, &mut rand::thread_rng())
    }
}
