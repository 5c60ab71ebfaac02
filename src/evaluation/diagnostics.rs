//! Goodness-of-fit diagnostics for isotonic fits.
//!
//! ## Purpose
//!
//! This module summarizes how far a fitted sequence is from the data it was
//! fitted to.
//!
//! ## Key concepts
//!
//! * **RSS**: `sum (y_i - yf_i)^2`, the quantity the isotonic fit minimizes.
//! * **R^2**: `1 - RSS / TSS`, reported as 0 when the data has no variance.
//! * **Levels**: number of distinct constant runs in the fit.
//!
//! ## Non-goals
//!
//! * No information criteria: an isotonic fit has no fixed parameter count.

use core::fmt;
use num_traits::Float;

// ============================================================================
// Diagnostics
// ============================================================================

/// Fit quality metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics<T> {
    /// Residual sum of squares.
    pub rss: T,

    /// Root mean squared error.
    pub rmse: T,

    /// Mean absolute error.
    pub mae: T,

    /// Coefficient of determination.
    pub r_squared: T,

    /// Number of constant levels in the fit.
    pub levels: usize,
}

impl<T: Float> Diagnostics<T> {
    /// Compute diagnostics of `fitted` against `y`.
    ///
    /// Both slices must have the same length. Empty input yields all-zero metrics.
    pub fn compute(y: &[T], fitted: &[T]) -> Self {
        let mut count = T::zero();
        let mut total = T::zero();
        for &v in y {
            count = count + T::one();
            total = total + v;
        }

        if y.is_empty() {
            return Self {
                rss: T::zero(),
                rmse: T::zero(),
                mae: T::zero(),
                r_squared: T::zero(),
                levels: 0,
            };
        }

        let mean = total / count;
        let mut rss = T::zero();
        let mut tss = T::zero();
        let mut abs = T::zero();
        for (&v, &f) in y.iter().zip(fitted) {
            let r = v - f;
            rss = rss + r * r;
            abs = abs + r.abs();
            tss = tss + (v - mean) * (v - mean);
        }

        let r_squared = if tss > T::zero() {
            T::one() - rss / tss
        } else {
            T::zero()
        };

        Self {
            rss,
            rmse: (rss / count).sqrt(),
            mae: abs / count,
            r_squared,
            levels: count_levels(fitted),
        }
    }
}

/// Number of maximal runs of equal values.
pub fn count_levels<T: Float>(fitted: &[T]) -> usize {
    if fitted.is_empty() {
        return 0;
    }
    1 + fitted.windows(2).filter(|w| w[0] != w[1]).count()
}

impl<T: Float + fmt::Display> fmt::Display for Diagnostics<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Isotonic Diagnostics:")?;
        writeln!(f, "  RSS:          {:.6}", self.rss)?;
        writeln!(f, "  RMSE:         {:.6}", self.rmse)?;
        writeln!(f, "  MAE:          {:.6}", self.mae)?;
        writeln!(f, "  R^2:          {:.6}", self.r_squared)?;
        write!(f, "  Levels:       {}", self.levels)
    }
}
