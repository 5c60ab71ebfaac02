//! Output types for isotonic regression.
//!
//! ## Purpose
//!
//! This module defines [`IsoRegResult`], the container returned by
//! [`IsotonicRegression::fit`](crate::api::IsotonicRegression::fit). It pairs
//! the original data with the fitted values and any optional outputs.
//!
//! ## Design notes
//!
//! * Optional outputs use `Option<Vec<T>>` and are only computed on request.
//! * Implements `Display` with a compact table (first and last 10 rows for
//!   long inputs).
//!
//! ## Invariants
//!
//! * `y`, `yf` and `residuals` have the same length.
//! * `cumulative` has length `y.len() + 1`.
//! * `yf` is non-decreasing (non-increasing when `decreasing` is set) for
//!   finite input.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::fmt;
use num_traits::Float;

use crate::evaluation::diagnostics::Diagnostics;

// ============================================================================
// Result Structure
// ============================================================================

/// Result of an isotonic regression fit.
#[derive(Debug, Clone, PartialEq)]
pub struct IsoRegResult<T> {
    /// Original values, in input order.
    pub y: Vec<T>,

    /// Fitted values.
    pub yf: Vec<T>,

    /// Last index of every constant level of the fit.
    pub knots: Option<Vec<usize>>,

    /// Cumulative sums of `y`, starting at 0.
    pub cumulative: Option<Vec<T>>,

    /// Residuals `y_i - yf_i`.
    pub residuals: Option<Vec<T>>,

    /// Goodness-of-fit metrics.
    pub diagnostics: Option<Diagnostics<T>>,

    /// Whether the fit is antitonic (non-increasing).
    pub decreasing: bool,
}

impl<T: Float> IsoRegResult<T> {
    /// Number of data points.
    pub fn len(&self) -> usize {
        self.y.len()
    }

    /// Whether the fit covers no data.
    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + fmt::Display> fmt::Display for IsoRegResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.y.len())?;
        writeln!(
            f,
            "  Direction: {}",
            if self.decreasing {
                "Decreasing"
            } else {
                "Increasing"
            }
        )?;
        if let Some(knots) = &self.knots {
            writeln!(f, "  Knots: {}", knots.len())?;
        }
        writeln!(f)?;

        if let Some(diag) = &self.diagnostics {
            writeln!(f, "{}", diag)?;
            writeln!(f)?;
        }

        writeln!(f, "Fitted Data:")?;
        let has_resid = self.residuals.is_some();
        write!(f, "{:>8} {:>12} {:>12}", "Index", "Y", "Y_fit")?;
        if has_resid {
            write!(f, " {:>12}", "Residual")?;
        }
        writeln!(f)?;
        let line_width = 34 + if has_resid { 13 } else { 0 };
        writeln!(f, "{:-<width$}", "", width = line_width)?;

        let n = self.y.len();
        let rows: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev = 0;
        for (k, &idx) in rows.iter().enumerate() {
            if k > 0 && idx != prev + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev = idx;

            write!(f, "{:>8} {:>12.6} {:>12.6}", idx, self.y[idx], self.yf[idx])?;
            if let Some(resid) = &self.residuals {
                write!(f, " {:>12.6}", resid[idx])?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
