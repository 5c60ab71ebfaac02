//! High-level API for isotonic regression.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: a fluent builder for
//! configuring a fit, the immutable model it produces, and free functions for
//! the common "slice in, fitted values out" case.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Configuration is validated when `.build()` is called; data
//!   is validated when it reaches `fit`.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create an [`IsoRegBuilder`] via `IsoReg::new()`.
//! 2. Chain configuration methods (`.decreasing()`, `.return_knots()`, etc.).
//! 3. Call `.build()` to obtain an [`IsotonicRegression`] and `.fit(&y)` it.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::marker::PhantomData;
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{IsoRegConfig, IsoRegExecutor};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::engine::output::IsoRegResult;
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::primitives::errors::IsoRegError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring isotonic regression.
#[derive(Debug, Clone)]
pub struct IsoRegBuilder<T> {
    /// Fit a non-increasing sequence (default: false).
    pub decreasing: Option<bool>,

    /// Reject NaN and infinite input (default: false).
    pub reject_non_finite: Option<bool>,

    /// Return level boundaries.
    pub return_knots: Option<bool>,

    /// Return cumulative sums of the input.
    pub return_cumulative: Option<bool>,

    /// Return residuals `y_i - yf_i`.
    pub return_residuals: Option<bool>,

    /// Return goodness-of-fit diagnostics.
    pub return_diagnostics: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,

    _marker: PhantomData<T>,
}

impl<T: Float> Default for IsoRegBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> IsoRegBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            decreasing: None,
            reject_non_finite: None,
            return_knots: None,
            return_cumulative: None,
            return_residuals: None,
            return_diagnostics: None,
            duplicate_param: None,
            _marker: PhantomData,
        }
    }

    fn set(slot: &mut Option<bool>, dup: &mut Option<&'static str>, name: &'static str) {
        if slot.is_some() {
            *dup = Some(name);
        }
        *slot = Some(true);
    }

    /// Fit a non-increasing (antitonic) sequence.
    pub fn decreasing(mut self) -> Self {
        Self::set(&mut self.decreasing, &mut self.duplicate_param, "decreasing");
        self
    }

    /// Fail with [`IsoRegError::InvalidNumericValue`] on NaN or infinite input.
    pub fn reject_non_finite(mut self) -> Self {
        Self::set(
            &mut self.reject_non_finite,
            &mut self.duplicate_param,
            "reject_non_finite",
        );
        self
    }

    /// Include the last index of every constant level in the result.
    pub fn return_knots(mut self) -> Self {
        Self::set(&mut self.return_knots, &mut self.duplicate_param, "return_knots");
        self
    }

    /// Include the cumulative sums of the input in the result.
    pub fn return_cumulative(mut self) -> Self {
        Self::set(
            &mut self.return_cumulative,
            &mut self.duplicate_param,
            "return_cumulative",
        );
        self
    }

    /// Include residuals in the result.
    pub fn return_residuals(mut self) -> Self {
        Self::set(
            &mut self.return_residuals,
            &mut self.duplicate_param,
            "return_residuals",
        );
        self
    }

    /// Include diagnostics in the result.
    pub fn return_diagnostics(mut self) -> Self {
        Self::set(
            &mut self.return_diagnostics,
            &mut self.duplicate_param,
            "return_diagnostics",
        );
        self
    }

    /// Validate the configuration and build the model.
    pub fn build(self) -> Result<IsotonicRegression<T>, IsoRegError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(IsotonicRegression {
            config: IsoRegConfig {
                decreasing: self.decreasing.unwrap_or(false),
                return_knots: self.return_knots.unwrap_or(false),
                return_cumulative: self.return_cumulative.unwrap_or(false),
                return_residuals: self.return_residuals.unwrap_or(false),
                return_diagnostics: self.return_diagnostics.unwrap_or(false),
            },
            reject_non_finite: self.reject_non_finite.unwrap_or(false),
            _marker: PhantomData,
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// Configured isotonic regression model.
///
/// Holds no per-fit state; every call to [`fit`](Self::fit) builds and drops
/// its own block list.
#[derive(Debug, Clone)]
pub struct IsotonicRegression<T> {
    config: IsoRegConfig,
    reject_non_finite: bool,
    _marker: PhantomData<T>,
}

impl<T: Float> IsotonicRegression<T> {
    /// The resolved configuration.
    pub fn config(&self) -> &IsoRegConfig {
        &self.config
    }

    /// Fit `y` and return the full result.
    pub fn fit(&self, y: &[T]) -> Result<IsoRegResult<T>, IsoRegError> {
        if self.reject_non_finite {
            Validator::validate_finite(y)?;
        }
        Ok(IsoRegExecutor::run(y, &self.config))
    }

    /// Fit `y` into a caller-provided buffer of the same length.
    pub fn fit_into(&self, y: &[T], out: &mut [T]) -> Result<(), IsoRegError> {
        Validator::validate_output_len(y.len(), out.len())?;
        if self.reject_non_finite {
            Validator::validate_finite(y)?;
        }
        IsoRegExecutor::fit_into(y, out, self.config.decreasing);
        Ok(())
    }
}

// ============================================================================
// Free Functions
// ============================================================================

/// Non-decreasing least-squares fit of `y`.
///
/// Total over all inputs: empty input yields empty output, and NaN or
/// infinite values propagate through ordinary floating-point arithmetic.
pub fn isoreg<T: Float>(y: &[T]) -> Vec<T> {
    let mut out = vec![T::zero(); y.len()];
    IsoRegExecutor::fit_into(y, &mut out, false);
    out
}

/// Non-decreasing least-squares fit of `y` into `out`.
///
/// Fails with [`IsoRegError::MismatchedLength`] when the lengths differ.
pub fn isoreg_into<T: Float>(y: &[T], out: &mut [T]) -> Result<(), IsoRegError> {
    Validator::validate_output_len(y.len(), out.len())?;
    IsoRegExecutor::fit_into(y, out, false);
    Ok(())
}

/// Non-decreasing least-squares fit of the first `n` values of `y`.
///
/// Fails with [`IsoRegError::InvalidLength`] when `n` exceeds `y.len()`.
pub fn isoreg_n<T: Float>(y: &[T], n: usize) -> Result<Vec<T>, IsoRegError> {
    Validator::validate_length(n, y.len())?;
    Ok(isoreg(&y[..n]))
}
