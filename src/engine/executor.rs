//! Execution engine for isotonic regression.
//!
//! ## Purpose
//!
//! This module wires the layers together: it runs the PAVA driver, replays the
//! blocks into fitted values, and assembles the optional outputs requested by
//! the configuration.
//!
//! ## Design notes
//!
//! * **Per-call state**: Each run owns a fresh block list; nothing is shared
//!   between calls, so a single configuration can serve concurrent callers.
//! * **Antitonic fits**: A decreasing fit is the negated increasing fit of
//!   the negated data.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (handled by `validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::materialize::materialize_into;
use crate::algorithms::pava::pava_blocks;
use crate::engine::output::IsoRegResult;
use crate::evaluation::diagnostics::Diagnostics;
use crate::evaluation::knots::{cumulative, knots};

// ============================================================================
// Configuration
// ============================================================================

/// Resolved configuration for one fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IsoRegConfig {
    /// Fit a non-increasing sequence instead.
    pub decreasing: bool,

    /// Return level boundaries.
    pub return_knots: bool,

    /// Return cumulative sums of the input.
    pub return_cumulative: bool,

    /// Return residuals.
    pub return_residuals: bool,

    /// Return diagnostics.
    pub return_diagnostics: bool,
}

// ============================================================================
// Executor
// ============================================================================

/// Stateless runner for isotonic fits.
pub struct IsoRegExecutor;

impl IsoRegExecutor {
    /// Write the isotonic fit of `y` into `out`.
    ///
    /// `out.len()` must equal `y.len()`.
    pub fn fit_into<T: Float>(y: &[T], out: &mut [T], decreasing: bool) {
        if decreasing {
            let negated: Vec<T> = y.iter().map(|&v| -v).collect();
            let blocks = pava_blocks(&negated);
            materialize_into(&negated, &blocks, out);
            for v in out.iter_mut() {
                *v = -*v;
            }
        } else {
            let blocks = pava_blocks(y);
            materialize_into(y, &blocks, out);
        }
    }

    /// Run a full fit according to `config`.
    pub fn run<T: Float>(y: &[T], config: &IsoRegConfig) -> IsoRegResult<T> {
        #[cfg(feature = "tracing-log")]
        tracing::debug!(n = y.len(), decreasing = config.decreasing, "isotonic fit");

        let mut yf = vec![T::zero(); y.len()];
        Self::fit_into(y, &mut yf, config.decreasing);

        let residuals = config
            .return_residuals
            .then(|| y.iter().zip(&yf).map(|(&v, &f)| v - f).collect());
        let diagnostics = config
            .return_diagnostics
            .then(|| Diagnostics::compute(y, &yf));
        let knots = config.return_knots.then(|| knots(&yf));
        let cumulative = config.return_cumulative.then(|| cumulative(y));

        IsoRegResult {
            y: y.to_vec(),
            yf,
            knots,
            cumulative,
            residuals,
            diagnostics,
            decreasing: config.decreasing,
        }
    }
}
