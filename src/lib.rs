//! # isoreg-rs — Isotonic Regression for Rust
//!
//! Exact least-squares isotonic regression of a finite real sequence, computed
//! with a bidirectional Pool-Adjacent-Violators scan.
//!
//! ## What is isotonic regression?
//!
//! Given values `y_0, ..., y_(n-1)`, the isotonic fit is the non-decreasing
//! sequence `yf` that minimizes `sum (y_i - yf_i)^2`. It is made of constant
//! levels; each level is the mean of the input values it covers.
//!
//! **Common applications:**
//! - Probability calibration of classifiers
//! - Dose-response and other monotone trend estimation
//! - Monotone smoothing of cumulative measurements
//!
//! **How the scan works:**
//!
//! 1. Walk the input from right to left comparing neighbours.
//! 2. At a violation, open a block and grow it leftward while its mean exceeds
//!    the value to its left.
//! 3. If the lowered mean now violates the value on its right, grow the same
//!    block rightward, merging any block it meets, then go back to step 2.
//! 4. Indices never pooled keep their raw value.
//!
//! A single scan resolves every violation; there is no second left-to-right pass.
//!
//! ## Quick Start
//!
//! ```rust
//! use isoreg_rs::prelude::*;
//!
//! let y = vec![1.0, 3.0, 2.0, 4.0];
//! assert_eq!(isoreg(&y), vec![1.0, 2.5, 2.5, 4.0]);
//! ```
//!
//! ### Full Features
//!
//! ```rust
//! use isoreg_rs::prelude::*;
//!
//! let y = vec![5.0, 1.0, 4.0, 2.0, 3.0, 7.0];
//!
//! let model = IsoReg::new()
//!     .return_knots()          // Last index of each level
//!     .return_cumulative()     // Cumulative sum diagram
//!     .return_residuals()      // y - yf
//!     .return_diagnostics()    // RSS, RMSE, MAE, R^2, levels
//!     .build()?;
//!
//! let result = model.fit(&y)?;
//! assert_eq!(result.yf, vec![3.0, 3.0, 3.0, 3.0, 3.0, 7.0]);
//! assert_eq!(result.knots, Some(vec![4, 5]));
//! println!("{}", result);
//! # Result::<(), IsoRegError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! The fit itself cannot fail. Errors only come from the boundary:
//!
//! - **`MismatchedLength`**: an output buffer of the wrong size.
//! - **`InvalidLength`**: an explicit length larger than the data.
//! - **`InvalidNumericValue`**: non-finite input with `reject_non_finite()`.
//! - **`DuplicateParameter`**: a builder option set twice.
//!
//! ```rust
//! use isoreg_rs::prelude::*;
//!
//! let y = [3.0, 2.0, 1.0];
//! let mut out = [0.0; 2];
//! assert!(isoreg_into(&y, &mut out).is_err());
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! isoreg-rs = { version = "0.1", default-features = false }
//! ```
//!
//! ## Features
//!
//! - **`std`** (default): `std::error::Error` for [`prelude::IsoRegError`].
//! - **`tracing-log`**: structured `tracing` events from the driver.
//! - **`dev`**: exposes internal layers for testing.
//!
//! ## References
//!
//! - Barlow, R. E. et al. (1972). "Statistical Inference under Order Restrictions"
//! - Best, M. J. & Chakravarti, N. (1990). "Active set algorithms for isotonic regression"

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - error type and the block store.
mod primitives;

// Layer 2: Algorithms - PAVA driver and materializer.
mod algorithms;

// Layer 3: Evaluation - diagnostics, knots, cumulative sums.
mod evaluation;

// Layer 4: Engine - validation, orchestration, result assembly.
mod engine;

// High-level fluent API.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard isotonic regression prelude.
///
/// ```
/// use isoreg_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        Diagnostics, IsoRegBuilder as IsoReg, IsoRegError, IsoRegResult, IsotonicRegression,
        isoreg, isoreg_into, isoreg_n,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// Only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal evaluation.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
