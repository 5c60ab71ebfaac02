//! Layer 3: Evaluation
//!
//! # Purpose
//!
//! Post-processing of a finished fit:
//! - Diagnostics (RSS, RMSE, MAE, R^2, levels)
//! - Knots and the cumulative sum diagram
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Evaluation ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fit diagnostics.
pub mod diagnostics;

/// Level boundaries and cumulative sums.
pub mod knots;
