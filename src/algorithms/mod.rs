//! Layer 2: Algorithms
//!
//! # Purpose
//!
//! This layer implements the isotonic fit itself:
//! - The bidirectional Pool-Adjacent-Violators driver
//! - The materializer that turns pooled blocks into fitted values
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Evaluation
//!   ↓
//! Layer 2: Algorithms ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Pool-Adjacent-Violators driver.
pub mod pava;

/// Block list to fitted values.
pub mod materialize;
