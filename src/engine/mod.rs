//! Layer 4: Engine
//!
//! # Purpose
//!
//! Orchestration of a fit:
//! - Boundary validation
//! - Running the driver and materializer, assembling optional outputs
//! - The result type
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Evaluation
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fit orchestration.
pub mod executor;

/// Result container.
pub mod output;

/// Input and configuration validation.
pub mod validator;
