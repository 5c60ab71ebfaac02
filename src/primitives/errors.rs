//! Error types for isotonic regression.
//!
//! ## Purpose
//!
//! This module defines [`IsoRegError`], the single error type returned by every
//! fallible entry point of the crate.
//!
//! ## Design notes
//!
//! * **no_std**: `Display` is written by hand so the type needs no proc-macro crate.
//! * **std**: `std::error::Error` is implemented when the `std` feature is enabled.
//!
//! ## Non-goals
//!
//! * The fitting algorithm itself never fails; every variant here is a
//!   precondition or configuration error raised at the boundary.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

use core::fmt;

/// Errors raised when validating isotonic regression inputs or configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum IsoRegError {
    /// The output buffer does not have the same length as the input.
    MismatchedLength {
        /// Length of the input sequence.
        input_len: usize,
        /// Length of the caller-provided output buffer.
        output_len: usize,
    },

    /// The requested length exceeds the supplied data.
    InvalidLength {
        /// Requested number of values.
        n: usize,
        /// Number of values actually supplied.
        len: usize,
    },

    /// A non-finite value was found while finite input was required.
    InvalidNumericValue(String),

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for IsoRegError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MismatchedLength {
                input_len,
                output_len,
            } => write!(
                f,
                "Length mismatch: input has {} values, output buffer has {}",
                input_len, output_len
            ),
            Self::InvalidLength { n, len } => write!(
                f,
                "Invalid length: n={} but only {} values were supplied",
                n, len
            ),
            Self::InvalidNumericValue(msg) => write!(f, "Invalid numeric value: {}", msg),
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for IsoRegError {}
