//! Input validation for isotonic regression.
//!
//! ## Purpose
//!
//! This module checks the preconditions of the public entry points before any
//! internal state is built: buffer lengths, explicit lengths, optional
//! finiteness, and builder configuration.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sanitize values. Non-finite input is only rejected
//!   when the caller asks for it; otherwise it propagates through the fit.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::IsoRegError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for isotonic regression inputs and configuration.
pub struct Validator;

impl Validator {
    /// Validate that a caller-provided output buffer matches the input length.
    pub fn validate_output_len(input_len: usize, output_len: usize) -> Result<(), IsoRegError> {
        if input_len != output_len {
            return Err(IsoRegError::MismatchedLength {
                input_len,
                output_len,
            });
        }
        Ok(())
    }

    /// Validate an explicit length against the number of supplied values.
    pub fn validate_length(n: usize, len: usize) -> Result<(), IsoRegError> {
        if n > len {
            return Err(IsoRegError::InvalidLength { n, len });
        }
        Ok(())
    }

    /// Validate that every value is finite.
    pub fn validate_finite<T: Float>(y: &[T]) -> Result<(), IsoRegError> {
        for (i, &val) in y.iter().enumerate() {
            if !val.is_finite() {
                return Err(IsoRegError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    /// Validate that no builder parameter was set twice.
    pub fn validate_no_duplicates(duplicate: Option<&'static str>) -> Result<(), IsoRegError> {
        match duplicate {
            Some(parameter) => Err(IsoRegError::DuplicateParameter { parameter }),
            None => Ok(()),
        }
    }
}
