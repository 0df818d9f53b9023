// ============================================================================
// Numeric Errors
// Error types for checked operations on numeric value types
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur in checked vector, matrix and complex operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumericError {
    /// Attempted division by zero (or by a zero-magnitude value)
    DivisionByZero,
    /// Matrix has no inverse
    Singular,
    /// Input length does not match the fixed dimension
    DimensionMismatch { expected: usize, found: usize },
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::Singular => write!(f, "singular matrix: no inverse exists"),
            NumericError::DimensionMismatch { expected, found } => write!(
                f,
                "dimension mismatch: expected {} elements, found {}",
                expected, found
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
