// ============================================================================
// Stack Errors
// Depth and capacity violations reported by stack operations
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while manipulating a [`Stack`](super::Stack).
///
/// Every check that produces one of these runs before the stack is touched,
/// so a failed operation leaves size and contents exactly as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StackError {
    /// A value was pushed while `size == capacity`
    Overflow {
        /// Capacity of the stack at the time of the push
        capacity: usize,
    },
    /// The operation needed more valid elements than the stack holds
    Underflow {
        /// Number of elements the operation needed
        required: usize,
        /// Number of elements actually on the stack
        available: usize,
    },
}

impl StackError {
    /// Returns `true` for [`StackError::Overflow`].
    #[inline]
    pub const fn is_overflow(&self) -> bool {
        matches!(self, StackError::Overflow { .. })
    }

    /// Returns `true` for [`StackError::Underflow`].
    #[inline]
    pub const fn is_underflow(&self) -> bool {
        matches!(self, StackError::Underflow { .. })
    }
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackError::Overflow { capacity } => {
                write!(f, "stack overflow: capacity of {} slots exhausted", capacity)
            },
            StackError::Underflow {
                required,
                available,
            } => write!(
                f,
                "stack underflow: operation needs {} elements, stack holds {}",
                required, available
            ),
        }
    }
}

impl std::error::Error for StackError {}

/// Result type alias for stack operations
pub type StackResult<T> = Result<T, StackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            StackError::Overflow { capacity: 4 }.to_string(),
            "stack overflow: capacity of 4 slots exhausted"
        );
        assert_eq!(
            StackError::Underflow {
                required: 3,
                available: 1
            }
            .to_string(),
            "stack underflow: operation needs 3 elements, stack holds 1"
        );
    }

    #[test]
    fn test_error_kind() {
        assert!(StackError::Overflow { capacity: 0 }.is_overflow());
        assert!(!StackError::Overflow { capacity: 0 }.is_underflow());
        assert!(StackError::Underflow {
            required: 1,
            available: 0
        }
        .is_underflow());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_error_serde() {
        let err = StackError::Underflow {
            required: 2,
            available: 1,
        };
        let json = serde_json::to_string(&err).unwrap();
        let back: StackError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }
}
