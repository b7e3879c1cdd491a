//! Error types for the batch layer.
//!
//! Kernel operations are total over the floating point domain and never fail. Only the
//! slice-based batch helpers validate their input shape and report problems here.

use std::fmt;

/// Errors that can occur when applying the kernel over packed slices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Vec4Error {
    /// A packed slice does not hold a whole number of vectors.
    LengthNotMultipleOfLanes {
        /// Length of the offending slice, in floats.
        len: usize,
        /// Floats per vector.
        lanes: usize,
    },
    /// Two packed operands differ in length.
    LengthMismatch {
        /// Length of the slice being written, in floats.
        expected: usize,
        /// Length of the other operand, in floats.
        actual: usize,
    },
    /// Input validation error.
    ValidationError {
        /// Human-readable error message.
        message: String,
    },
}

impl fmt::Display for Vec4Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vec4Error::LengthNotMultipleOfLanes { len, lanes } => write!(
                f,
                "Invalid packed length: {} floats is not a multiple of {} lanes",
                len, lanes
            ),
            Vec4Error::LengthMismatch { expected, actual } => write!(
                f,
                "Operand length mismatch: expected {} floats, got {}",
                expected, actual
            ),
            Vec4Error::ValidationError { message } => {
                write!(f, "Validation error: {}", message)
            }
        }
    }
}

impl std::error::Error for Vec4Error {}

/// Result type alias for batch operations.
pub type Result<T> = std::result::Result<T, Vec4Error>;

/// Creates a packed length error.
pub fn length_error(len: usize, lanes: usize) -> Vec4Error {
    Vec4Error::LengthNotMultipleOfLanes { len, lanes }
}

/// Creates an operand length mismatch error.
pub fn mismatch_error(expected: usize, actual: usize) -> Vec4Error {
    Vec4Error::LengthMismatch { expected, actual }
}

/// Creates a validation error.
pub fn validation_error(message: impl Into<String>) -> Vec4Error {
    Vec4Error::ValidationError {
        message: message.into(),
    }
}
