//! Error types for Reconocer operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Reconocer operations.
///
/// Provides detailed context about failures including dimension mismatches,
/// singular matrices, corrupt weight buffers, and premature inference calls.
///
/// # Examples
///
/// ```
/// use reconocer::error::ReconocerError;
///
/// let err = ReconocerError::DimensionMismatch {
///     expected: "1x784".to_string(),
///     actual: "1x100".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum ReconocerError {
    /// Matrix dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Square-only operation invoked on a non-square matrix.
    NotSquare {
        /// Operation that required a square input
        op: &'static str,
        /// Rows of the offending matrix
        rows: usize,
        /// Columns of the offending matrix
        cols: usize,
    },

    /// Matrix is singular (non-invertible).
    SingularMatrix {
        /// Determinant value (zero)
        det: f32,
    },

    /// Weight buffer has the wrong size for the network architecture.
    CorruptModel {
        /// Expected buffer length in bytes
        expected_bytes: usize,
        /// Actual buffer length in bytes
        actual_bytes: usize,
    },

    /// Inference requested before the network reached the `Ready` state.
    NotReady {
        /// State the network was in when `predict` was called
        state: &'static str,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),
}

impl fmt::Display for ReconocerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReconocerError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Matrix dimension mismatch: expected {expected}, got {actual}"
                )
            }
            ReconocerError::NotSquare { op, rows, cols } => {
                write!(f, "{op} requires a square matrix, got {rows}x{cols}")
            }
            ReconocerError::SingularMatrix { det } => {
                write!(
                    f,
                    "Singular matrix detected: determinant = {det}, cannot invert"
                )
            }
            ReconocerError::CorruptModel {
                expected_bytes,
                actual_bytes,
            } => {
                write!(
                    f,
                    "Corrupt model: expected {expected_bytes} bytes of little-endian f32 \
                     parameters, got {actual_bytes}"
                )
            }
            ReconocerError::NotReady { state } => {
                write!(f, "Network is not ready for inference (state: {state})")
            }
            ReconocerError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for ReconocerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReconocerError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ReconocerError {
    fn from(err: std::io::Error) -> Self {
        ReconocerError::Io(err)
    }
}

impl ReconocerError {
    /// Create a dimension mismatch error from two shapes.
    #[must_use]
    pub fn shape_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, ReconocerError>;
