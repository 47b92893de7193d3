//! Error types for series and indicator operations.
//!
//! Parameter and alignment errors are raised eagerly at the call that detects
//! them. Numeric edge cases (division by zero, zero-variance windows) are never
//! errors: they propagate as NA or infinity through the per-bar computation.

use thiserror::Error;

/// Result type alias for operations that may fail.
pub type Result<T> = core::result::Result<T, TaError>;

/// Errors that can occur during series or indicator computation.
#[derive(Debug, Error)]
pub enum TaError {
    /// Invalid window or lookback length.
    #[error("Invalid window size: {0} (must be > 0)")]
    InvalidWindow(usize),

    /// Invalid parameter value.
    #[error("Invalid parameter '{name}': {value} (expected {expected})")]
    InvalidParameter {
        /// Name of the parameter.
        name: &'static str,
        /// Provided value as string.
        value: String,
        /// Description of expected value.
        expected: &'static str,
    },

    /// Two series operands of incompatible lengths that cannot be reconciled
    /// by scalar broadcasting.
    #[error("Cannot broadcast series of length {actual} against length {expected}")]
    BroadcastMismatch {
        /// Length of the left-hand operand.
        expected: usize,
        /// Length of the right-hand operand.
        actual: usize,
    },
}
