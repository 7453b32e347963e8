//! Error type for image buffer construction.

use thiserror::Error;

/// Returned when raw pixel data does not match the requested dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// Data length does not equal `width * height` (times channels for raw bytes)
    #[error("buffer length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Length implied by the dimensions
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },
}
