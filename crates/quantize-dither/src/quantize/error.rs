//! Error type for quantizer construction.

use thiserror::Error;

/// Returned when a quantizer is configured with invalid parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantizeError {
    /// Bit depth outside `1..=8`
    #[error("unsupported bit depth {0} (expected 1..=8)")]
    UnsupportedBitDepth(u8),
}
