//! Unified error type for the quantize-dither public API.
//!
//! [`DitherError`] wraps all error types from the crate into a single enum
//! for convenient `?` propagation in application code.

use thiserror::Error;

use crate::image::BufferError;
use crate::palette::{PaletteError, ParseColorError};
use crate::quantize::QuantizeError;

/// Unified error type for the quantize-dither public API.
///
/// # Example
///
/// ```
/// use quantize_dither::{DitherError, Palette, Quantizer};
///
/// fn build() -> Result<Quantizer, DitherError> {
///     let palette = Palette::from_hex(&["#000000", "#FFFFFF"])?;
///     Ok(Quantizer::nearest(palette))
/// }
///
/// assert!(build().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DitherError {
    /// Palette validation error (empty, duplicate, or parse error)
    #[error("palette error: {0}")]
    Palette(#[from] PaletteError),
    /// Color parsing error (invalid hex string)
    #[error("color parse error: {0}")]
    ParseColor(#[from] ParseColorError),
    /// Invalid quantizer parameters
    #[error("quantizer error: {0}")]
    Quantize(#[from] QuantizeError),
    /// Raw pixel data did not match the stated dimensions
    #[error("buffer error: {0}")]
    Buffer(#[from] BufferError),
    /// Source and destination grids differ in size
    #[error(
        "dimension mismatch: source is {}x{}, destination is {}x{}",
        .source_size.0,
        .source_size.1,
        .destination_size.0,
        .destination_size.1
    )]
    DimensionMismatch {
        /// Source `(width, height)`
        source_size: (usize, usize),
        /// Destination `(width, height)`
        destination_size: (usize, usize),
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_conversions() {
        let err: DitherError = PaletteError::EmptyPalette.into();
        assert!(matches!(err, DitherError::Palette(_)));

        let err: DitherError = QuantizeError::UnsupportedBitDepth(9).into();
        assert_eq!(
            err.to_string(),
            "quantizer error: unsupported bit depth 9 (expected 1..=8)"
        );
    }

    #[test]
    fn test_dimension_mismatch_message() {
        let err = DitherError::DimensionMismatch {
            source_size: (640, 480),
            destination_size: (480, 640),
        };
        assert_eq!(
            err.to_string(),
            "dimension mismatch: source is 640x480, destination is 480x640"
        );
    }
}
