//! Signed per-pixel quantization error.

use crate::color::Rgb8;

/// The signed difference `current - accepted`, one value per channel.
///
/// Computed once per pixel, scaled by each kernel weight, added to the
/// neighbors and then dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuantError {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl QuantError {
    pub const ZERO: QuantError = QuantError { r: 0, g: 0, b: 0 };

    /// Error left over when `current` was quantized to `accepted`.
    #[inline]
    pub fn between(current: Rgb8, accepted: Rgb8) -> Self {
        Self {
            r: current.r as i32 - accepted.r as i32,
            g: current.g as i32 - accepted.g as i32,
            b: current.b as i32 - accepted.b as i32,
        }
    }

    /// `self * weight / divisor` per channel, truncated toward zero.
    #[inline]
    pub fn scaled(self, weight: i32, divisor: i32) -> Self {
        Self {
            r: self.r * weight / divisor,
            g: self.g * weight / divisor,
            b: self.b * weight / divisor,
        }
    }

    /// Add this error to `color`, clamping each channel to 0..=255.
    #[inline]
    pub fn apply_to(self, color: Rgb8) -> Rgb8 {
        let [r, g, b] = color.to_i32();
        Rgb8::from_i32_clamped([r + self.r, g + self.g, b + self.b])
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between_is_signed() {
        let err = QuantError::between(Rgb8::new(10, 200, 128), Rgb8::new(0, 255, 128));
        assert_eq!(err, QuantError { r: 10, g: -55, b: 0 });
    }

    #[test]
    fn test_scaled_truncates_toward_zero() {
        let err = QuantError { r: 10, g: -10, b: 1 };
        assert_eq!(err.scaled(7, 16), QuantError { r: 4, g: -4, b: 0 });
        assert_eq!(err.scaled(1, 16), QuantError::ZERO);
    }

    #[test]
    fn test_apply_clamps() {
        let err = QuantError { r: -50, g: 50, b: 0 };
        assert_eq!(err.apply_to(Rgb8::new(20, 230, 7)), Rgb8::new(0, 255, 7));
    }
}
