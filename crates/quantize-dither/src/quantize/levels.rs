//! Evenly spaced per-channel quantization levels.

use super::error::QuantizeError;

/// Channel reduction to `2^bits` evenly spaced values.
///
/// With `steps = 2^bits - 1`, a channel value `c` maps to
/// `round(round(c / 255 * steps) / steps * 255)`, clamped to 0..=255.
///
/// # Example
///
/// ```
/// use quantize_dither::Levels;
///
/// let two_bit = Levels::new(2).unwrap();
/// assert_eq!(two_bit.count(), 4);
/// assert_eq!(two_bit.reduce(100), 85);
/// assert_eq!(two_bit.reduce(200), 170);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Levels {
    bits: u8,
}

impl Levels {
    /// Create levels for a bit depth in `1..=8`.
    ///
    /// # Errors
    ///
    /// [`QuantizeError::UnsupportedBitDepth`] for 0 or anything above 8.
    pub fn new(bits: u8) -> Result<Self, QuantizeError> {
        if !(1..=8).contains(&bits) {
            return Err(QuantizeError::UnsupportedBitDepth(bits));
        }
        Ok(Self { bits })
    }

    /// Configured bit depth.
    #[inline]
    pub fn bits(self) -> u8 {
        self.bits
    }

    /// Number of distinct output values (`2^bits`).
    #[inline]
    pub fn count(self) -> u16 {
        1 << self.bits
    }

    /// Highest level index (`2^bits - 1`).
    #[inline]
    fn steps(self) -> f32 {
        ((1u16 << self.bits) - 1) as f32
    }

    /// Reduce one channel value to its nearest level.
    #[inline]
    pub fn reduce(self, value: u8) -> u8 {
        let steps = self.steps();
        let level = (value as f32 / 255.0 * steps).round();
        (level / steps * 255.0).clamp(0.0, 255.0).round() as u8
    }

    /// All output values in ascending order.
    pub fn values(self) -> Vec<u8> {
        let steps = self.steps();
        (0..self.count())
            .map(|level| (level as f32 / steps * 255.0).round() as u8)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_out_of_range_bits() {
        assert_eq!(Levels::new(0), Err(QuantizeError::UnsupportedBitDepth(0)));
        assert_eq!(Levels::new(9), Err(QuantizeError::UnsupportedBitDepth(9)));
        assert!(Levels::new(1).is_ok());
        assert!(Levels::new(8).is_ok());
    }

    #[test]
    fn test_one_bit_midpoint() {
        let levels = Levels::new(1).unwrap();
        assert_eq!(levels.reduce(127), 0);
        assert_eq!(levels.reduce(128), 255);
        assert_eq!(levels.reduce(0), 0);
        assert_eq!(levels.reduce(255), 255);
    }

    #[test]
    fn test_two_bit_values() {
        let levels = Levels::new(2).unwrap();
        assert_eq!(levels.values(), vec![0, 85, 170, 255]);
        // Boundaries between 0 and 85 sit at 42.5
        assert_eq!(levels.reduce(42), 0);
        assert_eq!(levels.reduce(43), 85);
        assert_eq!(levels.reduce(128), 170);
    }

    #[test]
    fn test_eight_bit_is_identity() {
        let levels = Levels::new(8).unwrap();
        for v in 0..=255u8 {
            assert_eq!(levels.reduce(v), v);
        }
    }

    #[test]
    fn test_reduce_always_hits_a_level() {
        for bits in 1..=8 {
            let levels = Levels::new(bits).unwrap();
            let values = levels.values();
            for v in 0..=255u8 {
                assert!(
                    values.contains(&levels.reduce(v)),
                    "{} bits: {} reduced to {}, not in {:?}",
                    bits,
                    v,
                    levels.reduce(v),
                    values
                );
            }
        }
    }
}
