//! 8-bit RGB color sample
//!
//! `Rgb8` is the only color representation in the crate. Channels are stored
//! unsigned; arithmetic that can leave the 0..=255 range (error diffusion)
//! widens to `i32` before clamping back.

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// Luminance weights used by [`Rgb8::to_greyscale`].
const LUMA_R: f32 = 0.2162;
const LUMA_G: f32 = 0.7152;
const LUMA_B: f32 = 0.0722;

/// A color sample with three independent 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb8 {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Rgb8 = Rgb8::new(0, 0, 0);
    pub const WHITE: Rgb8 = Rgb8::new(255, 255, 255);
    pub const RED: Rgb8 = Rgb8::new(255, 0, 0);
    pub const GREEN: Rgb8 = Rgb8::new(0, 255, 0);
    pub const BLUE: Rgb8 = Rgb8::new(0, 0, 255);
    pub const YELLOW: Rgb8 = Rgb8::new(255, 255, 0);
    pub const MAGENTA: Rgb8 = Rgb8::new(255, 0, 255);
    pub const CYAN: Rgb8 = Rgb8::new(0, 255, 255);

    /// Create a color from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color where all three channels share one value.
    #[inline]
    pub const fn grey(value: u8) -> Self {
        Self::new(value, value, value)
    }

    /// Create a color from a byte array [R, G, B].
    ///
    /// # Example
    /// ```
    /// use quantize_dither::Rgb8;
    /// assert_eq!(Rgb8::from_bytes([255, 0, 0]), Rgb8::RED);
    /// ```
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels widened to `i32`, for signed error arithmetic.
    #[inline]
    pub fn to_i32(self) -> [i32; 3] {
        [self.r as i32, self.g as i32, self.b as i32]
    }

    /// Build a color from signed channel values, clamping each to 0..=255.
    #[inline]
    pub fn from_i32_clamped(channels: [i32; 3]) -> Self {
        Self::new(
            channels[0].clamp(0, 255) as u8,
            channels[1].clamp(0, 255) as u8,
            channels[2].clamp(0, 255) as u8,
        )
    }

    /// Squared Euclidean distance in (R, G, B) space.
    ///
    /// Exact in integers, and ordered the same way as the true distance,
    /// so nearest-color searches never need a square root.
    #[inline]
    pub fn distance_squared(self, other: Rgb8) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Convert to a grey of equal luminance.
    ///
    /// Uses `0.2162 R + 0.7152 G + 0.0722 B`, truncated toward zero. This is a
    /// pre-processing helper; the threshold quantizer only looks at the red
    /// channel and assumes this has already been applied.
    ///
    /// # Example
    /// ```
    /// use quantize_dither::Rgb8;
    /// assert_eq!(Rgb8::new(200, 0, 0).to_greyscale(), Rgb8::grey(43));
    /// ```
    #[inline]
    pub fn to_greyscale(self) -> Self {
        let luma = LUMA_R * self.r as f32 + LUMA_G * self.g as f32 + LUMA_B * self.b as f32;
        Self::grey(luma as u8)
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Rgb8> for [u8; 3] {
    fn from(color: Rgb8) -> Self {
        color.to_bytes()
    }
}

impl fmt::Display for Rgb8 {
    /// Formats as `#RRGGBB` (uppercase hex).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb8 {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`. Parsing is
    /// case-insensitive and surrounding whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use quantize_dither::Rgb8;
    ///
    /// let magenta: Rgb8 = "#FF00FF".parse().unwrap();
    /// assert_eq!(magenta, Rgb8::MAGENTA);
    ///
    /// let cyan: Rgb8 = "0ff".parse().unwrap();
    /// assert_eq!(cyan, Rgb8::CYAN);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        match s.len() {
            3 => {
                // #F0A expands to #FF00AA
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::new(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}
