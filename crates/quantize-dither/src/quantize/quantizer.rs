//! Built-in quantization strategies and the `Quantize` capability.

use super::error::QuantizeError;
use super::levels::Levels;
use crate::color::Rgb8;
use crate::image::ImageBuffer;
use crate::palette::Palette;

/// Map one color to the nearest color of a reduced representation.
///
/// Implementations must be pure: the same input always yields the same
/// output, with no side effects. The ditherer calls this once per pixel and
/// depends on that determinism.
///
/// Any `Fn(Rgb8) -> Rgb8` closure is a `Quantize`:
///
/// ```
/// use quantize_dither::{Quantize, Rgb8};
///
/// let posterize = |c: Rgb8| Rgb8::new(c.r & 0xC0, c.g & 0xC0, c.b & 0xC0);
/// assert_eq!(posterize.quantize(Rgb8::new(200, 100, 50)), Rgb8::new(192, 64, 0));
/// ```
pub trait Quantize {
    /// Reduce `color` to an allowed output color.
    fn quantize(&self, color: Rgb8) -> Rgb8;
}

impl<F> Quantize for F
where
    F: Fn(Rgb8) -> Rgb8,
{
    #[inline]
    fn quantize(&self, color: Rgb8) -> Rgb8 {
        self(color)
    }
}

/// Which source channel feeds each output channel of a
/// [`Quantizer::PerChannel`] reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelOrder {
    /// R→R, G→G, B→B.
    #[default]
    Rgb,
    /// R→R, B→G, G→B. Green and blue trade places after reduction.
    Rbg,
}

/// Built-in quantization strategies.
///
/// The variant is chosen once at construction; [`quantize`](Quantize::quantize)
/// is a single `match` with no further indirection.
///
/// # Example
///
/// ```
/// use quantize_dither::{Palette, Quantize, Quantizer, Rgb8};
///
/// let threshold = Quantizer::threshold();
/// assert_eq!(threshold.quantize(Rgb8::grey(127)), Rgb8::BLACK);
/// assert_eq!(threshold.quantize(Rgb8::grey(128)), Rgb8::WHITE);
///
/// let two_bit = Quantizer::per_channel(2).unwrap();
/// assert_eq!(two_bit.quantize(Rgb8::new(10, 100, 200)), Rgb8::new(0, 85, 170));
///
/// let nearest = Quantizer::nearest(Palette::cmy_extended());
/// assert_eq!(nearest.quantize(Rgb8::new(250, 240, 30)), Rgb8::YELLOW);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Quantizer {
    /// Black if the red channel is below 128, otherwise white.
    ///
    /// Only the red channel is inspected: input is assumed to be greyscale
    /// already. Apply [`Rgb8::to_greyscale`] first for true luminance
    /// thresholding.
    Threshold,

    /// The red channel reduced to N-bit levels and written to all channels.
    ///
    /// Like [`Threshold`](Quantizer::Threshold), this assumes greyscale input.
    Greyscale(Levels),

    /// Every channel independently reduced to N-bit levels.
    PerChannel {
        /// Level spacing shared by all three channels
        levels: Levels,
        /// Source-to-output channel routing
        order: ChannelOrder,
    },

    /// The nearest palette entry by Euclidean RGB distance; ties go to the
    /// entry listed first.
    Nearest(Palette),
}

impl Quantizer {
    /// 1-bit black/white threshold on the red channel.
    pub fn threshold() -> Self {
        Quantizer::Threshold
    }

    /// N-bit greyscale reduction of the red channel.
    pub fn greyscale(bits: u8) -> Result<Self, QuantizeError> {
        Ok(Quantizer::Greyscale(Levels::new(bits)?))
    }

    /// N-bit reduction of each channel, channels kept in place.
    pub fn per_channel(bits: u8) -> Result<Self, QuantizeError> {
        Self::per_channel_ordered(bits, ChannelOrder::Rgb)
    }

    /// N-bit reduction of each channel with explicit channel routing.
    pub fn per_channel_ordered(bits: u8, order: ChannelOrder) -> Result<Self, QuantizeError> {
        Ok(Quantizer::PerChannel {
            levels: Levels::new(bits)?,
            order,
        })
    }

    /// Nearest color from `palette`.
    pub fn nearest(palette: Palette) -> Self {
        Quantizer::Nearest(palette)
    }

    /// Short human-readable description, used in logs and reports.
    pub fn describe(&self) -> String {
        match self {
            Quantizer::Threshold => "1-bit threshold".to_string(),
            Quantizer::Greyscale(levels) => format!("{}-bit greyscale", levels.bits()),
            Quantizer::PerChannel { levels, order } => match order {
                ChannelOrder::Rgb => format!("{}-bit per channel", levels.bits()),
                ChannelOrder::Rbg => {
                    format!("{}-bit per channel (green/blue swapped)", levels.bits())
                }
            },
            Quantizer::Nearest(palette) => format!("nearest of {} colors", palette.len()),
        }
    }
}

impl Quantize for Quantizer {
    #[inline]
    fn quantize(&self, color: Rgb8) -> Rgb8 {
        match self {
            Quantizer::Threshold => {
                if color.r < 128 {
                    Rgb8::BLACK
                } else {
                    Rgb8::WHITE
                }
            }
            Quantizer::Greyscale(levels) => Rgb8::grey(levels.reduce(color.r)),
            Quantizer::PerChannel { levels, order } => {
                let r = levels.reduce(color.r);
                let g = levels.reduce(color.g);
                let b = levels.reduce(color.b);
                match order {
                    ChannelOrder::Rgb => Rgb8::new(r, g, b),
                    ChannelOrder::Rbg => Rgb8::new(r, b, g),
                }
            }
            Quantizer::Nearest(palette) => palette.nearest(color),
        }
    }
}

/// Quantize every pixel independently, with no error diffusion.
///
/// Returns a new image of the same dimensions; `source` is untouched.
pub fn quantize_image<Q: Quantize>(source: &ImageBuffer, quantizer: &Q) -> ImageBuffer {
    source.map(|px| quantizer.quantize(px))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::PixelGrid;

    #[test]
    fn test_threshold_uses_red_channel_only() {
        let q = Quantizer::threshold();
        assert_eq!(q.quantize(Rgb8::new(127, 255, 255)), Rgb8::BLACK);
        assert_eq!(q.quantize(Rgb8::new(128, 0, 0)), Rgb8::WHITE);
        assert_eq!(q.quantize(Rgb8::BLACK), Rgb8::BLACK);
        assert_eq!(q.quantize(Rgb8::WHITE), Rgb8::WHITE);
    }

    #[test]
    fn test_greyscale_levels_from_red() {
        let q = Quantizer::greyscale(2).unwrap();
        assert_eq!(q.quantize(Rgb8::new(100, 0, 255)), Rgb8::grey(85));
        assert_eq!(q.quantize(Rgb8::new(250, 0, 0)), Rgb8::WHITE);
    }

    #[test]
    fn test_per_channel_one_bit_boundary() {
        let q = Quantizer::per_channel(1).unwrap();
        assert_eq!(q.quantize(Rgb8::grey(127)), Rgb8::BLACK);
        assert_eq!(q.quantize(Rgb8::grey(128)), Rgb8::WHITE);
        assert_eq!(q.quantize(Rgb8::new(127, 128, 0)), Rgb8::new(0, 255, 0));
    }

    #[test]
    fn test_per_channel_swapped_routes_green_and_blue() {
        let faithful = Quantizer::per_channel_ordered(2, ChannelOrder::Rgb).unwrap();
        let swapped = Quantizer::per_channel_ordered(2, ChannelOrder::Rbg).unwrap();
        let input = Rgb8::new(255, 90, 10);
        assert_eq!(faithful.quantize(input), Rgb8::new(255, 85, 0));
        assert_eq!(swapped.quantize(input), Rgb8::new(255, 0, 85));
    }

    #[test]
    fn test_invalid_bits_rejected() {
        assert_eq!(
            Quantizer::per_channel(0),
            Err(QuantizeError::UnsupportedBitDepth(0))
        );
        assert_eq!(
            Quantizer::greyscale(12),
            Err(QuantizeError::UnsupportedBitDepth(12))
        );
    }

    #[test]
    fn test_nearest_palette() {
        let q = Quantizer::nearest(Palette::black_white());
        assert_eq!(q.quantize(Rgb8::grey(127)), Rgb8::BLACK);
        assert_eq!(q.quantize(Rgb8::grey(128)), Rgb8::WHITE);
    }

    #[test]
    fn test_quantizer_is_pure() {
        let quantizers = [
            Quantizer::threshold(),
            Quantizer::greyscale(3).unwrap(),
            Quantizer::per_channel(2).unwrap(),
            Quantizer::nearest(Palette::cmy_extended()),
        ];
        for q in &quantizers {
            for v in (0..=255u8).step_by(7) {
                let c = Rgb8::new(v, 255 - v, v / 2);
                assert_eq!(q.quantize(c), q.quantize(c), "{}", q.describe());
            }
        }
    }

    #[test]
    fn test_quantize_image_maps_every_pixel() {
        let source =
            ImageBuffer::from_pixels(2, 1, vec![Rgb8::grey(10), Rgb8::grey(250)]).unwrap();
        let out = quantize_image(&source, &Quantizer::threshold());
        assert_eq!(out.get(0, 0), Rgb8::BLACK);
        assert_eq!(out.get(1, 0), Rgb8::WHITE);
        assert_eq!(source.get(0, 0), Rgb8::grey(10));
    }

    #[test]
    fn test_closure_quantizer() {
        let invert = |c: Rgb8| Rgb8::new(255 - c.r, 255 - c.g, 255 - c.b);
        assert_eq!(invert.quantize(Rgb8::CYAN), Rgb8::RED);
    }

    #[test]
    fn test_describe() {
        assert_eq!(Quantizer::threshold().describe(), "1-bit threshold");
        assert_eq!(
            Quantizer::per_channel_ordered(2, ChannelOrder::Rbg)
                .unwrap()
                .describe(),
            "2-bit per channel (green/blue swapped)"
        );
        assert_eq!(
            Quantizer::nearest(Palette::cmy_extended()).describe(),
            "nearest of 5 colors"
        );
    }
}
