//! Ditherer builder -- the primary ergonomic entry point for the crate.
//!
//! [`Ditherer`] pairs a [`Quantizer`] with optional greyscale
//! pre-processing and runs both the direct quantization pass and the
//! error diffusion pass.

use crate::dither::dither;
use crate::image::ImageBuffer;
use crate::output::ImageViews;
use crate::quantize::{quantize_image, Quantizer};

/// High-level quantize/dither builder.
///
/// # Design
///
/// - Constructor requires a [`Quantizer`] (no invalid states)
/// - Configuration methods consume and return `self`
/// - [`quantize()`](Self::quantize), [`dither()`](Self::dither) and
///   [`render()`](Self::render) take `&self`, so one ditherer is reusable
///   across many images
///
/// # Example
///
/// ```
/// use quantize_dither::{Ditherer, ImageBuffer, Quantizer, Rgb8};
///
/// let ditherer = Ditherer::new(Quantizer::per_channel(2).unwrap());
/// let source = ImageBuffer::filled(4, 4, Rgb8::new(40, 120, 200));
///
/// let views = ditherer.render(&source);
///
/// assert_eq!(views.width(), 4);
/// assert_eq!(views.quantized.pixels()[0], Rgb8::new(0, 85, 170));
/// ```
#[derive(Debug, Clone)]
pub struct Ditherer {
    quantizer: Quantizer,
    greyscale: bool,
}

impl Ditherer {
    /// Create a ditherer around `quantizer`. Greyscale pre-processing is off.
    pub fn new(quantizer: Quantizer) -> Self {
        Self {
            quantizer,
            greyscale: false,
        }
    }

    /// Convert input to luminance greyscale before quantizing.
    ///
    /// Pairs naturally with [`Quantizer::Threshold`] and
    /// [`Quantizer::Greyscale`], which only inspect the red channel.
    #[inline]
    pub fn greyscale(mut self, enabled: bool) -> Self {
        self.greyscale = enabled;
        self
    }

    /// The configured quantizer.
    #[inline]
    pub fn quantizer(&self) -> &Quantizer {
        &self.quantizer
    }

    /// Whether greyscale pre-processing is enabled.
    #[inline]
    pub fn is_greyscale(&self) -> bool {
        self.greyscale
    }

    /// Apply pre-processing. Borrows `image` unchanged when there is none.
    fn prepare<'a>(&self, image: &'a ImageBuffer) -> std::borrow::Cow<'a, ImageBuffer> {
        if self.greyscale {
            std::borrow::Cow::Owned(image.to_greyscale())
        } else {
            std::borrow::Cow::Borrowed(image)
        }
    }

    /// Quantize each pixel independently (no error diffusion).
    pub fn quantize(&self, image: &ImageBuffer) -> ImageBuffer {
        let source = self.prepare(image);
        quantize_image(&source, &self.quantizer)
    }

    /// Floyd-Steinberg dither `image`.
    pub fn dither(&self, image: &ImageBuffer) -> ImageBuffer {
        let source = self.prepare(image);
        dither(&source, &self.quantizer)
    }

    /// Produce all three views: the (pre-processed) source, the direct
    /// quantization and the dithered result.
    pub fn render(&self, image: &ImageBuffer) -> ImageViews {
        let source = self.prepare(image).into_owned();
        let quantized = quantize_image(&source, &self.quantizer);
        let dithered = dither(&source, &self.quantizer);
        tracing::debug!(
            width = source.width(),
            height = source.height(),
            quantizer = %self.quantizer.describe(),
            greyscale = self.greyscale,
            "Rendered views"
        );
        ImageViews {
            source,
            quantized,
            dithered,
        }
    }
}
