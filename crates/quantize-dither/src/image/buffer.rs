//! Owned row-major image buffer.

use std::collections::HashSet;

use super::error::BufferError;
use super::grid::PixelGrid;
use crate::color::Rgb8;

/// An owned width × height image stored in row-major order.
///
/// Pixel `(x, y)` lives at index `y * width + x`; the origin is the top-left
/// corner. Zero-sized images are allowed and simply hold no pixels.
///
/// # Example
///
/// ```
/// use quantize_dither::{ImageBuffer, PixelGrid, Rgb8};
///
/// let mut image = ImageBuffer::filled(3, 2, Rgb8::WHITE);
/// image.set(2, 1, Rgb8::RED);
///
/// assert_eq!(image.get(2, 1), Rgb8::RED);
/// assert_eq!(image.pixels()[5], Rgb8::RED);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    pixels: Vec<Rgb8>,
    width: usize,
    height: usize,
}

impl ImageBuffer {
    /// Create a black image.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Rgb8::BLACK)
    }

    /// Create an image where every pixel is `color`.
    pub fn filled(width: usize, height: usize, color: Rgb8) -> Self {
        Self {
            pixels: vec![color; width * height],
            width,
            height,
        }
    }

    /// Wrap existing row-major pixels.
    ///
    /// # Errors
    ///
    /// [`BufferError::LengthMismatch`] if `pixels.len() != width * height`.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Rgb8>) -> Result<Self, BufferError> {
        let expected = width * height;
        if pixels.len() != expected {
            return Err(BufferError::LengthMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Build from interleaved `[R, G, B, R, G, B, ...]` bytes.
    ///
    /// # Errors
    ///
    /// [`BufferError::LengthMismatch`] if `bytes.len() != width * height * 3`.
    pub fn from_rgb_bytes(width: usize, height: usize, bytes: &[u8]) -> Result<Self, BufferError> {
        let expected = width * height * 3;
        if bytes.len() != expected {
            return Err(BufferError::LengthMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|px| Rgb8::new(px[0], px[1], px[2]))
            .collect();
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Interleaved `[R, G, B, ...]` bytes, length `width * height * 3`.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.pixels.len() * 3);
        for px in &self.pixels {
            rgb.extend_from_slice(&px.to_bytes());
        }
        rgb
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgb8] {
        &self.pixels
    }

    /// Consume the buffer, returning its pixels.
    pub fn into_pixels(self) -> Vec<Rgb8> {
        self.pixels
    }

    /// Whether the image holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Whether `other` has the same width and height.
    #[inline]
    pub fn same_dimensions<G: PixelGrid>(&self, other: &G) -> bool {
        self.width == other.width() && self.height == other.height()
    }

    /// Apply `f` to every pixel independently, returning a new image.
    pub fn map<F: FnMut(Rgb8) -> Rgb8>(&self, f: F) -> Self {
        Self {
            pixels: self.pixels.iter().copied().map(f).collect(),
            width: self.width,
            height: self.height,
        }
    }

    /// Luminance-greyscale copy (see [`Rgb8::to_greyscale`]).
    pub fn to_greyscale(&self) -> Self {
        self.map(Rgb8::to_greyscale)
    }

    /// Per-channel mean over all pixels, or `None` for an empty image.
    pub fn mean_color(&self) -> Option<[f64; 3]> {
        if self.pixels.is_empty() {
            return None;
        }
        let mut sum = [0u64; 3];
        for px in &self.pixels {
            sum[0] += px.r as u64;
            sum[1] += px.g as u64;
            sum[2] += px.b as u64;
        }
        let n = self.pixels.len() as f64;
        Some([sum[0] as f64 / n, sum[1] as f64 / n, sum[2] as f64 / n])
    }

    /// Number of distinct colors present.
    pub fn distinct_colors(&self) -> usize {
        self.pixels.iter().collect::<HashSet<_>>().len()
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{} image",
            x,
            y,
            self.width,
            self.height
        );
        y * self.width + x
    }
}

impl PixelGrid for ImageBuffer {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn get(&self, x: usize, y: usize) -> Rgb8 {
        self.pixels[self.index(x, y)]
    }

    #[inline]
    fn set(&mut self, x: usize, y: usize, color: Rgb8) {
        let idx = self.index(x, y);
        self.pixels[idx] = color;
    }
}
