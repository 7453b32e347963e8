//! Coordinate-addressed pixel access.

use crate::color::Rgb8;

/// A width × height grid of color samples addressed by integer coordinate.
///
/// Coordinates passed to [`get`](PixelGrid::get) and [`set`](PixelGrid::set)
/// are guaranteed in range by the caller: `x < width()` and `y < height()`.
/// Implementations may panic otherwise.
pub trait PixelGrid {
    /// Width in pixels.
    fn width(&self) -> usize;

    /// Height in pixels.
    fn height(&self) -> usize;

    /// Read the pixel at `(x, y)`.
    fn get(&self, x: usize, y: usize) -> Rgb8;

    /// Overwrite the pixel at `(x, y)`.
    fn set(&mut self, x: usize, y: usize, color: Rgb8);

    /// `(width, height)` pair.
    #[inline]
    fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }
}
