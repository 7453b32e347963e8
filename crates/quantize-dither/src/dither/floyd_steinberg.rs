//! Floyd-Steinberg error diffusion pass.

use super::error_vector::QuantError;
use super::kernel::FLOYD_STEINBERG;
use crate::api::DitherError;
use crate::image::{ImageBuffer, PixelGrid};
use crate::quantize::Quantize;

/// Distribute `error` from pixel `(x, y)` onto its Floyd-Steinberg neighbors.
///
/// Each in-bounds neighbor gets `error * weight / 16` added per channel in
/// `i32`, then clamped to 0..=255. Neighbors left of column 0, right of the
/// last column or below the last row are skipped; their share is lost.
///
/// # Example
///
/// ```
/// use quantize_dither::{diffuse_error, ImageBuffer, PixelGrid, QuantError, Rgb8};
///
/// let mut grid = ImageBuffer::filled(2, 2, Rgb8::grey(100));
/// diffuse_error(&mut grid, 0, 0, QuantError { r: 32, g: 32, b: 32 });
///
/// assert_eq!(grid.get(1, 0), Rgb8::grey(114)); // + 32 * 7/16
/// assert_eq!(grid.get(0, 1), Rgb8::grey(110)); // + 32 * 5/16
/// assert_eq!(grid.get(1, 1), Rgb8::grey(102)); // + 32 * 1/16
/// ```
pub fn diffuse_error<G: PixelGrid + ?Sized>(grid: &mut G, x: usize, y: usize, error: QuantError) {
    let (width, height) = grid.dimensions();
    for &(dx, dy, weight) in FLOYD_STEINBERG.entries {
        let Some(nx) = x.checked_add_signed(dx as isize) else {
            continue;
        };
        let ny = y + dy as usize;
        if nx >= width || ny >= height {
            continue;
        }
        let share = error.scaled(weight, FLOYD_STEINBERG.divisor);
        let updated = share.apply_to(grid.get(nx, ny));
        grid.set(nx, ny, updated);
    }
}

/// Run the raster-order diffusion pass over a grid already primed with the
/// source pixels.
fn diffuse_in_place<G, Q>(grid: &mut G, quantizer: &Q)
where
    G: PixelGrid + ?Sized,
    Q: Quantize + ?Sized,
{
    let (width, height) = grid.dimensions();
    for y in 0..height {
        for x in 0..width {
            // Current value, which may already carry error from earlier pixels
            let current = grid.get(x, y);
            let accepted = quantizer.quantize(current);
            let error = QuantError::between(current, accepted);

            grid.set(x, y, accepted);

            if !error.is_zero() {
                diffuse_error(grid, x, y, error);
            }
        }
    }
}

/// Dither `source` with Floyd-Steinberg error diffusion.
///
/// Returns a new image of identical dimensions in which every pixel is an
/// output of `quantizer`. The result is fully deterministic.
pub fn dither<Q: Quantize + ?Sized>(source: &ImageBuffer, quantizer: &Q) -> ImageBuffer {
    let mut destination = source.clone();
    diffuse_in_place(&mut destination, quantizer);
    tracing::debug!(
        width = source.width(),
        height = source.height(),
        "Floyd-Steinberg pass complete"
    );
    destination
}

/// Dither `source` into a caller-owned `destination` grid.
///
/// `destination` is first overwritten with a copy of `source`, then diffused
/// in place. Use this when the host owns the pixel storage.
///
/// # Errors
///
/// [`DitherError::DimensionMismatch`] if the two grids differ in size.
/// `destination` is left untouched in that case.
pub fn dither_into<S, D, Q>(source: &S, destination: &mut D, quantizer: &Q) -> Result<(), DitherError>
where
    S: PixelGrid + ?Sized,
    D: PixelGrid + ?Sized,
    Q: Quantize + ?Sized,
{
    if source.dimensions() != destination.dimensions() {
        return Err(DitherError::DimensionMismatch {
            source_size: source.dimensions(),
            destination_size: destination.dimensions(),
        });
    }

    let (width, height) = source.dimensions();
    for y in 0..height {
        for x in 0..width {
            destination.set(x, y, source.get(x, y));
        }
    }
    diffuse_in_place(destination, quantizer);
    tracing::debug!(width, height, "Floyd-Steinberg pass complete");
    Ok(())
}
