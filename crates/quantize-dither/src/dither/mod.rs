//! Floyd-Steinberg error diffusion.
//!
//! Each pixel is quantized in raster order and the signed difference between
//! its current value and the accepted color is pushed forward onto four
//! unprocessed neighbors:
//!
//! ```text
//!        X   7/16
//! 3/16 5/16  1/16
//! ```
//!
//! Neighbors outside the image are skipped and their share of the error is
//! dropped. The pass is strictly sequential: every pixel's input depends on
//! writes made while processing the pixels before it.
//!
//! # Example
//!
//! ```
//! use quantize_dither::{dither, ImageBuffer, Quantizer, Rgb8};
//!
//! let source = ImageBuffer::filled(8, 8, Rgb8::grey(128));
//! let result = dither(&source, &Quantizer::threshold());
//!
//! assert_eq!(result.width(), 8);
//! assert!(result.pixels().iter().all(|&px| px == Rgb8::BLACK || px == Rgb8::WHITE));
//! ```

mod error_vector;
mod floyd_steinberg;
mod kernel;

pub use error_vector::QuantError;
pub use floyd_steinberg::{diffuse_error, dither, dither_into};
pub use kernel::{Kernel, FLOYD_STEINBERG};
