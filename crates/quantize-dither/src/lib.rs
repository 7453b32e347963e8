#![allow(clippy::module_inception)]

//! quantize-dither: color quantization and Floyd-Steinberg dithering
//!
//! This library reduces full-color images to a constrained set of colors in
//! two complementary ways:
//!
//! - **Direct quantization**: every pixel is mapped to its nearest allowed
//!   color independently.
//! - **Error diffusion**: pixels are quantized in raster order and each
//!   pixel's rounding error is pushed onto its unprocessed neighbors, so the
//!   local average color survives the reduced palette.
//!
//! # Quick Start
//!
//! The [`Ditherer`] builder is the primary entry point:
//!
//! ```
//! use quantize_dither::{Ditherer, ImageBuffer, Palette, Quantizer, Rgb8};
//!
//! let ditherer = Ditherer::new(Quantizer::nearest(Palette::black_white()));
//! let source = ImageBuffer::filled(4, 4, Rgb8::grey(128));
//!
//! let dithered = ditherer.dither(&source);
//! assert_eq!(dithered.width(), 4);
//! ```
//!
//! # Quantizers
//!
//! [`Quantizer`] selects a reduction scheme once, at construction:
//!
//! | Variant | Output |
//! |---------|--------|
//! | [`Threshold`](Quantizer::Threshold) | black if red < 128, else white |
//! | [`Greyscale`](Quantizer::Greyscale) | red channel reduced to `2^n` grey levels |
//! | [`PerChannel`](Quantizer::PerChannel) | each channel reduced to `2^n` levels |
//! | [`Nearest`](Quantizer::Nearest) | closest [`Palette`] entry, ties to the first listed |
//!
//! Any `Fn(Rgb8) -> Rgb8` closure also implements [`Quantize`] and can be
//! handed straight to [`dither`].
//!
//! # Error Diffusion
//!
//! ```text
//!        X   7/16
//! 3/16 5/16  1/16
//! ```
//!
//! The destination starts as a copy of the source. At each pixel the
//! *current* destination value (source plus error received so far) is
//! quantized, the accepted color is written back, and `current - accepted`
//! is spread over the four neighbors above. Sums are computed in `i32` and
//! clamped to 0..=255 before being stored; neighbors outside the image are
//! skipped. The pass is sequential and deterministic.
//!
//! Hosts that own their pixel storage can implement [`PixelGrid`] and call
//! [`dither_into`], which rejects mismatched dimensions with
//! [`DitherError::DimensionMismatch`].

pub mod api;
pub mod color;
pub mod dither;
pub mod image;
pub mod output;
pub mod palette;
pub mod quantize;


pub use api::{DitherError, Ditherer};
pub use color::Rgb8;
pub use dither::{diffuse_error, dither, dither_into, Kernel, QuantError, FLOYD_STEINBERG};
pub use image::{BufferError, ImageBuffer, PixelGrid};
pub use output::{ImageViews, ParseViewError, View};
pub use palette::{Palette, PaletteError, ParseColorError};
pub use quantize::{quantize_image, ChannelOrder, Levels, Quantize, QuantizeError, Quantizer};
