//! Image buffers
//!
//! [`ImageBuffer`] is the owned, row-major pixel store used throughout the
//! crate. The [`PixelGrid`] trait is the narrower read/write-by-coordinate
//! seam the diffusion engine works against, so a host can dither straight
//! into its own pixel storage.

mod buffer;
mod error;
mod grid;

pub use buffer::ImageBuffer;
pub use error::BufferError;
pub use grid::PixelGrid;
