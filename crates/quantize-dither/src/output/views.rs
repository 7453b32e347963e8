//! The source, quantized and dithered views of one render.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::image::ImageBuffer;

/// One of the three images produced by [`Ditherer::render`](crate::Ditherer::render).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// The input after any pre-processing (greyscale conversion)
    Source,
    /// Every pixel quantized independently, no error diffusion
    Quantized,
    /// Floyd-Steinberg error diffusion
    Dithered,
}

impl View {
    /// All views in display order.
    pub const ALL: [View; 3] = [View::Source, View::Quantized, View::Dithered];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            View::Source => "source",
            View::Quantized => "quantized",
            View::Dithered => "dithered",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a view name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown view '{0}' (expected source, quantized or dithered)")]
pub struct ParseViewError(pub String);

impl FromStr for View {
    type Err = ParseViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "source" | "original" => Ok(View::Source),
            "quantized" | "quantised" => Ok(View::Quantized),
            "dithered" => Ok(View::Dithered),
            _ => Err(ParseViewError(s.to_string())),
        }
    }
}

/// The three images of one render, all with the same dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageViews {
    /// Input after pre-processing
    pub source: ImageBuffer,
    /// Direct quantization pass
    pub quantized: ImageBuffer,
    /// Error diffusion pass
    pub dithered: ImageBuffer,
}

impl ImageViews {
    /// The image for `view`.
    pub fn get(&self, view: View) -> &ImageBuffer {
        match view {
            View::Source => &self.source,
            View::Quantized => &self.quantized,
            View::Dithered => &self.dithered,
        }
    }

    /// Width shared by all three views.
    #[inline]
    pub fn width(&self) -> usize {
        self.source.width()
    }

    /// Height shared by all three views.
    #[inline]
    pub fn height(&self) -> usize {
        self.source.height()
    }
}
