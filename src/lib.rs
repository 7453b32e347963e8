//! fsdither - Floyd-Steinberg dithering for PNG images
//!
//! Host layer around the `quantize-dither` engine: YAML presets, PNG
//! decode/encode and the render pipeline behind the CLI.
//! This library exposes modules for integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
