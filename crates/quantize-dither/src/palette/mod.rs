//! Palette types and utilities
//!
//! This module provides the ordered candidate list used by nearest-color
//! quantization, along with error types for parsing and validation.

mod error;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::Palette;
