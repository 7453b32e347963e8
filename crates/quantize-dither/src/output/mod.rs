//! Output types for the rendering pipeline.
//!
//! [`ImageViews`] holds the three images a render produces (source,
//! quantized, dithered), selectable through [`View`].

mod views;

pub use views::{ImageViews, ParseViewError, View};
