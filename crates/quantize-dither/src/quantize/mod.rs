//! Color quantization strategies
//!
//! A quantizer maps one color to the nearest color its reduction scheme can
//! represent. It never looks at neighboring pixels and holds no mutable
//! state, so the ditherer may call it as often as it likes.
//!
//! [`Quantizer`] is the tagged set of built-in strategies, chosen once at
//! construction. The [`Quantize`] trait is the seam the ditherer is generic
//! over; it is also implemented for plain closures so callers can supply
//! their own reduction rule.

mod error;
mod levels;
mod quantizer;

pub use error::QuantizeError;
pub use levels::Levels;
pub use quantizer::{quantize_image, ChannelOrder, Quantize, Quantizer};
