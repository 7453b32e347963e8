//! Color sample type
//!
//! All pixels flowing through the crate are [`Rgb8`] values. Error diffusion
//! temporarily widens channels to `i32` (see [`Rgb8::to_i32`] and
//! [`Rgb8::from_i32_clamped`]) so intermediate sums may go negative or
//! exceed 255 before being clamped back into storage.

mod rgb8;

pub use rgb8::Rgb8;
