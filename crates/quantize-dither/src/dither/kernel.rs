//! Error diffusion kernel definition.
//!
//! A kernel specifies how quantization error is distributed to neighboring
//! pixels that haven't been processed yet.

/// An error diffusion kernel.
///
/// Each entry is `(dx, dy, weight)`: the neighbor at `(x + dx, y + dy)`
/// receives `error * weight / divisor`. Entries only ever point forward in
/// raster order (`dy > 0`, or `dy == 0` with `dx > 0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel {
    /// (dx, dy, weight) entries for error diffusion.
    pub entries: &'static [(i32, i32, i32)],

    /// Total divisor for normalizing weights.
    pub divisor: i32,
}

impl Kernel {
    /// Sum of all weights. Equal to `divisor` when 100% of the error is
    /// propagated.
    pub fn total_weight(&self) -> i32 {
        self.entries.iter().map(|&(_, _, w)| w).sum()
    }
}

/// Floyd-Steinberg dithering kernel.
///
/// Distributes error to 4 neighbors with 100% total propagation (16/16).
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
};
