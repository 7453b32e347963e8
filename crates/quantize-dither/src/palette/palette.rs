//! Ordered color palette with nearest-color matching.

use std::collections::HashSet;

use super::error::PaletteError;
use crate::color::Rgb8;

/// A finite, ordered set of allowed output colors.
///
/// Order matters: when an input color is exactly equidistant from two
/// candidates, [`find_nearest`](Palette::find_nearest) returns whichever
/// appears first. Palettes are validated at construction (non-empty, no
/// duplicates) and immutable afterwards.
///
/// # Example
///
/// ```
/// use quantize_dither::{Palette, Rgb8};
///
/// let palette = Palette::new(&[Rgb8::BLACK, Rgb8::WHITE]).unwrap();
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.nearest(Rgb8::grey(200)), Rgb8::WHITE);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb8>,
}

impl Palette {
    /// Create a palette from an ordered list of colors.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] if `colors` is empty
    /// - [`PaletteError::DuplicateColor`] if a color appears twice; the index
    ///   is that of the second occurrence
    pub fn new(colors: &[Rgb8]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        let mut seen = HashSet::with_capacity(colors.len());
        for (index, color) in colors.iter().enumerate() {
            if !seen.insert(*color) {
                return Err(PaletteError::DuplicateColor { index });
            }
        }

        Ok(Self {
            colors: colors.to_vec(),
        })
    }

    /// Create a palette from hex color strings.
    ///
    /// # Example
    ///
    /// ```
    /// use quantize_dither::{Palette, Rgb8};
    ///
    /// let palette = Palette::from_hex(&["#000", "#FFFFFF", "#FF0"]).unwrap();
    /// assert_eq!(palette.get(2), Some(Rgb8::YELLOW));
    /// ```
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self, PaletteError> {
        let parsed = colors
            .iter()
            .map(|c| c.as_ref().parse::<Rgb8>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&parsed)
    }

    /// Two-entry black and white palette.
    pub fn black_white() -> Self {
        Self {
            colors: vec![Rgb8::BLACK, Rgb8::WHITE],
        }
    }

    /// Black and white plus the three subtractive primaries, in the order
    /// black, white, yellow, magenta, cyan.
    pub fn cmy_extended() -> Self {
        Self {
            colors: vec![
                Rgb8::BLACK,
                Rgb8::WHITE,
                Rgb8::YELLOW,
                Rgb8::MAGENTA,
                Rgb8::CYAN,
            ],
        }
    }

    /// Number of colors. Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; construction rejects empty palettes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index`, if in range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Rgb8> {
        self.colors.get(index).copied()
    }

    /// All colors in palette order.
    #[inline]
    pub fn colors(&self) -> &[Rgb8] {
        &self.colors
    }

    /// Iterate over colors in palette order.
    pub fn iter(&self) -> impl Iterator<Item = Rgb8> + '_ {
        self.colors.iter().copied()
    }

    /// Index of the candidate closest to `color` by Euclidean distance.
    ///
    /// Candidates are scanned in order and only a strictly smaller distance
    /// replaces the current best, so ties go to the earliest entry.
    pub fn find_nearest(&self, color: Rgb8) -> usize {
        let mut best_index = 0;
        let mut best_dist = u32::MAX;
        for (i, candidate) in self.colors.iter().enumerate() {
            let dist = color.distance_squared(*candidate);
            if dist < best_dist {
                best_dist = dist;
                best_index = i;
                if dist == 0 {
                    break;
                }
            }
        }
        best_index
    }

    /// The candidate closest to `color`.
    #[inline]
    pub fn nearest(&self, color: Rgb8) -> Rgb8 {
        self.colors[self.find_nearest(color)]
    }
}
