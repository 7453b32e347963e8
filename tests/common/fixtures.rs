//! Test fixtures: scratch directories and synthetic images.

use std::path::{Path, PathBuf};

use fsdither::rendering::encode_png;
use quantize_dither::{ImageBuffer, Rgb8};

/// A config with one preset of every quantizer kind
pub const TEST_CONFIG: &str = r##"
default_preset: rgb-1bit
palettes:
  mono: ["#000000", "#FFFFFF"]
  rgb: ["#FF0000", "#00FF00", "#0000FF"]
presets:
  rgb-1bit:
    quantizer: { kind: per_channel, bits: 1 }
  swapped:
    quantizer: { kind: per_channel, bits: 2, channel_order: rbg }
  threshold:
    greyscale: true
    quantizer: { kind: threshold }
  grey-2bit:
    greyscale: true
    quantizer: { kind: greyscale, bits: 2 }
  mono:
    quantizer: { kind: palette, palette: mono }
  primaries:
    quantizer: { kind: palette, colors: ["#FF0000", "#00FF00", "#0000FF"] }
"##;

/// A temporary directory that is removed on drop
pub struct TestDir {
    dir: tempfile::TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `image` as a PNG and return its path
    pub fn write_png(&self, name: &str, image: &ImageBuffer) -> PathBuf {
        let path = self.join(name);
        std::fs::write(&path, encode_png(image).expect("encode png")).expect("write png");
        path
    }

    /// Write the test config and return its path
    pub fn write_config(&self) -> PathBuf {
        let path = self.join("config.yaml");
        std::fs::write(&path, TEST_CONFIG).expect("write config");
        path
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Horizontal ramp from black to white in every channel
pub fn grey_ramp(width: usize, height: usize) -> ImageBuffer {
    let max_x = (width - 1).max(1);
    let pixels = (0..width * height)
        .map(|i| Rgb8::grey(((i % width) * 255 / max_x) as u8))
        .collect();
    ImageBuffer::from_pixels(width, height, pixels).expect("ramp dimensions")
}

/// A busy full-color test image
pub fn color_field(width: usize, height: usize) -> ImageBuffer {
    let pixels = (0..width * height)
        .map(|i| {
            let (x, y) = (i % width, i / width);
            Rgb8::new(
                (x * 255 / width.max(1)) as u8,
                (y * 255 / height.max(1)) as u8,
                ((x + y) * 37 % 256) as u8,
            )
        })
        .collect();
    ImageBuffer::from_pixels(width, height, pixels).expect("field dimensions")
}
