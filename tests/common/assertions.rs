//! Assertion helpers for tests.

use std::path::Path;

use fsdither::rendering::decode_png;
use quantize_dither::{ImageBuffer, Rgb8};

/// Assert the file exists and decodes as a PNG of the given size
pub fn assert_png_file(path: &Path, width: usize, height: usize) -> ImageBuffer {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected PNG at {}: {e}", path.display()));
    assert!(
        bytes.starts_with(b"\x89PNG"),
        "Expected PNG signature in {}, got {:?}",
        path.display(),
        &bytes[..8.min(bytes.len())]
    );
    let image = decode_png(&bytes).expect("decode png");
    assert_eq!(
        (image.width(), image.height()),
        (width, height),
        "Unexpected dimensions for {}",
        path.display()
    );
    image
}

/// Assert every pixel is one of `allowed`
pub fn assert_only_colors(image: &ImageBuffer, allowed: &[Rgb8]) {
    for (i, px) in image.pixels().iter().enumerate() {
        assert!(
            allowed.contains(px),
            "Pixel {i} has color {px}, expected one of {allowed:?}"
        );
    }
}
