use std::io::Cursor;

use quantize_dither::{ImageBuffer, Rgb8};

use crate::error::RenderError;

/// Largest image accepted for decoding, in pixels (64 megapixels)
pub const MAX_PIXELS: u64 = 64 * 1024 * 1024;

/// Decode a PNG into an 8-bit RGB buffer.
///
/// Indexed, low bit depth and 16-bit images are normalized to 8 bits per
/// channel. Transparent pixels are composited against white.
pub fn decode_png(bytes: &[u8]) -> Result<ImageBuffer, RenderError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| RenderError::PngDecode(e.to_string()))?;

    let (width, height) = {
        let info = reader.info();
        (info.width, info.height)
    };
    if u64::from(width) * u64::from(height) > MAX_PIXELS {
        return Err(RenderError::ImageTooLarge {
            width,
            height,
            max: MAX_PIXELS,
        });
    }

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let frame = reader
        .next_frame(&mut buf)
        .map_err(|e| RenderError::PngDecode(e.to_string()))?;
    let data = &buf[..frame.buffer_size()];

    let pixels: Vec<Rgb8> = match frame.color_type {
        png::ColorType::Grayscale => data.iter().map(|&v| Rgb8::grey(v)).collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .map(|px| {
                let v = composite_on_white(px[0], px[1]);
                Rgb8::grey(v)
            })
            .collect(),
        png::ColorType::Rgb => data
            .chunks_exact(3)
            .map(|px| Rgb8::new(px[0], px[1], px[2]))
            .collect(),
        png::ColorType::Rgba => data
            .chunks_exact(4)
            .map(|px| {
                let a = px[3];
                Rgb8::new(
                    composite_on_white(px[0], a),
                    composite_on_white(px[1], a),
                    composite_on_white(px[2], a),
                )
            })
            .collect(),
        other => return Err(RenderError::UnsupportedColorType(format!("{other:?}"))),
    };

    tracing::debug!(
        width,
        height,
        color_type = ?frame.color_type,
        "Decoded PNG"
    );

    Ok(ImageBuffer::from_pixels(
        width as usize,
        height as usize,
        pixels,
    )?)
}

/// Alpha-composite one channel against white.
fn composite_on_white(value: u8, alpha: u8) -> u8 {
    match alpha {
        255 => value,
        0 => 255,
        a => {
            let a = a as u16;
            ((value as u16 * a + 255 * (255 - a)) / 255) as u8
        }
    }
}

/// Encode an image as an 8-bit RGB PNG.
pub fn encode_png(image: &ImageBuffer) -> Result<Vec<u8>, RenderError> {
    if image.is_empty() {
        return Err(RenderError::PngEncode("image has no pixels".to_string()));
    }
    let width = u32::try_from(image.width()).map_err(|e| RenderError::PngEncode(e.to_string()))?;
    let height =
        u32::try_from(image.height()).map_err(|e| RenderError::PngEncode(e.to_string()))?;

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&image.to_rgb_bytes())
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
