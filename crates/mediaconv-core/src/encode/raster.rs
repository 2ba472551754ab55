//! PNG, JPEG and WEBP encoding.
//!
//! Thin wrappers over the `image` crate's encoders that validate the pixel
//! buffer first, so a mismatched buffer fails with a descriptive error rather
//! than an encoder panic or a malformed file.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use image::{ExtendedColorType, ImageEncoder};
use thiserror::Error;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes, got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The encoder backend failed
    #[error("{format} encoding failed: {message}")]
    EncodingFailed {
        format: &'static str,
        message: String,
    },
}

/// Channel layout of a pixel buffer handed to an encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelLayout {
    /// 3 bytes per pixel.
    Rgb,
    /// 4 bytes per pixel, straight (non-premultiplied) alpha.
    Rgba,
}

impl PixelLayout {
    /// Bytes used by one pixel.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelLayout::Rgb => 3,
            PixelLayout::Rgba => 4,
        }
    }

    fn color_type(self) -> ExtendedColorType {
        match self {
            PixelLayout::Rgb => ExtendedColorType::Rgb8,
            PixelLayout::Rgba => ExtendedColorType::Rgba8,
        }
    }
}

fn validate(
    pixels: &[u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = (width as usize) * (height as usize) * layout.bytes_per_pixel();
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }

    Ok(())
}

/// Encode RGB pixel data to JPEG bytes.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - JPEG quality (1-100); out-of-range values are clamped
///
/// JPEG cannot store alpha, so callers holding RGBA data must flatten it
/// first (see [`flatten_onto_white`](super::flatten_onto_white)).
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    validate(pixels, width, height, PixelLayout::Rgb)?;

    let quality = quality.clamp(1, 100);
    let mut buffer = Cursor::new(Vec::new());

    JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed {
            format: "JPEG",
            message: e.to_string(),
        })?;

    Ok(buffer.into_inner())
}

/// Encode RGB or RGBA pixel data to PNG bytes (lossless).
pub fn encode_png(
    pixels: &[u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
) -> Result<Vec<u8>, EncodeError> {
    validate(pixels, width, height, layout)?;

    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(pixels, width, height, layout.color_type())
        .map_err(|e| EncodeError::EncodingFailed {
            format: "PNG",
            message: e.to_string(),
        })?;

    Ok(buffer.into_inner())
}

/// Encode RGB or RGBA pixel data to WEBP bytes.
///
/// The `image` crate only implements the lossless WEBP bitstream, so
/// `quality` (1-100) is applied by quantizing the color channels before
/// encoding: fewer distinct levels compress to a smaller file. At 100 the
/// pixels are written untouched. Alpha is never quantized.
pub fn encode_webp(
    pixels: &[u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    validate(pixels, width, height, layout)?;

    let quality = quality.clamp(1, 100);
    let quantized;
    let pixels = if quality < 100 {
        let mut buf = pixels.to_vec();
        quantize_color(&mut buf, layout, quality);
        quantized = buf;
        &quantized[..]
    } else {
        pixels
    };

    let mut buffer = Cursor::new(Vec::new());
    WebPEncoder::new_lossless(&mut buffer)
        .write_image(pixels, width, height, layout.color_type())
        .map_err(|e| EncodeError::EncodingFailed {
            format: "WEBP",
            message: e.to_string(),
        })?;

    Ok(buffer.into_inner())
}

/// Snap every color channel to one of `levels_for_quality(quality)` evenly
/// spaced values.
fn quantize_color(pixels: &mut [u8], layout: PixelLayout, quality: u8) {
    let levels = levels_for_quality(quality);
    if levels >= 256 {
        return;
    }

    let step = 255.0 / (levels as f32 - 1.0);
    for pixel in pixels.chunks_exact_mut(layout.bytes_per_pixel()) {
        for channel in pixel.iter_mut().take(3) {
            let bucket = (f32::from(*channel) / step).round();
            *channel = (bucket * step).round().clamp(0.0, 255.0) as u8;
        }
    }
}

/// Quadratic ramp from 2 levels at quality 1 to 256 at quality 100, so high
/// qualities keep fine gradients and low ones collapse hard.
fn levels_for_quality(quality: u8) -> u16 {
    if quality >= 100 {
        return 256;
    }
    let normalized = f32::from(quality.max(1)) / 100.0;
    (2.0 + normalized * normalized * 254.0).round().clamp(2.0, 256.0) as u16
}
