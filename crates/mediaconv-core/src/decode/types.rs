//! Core types for image decoding.

use thiserror::Error;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// No bytes were supplied.
    #[error("No image data")]
    Empty,

    /// The bytes do not look like any supported raster format.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The format was recognized but the decoder does not support this variant.
    #[error("Unsupported image: {0}")]
    Unsupported(String),

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// The image decoded to zero width or height.
    #[error("Image has no pixels ({width}x{height})")]
    ZeroDimensions { width: u32, height: u32 },
}

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Orientation {
    #[default]
    Normal = 1,
    FlipHorizontal = 2,
    Rotate180 = 3,
    FlipVertical = 4,
    /// Flip horizontal + rotate 270 CW.
    Transpose = 5,
    Rotate90CW = 6,
    /// Flip horizontal + rotate 90 CW.
    Transverse = 7,
    Rotate270CW = 8,
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

/// A decoded raster image.
///
/// Pixels are always stored as 8-bit RGBA in row-major order, regardless of
/// the source color type. `has_alpha` records whether the source format
/// actually carried an alpha channel; for sources without one every alpha
/// byte is 255.
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGBA pixel data (4 bytes per pixel). Length is width * height * 4.
    pub pixels: Vec<u8>,
    /// Whether the source image had an alpha channel.
    pub has_alpha: bool,
}

impl SourceImage {
    /// Create a new SourceImage from RGBA pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>, has_alpha: bool) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize) * 4,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
            has_alpha,
        }
    }

    /// Create a SourceImage from an image::RgbaImage.
    pub fn from_rgba_image(img: image::RgbaImage, has_alpha: bool) -> Self {
        let (width, height) = img.dimensions();
        Self::new(width, height, img.into_raw(), has_alpha)
    }

    /// Pixel data with the alpha byte of every pixel dropped (3 bytes per pixel).
    ///
    /// Color values are taken as-is; use
    /// [`flatten_onto_white`](crate::encode::flatten_onto_white) when
    /// transparent regions must be composited instead.
    pub fn rgb_pixels(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.pixel_count() * 3);
        for px in self.pixels.chunks_exact(4) {
            rgb.extend_from_slice(&px[..3]);
        }
        rgb
    }

    /// Returns true if any pixel is not fully opaque.
    pub fn is_translucent(&self) -> bool {
        self.has_alpha && self.pixels.chunks_exact(4).any(|px| px[3] != 255)
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}
