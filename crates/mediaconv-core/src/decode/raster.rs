//! Format-sniffing raster decode with EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageError, ImageReader};

use super::{DecodeError, Orientation, SourceImage};

/// Decode any supported raster image (PNG, JPEG, WEBP, GIF, BMP) from bytes.
///
/// The format is detected from the leading bytes. EXIF orientation is
/// applied, so the returned dimensions are the displayed dimensions.
///
/// # Errors
///
/// - `DecodeError::Empty` if `bytes` is empty
/// - `DecodeError::InvalidFormat` if the format cannot be recognized
/// - `DecodeError::Unsupported` if the format variant is not supported
/// - `DecodeError::CorruptedFile` if the data is truncated or malformed
/// - `DecodeError::ZeroDimensions` if the image has no pixels
pub fn decode_image(bytes: &[u8]) -> Result<SourceImage, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::Empty);
    }

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let format = reader.format().ok_or(DecodeError::InvalidFormat)?;

    let img = reader.decode().map_err(|e| match e {
        ImageError::Unsupported(_) => DecodeError::Unsupported(e.to_string()),
        other => DecodeError::CorruptedFile(other.to_string()),
    })?;

    let orientation = get_orientation(bytes);
    let has_alpha = img.color().has_alpha();
    let img = apply_orientation(img, orientation);

    let (width, height) = (img.width(), img.height());
    if width == 0 || height == 0 {
        return Err(DecodeError::ZeroDimensions { width, height });
    }

    log::debug!(
        "decoded {:?} {}x{} (alpha: {}, orientation: {:?})",
        format,
        width,
        height,
        has_alpha,
        orientation
    );

    Ok(SourceImage::from_rgba_image(img.into_rgba8(), has_alpha))
}

/// Read the EXIF orientation of an encoded image.
///
/// Returns `Orientation::Normal` when there is no EXIF block or no
/// orientation tag.
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);
    let Ok(exif) = Reader::new().read_from_container(&mut cursor) else {
        return Orientation::Normal;
    };

    exif.get_field(Tag::Orientation, In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
        .map(Orientation::from)
        .unwrap_or_default()
}

fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};

    fn encode_fixture(img: DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, format).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_decode_png_rgba() {
        let mut img = RgbaImage::from_pixel(4, 3, Rgba([10, 20, 30, 255]));
        img.put_pixel(0, 0, Rgba([0, 0, 0, 0]));
        let bytes = encode_fixture(DynamicImage::ImageRgba8(img), ImageFormat::Png);

        let decoded = decode_image(&bytes).unwrap();
        assert_eq!((decoded.width, decoded.height), (4, 3));
        assert!(decoded.has_alpha);
        assert_eq!(decoded.pixels.len(), 4 * 3 * 4);
        assert_eq!(&decoded.pixels[0..4], &[0, 0, 0, 0]);
        assert_eq!(&decoded.pixels[4..8], &[10, 20, 30, 255]);
    }

    #[test]
    fn test_decode_jpeg_has_no_alpha() {
        let img = RgbImage::from_pixel(16, 8, Rgb([200, 100, 50]));
        let bytes = encode_fixture(DynamicImage::ImageRgb8(img), ImageFormat::Jpeg);

        let decoded = decode_image(&bytes).unwrap();
        assert_eq!((decoded.width, decoded.height), (16, 8));
        assert!(!decoded.has_alpha);
        assert!(decoded.pixels.chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn test_decode_ignores_declared_type() {
        // Format comes from the bytes, so a BMP decodes fine on its own
        let img = RgbImage::from_pixel(3, 5, Rgb([1, 2, 3]));
        let bytes = encode_fixture(DynamicImage::ImageRgb8(img), ImageFormat::Bmp);

        let decoded = decode_image(&bytes).unwrap();
        assert_eq!((decoded.width, decoded.height), (3, 5));
    }

    #[test]
    fn test_decode_empty_bytes() {
        assert!(matches!(decode_image(&[]), Err(DecodeError::Empty)));
    }

    #[test]
    fn test_decode_garbage() {
        let result = decode_image(&[0x00, 0x01, 0x02, 0x03]);
        assert!(matches!(result, Err(DecodeError::InvalidFormat)));
    }

    #[test]
    fn test_decode_plain_text() {
        let result = decode_image(b"hello, this is not an image");
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_truncated_png() {
        let img = RgbImage::from_pixel(32, 32, Rgb([9, 9, 9]));
        let bytes = encode_fixture(DynamicImage::ImageRgb8(img), ImageFormat::Png);

        let result = decode_image(&bytes[..bytes.len() / 2]);
        assert!(matches!(result, Err(DecodeError::CorruptedFile(_))));
    }

    #[test]
    fn test_orientation_without_exif() {
        let img = RgbImage::from_pixel(2, 2, Rgb([0, 0, 0]));
        let bytes = encode_fixture(DynamicImage::ImageRgb8(img), ImageFormat::Jpeg);
        assert_eq!(get_orientation(&bytes), Orientation::Normal);
        assert_eq!(get_orientation(&[0x00, 0x01]), Orientation::Normal);
    }

    /// Insert an APP1 EXIF segment carrying only an Orientation tag right
    /// after the JPEG SOI marker.
    fn with_exif_orientation(jpeg: &[u8], orientation: u8) -> Vec<u8> {
        #[rustfmt::skip]
        let app1: [u8; 36] = [
            0xFF, 0xE1, 0x00, 0x22,
            b'E', b'x', b'i', b'f', 0x00, 0x00,
            // Big-endian TIFF header, IFD0 at offset 8
            b'M', b'M', 0x00, 0x2A, 0x00, 0x00, 0x00, 0x08,
            // One entry: Orientation (0x0112), SHORT, count 1
            0x00, 0x01,
            0x01, 0x12, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01,
            0x00, orientation, 0x00, 0x00,
            // No next IFD
            0x00, 0x00, 0x00, 0x00,
        ];

        let mut out = Vec::with_capacity(jpeg.len() + app1.len());
        out.extend_from_slice(&jpeg[..2]);
        out.extend_from_slice(&app1);
        out.extend_from_slice(&jpeg[2..]);
        out
    }

    #[test]
    fn test_decode_applies_exif_rotation() {
        let img = RgbImage::from_pixel(40, 20, Rgb([120, 60, 30]));
        let jpeg = encode_fixture(DynamicImage::ImageRgb8(img), ImageFormat::Jpeg);
        let bytes = with_exif_orientation(&jpeg, 6);

        assert_eq!(get_orientation(&bytes), Orientation::Rotate90CW);

        let decoded = decode_image(&bytes).unwrap();
        assert_eq!((decoded.width, decoded.height), (20, 40));
        assert_eq!(decoded.pixels.len(), 20 * 40 * 4);
    }

    #[test]
    fn test_decode_exif_flip_keeps_dimensions() {
        let img = RgbImage::from_pixel(40, 20, Rgb([120, 60, 30]));
        let jpeg = encode_fixture(DynamicImage::ImageRgb8(img), ImageFormat::Jpeg);
        let bytes = with_exif_orientation(&jpeg, 2);

        assert_eq!(get_orientation(&bytes), Orientation::FlipHorizontal);
        let decoded = decode_image(&bytes).unwrap();
        assert_eq!((decoded.width, decoded.height), (40, 20));
    }

    #[test]
    fn test_apply_orientation_rotate90_swaps_dimensions() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(2, 1));
        let rotated = apply_orientation(img, Orientation::Rotate90CW);
        assert_eq!((rotated.width(), rotated.height()), (1, 2));
    }

    #[test]
    fn test_apply_orientation_flip_horizontal() {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Rgb([255, 0, 0]));
        img.put_pixel(1, 0, Rgb([0, 255, 0]));

        let flipped = apply_orientation(DynamicImage::ImageRgb8(img), Orientation::FlipHorizontal)
            .into_rgb8();
        assert_eq!(flipped.get_pixel(0, 0).0, [0, 255, 0]);
        assert_eq!(flipped.get_pixel(1, 0).0, [255, 0, 0]);
    }
}
