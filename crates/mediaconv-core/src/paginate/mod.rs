//! Single-image paginator.
//!
//! Turns one image into a one-page PDF document: the image is scaled to fit
//! inside the page (contain-fit), centered, and embedded as JPEG.
//!
//! # Lossy Intermediate
//!
//! The page writer only embeds `DCTDecode` images, so the pixels always pass
//! through a JPEG re-encode at `embed_quality` (near maximum by default).
//! Transparency is flattened onto white on the way. Callers must not expect
//! a lossless round-trip through this path.

mod geometry;
mod pdf;

pub use geometry::{fit_centered, PageSize, Placement};
pub use pdf::{write_single_image_pdf, DocumentWriteError};

use crate::decode::{decode_image, DecodeError, SourceImage};
use crate::encode::{Quality, TargetFormat};
use crate::error::ConvertError;
use crate::progress::Stage;
use crate::reencode::encode_source;
use crate::ConversionResult;

/// MIME type of paginated output.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Default quality of the embedded JPEG.
pub const DEFAULT_EMBED_QUALITY: Quality = Quality::HIGH;

/// Paginate onto a default (A4) page with the default embed quality.
///
/// # Errors
///
/// - `ConvertError::Decode` if `bytes` is not a readable image
/// - `ConvertError::DocumentWrite` if the embedded JPEG or the PDF itself
///   cannot be written
pub fn paginate(bytes: &[u8]) -> Result<ConversionResult, ConvertError> {
    paginate_with(bytes, PageSize::default(), DEFAULT_EMBED_QUALITY)
}

/// Paginate onto `page_size`, embedding at `embed_quality`.
pub fn paginate_with(
    bytes: &[u8],
    page_size: PageSize,
    embed_quality: Quality,
) -> Result<ConversionResult, ConvertError> {
    paginate_observed(bytes, page_size, embed_quality, &mut |_| {})
}

/// [`paginate_with`] reporting each stage to `on_stage` as it is entered.
pub fn paginate_observed(
    bytes: &[u8],
    page_size: PageSize,
    embed_quality: Quality,
    on_stage: &mut dyn FnMut(Stage),
) -> Result<ConversionResult, ConvertError> {
    on_stage(Stage::Decoding);
    let image = decode_image(bytes)?;

    on_stage(Stage::Transforming);
    let (page_width, page_height) = page_size.dimensions_pt();
    let placement = fit_centered(image.width, image.height, page_width, page_height).ok_or(
        DecodeError::ZeroDimensions {
            width: image.width,
            height: image.height,
        },
    )?;

    log::debug!(
        "placing {}x{} on {:?} at ({:.2}, {:.2}) {:.2}x{:.2}, ratio {:.4}",
        image.width,
        image.height,
        page_size,
        placement.x,
        placement.y,
        placement.width,
        placement.height,
        placement.ratio
    );

    let jpeg = embed_jpeg(&image, embed_quality, on_stage)?;
    let bytes = write_single_image_pdf(
        jpeg,
        image.width,
        image.height,
        page_width,
        page_height,
        &placement,
    )?;

    log::debug!("wrote single-page PDF ({} bytes)", bytes.len());

    on_stage(Stage::Done);
    Ok(ConversionResult {
        bytes,
        content_type: PDF_CONTENT_TYPE,
        extension: "pdf",
    })
}

/// Encode the intermediate JPEG that the page embeds.
fn embed_jpeg(
    image: &SourceImage,
    quality: Quality,
    on_stage: &mut dyn FnMut(Stage),
) -> Result<Vec<u8>, DocumentWriteError> {
    encode_source(image, TargetFormat::Jpeg, quality, on_stage)
        .map_err(DocumentWriteError::EmbedImage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::EncodeError;
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
    use lopdf::content::Content;
    use lopdf::{Document, Object};
    use std::io::Cursor;

    fn png_fixture(img: DynamicImage) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    /// Returns (image stream count, cm operands) of a single-page PDF.
    fn inspect(pdf: &[u8]) -> (usize, Vec<f64>) {
        let doc = Document::load_mem(pdf).unwrap();
        let pages = doc.get_pages();
        assert_eq!(pages.len(), 1);

        let images = doc
            .objects
            .values()
            .filter(|obj| match obj {
                Object::Stream(s) => {
                    s.dict.get(b"Subtype").and_then(Object::as_name).ok()
                        == Some(b"Image".as_slice())
                }
                _ => false,
            })
            .count();

        let page_id = *pages.values().next().unwrap();
        let content = Content::decode(&doc.get_page_content(page_id).unwrap()).unwrap();
        let cm = content
            .operations
            .iter()
            .find(|op| op.operator == "cm")
            .unwrap()
            .operands
            .iter()
            .map(|o| o.as_float().unwrap() as f64)
            .collect();

        (images, cm)
    }

    #[test]
    fn test_paginate_landscape_png() {
        let img = RgbImage::from_pixel(1200, 800, Rgb([40, 80, 120]));
        let result = paginate(&png_fixture(DynamicImage::ImageRgb8(img))).unwrap();

        assert_eq!(result.content_type, "application/pdf");
        assert_eq!(result.extension, "pdf");
        assert!(result.bytes.starts_with(b"%PDF"));

        let (images, cm) = inspect(&result.bytes);
        assert_eq!(images, 1);

        let (pw, ph) = PageSize::A4.dimensions_pt();
        let ratio = (pw / 1200.0).min(ph / 800.0);
        // Operands are stored as f32
        let tol = 1e-2;
        assert!((cm[0] - 1200.0 * ratio).abs() < tol);
        assert!((cm[3] - 800.0 * ratio).abs() < tol);
        assert!((cm[4] + cm[0] / 2.0 - pw / 2.0).abs() < tol);
        assert!((cm[5] + cm[3] / 2.0 - ph / 2.0).abs() < tol);
    }

    #[test]
    fn test_paginate_portrait_on_letter() {
        let img = RgbImage::from_pixel(100, 200, Rgb([0, 0, 0]));
        let result = paginate_with(
            &png_fixture(DynamicImage::ImageRgb8(img)),
            PageSize::Letter,
            Quality::MAX,
        )
        .unwrap();

        let (_, cm) = inspect(&result.bytes);
        // Height-bound: min(612/100, 792/200) = 3.96
        assert!((cm[3] - 792.0).abs() < 1e-2);
        assert!((cm[0] - 396.0).abs() < 1e-2);
        assert!((cm[4] - 108.0).abs() < 1e-2);
        assert!(cm[5].abs() < 1e-2);
    }

    #[test]
    fn test_paginate_transparent_png() {
        let img = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 0]));
        let result = paginate(&png_fixture(DynamicImage::ImageRgba8(img))).unwrap();
        let (images, _) = inspect(&result.bytes);
        assert_eq!(images, 1);
    }

    #[test]
    fn test_paginate_one_pixel() {
        let img = RgbImage::from_pixel(1, 1, Rgb([255, 0, 0]));
        let result = paginate(&png_fixture(DynamicImage::ImageRgb8(img))).unwrap();

        let (_, cm) = inspect(&result.bytes);
        assert!(cm.iter().all(|v| v.is_finite()));
        assert!(cm[0] > 0.0 && cm[3] > 0.0);
    }

    #[test]
    fn test_paginate_invalid_input() {
        let result = paginate(b"%PDF-1.4 not an image");
        assert!(matches!(result, Err(ConvertError::Decode(_))));
    }

    #[test]
    fn test_embed_failure_is_document_write_error() {
        let empty = SourceImage {
            width: 0,
            height: 3,
            pixels: Vec::new(),
            has_alpha: false,
        };

        let err = embed_jpeg(&empty, Quality::MAX, &mut |_| {}).unwrap_err();
        assert!(matches!(
            err,
            DocumentWriteError::EmbedImage(EncodeError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            ConvertError::from(err),
            ConvertError::DocumentWrite(_)
        ));
    }

    #[test]
    fn test_paginate_stages() {
        let img = RgbImage::from_pixel(3, 3, Rgb([1, 2, 3]));
        let bytes = png_fixture(DynamicImage::ImageRgb8(img));
        let mut stages = Vec::new();
        paginate_observed(&bytes, PageSize::A4, Quality::MAX, &mut |s| stages.push(s)).unwrap();
        assert_eq!(
            stages,
            vec![
                Stage::Decoding,
                Stage::Transforming,
                Stage::Encoding,
                Stage::Done
            ]
        );
    }
}
