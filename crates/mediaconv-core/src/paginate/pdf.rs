//! Single-page PDF writer.
//!
//! Builds a minimal PDF document with `lopdf`: one page, one JPEG image
//! XObject (`DCTDecode`, `DeviceRGB`), and a content stream that draws it
//! into the placement rectangle.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};
use thiserror::Error;

use super::Placement;
use crate::encode::EncodeError;

/// Resource name of the embedded image on the page.
const IMAGE_NAME: &str = "Im0";

/// Errors that can occur while writing the document.
#[derive(Debug, Error)]
pub enum DocumentWriteError {
    /// The page content stream could not be encoded.
    #[error("Failed to encode page content: {0}")]
    Content(String),

    /// The document could not be serialized.
    #[error("Failed to write PDF document: {0}")]
    Serialize(String),

    /// The image could not be encoded for embedding.
    #[error("Failed to encode embedded image: {0}")]
    EmbedImage(#[from] EncodeError),
}

/// Write a one-page PDF with `jpeg` drawn at `placement`.
///
/// # Arguments
///
/// * `jpeg` - Baseline JPEG bytes, 3 components (RGB)
/// * `pixel_width`, `pixel_height` - Pixel dimensions of the JPEG
/// * `page_width`, `page_height` - Page size in points
/// * `placement` - Target rectangle, top-left origin
pub fn write_single_image_pdf(
    jpeg: Vec<u8>,
    pixel_width: u32,
    pixel_height: u32,
    page_width: f64,
    page_height: f64,
    placement: &Placement,
) -> Result<Vec<u8>, DocumentWriteError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let image_len = jpeg.len() as i64;
    let image_id = doc.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => pixel_width as i64,
            "Height" => pixel_height as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
            "Filter" => "DCTDecode",
            "Length" => image_len,
        },
        jpeg,
    ));

    // PDF user space has its origin at the bottom-left
    let bottom = page_height - placement.y - placement.height;
    let content = Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    real(placement.width),
                    0.into(),
                    0.into(),
                    real(placement.height),
                    real(placement.x),
                    real(bottom),
                ],
            ),
            Operation::new("Do", vec![Object::Name(IMAGE_NAME.as_bytes().to_vec())]),
            Operation::new("Q", vec![]),
        ],
    };
    let content_bytes = content
        .encode()
        .map_err(|e| DocumentWriteError::Content(e.to_string()))?;
    let content_id = doc.add_object(Stream::new(Dictionary::new(), content_bytes));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), real(page_width), real(page_height)],
        "Contents" => content_id,
        "Resources" => dictionary! {
            "XObject" => dictionary! {
                IMAGE_NAME => image_id,
            },
        },
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut output = Vec::new();
    doc.save_to(&mut output)
        .map_err(|e| DocumentWriteError::Serialize(e.to_string()))?;

    Ok(output)
}

fn real(value: f64) -> Object {
    Object::Real(value as _)
}
