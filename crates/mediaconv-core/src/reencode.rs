//! Raster re-encoder.
//!
//! Decodes an image and writes it back out as PNG, JPEG or WEBP at its
//! natural dimensions. JPEG output is flattened onto white first; PNG and
//! WEBP keep the alpha channel when the source had one.

use crate::decode::{decode_image, SourceImage};
use crate::encode::{
    encode_jpeg, encode_png, encode_webp, flatten_onto_white, EncodeError, PixelLayout, Quality,
    TargetFormat,
};
use crate::error::ConvertError;
use crate::progress::Stage;
use crate::ConversionResult;

/// Re-encode an image into `target` at `quality` (ignored for lossless targets).
///
/// The output has exactly the input's pixel dimensions.
///
/// # Errors
///
/// - `ConvertError::Decode` if `bytes` is not a readable image
/// - `ConvertError::Encode` if the encoder backend fails
///
/// # Example
///
/// ```ignore
/// use mediaconv_core::{reencode, Quality, TargetFormat};
///
/// let png = std::fs::read("logo.png").unwrap();
/// let jpeg = reencode(&png, TargetFormat::Jpeg, Quality::default()).unwrap();
/// assert_eq!(jpeg.content_type, "image/jpeg");
/// ```
pub fn reencode(
    bytes: &[u8],
    target: TargetFormat,
    quality: Quality,
) -> Result<ConversionResult, ConvertError> {
    reencode_observed(bytes, target, quality, &mut |_| {})
}

/// [`reencode`] reporting each stage to `on_stage` as it is entered.
pub fn reencode_observed(
    bytes: &[u8],
    target: TargetFormat,
    quality: Quality,
    on_stage: &mut dyn FnMut(Stage),
) -> Result<ConversionResult, ConvertError> {
    on_stage(Stage::Decoding);
    let image = decode_image(bytes)?;

    on_stage(Stage::Transforming);
    let encoded = encode_source(&image, target, quality, on_stage)?;

    if target.uses_quality() {
        log::debug!(
            "re-encoded {}x{} to {} ({} bytes, quality {})",
            image.width,
            image.height,
            target,
            encoded.len(),
            quality.value()
        );
    } else {
        log::debug!(
            "re-encoded {}x{} to {} ({} bytes, lossless)",
            image.width,
            image.height,
            target,
            encoded.len()
        );
    }

    on_stage(Stage::Done);
    Ok(ConversionResult {
        bytes: encoded,
        content_type: target.content_type(),
        extension: target.extension(),
    })
}

/// Encode an already decoded image into `target`.
///
/// The decode step is separated out so callers that hold a `SourceImage`
/// (for example the paginator's intermediate) do not decode twice.
pub fn encode_source(
    image: &SourceImage,
    target: TargetFormat,
    quality: Quality,
    on_stage: &mut dyn FnMut(Stage),
) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = (image.width, image.height);

    if !target.supports_alpha() {
        if image.is_translucent() {
            log::debug!("flattening transparency onto white for {}", target);
        }
        let rgb = flatten_onto_white(&image.pixels);
        on_stage(Stage::Encoding);
        return encode_jpeg(&rgb, width, height, quality.to_percent());
    }

    let (pixels, layout) = if image.has_alpha {
        (image.pixels.clone(), PixelLayout::Rgba)
    } else {
        (image.rgb_pixels(), PixelLayout::Rgb)
    };
    on_stage(Stage::Encoding);
    match target {
        TargetFormat::Webp => encode_webp(&pixels, width, height, layout, quality.to_percent()),
        _ => encode_png(&pixels, width, height, layout),
    }
}
