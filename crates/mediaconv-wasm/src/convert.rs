//! Conversion WASM bindings.
//!
//! # Functions
//!
//! - [`reencode_image`] - Re-encode an image as PNG, JPEG or WEBP
//! - [`paginate_image`] - Place an image on a single A4 PDF page
//! - [`convert_file`] - Run a conversion option picked from the option table
//!
//! # Example
//!
//! ```typescript
//! import { reencode_image, convert_file } from '@mediaconv/wasm';
//!
//! const webp = reencode_image(bytes, 'webp', 0.92);
//! console.log(webp.fileNameFor('photo.jpg'));   // "photo.webp"
//!
//! const pdf = convert_file(bytes, 'image/jpeg', 'photo.jpg', 'pdf', { pageSize: 'letter' });
//! ```

use crate::types::{JsConversionResult, JsConvertedFile};
use mediaconv_core::{
    convert_with_progress, paginate, reencode, ConversionSettings, ConvertOutcome, InputFile,
    Quality, Stage, TargetFormat,
};
use wasm_bindgen::prelude::*;

/// Re-encode an image.
///
/// # Arguments
///
/// * `bytes` - Encoded input image (PNG, JPEG, WEBP, GIF or BMP)
/// * `format` - Target format: "png", "jpeg" (or "jpg") or "webp"
/// * `quality` - Quality in (0, 1]; out-of-range values use 0.92. Ignored for PNG.
///
/// # Errors
///
/// Returns an error if the format name is unknown, the input can't be
/// decoded, or encoding fails.
#[wasm_bindgen]
pub fn reencode_image(
    bytes: &[u8],
    format: &str,
    quality: f32,
) -> Result<JsConversionResult, JsValue> {
    let target = format
        .parse::<TargetFormat>()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    reencode(bytes, target, Quality::new(quality))
        .map(JsConversionResult::from)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Place an image, centered and aspect-preserved, on a single A4 portrait
/// PDF page.
#[wasm_bindgen]
pub fn paginate_image(bytes: &[u8]) -> Result<JsConversionResult, JsValue> {
    paginate(bytes)
        .map(JsConversionResult::from)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Run the conversion option `option_id` on a user file.
///
/// # Arguments
///
/// * `bytes` - File contents
/// * `content_type` - Declared MIME type (e.g. `File.type`)
/// * `file_name` - Original filename, used to name the output
/// * `option_id` - Id from `options_for_content_type`
/// * `settings` - Partial `{ quality, pageSize, embedQuality }` object, or undefined
/// * `on_progress` - Optional `(stage: string, percent: number) => void`
///
/// # Errors
///
/// Returns an error for unsupported types, options not offered for the
/// type, decode/encode failures, and options that need the text analysis
/// service (those are handled by the caller, not in WASM).
#[wasm_bindgen]
pub fn convert_file(
    bytes: &[u8],
    content_type: &str,
    file_name: &str,
    option_id: &str,
    settings: JsValue,
    on_progress: Option<js_sys::Function>,
) -> Result<JsConvertedFile, JsValue> {
    let settings = parse_settings(settings)?;
    let input = InputFile {
        bytes,
        content_type,
        file_name,
    };

    let outcome = convert_with_progress(&input, option_id, &settings, |stage| {
        if let Some(callback) = &on_progress {
            report_progress(callback, stage);
        }
    })
    .map_err(|e| JsValue::from_str(&e.to_string()))?;

    match outcome {
        ConvertOutcome::File(file) => Ok(JsConvertedFile::from(file)),
        ConvertOutcome::Analysis(_) => Err(JsValue::from_str(&analysis_only_message(option_id))),
    }
}

fn parse_settings(value: JsValue) -> Result<ConversionSettings, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(ConversionSettings::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn report_progress(callback: &js_sys::Function, stage: Stage) {
    let result = callback.call2(
        &JsValue::NULL,
        &JsValue::from_str(stage.as_str()),
        &JsValue::from(stage.percent()),
    );
    if result.is_err() {
        log::warn!("progress callback threw at stage '{}'", stage.as_str());
    }
}

fn analysis_only_message(option_id: &str) -> String {
    format!(
        "Option '{}' is fulfilled by the text analysis service, not by local conversion",
        option_id
    )
}
