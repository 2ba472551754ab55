//! Classification WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { classify_content_type, options_for_content_type } from '@mediaconv/wasm';
//!
//! classify_content_type('image/png');        // "image"
//! options_for_content_type('audio/mpeg');    // [{ id: "transcribe", label: ..., kind: "analyze", ... }]
//! ```

use mediaconv_core::{classify, options_for, require_supported};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Classify a declared MIME type as "image", "audio", "video", "document"
/// or "unknown".
#[wasm_bindgen]
pub fn classify_content_type(content_type: &str) -> String {
    classify(content_type).as_str().to_string()
}

/// The conversion options offered for a declared MIME type, as an array of
/// `{ id, label, kind, ... }` objects.
///
/// # Errors
///
/// Returns an error if the type classifies as unknown.
#[wasm_bindgen]
pub fn options_for_content_type(content_type: &str) -> Result<JsValue, JsValue> {
    let kind = require_supported(content_type).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let options = options_for(kind);
    options
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
