//! WASM-compatible wrapper types for conversion output.
//!
//! The encoded bytes stay in WASM memory until `bytes()` is called, which
//! copies them into a JavaScript `Uint8Array`.

use mediaconv_core::{ConversionResult, ConvertedFile};
use wasm_bindgen::prelude::*;

/// Output of `reencode_image` / `paginate_image`.
#[wasm_bindgen]
pub struct JsConversionResult {
    inner: ConversionResult,
}

#[wasm_bindgen]
impl JsConversionResult {
    /// Encoded file bytes as Uint8Array (copied).
    pub fn bytes(&self) -> Vec<u8> {
        self.inner.bytes.clone()
    }

    /// Size of the encoded output in bytes
    #[wasm_bindgen(getter = byteLength)]
    pub fn byte_length(&self) -> usize {
        self.inner.len()
    }

    /// MIME type of the output (e.g. "image/webp")
    #[wasm_bindgen(getter = contentType)]
    pub fn content_type(&self) -> String {
        self.inner.content_type.to_string()
    }

    /// File extension without the dot (e.g. "webp")
    #[wasm_bindgen(getter)]
    pub fn extension(&self) -> String {
        self.inner.extension.to_string()
    }

    /// Suggested output filename for an input named `original`.
    #[wasm_bindgen(js_name = fileNameFor)]
    pub fn file_name_for(&self, original: &str) -> String {
        self.inner.file_name_for(original)
    }
}

impl From<ConversionResult> for JsConversionResult {
    fn from(inner: ConversionResult) -> Self {
        Self { inner }
    }
}

/// Output of `convert_file`.
#[wasm_bindgen]
pub struct JsConvertedFile {
    inner: ConvertedFile,
}

#[wasm_bindgen]
impl JsConvertedFile {
    /// Encoded file bytes as Uint8Array (copied).
    pub fn bytes(&self) -> Vec<u8> {
        self.inner.bytes.clone()
    }

    #[wasm_bindgen(getter = byteLength)]
    pub fn byte_length(&self) -> usize {
        self.inner.bytes.len()
    }

    #[wasm_bindgen(getter = contentType)]
    pub fn content_type(&self) -> String {
        self.inner.content_type.to_string()
    }

    /// Original basename with the new extension
    #[wasm_bindgen(getter = fileName)]
    pub fn file_name(&self) -> String {
        self.inner.file_name.clone()
    }
}

impl From<ConvertedFile> for JsConvertedFile {
    fn from(inner: ConvertedFile) -> Self {
        Self { inner }
    }
}
