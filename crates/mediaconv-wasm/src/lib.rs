//! Mediaconv WASM - WebAssembly bindings for Mediaconv
//!
//! This crate exposes mediaconv-core to the browser UI, which owns file
//! selection, the option dropdown, progress display and the calls to the
//! text analysis service.
//!
//! # Module Structure
//!
//! - `classify` - Content-type classification and the per-type option table
//! - `convert` - Re-encoding, pagination and option dispatch
//! - `logging` - Forwards `log` records to the browser console
//! - `types` - WASM-compatible wrapper types for conversion output
//!
//! # Usage
//!
//! ```typescript
//! import init, { options_for_content_type, convert_file } from '@mediaconv/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const options = options_for_content_type(file.type);
//! const out = convert_file(bytes, file.type, file.name, 'pdf', {}, (stage, pct) => {
//!   progress.value = pct;
//! });
//! download(new Blob([out.bytes()], { type: out.contentType }), out.fileName);
//! ```

use wasm_bindgen::prelude::*;

mod classify;
mod convert;
mod logging;
mod types;

// Re-export public types
pub use classify::{classify_content_type, options_for_content_type};
pub use convert::{convert_file, paginate_image, reencode_image};
pub use logging::set_log_level;
pub use types::{JsConversionResult, JsConvertedFile};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logging::install();
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
