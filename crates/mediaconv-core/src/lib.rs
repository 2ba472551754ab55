//! Mediaconv Core - file conversion library
//!
//! This crate provides the conversion functionality behind Mediaconv:
//! raster re-encoding (PNG, JPEG, WEBP), single-image pagination into a PDF
//! page, content-type classification, and the per-type table of output
//! options offered to the user.
//!
//! # Pipeline
//!
//! Every conversion is a pure function from input bytes to a
//! [`ConversionResult`]:
//!
//! 1. Decode (any supported raster, EXIF orientation applied)
//! 2. Transform (flatten alpha for JPEG, fit onto a page for PDF)
//! 3. Encode (target container)
//!
//! Nothing is cached between calls.

pub mod classify;
pub mod convert;
pub mod decode;
pub mod encode;
pub mod error;
pub mod filename;
pub mod options;
pub mod paginate;
pub mod progress;
pub mod reencode;
pub mod settings;

pub use classify::{classify, require_supported, FileKind, UnsupportedTypeError};
pub use convert::{
    convert, convert_with_progress, AnalysisRequest, ConvertOutcome, ConvertedFile, InputFile,
};
pub use decode::{decode_image, DecodeError, SourceImage};
pub use encode::{EncodeError, Quality, TargetFormat};
pub use error::ConvertError;
pub use options::{find_option, options_for, ConversionOption, OptionAction};
pub use paginate::{fit_centered, paginate, paginate_with, DocumentWriteError, PageSize, Placement};
pub use progress::Stage;
pub use reencode::reencode;
pub use settings::ConversionSettings;

/// The output of a successful conversion.
///
/// Either a complete, valid file of the tagged type, or nothing: no
/// operation in this crate returns partial output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    /// Encoded file bytes.
    pub bytes: Vec<u8>,
    /// MIME type of `bytes` (e.g. "image/png").
    pub content_type: &'static str,
    /// File extension without the leading dot (e.g. "png").
    pub extension: &'static str,
}

impl ConversionResult {
    /// Suggested output filename: the original basename with this result's
    /// extension substituted for the final dot-segment.
    pub fn file_name_for(&self, original: &str) -> String {
        filename::replace_extension(original, self.extension)
    }

    /// Size of the encoded output in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True if the output buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
