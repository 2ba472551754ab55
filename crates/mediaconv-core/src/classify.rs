//! File-type classification by declared content type.
//!
//! Classification looks only at the MIME type the caller declares; the bytes
//! are not inspected. `Unknown` is terminal: it must be surfaced to the user
//! as a rejection via [`require_supported`].

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Broad category of an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Image,
    Audio,
    Video,
    Document,
    Unknown,
}

impl FileKind {
    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            FileKind::Image => "image",
            FileKind::Audio => "audio",
            FileKind::Video => "video",
            FileKind::Document => "document",
            FileKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The declared content type is not one this tool can process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported file type: '{content_type}'")]
pub struct UnsupportedTypeError {
    pub content_type: String,
}

/// Classify a declared content type.
///
/// Matching is on the media type essence (parameters after `;` are ignored,
/// comparison is case-insensitive): `image/*`, `audio/*` and `video/*` by
/// prefix, `application/pdf` by equality. Everything else, including
/// `text/plain` and the empty string, is `Unknown`.
pub fn classify(content_type: &str) -> FileKind {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if essence.starts_with("image/") {
        FileKind::Image
    } else if essence.starts_with("audio/") {
        FileKind::Audio
    } else if essence.starts_with("video/") {
        FileKind::Video
    } else if essence == "application/pdf" {
        FileKind::Document
    } else {
        FileKind::Unknown
    }
}

/// Classify and reject `Unknown`.
pub fn require_supported(content_type: &str) -> Result<FileKind, UnsupportedTypeError> {
    match classify(content_type) {
        FileKind::Unknown => {
            log::warn!("rejecting unsupported content type '{}'", content_type);
            Err(UnsupportedTypeError {
                content_type: content_type.to_string(),
            })
        }
        kind => Ok(kind),
    }
}
