//! Re-encoder parameters: target container and quality factor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Output container for the raster re-encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetFormat {
    Png,
    Jpeg,
    Webp,
}

impl TargetFormat {
    /// All formats, in the order they are offered to the user.
    pub const ALL: [TargetFormat; 3] = [TargetFormat::Png, TargetFormat::Jpeg, TargetFormat::Webp];

    /// MIME type of the encoded output.
    pub fn content_type(self) -> &'static str {
        match self {
            TargetFormat::Png => "image/png",
            TargetFormat::Jpeg => "image/jpeg",
            TargetFormat::Webp => "image/webp",
        }
    }

    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            TargetFormat::Png => "png",
            TargetFormat::Jpeg => "jpg",
            TargetFormat::Webp => "webp",
        }
    }

    /// Whether the container can store an alpha channel.
    ///
    /// Formats without alpha require the source to be flattened first.
    pub fn supports_alpha(self) -> bool {
        !matches!(self, TargetFormat::Jpeg)
    }

    /// Whether the quality factor affects the output. PNG is always lossless.
    pub fn uses_quality(self) -> bool {
        !matches!(self, TargetFormat::Png)
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TargetFormat::Png => "PNG",
            TargetFormat::Jpeg => "JPEG",
            TargetFormat::Webp => "WEBP",
        })
    }
}

/// Returned when a format name does not match any [`TargetFormat`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown target format: {0}")]
pub struct UnknownFormatError(pub String);

impl FromStr for TargetFormat {
    type Err = UnknownFormatError;

    /// Parse a format name, extension, or MIME type (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" | "image/png" => Ok(TargetFormat::Png),
            "jpeg" | "jpg" | "image/jpeg" => Ok(TargetFormat::Jpeg),
            "webp" | "image/webp" => Ok(TargetFormat::Webp),
            _ => Err(UnknownFormatError(s.to_string())),
        }
    }
}

/// Lossy encoding quality in the range (0, 1].
///
/// Out-of-range and non-finite values fall back to [`Quality::DEFAULT`],
/// the same way a canvas encoder treats an invalid quality argument.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub struct Quality(f32);

impl Quality {
    /// Default quality factor (0.92).
    pub const DEFAULT: Quality = Quality(0.92);

    /// Near-maximum quality (0.95).
    pub const HIGH: Quality = Quality(0.95);

    /// Highest quality.
    pub const MAX: Quality = Quality(1.0);

    /// Create a quality factor, falling back to the default when `value` is
    /// outside (0, 1].
    pub fn new(value: f32) -> Self {
        if value.is_finite() && value > 0.0 && value <= 1.0 {
            Quality(value)
        } else {
            Self::DEFAULT
        }
    }

    /// The factor as given, in (0, 1].
    pub fn value(self) -> f32 {
        self.0
    }

    /// The factor on the 1-100 scale used by the JPEG encoder.
    pub fn to_percent(self) -> u8 {
        (self.0 * 100.0).round().clamp(1.0, 100.0) as u8
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<f32> for Quality {
    fn from(value: f32) -> Self {
        Quality::new(value)
    }
}

impl From<Quality> for f32 {
    fn from(quality: Quality) -> Self {
        quality.0
    }
}
