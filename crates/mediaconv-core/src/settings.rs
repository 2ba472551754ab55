//! Conversion settings.

use serde::{Deserialize, Serialize};

use crate::encode::Quality;
use crate::paginate::{PageSize, DEFAULT_EMBED_QUALITY};

/// User-adjustable conversion settings.
///
/// Deserializes from a partial object: missing fields take their defaults,
/// so `{}` is valid input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConversionSettings {
    /// Quality factor for lossy re-encoding (0, 1].
    pub quality: Quality,
    /// Page preset for PDF output.
    pub page_size: PageSize,
    /// Quality of the JPEG embedded in PDF output (0, 1].
    pub embed_quality: Quality,
}

impl Default for ConversionSettings {
    fn default() -> Self {
        Self {
            quality: Quality::DEFAULT,
            page_size: PageSize::A4,
            embed_quality: DEFAULT_EMBED_QUALITY,
        }
    }
}
