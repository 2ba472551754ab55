//! Output options offered per file kind.
//!
//! A fixed table keyed by [`FileKind`]. Local options run in this crate;
//! `Analyze` options are handed to the external text analysis service by the
//! caller, together with the instruction text stored here.

use serde::Serialize;

use crate::classify::FileKind;
use crate::encode::TargetFormat;

/// What selecting an option does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum OptionAction {
    /// Re-encode the image into another raster format.
    Reencode { format: TargetFormat },
    /// Place the image on a single PDF page.
    Paginate,
    /// Send the file to the text analysis service with this instruction.
    Analyze { instruction: &'static str },
}

/// One entry of the output dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConversionOption {
    /// Stable identifier passed back by the UI.
    pub id: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    #[serde(flatten)]
    pub action: OptionAction,
}

const IMAGE_OPTIONS: &[ConversionOption] = &[
    ConversionOption {
        id: "png",
        label: "Convert to PNG",
        action: OptionAction::Reencode {
            format: TargetFormat::Png,
        },
    },
    ConversionOption {
        id: "jpeg",
        label: "Convert to JPEG",
        action: OptionAction::Reencode {
            format: TargetFormat::Jpeg,
        },
    },
    ConversionOption {
        id: "webp",
        label: "Convert to WEBP",
        action: OptionAction::Reencode {
            format: TargetFormat::Webp,
        },
    },
    ConversionOption {
        id: "pdf",
        label: "Convert to PDF",
        action: OptionAction::Paginate,
    },
    ConversionOption {
        id: "describe",
        label: "Describe image (AI)",
        action: OptionAction::Analyze {
            instruction: "Describe this image in detail, including any visible text.",
        },
    },
];

const AUDIO_OPTIONS: &[ConversionOption] = &[
    ConversionOption {
        id: "transcribe",
        label: "Transcribe audio (AI)",
        action: OptionAction::Analyze {
            instruction: "Transcribe this audio verbatim.",
        },
    },
    ConversionOption {
        id: "summarize",
        label: "Summarize audio (AI)",
        action: OptionAction::Analyze {
            instruction: "Summarize the content of this audio.",
        },
    },
];

const VIDEO_OPTIONS: &[ConversionOption] = &[ConversionOption {
    id: "describe",
    label: "Describe video (AI)",
    action: OptionAction::Analyze {
        instruction: "Describe what happens in this video.",
    },
}];

const DOCUMENT_OPTIONS: &[ConversionOption] = &[
    ConversionOption {
        id: "summarize",
        label: "Summarize document (AI)",
        action: OptionAction::Analyze {
            instruction: "Summarize this document.",
        },
    },
    ConversionOption {
        id: "key-points",
        label: "Extract key points (AI)",
        action: OptionAction::Analyze {
            instruction: "List the key points of this document as bullet points.",
        },
    },
];

/// Options offered for `kind`, in display order. Empty for `Unknown`.
pub fn options_for(kind: FileKind) -> &'static [ConversionOption] {
    match kind {
        FileKind::Image => IMAGE_OPTIONS,
        FileKind::Audio => AUDIO_OPTIONS,
        FileKind::Video => VIDEO_OPTIONS,
        FileKind::Document => DOCUMENT_OPTIONS,
        FileKind::Unknown => &[],
    }
}

/// Look up an option by id within `kind`'s table.
pub fn find_option(kind: FileKind, id: &str) -> Option<&'static ConversionOption> {
    options_for(kind).iter().find(|opt| opt.id == id)
}
