//! Conversion dispatcher.
//!
//! Ties classification, the option table and the local pipelines together:
//! given a file, its declared type and the id of the option the user picked,
//! either produce the converted file or describe the analysis request the
//! caller has to send to the text analysis service.

use crate::classify::{require_supported, FileKind};
use crate::error::ConvertError;
use crate::options::{find_option, OptionAction};
use crate::paginate::paginate_observed;
use crate::progress::Stage;
use crate::reencode::reencode_observed;
use crate::settings::ConversionSettings;

/// A user-supplied file.
#[derive(Debug, Clone, Copy)]
pub struct InputFile<'a> {
    pub bytes: &'a [u8],
    /// Declared MIME type, used only for classification.
    pub content_type: &'a str,
    /// Original filename, used to derive the output name.
    pub file_name: &'a str,
}

/// A converted file ready to hand back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFile {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    pub file_name: String,
}

/// Work for the text analysis service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    /// MIME type to send along with the file bytes.
    pub mime_type: String,
    /// Instruction text for the model.
    pub instruction: &'static str,
}

/// Result of dispatching one option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertOutcome {
    /// The option ran locally.
    File(ConvertedFile),
    /// The option must be fulfilled by the text analysis service.
    Analysis(AnalysisRequest),
}

/// Run the option `option_id` on `input`.
///
/// # Errors
///
/// - `ConvertError::UnsupportedType` if the declared type classifies as unknown
/// - `ConvertError::UnknownOption` if `option_id` is not offered for the kind
/// - Any decode/encode/document error from the local pipeline
pub fn convert(
    input: &InputFile<'_>,
    option_id: &str,
    settings: &ConversionSettings,
) -> Result<ConvertOutcome, ConvertError> {
    convert_with_progress(input, option_id, settings, |_| {})
}

/// [`convert`], reporting each pipeline stage to `on_progress` as it is
/// entered. Analysis options report nothing.
pub fn convert_with_progress<F>(
    input: &InputFile<'_>,
    option_id: &str,
    settings: &ConversionSettings,
    mut on_progress: F,
) -> Result<ConvertOutcome, ConvertError>
where
    F: FnMut(Stage),
{
    let kind = require_supported(input.content_type)?;
    let option = find_option(kind, option_id).ok_or_else(|| ConvertError::UnknownOption {
        kind,
        option: option_id.to_string(),
    })?;

    log::debug!(
        "converting '{}' ({}, {} bytes) with option '{}'",
        input.file_name,
        kind,
        input.bytes.len(),
        option.id
    );

    let result = match option.action {
        OptionAction::Reencode { format } => {
            debug_assert_eq!(kind, FileKind::Image);
            reencode_observed(input.bytes, format, settings.quality, &mut on_progress)?
        }
        OptionAction::Paginate => paginate_observed(
            input.bytes,
            settings.page_size,
            settings.embed_quality,
            &mut on_progress,
        )?,
        OptionAction::Analyze { instruction } => {
            return Ok(ConvertOutcome::Analysis(AnalysisRequest {
                mime_type: input.content_type.to_string(),
                instruction,
            }));
        }
    };

    Ok(ConvertOutcome::File(ConvertedFile {
        file_name: result.file_name_for(input.file_name),
        content_type: result.content_type,
        bytes: result.bytes,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::UnsupportedTypeError;
    use crate::paginate::PageSize;
    use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes() -> Vec<u8> {
        let img = RgbaImage::from_pixel(12, 6, Rgba([0, 128, 255, 128]));
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img)
            .write_to(&mut buf, ImageFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    fn expect_file(outcome: ConvertOutcome) -> ConvertedFile {
        match outcome {
            ConvertOutcome::File(file) => file,
            other => panic!("expected a file, got {:?}", other),
        }
    }

    #[test]
    fn test_convert_png_to_jpeg() {
        let bytes = png_bytes();
        let input = InputFile {
            bytes: &bytes,
            content_type: "image/png",
            file_name: "diagram.v2.png",
        };

        let file = expect_file(convert(&input, "jpeg", &ConversionSettings::default()).unwrap());
        assert_eq!(file.file_name, "diagram.v2.jpg");
        assert_eq!(file.content_type, "image/jpeg");
        assert_eq!(&file.bytes[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_convert_to_pdf_uses_settings() {
        let bytes = png_bytes();
        let input = InputFile {
            bytes: &bytes,
            content_type: "image/png",
            file_name: "diagram.png",
        };
        let mut settings = ConversionSettings::default();
        settings.page_size = PageSize::Letter;

        let file = expect_file(convert(&input, "pdf", &settings).unwrap());
        assert_eq!(file.file_name, "diagram.pdf");
        assert_eq!(file.content_type, "application/pdf");

        let doc = lopdf::Document::load_mem(&file.bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_convert_analysis_option() {
        let input = InputFile {
            bytes: b"ID3",
            content_type: "audio/mpeg",
            file_name: "memo.mp3",
        };

        let outcome = convert(&input, "transcribe", &ConversionSettings::default()).unwrap();
        match outcome {
            ConvertOutcome::Analysis(request) => {
                assert_eq!(request.mime_type, "audio/mpeg");
                assert!(!request.instruction.is_empty());
            }
            other => panic!("expected analysis request, got {:?}", other),
        }
    }

    #[test]
    fn test_convert_rejects_unknown_type() {
        let input = InputFile {
            bytes: b"hello",
            content_type: "text/plain",
            file_name: "notes.txt",
        };

        let err = convert(&input, "png", &ConversionSettings::default()).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::UnsupportedType(UnsupportedTypeError { ref content_type })
                if content_type == "text/plain"
        ));
    }

    #[test]
    fn test_convert_rejects_option_for_other_kind() {
        let input = InputFile {
            bytes: b"%PDF-1.7",
            content_type: "application/pdf",
            file_name: "report.pdf",
        };

        let err = convert(&input, "png", &ConversionSettings::default()).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::UnknownOption { kind: FileKind::Document, .. }
        ));
    }

    #[test]
    fn test_convert_declared_image_with_bad_bytes() {
        let input = InputFile {
            bytes: b"definitely not a png",
            content_type: "image/png",
            file_name: "broken.png",
        };

        let err = convert(&input, "webp", &ConversionSettings::default()).unwrap_err();
        assert!(matches!(err, ConvertError::Decode(_)));
    }

    #[test]
    fn test_convert_with_progress_reaches_done() {
        let bytes = png_bytes();
        let input = InputFile {
            bytes: &bytes,
            content_type: "image/png",
            file_name: "a.png",
        };

        let mut seen = Vec::new();
        convert_with_progress(&input, "webp", &ConversionSettings::default(), |stage| {
            seen.push(stage.percent())
        })
        .unwrap();
        assert_eq!(seen.first(), Some(&0));
        assert_eq!(seen.last(), Some(&100));
        assert!(seen.windows(2).all(|w| w[0] < w[1]));
    }
}
