//! Error type shared by every conversion entry point.

use thiserror::Error;

use crate::classify::{FileKind, UnsupportedTypeError};
use crate::decode::DecodeError;
use crate::encode::EncodeError;
use crate::paginate::DocumentWriteError;

/// Any failure of a single conversion call.
///
/// All variants are terminal for the call that raised them; nothing is
/// retried and no partial output is returned.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    #[error("document write error: {0}")]
    DocumentWrite(#[from] DocumentWriteError),

    #[error(transparent)]
    UnsupportedType(#[from] UnsupportedTypeError),

    /// The option id is not offered for this kind of file.
    #[error("option '{option}' is not available for {kind} files")]
    UnknownOption { kind: FileKind, option: String },
}
