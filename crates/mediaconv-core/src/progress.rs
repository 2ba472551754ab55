//! Conversion progress stages.
//!
//! Conversions report the stage they are entering to an observer callback,
//! so a UI can drive a progress bar from real work instead of a timer.

use serde::Serialize;

/// A step of a local conversion, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Stage {
    /// Reading the input container into pixels.
    Decoding,
    /// Flattening alpha or computing page placement.
    Transforming,
    /// Writing the output container.
    Encoding,
    /// Output is complete.
    Done,
}

impl Stage {
    /// Share of the conversion completed when this stage is entered, 0-100.
    pub fn percent(self) -> u8 {
        match self {
            Stage::Decoding => 0,
            Stage::Transforming => 40,
            Stage::Encoding => 60,
            Stage::Done => 100,
        }
    }

    /// Stable lowercase name, used in logs and the JS bindings.
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Decoding => "decoding",
            Stage::Transforming => "transforming",
            Stage::Encoding => "encoding",
            Stage::Done => "done",
        }
    }
}
