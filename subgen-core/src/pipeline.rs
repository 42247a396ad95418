//! Render pipeline: requested format identifiers in, serialized outputs out.

use crate::error::{Error, Result};
use crate::types::Segment;
use crate::writers;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub use crate::merge::MIN_CUE_DURATION;

/// Supported subtitle output formats.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Format {
    Txt,
    Srt,
    Vtt,
    Tsv,
    Json,
}

impl Format {
    /// Every supported format, in serialization order.
    pub const ALL: [Format; 5] = [
        Format::Txt,
        Format::Srt,
        Format::Vtt,
        Format::Tsv,
        Format::Json,
    ];

    /// File extension for this format (same as its identifier).
    pub fn extension(self) -> &'static str {
        match self {
            Format::Txt => "txt",
            Format::Srt => "srt",
            Format::Vtt => "vtt",
            Format::Tsv => "tsv",
            Format::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "txt" => Ok(Format::Txt),
            "srt" => Ok(Format::Srt),
            "vtt" => Ok(Format::Vtt),
            "tsv" => Ok(Format::Tsv),
            "json" => Ok(Format::Json),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

/// Result of rendering one segment sequence into requested formats.
#[derive(Debug, Default)]
pub struct RenderOutcome {
    /// Serialized content per recognized format.
    pub outputs: BTreeMap<Format, String>,
    /// Requested identifiers outside the format vocabulary, in request
    /// order. Their presence never aborts the recognized formats.
    pub rejected: Vec<String>,
}

/// Serialize `segments` into every recognized format in `requested`.
///
/// Merging runs once and is shared by the cue-based encodings; SRT and
/// WebVTT re-merge from the raw segments themselves. Duplicate requests
/// coalesce. Unrecognized identifiers are collected into
/// [`RenderOutcome::rejected`] rather than failing the call; a hard
/// serialization error (invalid timestamp) still aborts.
pub fn render<S: AsRef<str>>(
    segments: &[Segment],
    requested: &[S],
    min_duration: f64,
) -> Result<RenderOutcome> {
    let cues = crate::merge::merge_segments(segments, min_duration);
    let mut outcome = RenderOutcome::default();

    for id in requested {
        let id = id.as_ref();
        let format = match id.parse::<Format>() {
            Ok(format) => format,
            Err(_) => {
                outcome.rejected.push(id.to_string());
                continue;
            }
        };

        let content = match format {
            Format::Txt => writers::write_txt(&cues),
            Format::Srt => writers::write_srt(segments, min_duration)?,
            Format::Vtt => writers::write_vtt(segments, min_duration)?,
            Format::Tsv => writers::write_tsv(&cues)?,
            Format::Json => writers::write_json(&cues)?,
        };
        outcome.outputs.insert(format, content);
    }

    Ok(outcome)
}
