//! Core types for subgen-core.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Text segment with timestamps.
///
/// A portion of transcribed text with start and end times in seconds, as
/// emitted by the transcription collaborator. Unknown fields in source JSON
/// (token ids, confidence scores, etc.) are ignored on deserialization.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Segment {
    /// Transcribed text
    pub text: String,
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds
    pub end: f64,
}

impl Segment {
    /// Create a segment from text and timestamps.
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }
}

/// A merged subtitle cue: one or more consecutive segments folded into a
/// single display unit.
///
/// Cues are produced in chronological order and never overlap; the text is
/// the space-joined concatenation of each constituent segment's trimmed
/// text.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Cue {
    /// Start time in seconds (first constituent segment's start)
    pub start: f64,
    /// End time in seconds (last constituent segment's end)
    pub end: f64,
    /// Display text
    pub text: String,
}

/// Source of timed transcript segments.
///
/// The recognition model is an external collaborator behind this seam:
/// construct an implementation once at startup and pass it into each
/// processing call, rather than holding the model in shared mutable state.
pub trait Transcriber {
    /// Produce the ordered segment sequence for one input file.
    fn transcribe(&self, input: &Path) -> Result<Vec<Segment>>;
}
