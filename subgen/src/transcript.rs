//! Transcript-file collaborator: loads precomputed segments from JSON.
//!
//! The recognition model itself lives outside this tool; whatever runs it
//! (Whisper-style tooling, a transcription service) leaves behind a JSON
//! document of timed segments, and this module is the [`Transcriber`]
//! implementation that reads it back.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use subgen_core::error::{Error, Result};
use subgen_core::types::{Segment, Transcriber};

/// Reads segments from a Whisper-style JSON transcript file.
///
/// Accepts either the full-result shape `{"segments": [...]}` or a bare
/// segment array. Fields beyond `start`/`end`/`text` are ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonTranscript;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TranscriptDocument {
    Full { segments: Vec<Segment> },
    Bare(Vec<Segment>),
}

impl Transcriber for JsonTranscript {
    fn transcribe(&self, input: &Path) -> Result<Vec<Segment>> {
        // Every failure of this collaborator surfaces uniformly as a
        // transcription error, whether the file or its contents are bad.
        let raw = fs::read_to_string(input).map_err(|e| Error::Transcription(Box::new(e)))?;

        let document: TranscriptDocument =
            serde_json::from_str(&raw).map_err(|e| Error::Transcription(Box::new(e)))?;

        Ok(match document {
            TranscriptDocument::Full { segments } => segments,
            TranscriptDocument::Bare(segments) => segments,
        })
    }
}
