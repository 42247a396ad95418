//! Serializers for the five supported subtitle encodings.
//!
//! Each writer is a pure function over a cue or segment sequence producing
//! the complete file content as a string. SRT and WebVTT consume raw
//! segments and merge internally; the other encodings consume cues the
//! caller has already merged.

use crate::error::Result;
use crate::merge::merge_segments;
use crate::timestamp::{srt_timestamp, vtt_timestamp};
use crate::types::{Cue, Segment};
use serde::Serialize;

/// Plain text: one cue text per line, no numbering, no timestamps.
pub fn write_txt(cues: &[Cue]) -> String {
    cues.iter()
        .map(|cue| cue.text.trim())
        .collect::<Vec<_>>()
        .join("\n")
}

/// SubRip (SRT): 1-based index, `HH:MM:SS,mmm --> HH:MM:SS,mmm` arrow
/// line, text, blank separator. Indices restart at 1 per invocation.
pub fn write_srt(segments: &[Segment], min_duration: f64) -> Result<String> {
    let mut out = String::new();

    for (cue, index) in merge_segments(segments, min_duration).iter().zip(1..) {
        let start = srt_timestamp(cue.start)?;
        let end = srt_timestamp(cue.end)?;
        out.push_str(&format!(
            "{index}\n{start} --> {end}\n{}\n\n",
            cue.text.trim()
        ));
    }

    Ok(out)
}

/// WebVTT: literal `WEBVTT` header and blank line, then unnumbered cue
/// blocks with period-delimited timestamps (hours only past one hour).
pub fn write_vtt(segments: &[Segment], min_duration: f64) -> Result<String> {
    let mut out = String::from("WEBVTT\n\n");

    for cue in merge_segments(segments, min_duration) {
        let start = vtt_timestamp(cue.start, false)?;
        let end = vtt_timestamp(cue.end, false)?;
        out.push_str(&format!("{start} --> {end}\n{}\n\n", cue.text.trim()));
    }

    Ok(out)
}

/// Tab-separated values: header row, then one row per cue with VTT-style
/// timestamps. Values are emitted verbatim, without quoting or escaping.
pub fn write_tsv(cues: &[Cue]) -> Result<String> {
    let mut lines = vec!["start\tend\ttext".to_string()];

    for cue in cues {
        lines.push(format!(
            "{}\t{}\t{}",
            vtt_timestamp(cue.start, false)?,
            vtt_timestamp(cue.end, false)?,
            cue.text.trim()
        ));
    }

    Ok(lines.join("\n"))
}

#[derive(Serialize)]
struct JsonTranscript<'a> {
    text: String,
    segments: &'a [Cue],
}

/// JSON: pretty-printed object with the newline-joined transcript under
/// `text` and the cue array under `segments`. Start/end stay numeric and
/// non-ASCII text is emitted unescaped.
pub fn write_json(cues: &[Cue]) -> Result<String> {
    let transcript = JsonTranscript {
        text: write_txt(cues),
        segments: cues,
    };
    Ok(serde_json::to_string_pretty(&transcript)?)
}
