//! Error types for the subtitle pipeline.

use thiserror::Error;

/// Subtitle pipeline error variants.
#[derive(Debug, Error)]
pub enum Error {
    /// Timestamp formatting was asked for a negative or non-finite offset.
    /// Segments never legitimately carry such values, so this is a caller
    /// bug and is never clamped.
    #[error("invalid timestamp: {0}s (expected a non-negative finite offset)")]
    InvalidTimestamp(f64),

    /// Requested output format is not in the supported vocabulary.
    #[error("unknown subtitle format: {0:?} (expected txt, srt, vtt, tsv, or json)")]
    UnknownFormat(String),

    /// Transcription collaborator failed; surfaced unchanged.
    #[error("transcription failed")]
    Transcription(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Zip archive error
    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),

    /// IO error while writing archive entries
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for subgen-core operations.
pub type Result<T> = std::result::Result<T, Error>;
