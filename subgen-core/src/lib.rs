//! subgen-core: subtitle cue merging and serialization.
//!
//! Takes the ordered, timestamped segments produced by a speech-to-text
//! collaborator and turns them into subtitle files: short fragments are
//! merged into readable cues, then serialized into any of five encodings
//! (plain text, SRT, WebVTT, TSV, JSON), optionally packed into a single
//! zip bundle.
//!
//! # Quick Start
//!
//! ```
//! use subgen_core::types::Segment;
//! use subgen_core::pipeline::{MIN_CUE_DURATION, render};
//! use subgen_core::bundle::build_bundle;
//!
//! let segments = vec![
//!     Segment::new(" Hello world.", 0.0, 1.2),
//!     Segment::new(" How are you?", 1.2, 3.4),
//! ];
//!
//! let outcome = render(&segments, &["srt", "vtt"], MIN_CUE_DURATION)?;
//! let archive = build_bundle(&outcome.outputs, "movie")?;
//! # assert!(outcome.rejected.is_empty());
//! # assert!(!archive.is_empty());
//! # Ok::<(), subgen_core::error::Error>(())
//! ```
//!
//! All functions here are pure and stateless: no I/O, no locks, safe to
//! call concurrently from independent requests.

pub mod bundle;
pub mod error;
pub mod merge;
pub mod pipeline;
pub mod timestamp;
pub mod types;
pub mod writers;
