//! subgen: CLI shell around the subtitle generation pipeline.

pub mod cli;
pub mod r#gen;
pub mod transcript;
