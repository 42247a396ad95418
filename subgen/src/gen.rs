//! Subtitle generation: transcript in, subtitle files (or a zip bundle) out.

use crate::transcript::JsonTranscript;
use eyre::{Context, Result, eyre};
use std::path::{Path, PathBuf};
use subgen_core::bundle::build_bundle;
use subgen_core::pipeline::render;
use subgen_core::types::Transcriber;

/// CLI arguments for subtitle generation.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Path to transcript JSON (Whisper-style result or bare segment array)
    pub path: PathBuf,

    /// Output directory (default: same directory as the transcript)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output formats: txt, srt, vtt, tsv, json
    #[arg(short = 'f', long = "format", value_delimiter = ',', default_values_t = [String::from("srt")])]
    pub formats: Vec<String>,

    /// Minimum cue duration in seconds when merging short segments
    #[arg(long, default_value_t = subgen_core::pipeline::MIN_CUE_DURATION)]
    pub min_duration: f64,

    /// Write a single zip bundle instead of individual files
    #[arg(long)]
    pub zip: bool,
}

/// Resolved configuration for subtitle generation.
#[derive(Debug)]
pub struct Config {
    pub path: PathBuf,
    pub output_dir: PathBuf,
    pub prefix: String,
    pub formats: Vec<String>,
    pub min_duration: f64,
    pub zip: bool,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        // Output filename prefix is the source filename, extension stripped.
        let prefix = args
            .path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| eyre!("cannot derive output name from {:?}", args.path.display()))?
            .to_string();

        let output_dir = match args.output {
            Some(dir) => dir,
            None => args
                .path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."))
                .to_path_buf(),
        };

        Ok(Self {
            path: args.path,
            output_dir,
            prefix,
            formats: args.formats,
            min_duration: args.min_duration,
            zip: args.zip,
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    generate(&JsonTranscript, &config)
}

/// Run the pipeline with an explicit transcription collaborator.
pub fn generate(transcriber: &dyn Transcriber, config: &Config) -> Result<()> {
    tracing::info!(input = ?config.path.display(), "loading transcript");

    let segments = transcriber
        .transcribe(&config.path)
        .wrap_err_with(|| format!("failed to load transcript: {:?}", config.path.display()))?;

    tracing::info!(segments = segments.len(), "rendering subtitle formats");

    let outcome = render(&segments, &config.formats, config.min_duration)?;

    for id in &outcome.rejected {
        tracing::warn!(format = %id, "skipping unknown output format");
    }
    if outcome.outputs.is_empty() {
        return Err(eyre!(
            "no supported output format among {:?}",
            config.formats
        ));
    }

    std::fs::create_dir_all(&config.output_dir)
        .wrap_err_with(|| format!("failed to create {:?}", config.output_dir.display()))?;

    if config.zip {
        let archive = build_bundle(&outcome.outputs, &config.prefix)?;
        let path = config.output_dir.join(format!("{}.zip", config.prefix));

        tracing::info!(path = ?path.display(), entries = outcome.outputs.len(), "writing bundle");
        std::fs::write(&path, archive)
            .wrap_err_with(|| format!("failed to write bundle: {:?}", path.display()))?;
    } else {
        for (format, content) in &outcome.outputs {
            let path = config
                .output_dir
                .join(format!("{}.{format}", config.prefix));

            tracing::info!(path = ?path.display(), "writing subtitle file");
            std::fs::write(&path, content)
                .wrap_err_with(|| format!("failed to write {:?}", path.display()))?;
        }
    }

    Ok(())
}
