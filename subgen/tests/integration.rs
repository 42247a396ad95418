//! Integration tests for the subgen CLI.

use clap::Parser;
use subgen::cli::Cli;
use subgen::r#gen::{Config, execute};

fn run(argv: &[&str]) -> eyre::Result<()> {
    let cli = Cli::parse_from(argv);
    let config: Config = cli.args.try_into()?;
    execute(config)
}

const TRANSCRIPT: &str = r#"{
    "segments": [
        {"start": 0.0, "end": 1.0, "text": " Good morning."},
        {"start": 1.0, "end": 1.8, "text": " This is"},
        {"start": 1.8, "end": 3.1, "text": " a test recording."},
        {"start": 3.5, "end": 6.0, "text": " Goodbye."}
    ]
}"#;

#[test]
fn writes_requested_subtitle_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("interview.json");
    std::fs::write(&input, TRANSCRIPT).unwrap();

    run(&[
        "subgen",
        input.to_str().unwrap(),
        "--format",
        "srt,vtt,txt",
    ])
    .unwrap();

    let srt = std::fs::read_to_string(dir.path().join("interview.srt")).unwrap();
    assert!(srt.starts_with("1\n00:00:00,000 --> "));
    assert!(srt.contains("Good morning. This is a test recording."));

    let vtt = std::fs::read_to_string(dir.path().join("interview.vtt")).unwrap();
    assert!(vtt.starts_with("WEBVTT\n\n"));

    let txt = std::fs::read_to_string(dir.path().join("interview.txt")).unwrap();
    assert_eq!(txt, "Good morning. This is a test recording.\nGoodbye.");
}

#[test]
fn writes_zip_bundle() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("clip.json");
    std::fs::write(&input, TRANSCRIPT).unwrap();

    let out = dir.path().join("bundled");
    run(&[
        "subgen",
        input.to_str().unwrap(),
        "--format",
        "srt,json",
        "--zip",
        "-o",
        out.to_str().unwrap(),
    ])
    .unwrap();

    let bytes = std::fs::read(out.join("clip.zip")).unwrap();
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();

    let names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"clip.srt".to_string()));
    assert!(names.contains(&"clip.json".to_string()));
}

#[test]
fn fails_when_no_format_is_recognized() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("clip.json");
    std::fs::write(&input, TRANSCRIPT).unwrap();

    let result = run(&["subgen", input.to_str().unwrap(), "--format", "docx"]);
    assert!(result.is_err());
}

#[test]
fn fails_on_missing_transcript() {
    let result = run(&["subgen", "/nonexistent/clip.json", "--format", "srt"]);
    assert!(result.is_err());
}
