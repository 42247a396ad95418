//! Packs serialized subtitle outputs into a single in-memory zip archive.

use crate::error::Result;
use crate::pipeline::Format;
use std::collections::BTreeMap;
use std::io::{Cursor, Write};
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::FileOptions;

/// Build a zip archive holding one entry per rendered format, each named
/// `{prefix}.{format}` with the serialized content written verbatim as
/// UTF-8. Returns the archive bytes; nothing touches the filesystem.
pub fn build_bundle(outputs: &BTreeMap<Format, String>, prefix: &str) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    for (format, content) in outputs {
        zip.start_file(format!("{prefix}.{format}"), options)?;
        zip.write_all(content.as_bytes())?;
    }

    let buffer = zip.finish()?.into_inner();

    Ok(buffer)
}
