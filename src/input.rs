//! Reading the source table from disk.

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Reads the raw bytes of a local table file.
///
/// Files ending in `.gz` are decompressed transparently.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    let raw = std::fs::read(path)
        .with_context(|| format!("failed to read input file {}", path.display()))?;

    let bytes = if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        let mut decoder = GzDecoder::new(raw.as_slice());
        let mut decoded = Vec::new();
        decoder
            .read_to_end(&mut decoded)
            .with_context(|| format!("failed to decompress {}", path.display()))?;
        decoded
    } else {
        raw
    };

    debug!(bytes = bytes.len(), "Input file read");
    Ok(bytes)
}
