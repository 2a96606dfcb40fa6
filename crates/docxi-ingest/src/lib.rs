//! Input loading for Docxi.
//!
//! Files are read in full and decoded as strict UTF-8. No fallback encoding
//! is attempted: undecodable input is a [`ReadError`] and nothing is loaded.

use std::fs;
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};

use docxi_model::{InputDocument, ReadError};

/// Extension offered by default when choosing an input file.
pub const TEXT_EXTENSION: &str = "txt";

/// Read `path` into an [`InputDocument`].
pub fn read_input(path: &Path) -> Result<InputDocument, ReadError> {
    let start = Instant::now();
    let bytes = fs::read(path).map_err(|error| ReadError::open(path, error))?;
    let byte_count = bytes.len();
    let text = String::from_utf8(bytes)
        .map_err(|error| ReadError::decode(path, error.utf8_error().valid_up_to()))?;
    let document = InputDocument::from_text(path, &text);
    info!(
        path = %path.display(),
        bytes = byte_count,
        line_count = document.line_count(),
        duration_ms = start.elapsed().as_millis(),
        "input loaded"
    );
    Ok(document)
}

/// Whether `path` carries the plain-text extension (case-insensitive).
pub fn is_text_file(path: &Path) -> bool {
    let matches = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(TEXT_EXTENSION));
    if !matches {
        debug!(path = %path.display(), "input does not have a .txt extension");
    }
    matches
}
