//! Loaded input text and the preview derived from it.

use std::path::{Path, PathBuf};

/// A text file as it was read from disk.
///
/// Lines are split on `\n`, `\r\n` and a lone `\r`, and every terminator is
/// normalized to `\n`. The last line has no terminator if the file did not
/// end with one. The document is never modified after loading; selecting
/// another file replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDocument {
    path: PathBuf,
    lines: Vec<String>,
}

impl InputDocument {
    /// Split `text` into lines using universal newlines.
    pub fn from_text(path: impl Into<PathBuf>, text: &str) -> Self {
        let mut lines = Vec::new();
        let mut rest = text;
        while let Some(end) = rest.find(['\r', '\n']) {
            let mut line = rest[..end].to_string();
            line.push('\n');
            lines.push(line);
            let skip = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
            rest = &rest[end + skip..];
        }
        if !rest.is_empty() {
            lines.push(rest.to_string());
        }
        Self {
            path: path.into(),
            lines,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Filtered text shown to the user before export.
///
/// Always recomputed in full from an [`InputDocument`]; never patched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewText(String);

impl PreviewText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Text handed to a document sink: the preview with surrounding
    /// whitespace removed.
    pub fn export_body(&self) -> &str {
        self.0.trim()
    }
}
