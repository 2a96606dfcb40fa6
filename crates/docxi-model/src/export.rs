//! Export requests and sink outcomes.

use std::path::PathBuf;

use serde::Serialize;

use crate::document::PreviewText;

/// Font applied uniformly to exported documents.
pub const DEFAULT_FONT: &str = "Arial";

/// Preview text captured at the moment export was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub destination: PathBuf,
    pub text: String,
    pub font: String,
}

impl ExportRequest {
    pub fn new(destination: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            text: text.into(),
            font: DEFAULT_FONT.to_string(),
        }
    }

    /// Build a request from the current preview, trimming it the way the
    /// exported document expects.
    pub fn from_preview(destination: impl Into<PathBuf>, preview: &PreviewText) -> Self {
        Self::new(destination, preview.export_body())
    }

    #[must_use]
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }
}

/// What a sink reports after saving a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportOutcome {
    pub destination: PathBuf,
    pub paragraphs: usize,
    pub bytes_written: u64,
}
