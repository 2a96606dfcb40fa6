//! Native `.docx` writer.

use std::fs;
use std::io::{Cursor, Write};
use std::time::Instant;

use chrono::{DateTime, Utc};
use tracing::{debug, info};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use docxi_model::{ExportError, ExportOutcome, ExportRequest};

use crate::parts::{
    APP_PART, CONTENT_TYPES_PART, CORE_PART, DOCUMENT_PART, DOCUMENT_RELS_PART, ROOT_RELS_PART,
    STYLES_PART, app_properties, content_types, core_properties, document, document_relationships,
    paragraphs, root_relationships, styles,
};
use crate::sink::DocumentSink;

/// Writes WordprocessingML packages directly, without an office application.
///
/// The package is assembled in memory and written to the destination in a
/// single call, so a failed export leaves no partially written archive.
#[derive(Debug, Clone, Default)]
pub struct DocxSink {
    timestamp: Option<DateTime<Utc>>,
}

impl DocxSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the creation time recorded in document properties.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Build the complete package for `request` as bytes.
    pub fn build_package(&self, request: &ExportRequest) -> Result<(Vec<u8>, usize), ExportError> {
        let paragraphs = paragraphs(&request.text);
        let title = request
            .destination
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let timestamp = self.timestamp.unwrap_or_else(Utc::now);

        let parts = [
            (CONTENT_TYPES_PART, content_types()?),
            (ROOT_RELS_PART, root_relationships()?),
            (DOCUMENT_PART, document(&paragraphs, &request.font)?),
            (DOCUMENT_RELS_PART, document_relationships()?),
            (STYLES_PART, styles(&request.font)?),
            (CORE_PART, core_properties(&title, timestamp)?),
            (APP_PART, app_properties(paragraphs.len())?),
        ];

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        for (name, bytes) in parts {
            zip.start_file(name, options)
                .map_err(|error| ExportError::Archive(error.to_string()))?;
            zip.write_all(&bytes)
                .map_err(|error| ExportError::Archive(error.to_string()))?;
            debug!(part = name, bytes = bytes.len(), "package part written");
        }
        let cursor = zip
            .finish()
            .map_err(|error| ExportError::Archive(error.to_string()))?;
        Ok((cursor.into_inner(), paragraphs.len()))
    }
}

impl DocumentSink for DocxSink {
    fn name(&self) -> &str {
        "docx"
    }

    fn export(&self, request: &ExportRequest) -> Result<ExportOutcome, ExportError> {
        let start = Instant::now();
        let destination = &request.destination;
        if destination.is_dir() {
            return Err(ExportError::Rejected(format!(
                "{} is a directory",
                destination.display()
            )));
        }

        let (package, paragraph_count) = self.build_package(request)?;

        if let Some(parent) = destination.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|error| ExportError::io(parent, error))?;
            }
        }
        fs::write(destination, &package).map_err(|error| ExportError::io(destination, error))?;

        info!(
            destination = %destination.display(),
            font = %request.font,
            paragraphs = paragraph_count,
            bytes = package.len(),
            duration_ms = start.elapsed().as_millis(),
            "document saved"
        );
        Ok(ExportOutcome {
            destination: destination.clone(),
            paragraphs: paragraph_count,
            bytes_written: package.len() as u64,
        })
    }
}
