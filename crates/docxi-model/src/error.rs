//! Error types shared across the workspace.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to load an input file.
#[derive(Debug, Error)]
#[error("cannot read {}: {kind}", .path.display())]
pub struct ReadError {
    pub path: PathBuf,
    #[source]
    pub kind: ReadErrorKind,
}

#[derive(Debug, Error)]
pub enum ReadErrorKind {
    /// The file could not be opened or read.
    #[error("{0}")]
    Open(#[from] io::Error),
    /// The bytes are not valid UTF-8.
    #[error("not valid UTF-8 (first invalid byte at offset {valid_up_to})")]
    Decode { valid_up_to: usize },
}

impl ReadError {
    pub fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            path: path.into(),
            kind: ReadErrorKind::Open(source),
        }
    }

    pub fn decode(path: impl Into<PathBuf>, valid_up_to: usize) -> Self {
        Self {
            path: path.into(),
            kind: ReadErrorKind::Decode { valid_up_to },
        }
    }

    pub fn is_decode(&self) -> bool {
        matches!(self.kind, ReadErrorKind::Decode { .. })
    }
}

/// Failure reported by a document sink.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    /// Writing the destination failed.
    #[error("cannot write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Packaging the document archive failed.
    #[error("archive error: {0}")]
    Archive(String),

    /// Generating document XML failed.
    #[error("xml error: {0}")]
    Xml(String),

    /// The sink refused the request.
    #[error("export rejected: {0}")]
    Rejected(String),
}

impl ExportError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Status text displayed after a failed export.
    #[must_use]
    pub fn user_message(&self) -> String {
        format!("Error: {self}")
    }
}

/// Unknown filter option name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown filter option '{0}' (expected 'cjk' or 'blank')")]
pub struct ParseOptionError(pub String);
