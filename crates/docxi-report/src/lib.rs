//! Docxi document export.
//!
//! This crate provides the sink that turns preview text into a saved
//! document:
//!
//! - **sink**: the [`DocumentSink`] capability used by the session
//! - **docx**: [`DocxSink`], a native WordprocessingML (`.docx`) writer
//! - **naming**: default destination paths derived from the input file

mod common;
mod docx;
mod naming;
mod parts;
mod sink;

pub use docx::DocxSink;
pub use naming::{DOCX_EXTENSION, default_output_path, with_docx_extension};
pub use sink::DocumentSink;
