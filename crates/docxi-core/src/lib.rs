//! Session orchestration for Docxi.
//!
//! A [`Session`] owns the loaded input, the filter toggles and the preview
//! derived from them, and hands the preview to a
//! [`DocumentSink`](docxi_report::DocumentSink) on export.

pub mod session;

pub use session::{ExportStatus, Session, SessionState};
