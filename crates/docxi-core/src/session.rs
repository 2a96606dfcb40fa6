//! Session state machine.
//!
//! # States
//!
//! - [`SessionState::Empty`]: nothing loaded, the preview is empty.
//! - [`SessionState::Loaded`]: an input is loaded and the preview reflects the
//!   current [`FilterOptions`].
//!
//! A successful [`Session::select_input`] moves to `Loaded` and replaces the
//! input wholesale. Toggling options and exporting never change the state.
//! Every operation finishes before it returns.

use std::path::{Path, PathBuf};

use tracing::{debug, info, info_span, warn};

use docxi_filter::render_preview;
use docxi_ingest::read_input;
use docxi_model::{
    DEFAULT_FONT, ExportOutcome, ExportRequest, FilterOption, FilterOptions, FilterReport,
    InputDocument, PreviewText, ReadError,
};
use docxi_report::{DocumentSink, default_output_path};

/// Whether an input is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Empty,
    Loaded,
}

/// Result of one export attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportStatus {
    Succeeded(ExportOutcome),
    Failed(String),
}

impl ExportStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    /// Text for the status line shown after the attempt.
    pub fn status_line(&self) -> String {
        match self {
            Self::Succeeded(_) => "File saved successfully!".to_string(),
            Self::Failed(message) => message.clone(),
        }
    }
}

/// Interactive filtering session over one input at a time.
#[derive(Debug)]
pub struct Session<S> {
    sink: S,
    font: String,
    options: FilterOptions,
    document: Option<InputDocument>,
    preview: PreviewText,
    report: FilterReport,
    last_export: Option<ExportStatus>,
}

impl<S: DocumentSink> Session<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            font: DEFAULT_FONT.to_string(),
            options: FilterOptions::default(),
            document: None,
            preview: PreviewText::default(),
            report: FilterReport::default(),
            last_export: None,
        }
    }

    /// Start with the given toggles instead of both disabled.
    #[must_use]
    pub fn with_options(mut self, options: FilterOptions) -> Self {
        self.options = options;
        self.refresh();
        self
    }

    /// Font applied to exported documents.
    #[must_use]
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }

    pub fn state(&self) -> SessionState {
        if self.document.is_some() {
            SessionState::Loaded
        } else {
            SessionState::Empty
        }
    }

    pub fn document(&self) -> Option<&InputDocument> {
        self.document.as_ref()
    }

    pub fn options(&self) -> FilterOptions {
        self.options
    }

    pub fn font(&self) -> &str {
        &self.font
    }

    pub fn preview(&self) -> &PreviewText {
        &self.preview
    }

    pub fn report(&self) -> FilterReport {
        self.report
    }

    pub fn last_export(&self) -> Option<&ExportStatus> {
        self.last_export.as_ref()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Load `path` and recompute the preview.
    ///
    /// On failure the previously loaded input and preview stay as they were.
    pub fn select_input(&mut self, path: &Path) -> Result<&PreviewText, ReadError> {
        let span = info_span!("select_input", path = %path.display());
        let _guard = span.enter();
        let document = read_input(path)?;
        self.document = Some(document);
        self.refresh();
        info!(
            kept = self.report.kept,
            total = self.report.total,
            "input selected"
        );
        Ok(&self.preview)
    }

    /// Record a toggle and recompute the preview from the raw input.
    ///
    /// Returns `None` when nothing is loaded; the toggle still applies to the
    /// next input.
    pub fn set_option(&mut self, option: FilterOption, value: bool) -> Option<&PreviewText> {
        self.options.set(option, value);
        debug!(option = %option, value, "filter option set");
        if self.document.is_none() {
            return None;
        }
        self.refresh();
        Some(&self.preview)
    }

    /// Flip a toggle; returns its new value.
    pub fn toggle_option(&mut self, option: FilterOption) -> bool {
        let value = !self.options.get(option);
        self.set_option(option, value);
        value
    }

    /// Suggested destination for the loaded input.
    pub fn default_destination(&self) -> Option<PathBuf> {
        self.document
            .as_ref()
            .map(|document| default_output_path(document.path()))
    }

    /// Hand the current preview to the sink, once.
    ///
    /// Failures are reported in the returned status rather than propagated;
    /// the loaded input, options and preview are unaffected either way.
    pub fn export_current_preview(&mut self, destination: &Path) -> &ExportStatus {
        let span = info_span!(
            "export",
            sink = self.sink.name(),
            destination = %destination.display()
        );
        let _guard = span.enter();
        let request = ExportRequest::from_preview(destination, &self.preview).with_font(&self.font);
        let status = match self.sink.export(&request) {
            Ok(outcome) => ExportStatus::Succeeded(outcome),
            Err(error) => {
                warn!(error = %error, "export failed");
                ExportStatus::Failed(error.user_message())
            }
        };
        self.last_export.insert(status)
    }

    fn refresh(&mut self) {
        let Some(document) = &self.document else {
            self.preview = PreviewText::default();
            self.report = FilterReport::default();
            return;
        };
        let (preview, report) = render_preview(document, &self.options);
        self.preview = preview;
        self.report = report;
    }
}
