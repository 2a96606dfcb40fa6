use docxi_model::{ExportError, ExportOutcome, ExportRequest};

/// Something that can materialize preview text as a saved document.
///
/// One call is one attempt: implementations do not retry, and on failure no
/// file at the destination should be relied upon.
pub trait DocumentSink {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Save `request.text` at `request.destination` with `request.font`
    /// applied uniformly.
    fn export(&self, request: &ExportRequest) -> Result<ExportOutcome, ExportError>;
}

impl<S: DocumentSink + ?Sized> DocumentSink for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn export(&self, request: &ExportRequest) -> Result<ExportOutcome, ExportError> {
        (**self).export(request)
    }
}
