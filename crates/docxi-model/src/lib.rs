pub mod document;
pub mod error;
pub mod export;
pub mod options;
pub mod report;

pub use document::{InputDocument, PreviewText};
pub use error::{ExportError, ParseOptionError, ReadError, ReadErrorKind};
pub use export::{DEFAULT_FONT, ExportOutcome, ExportRequest};
pub use options::{FilterOption, FilterOptions};
pub use report::FilterReport;
