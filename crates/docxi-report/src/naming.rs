//! Destination naming.

use std::path::{Path, PathBuf};

/// Extension of exported documents.
pub const DOCX_EXTENSION: &str = "docx";

/// Suggested destination for `input`: same directory and base name, `.docx`
/// extension.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension(DOCX_EXTENSION)
}

/// Append `.docx` when `path` has no extension at all.
pub fn with_docx_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(DOCX_EXTENSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_replaces_extension() {
        assert_eq!(
            default_output_path(Path::new("/data/script.txt")),
            PathBuf::from("/data/script.docx")
        );
        assert_eq!(
            default_output_path(Path::new("archive.tar.txt")),
            PathBuf::from("archive.tar.docx")
        );
        assert_eq!(
            default_output_path(Path::new("notes")),
            PathBuf::from("notes.docx")
        );
    }

    #[test]
    fn docx_extension_only_added_when_missing() {
        assert_eq!(
            with_docx_extension(Path::new("out/report")),
            PathBuf::from("out/report.docx")
        );
        assert_eq!(
            with_docx_extension(Path::new("out/report.doc")),
            PathBuf::from("out/report.doc")
        );
    }
}
