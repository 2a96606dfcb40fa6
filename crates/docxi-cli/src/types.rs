use std::path::PathBuf;

use serde::Serialize;

use docxi_model::{FilterOptions, FilterReport};

#[derive(Debug)]
pub struct PreviewResult {
    pub input: PathBuf,
    pub options: FilterOptions,
    pub report: FilterReport,
}

#[derive(Debug, Serialize)]
pub struct ExportResult {
    pub input: PathBuf,
    pub destination: PathBuf,
    pub font: String,
    pub options: FilterOptions,
    pub report: FilterReport,
    pub paragraphs: usize,
    pub bytes_written: u64,
}
