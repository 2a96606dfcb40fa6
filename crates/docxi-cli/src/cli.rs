//! CLI argument definitions for Docxi.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use docxi_model::{DEFAULT_FONT, FilterOptions};

#[derive(Parser)]
#[command(
    name = "docxi",
    version,
    about = "Docxi - Filter text files and export them as Word documents",
    long_about = "Load a plain-text file, drop lines containing CJK ideographs or blank lines,\n\
                  preview the result and save it as a .docx document with one uniform font."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix pretty and compact log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the filtered text of a file.
    Preview(PreviewArgs),

    /// Filter a file and save the result as a .docx document.
    Export(ExportArgs),

    /// Interactive session: open files, flip filters, preview and export.
    Session(SessionArgs),
}

/// Line filter toggles shared by every subcommand.
#[derive(Args, Clone, Copy, Debug, Default)]
pub struct FilterArgs {
    /// Remove lines containing Chinese characters (CJK Unified Ideographs).
    #[arg(long = "drop-cjk")]
    pub drop_cjk: bool,

    /// Remove empty and whitespace-only lines.
    #[arg(long = "drop-blank")]
    pub drop_blank: bool,
}

impl FilterArgs {
    pub fn options(self) -> FilterOptions {
        FilterOptions {
            drop_cjk: self.drop_cjk,
            drop_blank: self.drop_blank,
        }
    }
}

#[derive(Parser)]
pub struct PreviewArgs {
    /// Text file to load.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Print line statistics to stderr after the preview.
    #[arg(long = "stats")]
    pub stats: bool,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Text file to load.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Destination document (default: <INPUT> with a .docx extension).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Font applied to the whole document.
    #[arg(long = "font", value_name = "NAME", default_value = DEFAULT_FONT)]
    pub font: String,

    /// Summary format printed after a successful export.
    #[arg(long = "report", value_enum, default_value = "table")]
    pub report: ReportFormatArg,

    #[command(flatten)]
    pub filters: FilterArgs,
}

#[derive(Parser)]
pub struct SessionArgs {
    /// Text file to open on start.
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Font applied to exported documents.
    #[arg(long = "font", value_name = "NAME", default_value = DEFAULT_FONT)]
    pub font: String,

    #[command(flatten)]
    pub filters: FilterArgs,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
